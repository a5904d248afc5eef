//! REST client for the player API.
//!
//! All endpoints live under `/api/players` on the same origin that serves
//! the app. Components call the typed fetch functions and render the
//! returned [`ApiError`] inline; nothing here panics on a bad response.

use serde::Deserialize;
use squadval_shared::models::Player;
use thiserror::Error;

/// Base path of the player collection.
const PLAYERS_ENDPOINT: &str = "/api/players";

/// Errors surfaced by the REST client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable response: DNS, connection
    /// reset, or a non-404 error status.
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// The server answered 404 for the requested resource.
    #[error("player not found")]
    NotFound,
    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    MalformedData(String),
}

/// Path for a single player lookup.
pub fn player_detail_path(id: i64) -> String {
    format!("{PLAYERS_ENDPOINT}/{id}")
}

fn api_base() -> String {
    // The backend is served from the same origin as the app.
    let window = web_sys::window().expect("no window available");
    window.location().origin().expect("no origin available")
}

async fn get_json<T: for<'de> Deserialize<'de>>(
    path: &str,
    params: &[(&str, &str)],
) -> Result<T, ApiError> {
    let url = format!("{}{}", api_base(), path);
    let response = reqwest::Client::new()
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| ApiError::NetworkFailure(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::NetworkFailure(format!(
            "server returned status {}",
            status.as_u16()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::MalformedData(e.to_string()))
}

/// Players who appear in `club`'s squad for the given season.
pub async fn fetch_roster(club: &str, year_code: &str) -> Result<Vec<Player>, ApiError> {
    get_json(PLAYERS_ENDPOINT, &[("club", club), ("year_code", year_code)]).await
}

/// Name search scoped to a season. The server matches case-insensitive
/// substrings; results are filtered again client-side before display.
pub async fn search_players(year_code: &str, name: &str) -> Result<Vec<Player>, ApiError> {
    get_json(PLAYERS_ENDPOINT, &[("year_code", year_code), ("name", name)]).await
}

/// Full detail for one player, including season stats and the valuation
/// history. `year_code` tells the server which season to center on.
pub async fn fetch_player(id: i64, year_code: &str) -> Result<Player, ApiError> {
    get_json(&player_detail_path(id), &[("year_code", year_code)]).await
}

/// Every player known to the backend, for the catalog page. The listing
/// route is the collection path with a trailing slash.
pub async fn fetch_all_players() -> Result<Vec<Player>, ApiError> {
    get_json(&format!("{PLAYERS_ENDPOINT}/"), &[]).await
}
