use serde::{Deserialize, Serialize};

/// Decodes a field that may arrive as explicit JSON `null`. The backend
/// serializes nullable database columns as-is, so every optional field
/// must accept null as well as an absent key, and both fold onto the
/// type's default.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A player as served by the REST backend: profile fields plus the
/// per-season stat lines and the valuation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub nationality: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub birth_year: i32,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
    #[serde(default)]
    pub valuations: Vec<Valuation>,
}

/// One season's stat line. Fields the backend omits or nulls decode as
/// zero/empty so a sparse payload never fails the whole player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(default, deserialize_with = "null_to_default")]
    pub year_code: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub club: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub goals_scored: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub assists_made: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub minutes_played: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub yellow_cards: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub red_cards: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub progressive_carries: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub progressive_passes: u32,
}

/// A timestamped market-value estimate in currency minor units.
/// The backend orders valuations newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub amount: u64,
}

impl Player {
    /// The season matching `year_code` exactly, if any.
    pub fn season(&self, year_code: &str) -> Option<&SeasonRecord> {
        self.seasons.iter().find(|s| s.year_code == year_code)
    }

    /// The season matching `year_code`, falling back to the first
    /// available season when no exact match exists.
    pub fn season_or_first(&self, year_code: &str) -> Option<&SeasonRecord> {
        self.season(year_code).or_else(|| self.seasons.first())
    }

    /// Most recent valuation (first element, newest-first ordering).
    pub fn current_valuation(&self) -> Option<&Valuation> {
        self.valuations.first()
    }

    /// Most recent valuation amount, 0 when no valuation exists.
    pub fn current_value(&self) -> u64 {
        self.current_valuation().map(|v| v.amount).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player {
            id: 7,
            name: "Test Player".to_string(),
            nationality: "England".to_string(),
            birth_year: 2002,
            seasons: vec![
                SeasonRecord {
                    year_code: "2024/25".to_string(),
                    club: "Chelsea".to_string(),
                    position: "Forward".to_string(),
                    age: 22,
                    goals_scored: 15,
                    assists_made: 8,
                    minutes_played: 2700,
                    ..SeasonRecord::default()
                },
                SeasonRecord {
                    year_code: "2023/24".to_string(),
                    club: "Chelsea".to_string(),
                    position: "Midfielder".to_string(),
                    age: 21,
                    goals_scored: 22,
                    assists_made: 11,
                    minutes_played: 3100,
                    ..SeasonRecord::default()
                },
            ],
            valuations: vec![
                Valuation {
                    date: "2025-02-01".to_string(),
                    amount: 130_200_000,
                },
                Valuation {
                    date: "2024-06-01".to_string(),
                    amount: 80_000_000,
                },
            ],
        }
    }

    #[test]
    fn test_season_exact_match() {
        let p = test_player();
        let s = p.season("2023/24").unwrap();
        assert_eq!(s.position, "Midfielder");
    }

    #[test]
    fn test_season_no_match() {
        let p = test_player();
        assert!(p.season("2019/20").is_none());
    }

    #[test]
    fn test_season_or_first_falls_back() {
        let p = test_player();
        let s = p.season_or_first("2019/20").unwrap();
        assert_eq!(s.year_code, "2024/25");
    }

    #[test]
    fn test_season_or_first_empty_seasons() {
        let mut p = test_player();
        p.seasons.clear();
        assert!(p.season_or_first("2024/25").is_none());
    }

    #[test]
    fn test_current_valuation_is_first() {
        let p = test_player();
        assert_eq!(p.current_valuation().unwrap().amount, 130_200_000);
    }

    #[test]
    fn test_current_value_without_valuations() {
        let mut p = test_player();
        p.valuations.clear();
        assert_eq!(p.current_value(), 0);
    }

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "id": 1,
            "name": "Cole Palmer",
            "nationality": "England",
            "birth_year": 2002,
            "seasons": [{
                "year_code": "2024/25",
                "club": "Chelsea",
                "position": "Forward",
                "age": 22,
                "goals_scored": 15,
                "assists_made": 8,
                "minutes_played": 2700,
                "matches_played": 30,
                "yellow_cards": 3,
                "red_cards": 0,
                "expected_goals": 13.4,
                "progressive_carries": 90,
                "progressive_passes": 150
            }],
            "valuations": [{"date": "2025-02-01", "amount": 130200000}]
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Cole Palmer");
        assert_eq!(p.seasons.len(), 1);
        assert_eq!(p.seasons[0].expected_goals, 13.4);
        assert_eq!(p.valuations[0].amount, 130_200_000);
    }

    #[test]
    fn test_deserialize_sparse_season() {
        // Backend may omit stat fields entirely; they decode as zero.
        let json = r#"{
            "id": 2,
            "name": "Trialist",
            "seasons": [{"year_code": "2024/25"}],
            "valuations": []
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.nationality, "");
        assert_eq!(p.birth_year, 0);
        assert_eq!(p.seasons[0].club, "");
        assert_eq!(p.seasons[0].goals_scored, 0);
        assert_eq!(p.seasons[0].expected_goals, 0.0);
    }

    #[test]
    fn test_deserialize_missing_collections() {
        let json = r#"{"id": 3, "name": "Loanee"}"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert!(p.seasons.is_empty());
        assert!(p.valuations.is_empty());
        assert_eq!(p.current_value(), 0);
    }

    #[test]
    fn test_deserialize_null_fields() {
        // Nullable columns come through as explicit nulls, not absent
        // keys; both decode to the same defaults.
        let json = r#"{
            "id": 5,
            "name": "Prospect",
            "nationality": null,
            "birth_year": null,
            "seasons": [{
                "year_code": "2024/25",
                "club": null,
                "position": null,
                "age": null,
                "goals_scored": null,
                "minutes_played": null,
                "expected_goals": null
            }],
            "valuations": [{"date": null, "amount": null}]
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.nationality, "");
        assert_eq!(p.birth_year, 0);
        assert_eq!(p.seasons[0].club, "");
        assert_eq!(p.seasons[0].position, "");
        assert_eq!(p.seasons[0].age, 0);
        assert_eq!(p.seasons[0].expected_goals, 0.0);
        assert_eq!(p.valuations[0].date, "");
        assert_eq!(p.current_value(), 0);
    }

    #[test]
    fn test_roster_decode_survives_null_ridden_player() {
        // One player full of nulls must not fail the whole roster.
        let json = r#"[
            {"id": 1, "name": "Cole Palmer",
             "seasons": [{"year_code": "2024/25", "club": "Chelsea"}],
             "valuations": [{"date": "2025-02-01", "amount": 130200000}]},
            {"id": 2, "name": null,
             "seasons": [{"year_code": null, "position": null}],
             "valuations": [{"date": null, "amount": null}]}
        ]"#;
        let roster: Vec<Player> = serde_json::from_str(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].current_value(), 130_200_000);
        assert_eq!(roster[1].name, "");
        assert_eq!(roster[1].seasons[0].year_code, "");
        assert_eq!(roster[1].current_value(), 0);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let p = test_player();
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id": 4, "name": "X", "shirt_number": 10}"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 4);
    }
}
