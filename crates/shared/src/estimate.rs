use crate::models::{Player, SeasonRecord};

/// Base value in millions assumed when a player has no valuation history.
pub const FALLBACK_BASE_MILLIONS: f64 = 100.0;

const GOAL_WEIGHT: f64 = 2.5;
const ASSIST_WEIGHT: f64 = 1.8;
const MINUTES_DIVISOR: f64 = 500.0;

/// The editable stat fields backing the what-if estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateInput {
    pub age: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes: u32,
}

impl EstimateInput {
    /// Seed the editable fields from a season stat line.
    pub fn from_season(season: &SeasonRecord) -> Self {
        EstimateInput {
            age: season.age,
            goals: season.goals_scored,
            assists: season.assists_made,
            minutes: season.minutes_played,
        }
    }
}

/// Weighted performance score over the editable fields.
pub fn performance_score(input: &EstimateInput) -> f64 {
    input.goals as f64 * GOAL_WEIGHT
        + input.assists as f64 * ASSIST_WEIGHT
        + input.minutes as f64 / MINUTES_DIVISOR
}

/// Base value in millions for the estimator: the most recent valuation,
/// or the fallback constant when the player has no valuation history.
pub fn base_millions(player: &Player) -> f64 {
    match player.current_valuation() {
        Some(v) => v.amount as f64 / 1_000_000.0,
        None => FALLBACK_BASE_MILLIONS,
    }
}

/// The what-if estimate in millions, rounded to one decimal:
/// `base + score / (age / 25)`. An age of zero skips the performance
/// term instead of dividing by zero.
pub fn estimate_value(base: f64, input: &EstimateInput) -> f64 {
    let estimate = if input.age == 0 {
        base
    } else {
        base + performance_score(input) / (input.age as f64 / 25.0)
    };
    (estimate * 10.0).round() / 10.0
}
