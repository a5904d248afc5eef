use crate::models::Player;

/// Sentinel shown where a player has no positive valuation.
pub const NO_VALUATION: &str = "N/A";

/// Aggregate roster numbers for the team-info panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub total_players: usize,
    pub with_valuation: usize,
    pub total_value: u64,
    pub avg_value: u64,
}

impl TeamStats {
    /// Aggregate a roster. Absent valuations count as 0; the average
    /// divides by the players with a positive valuation only.
    pub fn from_roster(roster: &[Player]) -> Self {
        let total_players = roster.len();
        let mut with_valuation = 0;
        let mut total_value = 0u64;
        for player in roster {
            let value = player.current_value();
            if value > 0 {
                with_valuation += 1;
            }
            total_value += value;
        }
        let avg_value = if with_valuation > 0 {
            total_value / with_valuation as u64
        } else {
            0
        };
        TeamStats {
            total_players,
            with_valuation,
            total_value,
            avg_value,
        }
    }
}

/// Format minor currency units as millions with one decimal, e.g.
/// 130200000 -> "€130.2M".
pub fn format_millions(amount: u64) -> String {
    format!("€{:.1}M", amount as f64 / 1_000_000.0)
}

/// Table cell label for a player's market value: formatted millions, or
/// the sentinel when no positive valuation exists.
pub fn valuation_label(player: &Player) -> String {
    let value = player.current_value();
    if value > 0 {
        format_millions(value)
    } else {
        NO_VALUATION.to_string()
    }
}

/// Compact label for squad totals: billions past 1B, millions below.
pub fn format_amount(amount: u64) -> String {
    if amount >= 1_000_000_000 {
        format!("€{:.2}B", amount as f64 / 1_000_000_000.0)
    } else {
        format_millions(amount)
    }
}
