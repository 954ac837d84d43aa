//! Configuration module for game data structures
//!
//! Holds the tunable economy constants, the event catalog and the static
//! personality and achievement tables. Everything deserializable can be
//! overridden from JSON; the defaults reproduce the standard game.

mod achievement;
mod event;
mod personality;

pub use achievement::*;
pub use event::*;
pub use personality::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Economy and pacing constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GameConfig {
    pub starting_cash: i64,
    pub starting_reputation: f64,
    /// Monthly voluntary quit rate before modifiers
    pub base_quit_rate: f64,
    pub tool_cost_per_employee: i64,
    pub base_rent: i64,
    pub max_rent: i64,
    /// Headcount at which rent reaches `max_rent`
    pub rent_cap_headcount: usize,
    /// Charged when a candidate is hired; also the affordability gate for
    /// generating a candidate
    pub hiring_cost: i64,
    /// Severance in months of salary
    pub severance_multiplier: i64,
    /// Fraction of a client project's value paid at each milestone
    pub milestone_payment_rate: f64,
    pub event_history_limit: usize,
    pub random_event_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_cash: 150_000,
            starting_reputation: 50.0,
            base_quit_rate: 0.02,
            tool_cost_per_employee: 500,
            base_rent: 2_000,
            max_rent: 20_000,
            rent_cap_headcount: 50,
            hiring_cost: 5_000,
            severance_multiplier: 2,
            milestone_payment_rate: 0.15,
            event_history_limit: 50,
            random_event_chance: 0.03,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Severance owed for an employee with the given monthly salary
    #[inline]
    pub fn severance_for(&self, salary: i64) -> i64 {
        salary * self.severance_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"hiringCost": 2000}"#).unwrap();
        assert_eq!(config.hiring_cost, 2000);
        assert_eq!(config.starting_cash, 150_000);
        assert_eq!(config.max_rent, 20_000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(GameConfig::from_json(r#"{"hiringFee": 2000}"#).is_err());
    }

    #[test]
    fn test_severance() {
        let config = GameConfig::default();
        assert_eq!(config.severance_for(4000), 8000);
    }
}
