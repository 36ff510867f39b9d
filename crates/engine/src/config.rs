//! Animator configuration from environment variables.
//!
//! Unset or unparsable values fall back to the defaults; numeric values are
//! clamped into their valid ranges when the initial state is built.

use std::env;

use crate::core::AnimationState;
use crate::types::{
    PatternKind, DEFAULT_SPEED_SECS, DEFAULT_TRAVEL_RANGE, MAX_TRAVEL_RANGE, MIN_TRAVEL_RANGE,
};

/// Animator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    pub speed: f64,
    pub travel_range: u16,
    pub pattern: PatternKind,
    pub show_stats: bool,
    /// Seed for the random pattern source; entropy when `None`.
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_SECS,
            travel_range: DEFAULT_TRAVEL_RANGE,
            pattern: PatternKind::Simple,
            show_stats: false,
            seed: None,
            log_path: None,
        }
    }
}

impl AnimatorConfig {
    /// Create from `ANIMATOR_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let speed = lookup("ANIMATOR_SPEED")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.speed);

        let travel_range = lookup("ANIMATOR_RANGE")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|v| v.clamp(i64::from(MIN_TRAVEL_RANGE), i64::from(MAX_TRAVEL_RANGE)) as u16)
            .unwrap_or(defaults.travel_range);

        let pattern = lookup("ANIMATOR_PATTERN")
            .and_then(|s| PatternKind::from_str(&s))
            .unwrap_or(defaults.pattern);

        let show_stats = lookup("ANIMATOR_STATS")
            .map(|v| v.trim() == "1" || v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.show_stats);

        let seed = lookup("ANIMATOR_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("ANIMATOR_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            speed,
            travel_range,
            pattern,
            show_stats,
            seed,
            log_path,
        }
    }

    pub fn initial_state(&self) -> AnimationState {
        AnimationState::with_settings(self.speed, self.travel_range, self.pattern, self.show_stats)
    }
}
