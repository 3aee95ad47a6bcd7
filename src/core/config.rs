//! Engine configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other. The engine itself contains no
//! magic thresholds; everything a scenario designer might retune lives in
//! this struct and can be overridden from a TOML file.

use serde::Deserialize;

use crate::core::error::{EngineError, Result};

/// Tuning constants for the simulation engine
///
/// These values produce a playable 20-turn contest. Changing them affects
/// pacing and which endings are reachable, not engine correctness.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === TENSION SYSTEM ===
    /// Band boundaries over [0,100] separating the five tension levels
    ///
    /// cooperation < t[0] <= competition < t[1] <= confrontation
    /// < t[2] <= crisis < t[3] <= conflict. Must be strictly increasing
    /// and inside (0,100).
    pub tension_thresholds: [f64; 4],

    /// Hysteresis margin around each band boundary
    ///
    /// A relation only changes level once its value clears a boundary by
    /// more than this margin in the direction of travel. Values within the
    /// margin keep the previous level, which stops flicker when a score
    /// oscillates near a boundary. Must be less than half the narrowest
    /// band or a value could sit permanently between two sticky zones.
    pub tension_hysteresis: f64,

    /// Maximum absolute tension change a single action or event can apply
    ///
    /// Caps single-event discontinuities: a +30 shock on a capped engine
    /// moves the score by at most this amount.
    pub tension_delta_cap: f64,

    // === CLIMATE ===
    /// Starting global ice extent (percent of baseline coverage)
    pub ice_start: f64,

    /// Ice lost per turn under normal play
    ///
    /// At 1.5/turn a full 20-turn game loses 30 points, so the default
    /// start of 75 never reaches the climate-catastrophe floor without
    /// extra warming pressure from events or aggressive play.
    pub ice_decay_per_turn: f64,

    /// Ice recovered on a turn where climate mitigation was funded
    ///
    /// Replaces (not offsets) the decay for that turn.
    pub ice_recovery_per_turn: f64,

    // === GAME LENGTH ===
    /// Final turn of a standard game; past this the survival fallback fires
    pub max_turns: u32,

    // === ENDING THRESHOLDS ===
    /// Fraction of all zones a faction must control for hegemonic victory
    pub hegemonic_zone_share: f64,

    /// Economic output required for economic victory
    pub economic_victory_output: f64,

    /// Military readiness floor for military dominance
    pub military_dominance_readiness: f64,

    /// Zones controlled floor for military dominance
    pub military_dominance_zones: usize,

    /// Cooperation-level partners required for diplomatic victory
    pub diplomatic_min_partners: usize,

    /// Earliest turn on which total defeat (no zones, no points) applies
    ///
    /// Protects a slow-starting player from losing on turn 1.
    pub total_defeat_min_turn: u32,

    // === EVENTS ===
    /// Maximum narrative events drawn per turn (actual count is 0..=max)
    pub max_events_per_turn: usize,

    /// Seed for the deterministic event deck RNG
    pub event_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Tension bands at 20/40/60/80 with a 3-point sticky margin
            tension_thresholds: [20.0, 40.0, 60.0, 80.0],
            tension_hysteresis: 3.0,
            tension_delta_cap: 15.0,

            // Climate
            ice_start: 75.0,
            ice_decay_per_turn: 1.5,
            ice_recovery_per_turn: 1.0,

            // Game length
            max_turns: 20,

            // Endings
            hegemonic_zone_share: 0.6,
            economic_victory_output: 500.0,
            military_dominance_readiness: 85.0,
            military_dominance_zones: 4,
            diplomatic_min_partners: 3,
            total_defeat_min_turn: 5,

            // Events
            max_events_per_turn: 2,
            event_seed: 0xB0EA11,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML string; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let t = &self.tension_thresholds;
        if !(0.0 < t[0] && t[0] < t[1] && t[1] < t[2] && t[2] < t[3] && t[3] < 100.0) {
            return Err(EngineError::ConfigError(format!(
                "tension_thresholds {t:?} must be strictly increasing within (0,100)"
            )));
        }

        // Narrowest band bounds the usable hysteresis
        let narrowest = t
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(t[0].min(100.0 - t[3]), f64::min);
        if self.tension_hysteresis < 0.0 || self.tension_hysteresis >= narrowest / 2.0 {
            return Err(EngineError::ConfigError(format!(
                "tension_hysteresis ({}) must be >= 0 and < half the narrowest band ({:.1})",
                self.tension_hysteresis,
                narrowest / 2.0
            )));
        }

        if self.tension_delta_cap <= 0.0 {
            return Err(EngineError::ConfigError(
                "tension_delta_cap must be positive".into(),
            ));
        }

        if !(0.0..=100.0).contains(&self.ice_start) {
            return Err(EngineError::ConfigError(format!(
                "ice_start ({}) must be within [0,100]",
                self.ice_start
            )));
        }
        if self.ice_decay_per_turn < 0.0 || self.ice_recovery_per_turn < 0.0 {
            return Err(EngineError::ConfigError(
                "ice decay/recovery rates must be non-negative".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.hegemonic_zone_share) || self.hegemonic_zone_share == 0.0 {
            return Err(EngineError::ConfigError(format!(
                "hegemonic_zone_share ({}) must be within (0,1]",
                self.hegemonic_zone_share
            )));
        }

        if self.max_turns == 0 {
            return Err(EngineError::ConfigError("max_turns must be at least 1".into()));
        }

        Ok(())
    }
}
