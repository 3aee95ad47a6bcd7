//! Relation - bilateral diplomatic state and the tension engine
//!
//! A relation holds a continuous tension score in [0,100] and a derived
//! discrete level. Classification applies hysteresis so a score oscillating
//! near a band boundary does not flicker between levels.

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{FactionId, TensionLevel};

/// The bilateral diplomatic state between two distinct factions
///
/// The pair is stored in normalized order (`a < b` by enum order) so each
/// unordered pair has exactly one representation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Relation {
    pub a: FactionId,
    pub b: FactionId,
    pub tension_value: f64,
    pub tension_level: TensionLevel,
}

const LEVELS: [TensionLevel; 5] = [
    TensionLevel::Cooperation,
    TensionLevel::Competition,
    TensionLevel::Confrontation,
    TensionLevel::Crisis,
    TensionLevel::Conflict,
];

/// Band classification ignoring hysteresis
pub fn raw_level(value: f64, thresholds: &[f64; 4]) -> TensionLevel {
    for (i, &t) in thresholds.iter().enumerate() {
        if value < t {
            return LEVELS[i];
        }
    }
    TensionLevel::Conflict
}

/// Classify a tension value given the previously assigned level
///
/// Entering a new band requires clearing its boundary by more than the
/// hysteresis margin in the direction of travel; a value inside the margin
/// is held one band short of its raw band instead. The hold never moves
/// the level past the prior one, so the result is monotone in value for
/// any fixed prior. Pure function of (value, prior, config).
pub fn classify(value: f64, prior: TensionLevel, config: &EngineConfig) -> TensionLevel {
    let thresholds = &config.tension_thresholds;
    let raw = raw_level(value, thresholds);
    if raw == prior {
        return raw;
    }

    let margin = config.tension_hysteresis;
    if raw > prior {
        // Rising: must clear the lower edge of the raw band
        let edge = thresholds[raw as usize - 1];
        if value >= edge + margin {
            raw
        } else {
            // Held just below the boundary, but never below the prior level
            LEVELS[(raw as usize - 1).max(prior as usize)]
        }
    } else {
        // Falling: must clear the upper edge of the raw band
        let edge = thresholds[raw as usize];
        if value <= edge - margin {
            raw
        } else {
            LEVELS[(raw as usize + 1).min(prior as usize)]
        }
    }
}

impl Relation {
    /// Create a relation between two distinct factions
    ///
    /// Normalizes pair order; rejects self-pairs.
    pub fn new(a: FactionId, b: FactionId, tension_value: f64, config: &EngineConfig) -> Result<Self> {
        if a == b {
            return Err(EngineError::InvalidRelation(a, b));
        }
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        let tension_value = tension_value.clamp(0.0, 100.0);
        Ok(Self {
            a,
            b,
            tension_value,
            tension_level: raw_level(tension_value, &config.tension_thresholds),
        })
    }

    /// Apply a signed tension delta, capped and clamped, then reclassify
    ///
    /// A single delta can never move the score by more than the configured
    /// cap, and the score is clamped to [0,100] afterward. No other state
    /// is touched.
    pub fn apply_delta(&mut self, delta: f64, config: &EngineConfig) {
        let cap = config.tension_delta_cap;
        let applied = delta.clamp(-cap, cap);
        self.tension_value = (self.tension_value + applied).clamp(0.0, 100.0);
        self.reclassify(config);
    }

    /// Re-derive the level from the current value with hysteresis
    pub fn reclassify(&mut self, config: &EngineConfig) {
        self.tension_level = classify(self.tension_value, self.tension_level, config);
    }

    pub fn involves(&self, id: FactionId) -> bool {
        self.a == id || self.b == id
    }

    pub fn partner_of(&self, id: FactionId) -> Option<FactionId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }

    /// True when this relation links the given unordered pair
    pub fn links(&self, x: FactionId, y: FactionId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}
