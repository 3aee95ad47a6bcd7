//! Faction - one of the nine Arctic powers and its resource gauges

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::types::{FactionId, ZoneId};

/// One of the nine contestants for the Arctic
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub short_name: String,
    /// Display color as a hex string; opaque to the engine
    pub color: String,

    pub resources: Resources,
    pub controlled_zones: AHashSet<ZoneId>,
    pub victory_points: u32,

    /// Whether a human may pick this faction at game start
    pub playable: bool,
    /// Flavor text consumed only by presentation
    pub blurb: String,
}

/// Five independent resource gauges
///
/// No invariant couples them; each is mutated independently by the turn
/// pipeline. Readiness and legitimacy are clamped to [0,100], the rest
/// are unbounded non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub influence_points: f64,
    pub economic_output: f64,
    pub icebreaker_capacity: u32,
    pub military_readiness: f64,
    pub legitimacy: f64,
}

/// Which gauge a resource action targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceGauge {
    Influence,
    EconomicOutput,
    Icebreakers,
    MilitaryReadiness,
    Legitimacy,
}

impl Resources {
    /// Apply a signed delta to one gauge, respecting its bounds
    pub fn adjust(&mut self, gauge: ResourceGauge, delta: f64) {
        match gauge {
            ResourceGauge::Influence => {
                self.influence_points = (self.influence_points + delta).max(0.0);
            }
            ResourceGauge::EconomicOutput => {
                self.economic_output = (self.economic_output + delta).max(0.0);
            }
            ResourceGauge::Icebreakers => {
                // Count gauge; fractional deltas round toward zero
                let next = self.icebreaker_capacity as i64 + delta as i64;
                self.icebreaker_capacity = next.max(0) as u32;
            }
            ResourceGauge::MilitaryReadiness => {
                self.military_readiness = (self.military_readiness + delta).clamp(0.0, 100.0);
            }
            ResourceGauge::Legitimacy => {
                self.legitimacy = (self.legitimacy + delta).clamp(0.0, 100.0);
            }
        }
    }
}

impl Faction {
    pub fn zone_count(&self) -> usize {
        self.controlled_zones.len()
    }

    pub fn controls(&self, zone: ZoneId) -> bool {
        self.controlled_zones.contains(&zone)
    }
}
