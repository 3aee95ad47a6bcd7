//! Action intake - the discrete orders applied at a turn boundary
//!
//! Actions are plain records queued by the caller and applied in queue
//! order by the turn pipeline. Validation happens at application time; a
//! malformed action rejects the whole turn.

use serde::{Deserialize, Serialize};

use crate::core::types::{FactionId, ZoneId};
use crate::sim::faction::ResourceGauge;

/// An order for the turn pipeline, applied in queue order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Apply a signed delta to one resource gauge of a faction
    AdjustResource {
        faction: FactionId,
        gauge: ResourceGauge,
        delta: f64,
    },

    /// Take control of a zone (from another faction or unclaimed)
    ClaimZone { faction: FactionId, zone: ZoneId },

    /// Give up control of a zone the faction currently holds
    AbandonZone { faction: FactionId, zone: ZoneId },

    /// Shift the tension score between two factions (capped by the engine)
    ShiftRelation {
        a: FactionId,
        b: FactionId,
        delta: f64,
    },

    /// Award victory points to a faction
    AwardVictoryPoints { faction: FactionId, points: u32 },

    /// Declare war: sets the war flag and spikes the pair's tension
    DeclareWar {
        aggressor: FactionId,
        target: FactionId,
    },

    /// Broker a diplomatic accord: sets the breakthrough flag and eases
    /// the pair's tension
    BrokerAccord { a: FactionId, b: FactionId },

    /// Fund climate mitigation: sets the mitigation achievement flag and
    /// reverses this turn's ice decay
    FundClimateMitigation { faction: FactionId },

    /// Narrative assassination of the target faction's leader
    TriggerAssassination { target: FactionId },
}

impl Action {
    /// The faction issuing or most affected by this action, for logging
    pub fn subject(&self) -> FactionId {
        match *self {
            Action::AdjustResource { faction, .. } => faction,
            Action::ClaimZone { faction, .. } => faction,
            Action::AbandonZone { faction, .. } => faction,
            Action::ShiftRelation { a, .. } => a,
            Action::AwardVictoryPoints { faction, .. } => faction,
            Action::DeclareWar { aggressor, .. } => aggressor,
            Action::BrokerAccord { a, .. } => a,
            Action::FundClimateMitigation { faction } => faction,
            Action::TriggerAssassination { target } => target,
        }
    }
}
