//! GameState - the aggregate root of the simulation
//!
//! Built once at game start from the content catalogs, mutated only by the
//! turn pipeline, and frozen once an ending is recorded. The whole struct
//! serializes to plain data so any presentation layer can consume a
//! snapshot without touching engine internals.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::content::{factions, zones};
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{FactionId, Season, Turn, ZoneId};
use crate::sim::ending::EndReport;
use crate::sim::event::TurnEvent;
use crate::sim::faction::Faction;
use crate::sim::relation::Relation;
use crate::sim::zone::Zone;

/// Narrative flags set by actions and consulted by the ending evaluator
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NarrativeFlags {
    /// Aggressor of the most recent declared war, if any
    pub war_declared_by: Option<FactionId>,
    /// Faction whose leader has been assassinated
    pub assassination_of: Option<FactionId>,
    /// Broker of a landmark diplomatic accord
    pub diplomatic_breakthrough: Option<FactionId>,
    /// Faction that funded the climate mitigation program
    pub climate_mitigation: Option<FactionId>,
}

/// Canonical simulation state
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// 1-based turn counter; the survival fallback fires past max_turns
    pub turn: Turn,
    pub year: i32,
    pub season: Season,

    /// Remaining polar ice, percent of baseline; 0 is climate catastrophe
    pub global_ice_extent: f64,
    /// Ice change over the last completed turn (negative = melting)
    pub ice_delta_last_turn: f64,

    pub factions: AHashMap<FactionId, Faction>,
    pub relations: Vec<Relation>,
    pub zones: AHashMap<ZoneId, Zone>,

    pub player_faction: FactionId,
    /// This turn's narrative events; replaced wholesale each turn
    pub pending_events: Vec<TurnEvent>,
    pub flags: NarrativeFlags,

    /// Set exactly once, when the game ends
    pub winner: Option<FactionId>,
    pub ending: Option<EndReport>,
}

impl GameState {
    /// Build the starting state from the content catalogs
    pub fn new(player_faction: FactionId, config: &EngineConfig) -> Result<Self> {
        let spec = factions::faction_spec(player_faction);
        if !spec.playable {
            return Err(EngineError::InvalidAction(format!(
                "{player_faction:?} is not a playable faction"
            )));
        }

        let mut faction_map = AHashMap::new();
        for spec in &factions::FACTION_CATALOG {
            faction_map.insert(
                spec.id,
                Faction {
                    id: spec.id,
                    name: spec.name.to_string(),
                    short_name: spec.short_name.to_string(),
                    color: spec.color.to_string(),
                    resources: spec.resources,
                    controlled_zones: spec.starting_zones.iter().copied().collect(),
                    victory_points: 0,
                    playable: spec.playable,
                    blurb: spec.blurb.to_string(),
                },
            );
        }

        let mut zone_map = AHashMap::new();
        for spec in &zones::ZONE_CATALOG {
            zone_map.insert(
                spec.id,
                Zone {
                    id: spec.id,
                    name: spec.name.to_string(),
                    controller: spec.controller,
                },
            );
        }

        // One relation per unordered pair, in deterministic enum order
        let mut relations = Vec::new();
        for (i, &a) in FactionId::ALL.iter().enumerate() {
            for &b in &FactionId::ALL[i + 1..] {
                relations.push(Relation::new(a, b, factions::starting_tension(a, b), config)?);
            }
        }

        let state = Self {
            turn: 1,
            year: 2030,
            season: Season::Spring,
            global_ice_extent: config.ice_start,
            ice_delta_last_turn: 0.0,
            factions: faction_map,
            relations,
            zones: zone_map,
            player_faction,
            pending_events: Vec::new(),
            flags: NarrativeFlags::default(),
            winner: None,
            ending: None,
        };
        state.check_invariants()?;
        Ok(state)
    }

    pub fn faction(&self, id: FactionId) -> Result<&Faction> {
        self.factions.get(&id).ok_or(EngineError::UnknownFaction(id))
    }

    pub fn faction_mut(&mut self, id: FactionId) -> Result<&mut Faction> {
        self.factions
            .get_mut(&id)
            .ok_or(EngineError::UnknownFaction(id))
    }

    pub fn zone(&self, id: ZoneId) -> Result<&Zone> {
        self.zones.get(&id).ok_or(EngineError::UnknownZone(id))
    }

    pub fn relation_between(&self, a: FactionId, b: FactionId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.links(a, b))
    }

    pub fn relation_between_mut(&mut self, a: FactionId, b: FactionId) -> Option<&mut Relation> {
        self.relations.iter_mut().find(|r| r.links(a, b))
    }

    /// Number of zones the faction controls
    pub fn zones_controlled(&self, id: FactionId) -> usize {
        self.factions.get(&id).map_or(0, Faction::zone_count)
    }

    /// Transfer control of a zone to `faction`, atomically updating the
    /// previous controller's holdings
    pub fn claim_zone(&mut self, faction: FactionId, zone_id: ZoneId) -> Result<()> {
        if !self.factions.contains_key(&faction) {
            return Err(EngineError::UnknownFaction(faction));
        }
        let previous = {
            let zone = self
                .zones
                .get_mut(&zone_id)
                .ok_or(EngineError::UnknownZone(zone_id))?;
            let previous = zone.controller;
            zone.controller = Some(faction);
            previous
        };
        if let Some(prev) = previous {
            if let Some(f) = self.factions.get_mut(&prev) {
                f.controlled_zones.remove(&zone_id);
            }
        }
        self.faction_mut(faction)?.controlled_zones.insert(zone_id);
        Ok(())
    }

    /// Relinquish a zone the faction currently controls
    pub fn abandon_zone(&mut self, faction: FactionId, zone_id: ZoneId) -> Result<()> {
        let zone = self
            .zones
            .get_mut(&zone_id)
            .ok_or(EngineError::UnknownZone(zone_id))?;
        if zone.controller != Some(faction) {
            return Err(EngineError::InvalidAction(format!(
                "{faction:?} does not control {zone_id:?}"
            )));
        }
        zone.controller = None;
        self.faction_mut(faction)?.controlled_zones.remove(&zone_id);
        Ok(())
    }

    /// True once an ending has been recorded; the state is then read-only
    pub fn is_terminal(&self) -> bool {
        self.ending.is_some()
    }

    /// Record the terminal outcome. The winner field is set exactly once.
    pub fn record_ending(&mut self, report: EndReport) {
        self.winner = report.winner;
        self.ending = Some(report);
    }

    /// Verify the derived invariants the rest of the engine relies on
    ///
    /// Zone ownership must partition cleanly (each zone's controller and
    /// each faction's holdings agree), relation pairs must be unique and
    /// distinct, and every gauge must sit inside its bounds.
    pub fn check_invariants(&self) -> Result<()> {
        // Zone -> faction direction
        for zone in self.zones.values() {
            if let Some(controller) = zone.controller {
                let faction = self
                    .factions
                    .get(&controller)
                    .ok_or(EngineError::UnknownFaction(controller))?;
                if !faction.controls(zone.id) {
                    return Err(EngineError::InvariantViolation(format!(
                        "{:?} controlled by {controller:?} but missing from its holdings",
                        zone.id
                    )));
                }
            }
        }
        // Faction -> zone direction
        for faction in self.factions.values() {
            for &zone_id in &faction.controlled_zones {
                let zone = self
                    .zones
                    .get(&zone_id)
                    .ok_or(EngineError::UnknownZone(zone_id))?;
                if zone.controller != Some(faction.id) {
                    return Err(EngineError::InvariantViolation(format!(
                        "{:?} claims {zone_id:?} but the zone says {:?}",
                        faction.id, zone.controller
                    )));
                }
            }
        }

        // Relations: no self-pairs, no duplicates, values in range
        for (i, relation) in self.relations.iter().enumerate() {
            if relation.a == relation.b {
                return Err(EngineError::InvariantViolation(format!(
                    "self-relation for {:?}",
                    relation.a
                )));
            }
            if !(0.0..=100.0).contains(&relation.tension_value) {
                return Err(EngineError::InvariantViolation(format!(
                    "tension {} out of range for {:?}-{:?}",
                    relation.tension_value, relation.a, relation.b
                )));
            }
            if self.relations[i + 1..]
                .iter()
                .any(|other| other.links(relation.a, relation.b))
            {
                return Err(EngineError::InvariantViolation(format!(
                    "duplicate relation {:?}-{:?}",
                    relation.a, relation.b
                )));
            }
        }

        // Resource gauges
        for faction in self.factions.values() {
            let r = &faction.resources;
            if !(0.0..=100.0).contains(&r.military_readiness)
                || !(0.0..=100.0).contains(&r.legitimacy)
                || r.influence_points < 0.0
                || r.economic_output < 0.0
            {
                return Err(EngineError::InvariantViolation(format!(
                    "resource gauge out of bounds for {:?}",
                    faction.id
                )));
            }
        }

        if !(0.0..=100.0).contains(&self.global_ice_extent) {
            return Err(EngineError::InvariantViolation(format!(
                "ice extent {} out of range",
                self.global_ice_extent
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(FactionId::Canada, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_new_state_has_full_catalogs() {
        let state = new_state();
        assert_eq!(state.factions.len(), 9);
        assert_eq!(state.zones.len(), 12);
        // One relation per unordered pair of nine factions
        assert_eq!(state.relations.len(), 9 * 8 / 2);
        assert_eq!(state.turn, 1);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_new_state_passes_invariants() {
        assert!(new_state().check_invariants().is_ok());
    }

    #[test]
    fn test_unplayable_faction_rejected() {
        let result = GameState::new(FactionId::Iceland, &EngineConfig::default());
        assert!(matches!(result, Err(EngineError::InvalidAction(_))));
    }

    #[test]
    fn test_claim_zone_transfers_atomically() {
        let mut state = new_state();
        // Svalbard starts Norwegian
        assert!(state.faction(FactionId::Norway).unwrap().controls(ZoneId::Svalbard));

        state.claim_zone(FactionId::Russia, ZoneId::Svalbard).unwrap();
        assert_eq!(
            state.zone(ZoneId::Svalbard).unwrap().controller,
            Some(FactionId::Russia)
        );
        assert!(!state.faction(FactionId::Norway).unwrap().controls(ZoneId::Svalbard));
        assert!(state.faction(FactionId::Russia).unwrap().controls(ZoneId::Svalbard));
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_claim_unclaimed_zone() {
        let mut state = new_state();
        state
            .claim_zone(FactionId::China, ZoneId::CentralArcticBasin)
            .unwrap();
        assert_eq!(state.zones_controlled(FactionId::China), 1);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_abandon_requires_control() {
        let mut state = new_state();
        let result = state.abandon_zone(FactionId::China, ZoneId::Svalbard);
        assert!(matches!(result, Err(EngineError::InvalidAction(_))));

        state.abandon_zone(FactionId::Norway, ZoneId::Svalbard).unwrap();
        assert!(state.zone(ZoneId::Svalbard).unwrap().is_unclaimed());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_invariant_catches_one_sided_ownership() {
        let mut state = new_state();
        // Corrupt the partition deliberately
        state
            .factions
            .get_mut(&FactionId::China)
            .unwrap()
            .controlled_zones
            .insert(ZoneId::Svalbard);
        assert!(matches!(
            state.check_invariants(),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_relation_lookup_is_order_insensitive() {
        let state = new_state();
        let ab = state
            .relation_between(FactionId::UnitedStates, FactionId::Russia)
            .unwrap();
        let ba = state
            .relation_between(FactionId::Russia, FactionId::UnitedStates)
            .unwrap();
        assert_eq!(ab.tension_value, ba.tension_value);
    }

    #[test]
    fn test_state_serializes_to_plain_json() {
        let state = new_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.turn, state.turn);
        assert_eq!(back.factions.len(), state.factions.len());
        assert_eq!(back.relations.len(), state.relations.len());
    }
}
