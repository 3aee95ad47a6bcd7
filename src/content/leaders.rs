//! Leader index and reaction lines
//!
//! The faction-to-leader mapping is a small injective index, queried in
//! both directions and never inferred. Reaction lines live behind the
//! `LeaderReactions` trait so presentation layers can swap in their own
//! source; the engine only ever supplies an identifier and a context.

use crate::core::types::{FactionId, LeaderId};

/// The one leader of a faction
pub fn leader_of(faction: FactionId) -> LeaderId {
    match faction {
        FactionId::UnitedStates => LeaderId::Harlan,
        FactionId::Russia => LeaderId::Volkov,
        FactionId::Canada => LeaderId::Tremblay,
        FactionId::Norway => LeaderId::Eriksen,
        FactionId::Denmark => LeaderId::Dahl,
        FactionId::Iceland => LeaderId::Jonsdottir,
        FactionId::Finland => LeaderId::Korhonen,
        FactionId::Sweden => LeaderId::Lindqvist,
        FactionId::China => LeaderId::Wei,
    }
}

/// Inverse of `leader_of`; total because the mapping is a bijection
pub fn faction_of(leader: LeaderId) -> FactionId {
    match leader {
        LeaderId::Harlan => FactionId::UnitedStates,
        LeaderId::Volkov => FactionId::Russia,
        LeaderId::Tremblay => FactionId::Canada,
        LeaderId::Eriksen => FactionId::Norway,
        LeaderId::Dahl => FactionId::Denmark,
        LeaderId::Jonsdottir => FactionId::Iceland,
        LeaderId::Korhonen => FactionId::Finland,
        LeaderId::Lindqvist => FactionId::Sweden,
        LeaderId::Wei => FactionId::China,
    }
}

pub fn leader_name(leader: LeaderId) -> &'static str {
    match leader {
        LeaderId::Harlan => "President Harlan",
        LeaderId::Volkov => "President Volkov",
        LeaderId::Tremblay => "Prime Minister Tremblay",
        LeaderId::Eriksen => "Prime Minister Eriksen",
        LeaderId::Dahl => "Prime Minister Dahl",
        LeaderId::Jonsdottir => "Prime Minister Jonsdottir",
        LeaderId::Korhonen => "President Korhonen",
        LeaderId::Lindqvist => "Prime Minister Lindqvist",
        LeaderId::Wei => "Chairman Wei",
    }
}

/// End-of-game context the engine hands to the reaction source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionContext {
    Victory,
    Defeat,
}

/// Source of end-of-game leader quotes
pub trait LeaderReactions {
    fn reaction(&self, leader: LeaderId, context: ReactionContext) -> &str;
}

/// Built-in reaction table
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticReactions;

impl LeaderReactions for StaticReactions {
    fn reaction(&self, leader: LeaderId, context: ReactionContext) -> &str {
        match (leader, context) {
            (LeaderId::Harlan, ReactionContext::Victory) => {
                "The flag flies over the ice. History will remember who showed up."
            }
            (LeaderId::Harlan, ReactionContext::Defeat) => {
                "We came late to the north, and the north does not wait."
            }
            (LeaderId::Volkov, ReactionContext::Victory) => {
                "The Arctic was always ours. Today the maps agree."
            }
            (LeaderId::Volkov, ReactionContext::Defeat) => {
                "Winters end. So do empires. We will endure this one too."
            }
            (LeaderId::Tremblay, ReactionContext::Victory) => {
                "True north, strong, and free - and recognized at last."
            }
            (LeaderId::Tremblay, ReactionContext::Defeat) => {
                "We defended the Passage with words. Words were not enough."
            }
            (LeaderId::Eriksen, ReactionContext::Victory) => {
                "Small nations win by patience. The high north rewards it."
            }
            (LeaderId::Eriksen, ReactionContext::Defeat) => {
                "Svalbard has outlived worse treaties than this outcome."
            }
            (LeaderId::Dahl, ReactionContext::Victory) => {
                "Greenland chose, and the kingdom stood together."
            }
            (LeaderId::Dahl, ReactionContext::Defeat) => {
                "A kingdom of two shores cannot face north alone."
            }
            (LeaderId::Jonsdottir, ReactionContext::Victory) => {
                "No army, no enemies, and now no rivals either."
            }
            (LeaderId::Jonsdottir, ReactionContext::Defeat) => {
                "We kept the peace. Others kept the territory."
            }
            (LeaderId::Korhonen, ReactionContext::Victory) => {
                "Built ship by ship, like everything Finland does."
            }
            (LeaderId::Korhonen, ReactionContext::Defeat) => {
                "We have survived a long border before. We will again."
            }
            (LeaderId::Lindqvist, ReactionContext::Victory) => {
                "Science led, and for once the world followed."
            }
            (LeaderId::Lindqvist, ReactionContext::Defeat) => {
                "Neutrality is a narrow ledge in a melting world."
            }
            (LeaderId::Wei, ReactionContext::Victory) => {
                "The Polar Silk Road is open. All lanes lead through us."
            }
            (LeaderId::Wei, ReactionContext::Defeat) => {
                "A near-Arctic state remains near. The century is long."
            }
        }
    }
}
