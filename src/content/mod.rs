//! Static content catalogs: factions, zones, leaders, events
//!
//! Everything here is read-only configuration. The engine consults these
//! tables at game start and when rendering endings; it never mutates them.

pub mod events;
pub mod factions;
pub mod leaders;
pub mod zones;

pub use events::{EventKind, EventTemplate, EVENT_POOL};
pub use factions::{faction_spec, starting_tension, FactionSpec, FACTION_CATALOG};
pub use leaders::{faction_of, leader_name, leader_of, LeaderReactions, ReactionContext, StaticReactions};
pub use zones::{zone_spec, ZoneSpec, ZONE_CATALOG};
