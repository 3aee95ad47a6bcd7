//! Simulation engine
//!
//! The canonical state model, the tension engine, the turn pipeline, and
//! the ending evaluator. Everything here is synchronous and single-owner:
//! presentation reads committed snapshots and never writes back.

pub mod action;
pub mod ending;
pub mod event;
pub mod faction;
pub mod relation;
pub mod state;
pub mod turn;
pub mod zone;

pub use action::Action;
pub use ending::{evaluate_game_end, DefeatKind, EndReport, VictoryKind, DEFEAT_CATALOG, VICTORY_CATALOG};
pub use event::{EventDeck, EventLog, TurnEvent};
pub use faction::{Faction, ResourceGauge, Resources};
pub use relation::Relation;
pub use state::{GameState, NarrativeFlags};
pub use turn::advance_turn;
pub use zone::Zone;
