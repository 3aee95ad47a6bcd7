//! Turn pipeline - the single transition from turn n to turn n+1
//!
//! The pipeline works copy-then-commit: it clones the incoming state,
//! mutates the clone through a fixed step sequence, and only returns it if
//! every step succeeds. A malformed action rejects the whole turn and the
//! caller's state is untouched.

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::sim::action::Action;
use crate::sim::ending::evaluate_game_end;
use crate::sim::event::EventDeck;
use crate::sim::state::GameState;

/// Per-turn bookkeeping accumulated while applying actions
#[derive(Debug, Default)]
struct TurnContext {
    /// Climate mitigation was funded this turn; reverses the ice decay
    mitigation_funded: bool,
}

/// Advance the game by one turn
///
/// Steps, in fixed order: apply queued actions, reclassify every relation,
/// advance the calendar, update the ice, draw pending events, increment
/// the turn, and evaluate endings. Returns the successor state; the input
/// is never mutated.
pub fn advance_turn(
    state: &GameState,
    actions: &[Action],
    config: &EngineConfig,
    deck: &mut EventDeck,
) -> Result<GameState> {
    if state.is_terminal() {
        return Err(EngineError::GameOver);
    }

    let mut next = state.clone();
    let mut ctx = TurnContext::default();

    // 1. Queued actions, in queue order
    for action in actions {
        tracing::debug!(turn = state.turn, ?action, "applying action");
        apply_action(&mut next, action, config, &mut ctx)?;
    }

    // 2. Re-derive every relation's level
    for relation in &mut next.relations {
        relation.reclassify(config);
    }

    // 3. Calendar
    let (season, wrapped) = next.season.next();
    next.season = season;
    if wrapped {
        next.year += 1;
    }

    // 4. Ice
    let before = next.global_ice_extent;
    next.global_ice_extent = if ctx.mitigation_funded {
        (before + config.ice_recovery_per_turn).min(100.0)
    } else {
        (before - config.ice_decay_per_turn).max(0.0)
    };
    next.ice_delta_last_turn = next.global_ice_extent - before;

    // 5. Pending events for the new turn
    next.pending_events = deck.draw(next.turn);

    // 6. Turn counter
    next.turn += 1;

    next.check_invariants()?;

    // 7. Endings
    if let Some(report) = evaluate_game_end(&next, config) {
        tracing::info!(
            turn = next.turn,
            winner = ?report.winner,
            victory = ?report.victory,
            defeat = ?report.defeat,
            "game over"
        );
        next.record_ending(report);
    } else {
        tracing::debug!(
            turn = next.turn,
            year = next.year,
            season = next.season.label(),
            ice = next.global_ice_extent,
            "turn committed"
        );
    }

    Ok(next)
}

fn apply_action(
    state: &mut GameState,
    action: &Action,
    config: &EngineConfig,
    ctx: &mut TurnContext,
) -> Result<()> {
    match *action {
        Action::AdjustResource {
            faction,
            gauge,
            delta,
        } => {
            state.faction_mut(faction)?.resources.adjust(gauge, delta);
        }

        Action::ClaimZone { faction, zone } => {
            state.claim_zone(faction, zone)?;
        }

        Action::AbandonZone { faction, zone } => {
            state.abandon_zone(faction, zone)?;
        }

        Action::ShiftRelation { a, b, delta } => {
            shift_relation(state, a, b, delta, config)?;
        }

        Action::AwardVictoryPoints { faction, points } => {
            state.faction_mut(faction)?.victory_points += points;
        }

        Action::DeclareWar { aggressor, target } => {
            // The spike is deliberately larger than any cap; the engine
            // clamps it to the configured per-event maximum
            shift_relation(state, aggressor, target, 100.0, config)?;
            state.flags.war_declared_by = Some(aggressor);
        }

        Action::BrokerAccord { a, b } => {
            shift_relation(state, a, b, -100.0, config)?;
            state.flags.diplomatic_breakthrough = Some(a);
        }

        Action::FundClimateMitigation { faction } => {
            state.faction(faction)?;
            state.flags.climate_mitigation = Some(faction);
            ctx.mitigation_funded = true;
        }

        Action::TriggerAssassination { target } => {
            state.faction(target)?;
            state.flags.assassination_of = Some(target);
        }
    }
    Ok(())
}

fn shift_relation(
    state: &mut GameState,
    a: crate::core::types::FactionId,
    b: crate::core::types::FactionId,
    delta: f64,
    config: &EngineConfig,
) -> Result<()> {
    if a == b {
        return Err(EngineError::InvalidRelation(a, b));
    }
    state.faction(a)?;
    state.faction(b)?;
    let relation = state
        .relation_between_mut(a, b)
        .ok_or(EngineError::InvalidRelation(a, b))?;
    relation.apply_delta(delta, config);
    Ok(())
}
