//! Integration tests for the turn pipeline
//!
//! These tests drive whole games through the public entry point and check
//! the engine-level guarantees: fixed step order, copy-then-commit
//! failure semantics, zone ownership partition, calendar progression,
//! and state freezing once an ending is recorded.

use borealis::core::config::EngineConfig;
use borealis::core::error::EngineError;
use borealis::core::types::{FactionId, Season, TensionLevel, ZoneId};
use borealis::sim::{advance_turn, Action, EventDeck, EventLog, GameState, ResourceGauge};

fn setup(player: FactionId) -> (GameState, EngineConfig, EventDeck) {
    let config = EngineConfig::default();
    let state = GameState::new(player, &config).expect("starting state");
    let deck = EventDeck::new(&config);
    (state, config, deck)
}

// ============================================================================
// Calendar and climate progression
// ============================================================================

#[test]
fn test_twenty_turn_game_spans_five_years() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);
    for _ in 0..20 {
        state = advance_turn(&state, &[], &config, &mut deck).unwrap();
    }
    assert_eq!(state.turn, 21);
    assert_eq!(state.year, 2035);
    assert_eq!(state.season, Season::Spring);
}

#[test]
fn test_ice_declines_monotonically_without_mitigation() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);
    let mut previous = state.global_ice_extent;
    for _ in 0..15 {
        state = advance_turn(&state, &[], &config, &mut deck).unwrap();
        assert!(state.global_ice_extent < previous);
        previous = state.global_ice_extent;
    }
}

// ============================================================================
// Zone ownership partition
// ============================================================================

#[test]
fn test_zone_partition_holds_across_contested_game() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);

    // Canada and China trade the same zones back and forth
    let contested = [
        ZoneId::CentralArcticBasin,
        ZoneId::EastSiberianSea,
        ZoneId::BeringStrait,
    ];
    for turn in 0..12 {
        let claimant = if turn % 2 == 0 {
            FactionId::Canada
        } else {
            FactionId::China
        };
        let actions: Vec<Action> = contested
            .iter()
            .map(|&zone| Action::ClaimZone {
                faction: claimant,
                zone,
            })
            .collect();
        let next = advance_turn(&state, &actions, &config, &mut deck).unwrap();

        // Every zone has at most one controller and the holdings agree
        next.check_invariants().unwrap();
        let claimed: usize = FactionId::ALL
            .iter()
            .map(|&f| next.zones_controlled(f))
            .sum();
        let with_controller = next.zones.values().filter(|z| z.controller.is_some()).count();
        assert_eq!(claimed, with_controller);

        if next.is_terminal() {
            break;
        }
        state = next;
    }
}

// ============================================================================
// Copy-then-commit
// ============================================================================

#[test]
fn test_failed_turn_leaves_no_partial_state() {
    let (state, config, mut deck) = setup(FactionId::Canada);
    let actions = [
        Action::AwardVictoryPoints {
            faction: FactionId::Canada,
            points: 10,
        },
        Action::ClaimZone {
            faction: FactionId::Canada,
            zone: ZoneId::Svalbard,
        },
        // Invalid: Canada never controlled the Kara Sea
        Action::AbandonZone {
            faction: FactionId::Canada,
            zone: ZoneId::KaraSea,
        },
    ];

    let result = advance_turn(&state, &actions, &config, &mut deck);
    assert!(matches!(result, Err(EngineError::InvalidAction(_))));

    // Nothing from the earlier valid actions leaked out
    assert_eq!(state.faction(FactionId::Canada).unwrap().victory_points, 0);
    assert_eq!(
        state.zone(ZoneId::Svalbard).unwrap().controller,
        Some(FactionId::Norway)
    );
    assert_eq!(state.turn, 1);
}

#[test]
fn test_rejected_turn_can_be_resubmitted_corrected() {
    let (state, config, mut deck) = setup(FactionId::Canada);
    let bad = [Action::ShiftRelation {
        a: FactionId::Canada,
        b: FactionId::Canada,
        delta: 5.0,
    }];
    assert!(advance_turn(&state, &bad, &config, &mut deck).is_err());

    let good = [Action::ShiftRelation {
        a: FactionId::Canada,
        b: FactionId::Norway,
        delta: 5.0,
    }];
    let next = advance_turn(&state, &good, &config, &mut deck).unwrap();
    assert_eq!(next.turn, 2);
}

// ============================================================================
// Tension behavior through the pipeline
// ============================================================================

#[test]
fn test_oscillation_near_boundary_does_not_flicker() {
    let (mut state, config, mut deck) = setup(FactionId::UnitedStates);

    // Park the US-Canada relation just under the competition boundary,
    // then wobble it by one point per turn across the line.
    let warmup = [Action::ShiftRelation {
        a: FactionId::UnitedStates,
        b: FactionId::Canada,
        delta: 7.0, // 12 -> 19
    }];
    state = advance_turn(&state, &warmup, &config, &mut deck).unwrap();
    let level_at = |s: &GameState| {
        s.relation_between(FactionId::UnitedStates, FactionId::Canada)
            .unwrap()
            .tension_level
    };
    let start_level = level_at(&state);

    for turn in 0..8 {
        let delta = if turn % 2 == 0 { 2.0 } else { -2.0 }; // 19 <-> 21
        let actions = [Action::ShiftRelation {
            a: FactionId::UnitedStates,
            b: FactionId::Canada,
            delta,
        }];
        state = advance_turn(&state, &actions, &config, &mut deck).unwrap();
        assert_eq!(level_at(&state), start_level, "level flickered at the boundary");
    }
}

#[test]
fn test_escalation_to_nuclear_apocalypse() {
    let (mut state, config, mut deck) = setup(FactionId::Norway);

    let declare = [Action::DeclareWar {
        aggressor: FactionId::Russia,
        target: FactionId::Norway,
    }];
    state = advance_turn(&state, &declare, &config, &mut deck).unwrap();
    assert!(!state.is_terminal());

    // Two more full-cap escalations push the pair to conflict
    for _ in 0..2 {
        let escalate = [Action::ShiftRelation {
            a: FactionId::Russia,
            b: FactionId::Norway,
            delta: 15.0,
        }];
        state = advance_turn(&state, &escalate, &config, &mut deck).unwrap();
        if state.is_terminal() {
            break;
        }
    }

    assert!(state.is_terminal());
    let report = state.ending.as_ref().unwrap();
    assert_eq!(report.defeat, Some(borealis::sim::DefeatKind::NuclearApocalypse));
    assert_eq!(report.victory, None);
    assert_eq!(report.winner, None);
    assert_eq!(state.winner, None);

    let relation = state
        .relation_between(FactionId::Russia, FactionId::Norway)
        .unwrap();
    assert_eq!(relation.tension_level, TensionLevel::Conflict);
}

// ============================================================================
// Terminal freeze and events
// ============================================================================

#[test]
fn test_game_ends_by_survival_and_freezes() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);
    for _ in 0..20 {
        state = advance_turn(&state, &[], &config, &mut deck).unwrap();
    }
    assert!(state.is_terminal());
    assert_eq!(
        state.ending.as_ref().unwrap().victory,
        Some(borealis::sim::VictoryKind::Survival)
    );

    let frozen = advance_turn(&state, &[], &config, &mut deck);
    assert!(matches!(frozen, Err(EngineError::GameOver)));
}

#[test]
fn test_survival_winner_prefers_victory_points() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);
    let actions = [Action::AwardVictoryPoints {
        faction: FactionId::Sweden,
        points: 7,
    }];
    state = advance_turn(&state, &actions, &config, &mut deck).unwrap();
    for _ in 0..19 {
        state = advance_turn(&state, &[], &config, &mut deck).unwrap();
    }
    assert!(state.is_terminal());
    assert_eq!(state.winner, Some(FactionId::Sweden));
}

#[test]
fn test_events_replaced_each_turn_and_logged() {
    let (mut state, config, mut deck) = setup(FactionId::Canada);
    let mut log = EventLog::new();
    for _ in 0..10 {
        state = advance_turn(&state, &[], &config, &mut deck).unwrap();
        log.record_all(&state.pending_events);
        // Pending events always belong to the turn just resolved
        for event in &state.pending_events {
            assert_eq!(event.turn, state.turn - 1);
        }
    }
    // The log accumulates while the state only keeps the latest draw
    assert!(log.len() >= state.pending_events.len());
}

#[test]
fn test_same_seed_reproduces_identical_game() {
    let run = || {
        let (mut state, config, mut deck) = setup(FactionId::Canada);
        for _ in 0..20 {
            state = advance_turn(&state, &[], &config, &mut deck).unwrap();
        }
        state
    };
    let a = run();
    let b = run();
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

// ============================================================================
// Snapshot contract
// ============================================================================

#[test]
fn test_mid_game_snapshot_round_trips() {
    let (mut state, config, mut deck) = setup(FactionId::China);
    let actions = [
        Action::ClaimZone {
            faction: FactionId::China,
            zone: ZoneId::EastSiberianSea,
        },
        Action::AdjustResource {
            faction: FactionId::China,
            gauge: ResourceGauge::EconomicOutput,
            delta: 40.0,
        },
    ];
    state = advance_turn(&state, &actions, &config, &mut deck).unwrap();
    assert!(!state.is_terminal());

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.turn, state.turn);
    assert_eq!(
        restored.zones_controlled(FactionId::China),
        state.zones_controlled(FactionId::China)
    );
    restored.check_invariants().unwrap();
}
