//! Victory and defeat determination
//!
//! Conditions live in closed, ordered catalogs of (kind, text, predicate)
//! entries; evaluation order is the array order, never map iteration.
//! Checks are pure predicates over a GameState snapshot, so evaluating a
//! terminal state twice yields the same report.

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::types::{FactionId, TensionLevel};
use crate::sim::state::GameState;

/// The seven ways to win, in evaluation priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    Hegemonic,
    Economic,
    NobelPeace,
    Scientific,
    Diplomatic,
    Military,
    Survival,
}

/// The five ways to lose
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefeatKind {
    NuclearApocalypse,
    ClimateCatastrophe,
    RegimeCollapse,
    TotalDefeat,
    Assassination,
}

impl DefeatKind {
    /// Catastrophic defeats override every other outcome and have no winner
    pub fn is_catastrophic(&self) -> bool {
        matches!(self, DefeatKind::NuclearApocalypse | DefeatKind::ClimateCatastrophe)
    }
}

/// Terminal outcome of a game
///
/// `victory` and `defeat` are not mutually exclusive: a rival can win on
/// the same turn the player is eliminated. Presentation resolves which
/// screen to show (catastrophe > player defeat > victory).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndReport {
    pub victory: Option<VictoryKind>,
    pub defeat: Option<DefeatKind>,
    pub winner: Option<FactionId>,
    pub description: String,
    pub epilogue: String,
}

type VictoryPredicate = fn(&GameState, &EngineConfig, FactionId) -> bool;
type DefeatPredicate = fn(&GameState, &EngineConfig) -> bool;

/// Static catalog entry for a way to win
pub struct VictoryCondition {
    pub kind: VictoryKind,
    pub name: &'static str,
    pub how_to_win: &'static str,
    pub check: VictoryPredicate,
}

/// Static catalog entry for a way to lose
pub struct DefeatCondition {
    pub kind: DefeatKind,
    pub name: &'static str,
    pub how_to_lose: &'static str,
    pub check: DefeatPredicate,
}

/// Ordered victory catalog; first satisfied entry wins
pub const VICTORY_CATALOG: [VictoryCondition; 7] = [
    VictoryCondition {
        kind: VictoryKind::Hegemonic,
        name: "Hegemonic Victory",
        how_to_win: "Control at least 60% of all Arctic zones.",
        check: check_hegemonic,
    },
    VictoryCondition {
        kind: VictoryKind::Economic,
        name: "Economic Victory",
        how_to_win: "Raise economic output to 500 or beyond.",
        check: check_economic,
    },
    VictoryCondition {
        kind: VictoryKind::NobelPeace,
        name: "Nobel Peace Victory",
        how_to_win: "Broker a diplomatic breakthrough while every relation sits at competition or below.",
        check: check_nobel_peace,
    },
    VictoryCondition {
        kind: VictoryKind::Scientific,
        name: "Scientific Victory",
        how_to_win: "Fund climate mitigation and stabilize the ice.",
        check: check_scientific,
    },
    VictoryCondition {
        kind: VictoryKind::Diplomatic,
        name: "Diplomatic Victory",
        how_to_win: "Keep every one of your relations at cooperation, with enough partners to matter.",
        check: check_diplomatic,
    },
    VictoryCondition {
        kind: VictoryKind::Military,
        name: "Military Victory",
        how_to_win: "Combine peak military readiness with a broad territorial hold.",
        check: check_military,
    },
    VictoryCondition {
        kind: VictoryKind::Survival,
        name: "Survival Victory",
        how_to_win: "Outlast the final turn with the most victory points.",
        check: check_survival,
    },
];

/// Ordered defeat catalog; catastrophic entries come first
pub const DEFEAT_CATALOG: [DefeatCondition; 5] = [
    DefeatCondition {
        kind: DefeatKind::NuclearApocalypse,
        name: "Nuclear Apocalypse",
        how_to_lose: "Let a declared war meet a conflict-level relation.",
        check: check_nuclear_apocalypse,
    },
    DefeatCondition {
        kind: DefeatKind::ClimateCatastrophe,
        name: "Climate Catastrophe",
        how_to_lose: "Let the global ice extent reach zero.",
        check: check_climate_catastrophe,
    },
    DefeatCondition {
        kind: DefeatKind::RegimeCollapse,
        name: "Regime Collapse",
        how_to_lose: "Let your legitimacy fall to zero.",
        check: check_regime_collapse,
    },
    DefeatCondition {
        kind: DefeatKind::TotalDefeat,
        name: "Total Defeat",
        how_to_lose: "Hold no zones and no victory points after the opening turns.",
        check: check_total_defeat,
    },
    DefeatCondition {
        kind: DefeatKind::Assassination,
        name: "Assassination",
        how_to_lose: "Lose your head of state to an assassin.",
        check: check_assassination,
    },
];

// === Victory predicates ===

fn check_hegemonic(state: &GameState, config: &EngineConfig, faction: FactionId) -> bool {
    let held = state.zones_controlled(faction);
    let total = state.zones.len();
    total > 0 && (held as f64) >= config.hegemonic_zone_share * total as f64
}

fn check_economic(state: &GameState, config: &EngineConfig, faction: FactionId) -> bool {
    state
        .factions
        .get(&faction)
        .is_some_and(|f| f.resources.economic_output >= config.economic_victory_output)
}

fn check_nobel_peace(state: &GameState, _config: &EngineConfig, faction: FactionId) -> bool {
    state.flags.diplomatic_breakthrough == Some(faction)
        && state
            .relations
            .iter()
            .all(|r| r.tension_level <= TensionLevel::Competition)
}

fn check_scientific(state: &GameState, _config: &EngineConfig, faction: FactionId) -> bool {
    // Ice stable or recovering over the last turn
    state.flags.climate_mitigation == Some(faction) && state.ice_delta_last_turn >= 0.0
}

fn check_diplomatic(state: &GameState, config: &EngineConfig, faction: FactionId) -> bool {
    let mut partners = 0;
    for relation in state.relations.iter().filter(|r| r.involves(faction)) {
        if relation.tension_level != TensionLevel::Cooperation {
            return false;
        }
        partners += 1;
    }
    partners >= config.diplomatic_min_partners
}

fn check_military(state: &GameState, config: &EngineConfig, faction: FactionId) -> bool {
    state.factions.get(&faction).is_some_and(|f| {
        f.resources.military_readiness >= config.military_dominance_readiness
            && f.zone_count() >= config.military_dominance_zones
    })
}

fn check_survival(state: &GameState, config: &EngineConfig, _faction: FactionId) -> bool {
    state.turn > config.max_turns
}

// === Defeat predicates ===

fn check_nuclear_apocalypse(state: &GameState, _config: &EngineConfig) -> bool {
    state.flags.war_declared_by.is_some()
        && state
            .relations
            .iter()
            .any(|r| r.tension_level == TensionLevel::Conflict)
}

fn check_climate_catastrophe(state: &GameState, _config: &EngineConfig) -> bool {
    state.global_ice_extent <= 0.0
}

fn check_regime_collapse(state: &GameState, _config: &EngineConfig) -> bool {
    state
        .factions
        .get(&state.player_faction)
        .is_some_and(|f| f.resources.legitimacy <= 0.0)
}

fn check_total_defeat(state: &GameState, config: &EngineConfig) -> bool {
    state.turn >= config.total_defeat_min_turn
        && state
            .factions
            .get(&state.player_faction)
            .is_some_and(|f| f.zone_count() == 0 && f.victory_points == 0)
}

fn check_assassination(state: &GameState, _config: &EngineConfig) -> bool {
    state.flags.assassination_of == Some(state.player_faction)
}

// === Evaluation ===

/// Decide whether the game has ended for the given state
///
/// Pure and idempotent; returns `None` while the game continues.
/// Priority: catastrophic defeat > player defeat (winner still named by
/// the victory scan) > victory > nothing.
pub fn evaluate_game_end(state: &GameState, config: &EngineConfig) -> Option<EndReport> {
    let defeat = DEFEAT_CATALOG.iter().find(|c| (c.check)(state, config));

    if let Some(condition) = defeat {
        if condition.kind.is_catastrophic() {
            let (description, epilogue) = describe_catastrophe(condition.kind, state);
            return Some(EndReport {
                victory: None,
                defeat: Some(condition.kind),
                winner: None,
                description,
                epilogue,
            });
        }
    }

    // A defeated player can never be the crowned faction, even if it
    // satisfies a victory condition on the same turn
    let victory = match defeat {
        Some(_) => scan_victories(state, config, Some(state.player_faction)),
        None => scan_victories(state, config, None),
    };

    match (defeat, victory) {
        (Some(defeat), victory) => {
            // Player eliminated; a rival is still crowned
            let winner = victory
                .map(|(_, w)| w)
                .or_else(|| best_rival(state, state.player_faction));
            let (description, epilogue) = describe_player_defeat(defeat.kind, winner, state);
            Some(EndReport {
                victory: victory.map(|(kind, _)| kind),
                defeat: Some(defeat.kind),
                winner,
                description,
                epilogue,
            })
        }
        (None, Some((kind, winner))) => {
            let (description, epilogue) = describe_victory(kind, winner, state);
            Some(EndReport {
                victory: Some(kind),
                defeat: None,
                winner: Some(winner),
                description,
                epilogue,
            })
        }
        (None, None) => None,
    }
}

/// First satisfied victory condition in catalog order, with its winner
///
/// Ties among simultaneously qualifying factions break by highest victory
/// points, then by faction enum order. `exclude` removes a faction from
/// contention entirely (a defeated player cannot win).
fn scan_victories(
    state: &GameState,
    config: &EngineConfig,
    exclude: Option<FactionId>,
) -> Option<(VictoryKind, FactionId)> {
    for condition in &VICTORY_CATALOG {
        let winner = FactionId::ALL
            .into_iter()
            .filter(|&f| Some(f) != exclude && (condition.check)(state, config, f))
            .max_by(|&x, &y| {
                let vp = |f: FactionId| state.factions.get(&f).map_or(0, |fa| fa.victory_points);
                // Highest points first; enum-earlier faction wins ties, so
                // compare ids in reverse for max_by
                vp(x).cmp(&vp(y)).then_with(|| y.cmp(&x))
            });
        if let Some(winner) = winner {
            return Some((condition.kind, winner));
        }
    }
    None
}

/// Best-placed faction other than `exclude`, by points then enum order
fn best_rival(state: &GameState, exclude: FactionId) -> Option<FactionId> {
    FactionId::ALL
        .into_iter()
        .filter(|&f| f != exclude)
        .max_by(|&x, &y| {
            let vp = |f: FactionId| state.factions.get(&f).map_or(0, |fa| fa.victory_points);
            vp(x).cmp(&vp(y)).then_with(|| y.cmp(&x))
        })
}

// === Templates ===
//
// Descriptions and epilogues are plain data substitution from the terminal
// state. No randomness; the same state always renders the same text.

fn faction_name(state: &GameState, id: FactionId) -> String {
    state
        .factions
        .get(&id)
        .map_or_else(|| format!("{id:?}"), |f| f.name.clone())
}

fn describe_catastrophe(kind: DefeatKind, state: &GameState) -> (String, String) {
    match kind {
        DefeatKind::NuclearApocalypse => (
            "Escalation crossed the final threshold. Missiles rose over the pole.".to_string(),
            format!(
                "By turn {}, no flag claims the ice, because no one is left to plant one.",
                state.turn
            ),
        ),
        DefeatKind::ClimateCatastrophe => (
            "The last ice is gone. The contest ends with nothing left to contest.".to_string(),
            format!(
                "Global ice extent fell to zero by turn {}. Every coastline in the world pays the price.",
                state.turn
            ),
        ),
        _ => unreachable!("only catastrophic kinds rendered here"),
    }
}

fn describe_player_defeat(
    kind: DefeatKind,
    winner: Option<FactionId>,
    state: &GameState,
) -> (String, String) {
    let player = faction_name(state, state.player_faction);
    let description = match kind {
        DefeatKind::RegimeCollapse => {
            format!("{player}'s government has lost all legitimacy and falls to internal revolt.")
        }
        DefeatKind::TotalDefeat => {
            format!("{player} holds no territory and no standing. The Arctic moves on without it.")
        }
        DefeatKind::Assassination => {
            format!("{player}'s head of state is assassinated; the succession crisis consumes the government.")
        }
        _ => unreachable!("catastrophes rendered separately"),
    };
    let epilogue = match winner {
        Some(w) => format!(
            "{} emerges as the dominant Arctic power, with {} of {} zones under its flag.",
            faction_name(state, w),
            state.zones_controlled(w),
            state.zones.len()
        ),
        None => "No power steps into the vacuum.".to_string(),
    };
    (description, epilogue)
}

fn describe_victory(kind: VictoryKind, winner: FactionId, state: &GameState) -> (String, String) {
    let name = faction_name(state, winner);
    let zones = state.zones_controlled(winner);
    let total = state.zones.len();
    let points = state.factions.get(&winner).map_or(0, |f| f.victory_points);
    let description = match kind {
        VictoryKind::Hegemonic => {
            format!("{name} controls {zones} of {total} Arctic zones. The region has a hegemon.")
        }
        VictoryKind::Economic => format!(
            "{name}'s polar economy is unmatched; every northern trade route runs on its terms."
        ),
        VictoryKind::NobelPeace => format!(
            "{name} brokered the accords that cooled every rivalry below the boiling point."
        ),
        VictoryKind::Scientific => format!(
            "{name}'s climate program halted the melt; the ice held at {:.0}%.",
            state.global_ice_extent
        ),
        VictoryKind::Diplomatic => {
            format!("{name} stands at the center of every partnership that matters in the north.")
        }
        VictoryKind::Military => {
            format!("{name} commands the pole in fact, whatever the treaties say.")
        }
        VictoryKind::Survival => format!(
            "Turn {} has passed. {name} leads on points ({points}) and takes the long game.",
            state.turn - 1
        ),
    };
    let epilogue = format!(
        "Final standing: {zones} zones, {points} victory points, ice extent {:.0}%.",
        state.global_ice_extent
    );
    (description, epilogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_orders_are_fixed() {
        let kinds: Vec<VictoryKind> = VICTORY_CATALOG.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                VictoryKind::Hegemonic,
                VictoryKind::Economic,
                VictoryKind::NobelPeace,
                VictoryKind::Scientific,
                VictoryKind::Diplomatic,
                VictoryKind::Military,
                VictoryKind::Survival,
            ]
        );
        let defeats: Vec<DefeatKind> = DEFEAT_CATALOG.iter().map(|c| c.kind).collect();
        assert_eq!(
            defeats,
            vec![
                DefeatKind::NuclearApocalypse,
                DefeatKind::ClimateCatastrophe,
                DefeatKind::RegimeCollapse,
                DefeatKind::TotalDefeat,
                DefeatKind::Assassination,
            ]
        );
    }

    #[test]
    fn test_catastrophic_partition() {
        assert!(DefeatKind::NuclearApocalypse.is_catastrophic());
        assert!(DefeatKind::ClimateCatastrophe.is_catastrophic());
        assert!(!DefeatKind::RegimeCollapse.is_catastrophic());
        assert!(!DefeatKind::TotalDefeat.is_catastrophic());
        assert!(!DefeatKind::Assassination.is_catastrophic());
    }

    #[test]
    fn test_every_condition_has_display_text() {
        for condition in &VICTORY_CATALOG {
            assert!(!condition.name.is_empty());
            assert!(!condition.how_to_win.is_empty());
        }
        for condition in &DEFEAT_CATALOG {
            assert!(!condition.name.is_empty());
            assert!(!condition.how_to_lose.is_empty());
        }
    }
}
