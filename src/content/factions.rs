//! Faction catalog - the nine Arctic powers
//!
//! Read-only configuration consumed once at game start. The engine never
//! mutates these entries.

use crate::core::types::{FactionId, ZoneId};
use crate::sim::faction::Resources;

/// Catalog entry for one faction
#[derive(Clone, Copy, Debug)]
pub struct FactionSpec {
    pub id: FactionId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub playable: bool,
    pub resources: Resources,
    pub starting_zones: &'static [ZoneId],
    pub blurb: &'static str,
}

pub const FACTION_CATALOG: [FactionSpec; 9] = [
    FactionSpec {
        id: FactionId::UnitedStates,
        name: "United States of America",
        short_name: "USA",
        color: "#3c6bb0",
        playable: true,
        resources: Resources {
            influence_points: 60.0,
            economic_output: 120.0,
            icebreaker_capacity: 2,
            military_readiness: 80.0,
            legitimacy: 70.0,
        },
        starting_zones: &[ZoneId::ChukchiSea],
        blurb: "Global power late to the polar game, long on carriers and short on icebreakers.",
    },
    FactionSpec {
        id: FactionId::Russia,
        name: "Russian Federation",
        short_name: "Russia",
        color: "#b03c3c",
        playable: true,
        resources: Resources {
            influence_points: 55.0,
            economic_output: 90.0,
            icebreaker_capacity: 40,
            military_readiness: 85.0,
            legitimacy: 60.0,
        },
        starting_zones: &[ZoneId::KaraSea, ZoneId::LaptevSea, ZoneId::NorthernSeaRoute],
        blurb: "Holder of the longest Arctic coastline and the largest icebreaker fleet afloat.",
    },
    FactionSpec {
        id: FactionId::Canada,
        name: "Canada",
        short_name: "Canada",
        color: "#c94f4f",
        playable: true,
        resources: Resources {
            influence_points: 45.0,
            economic_output: 70.0,
            icebreaker_capacity: 7,
            military_readiness: 55.0,
            legitimacy: 80.0,
        },
        starting_zones: &[ZoneId::NorthwestPassage, ZoneId::BeaufortSea],
        blurb: "Sovereignty hawk over the Northwest Passage, diplomat everywhere else.",
    },
    FactionSpec {
        id: FactionId::Norway,
        name: "Kingdom of Norway",
        short_name: "Norway",
        color: "#4673a3",
        playable: true,
        resources: Resources {
            influence_points: 40.0,
            economic_output: 60.0,
            icebreaker_capacity: 4,
            military_readiness: 50.0,
            legitimacy: 85.0,
        },
        starting_zones: &[ZoneId::Svalbard, ZoneId::BarentsSea],
        blurb: "Small state, outsized polar expertise, and the Svalbard treaty to defend.",
    },
    FactionSpec {
        id: FactionId::Denmark,
        name: "Kingdom of Denmark",
        short_name: "Denmark",
        color: "#a35252",
        playable: false,
        resources: Resources {
            influence_points: 35.0,
            economic_output: 45.0,
            icebreaker_capacity: 4,
            military_readiness: 40.0,
            legitimacy: 82.0,
        },
        starting_zones: &[ZoneId::GreenlandCoast],
        blurb: "Arctic power by way of Greenland, juggling Copenhagen and Nuuk.",
    },
    FactionSpec {
        id: FactionId::Iceland,
        name: "Republic of Iceland",
        short_name: "Iceland",
        color: "#5a7ea3",
        playable: false,
        resources: Resources {
            influence_points: 25.0,
            economic_output: 30.0,
            icebreaker_capacity: 1,
            military_readiness: 10.0,
            legitimacy: 88.0,
        },
        starting_zones: &[],
        blurb: "No army, central seat at every Arctic table.",
    },
    FactionSpec {
        id: FactionId::Finland,
        name: "Republic of Finland",
        short_name: "Finland",
        color: "#6d8bb5",
        playable: false,
        resources: Resources {
            influence_points: 30.0,
            economic_output: 40.0,
            icebreaker_capacity: 8,
            military_readiness: 45.0,
            legitimacy: 86.0,
        },
        starting_zones: &[],
        blurb: "Builds half the world's icebreakers; owns no Arctic coastline.",
    },
    FactionSpec {
        id: FactionId::Sweden,
        name: "Kingdom of Sweden",
        short_name: "Sweden",
        color: "#7295bd",
        playable: false,
        resources: Resources {
            influence_points: 32.0,
            economic_output: 45.0,
            icebreaker_capacity: 5,
            military_readiness: 48.0,
            legitimacy: 84.0,
        },
        starting_zones: &[],
        blurb: "Research superpower of the high north, wary of its eastern neighbor.",
    },
    FactionSpec {
        id: FactionId::China,
        name: "People's Republic of China",
        short_name: "China",
        color: "#b5862e",
        playable: true,
        resources: Resources {
            influence_points: 50.0,
            economic_output: 150.0,
            icebreaker_capacity: 4,
            military_readiness: 70.0,
            legitimacy: 65.0,
        },
        starting_zones: &[],
        blurb: "Self-declared near-Arctic state buying its way onto the ice.",
    },
];

pub fn faction_spec(id: FactionId) -> &'static FactionSpec {
    // Catalog is declared in FactionId order; the debug assert guards that
    let spec = &FACTION_CATALOG[id as usize];
    debug_assert_eq!(spec.id, id);
    spec
}

const NORDICS: [FactionId; 5] = [
    FactionId::Norway,
    FactionId::Denmark,
    FactionId::Iceland,
    FactionId::Finland,
    FactionId::Sweden,
];

fn is_nordic(id: FactionId) -> bool {
    NORDICS.contains(&id)
}

/// Baseline tension score for a pair at game start
pub fn starting_tension(a: FactionId, b: FactionId) -> f64 {
    use FactionId::*;
    let (x, y) = if a < b { (a, b) } else { (b, a) };
    match (x, y) {
        (UnitedStates, Russia) => 58.0,
        (UnitedStates, China) => 52.0,
        (Russia, China) => 38.0,
        (UnitedStates, Canada) => 12.0,
        _ if is_nordic(x) && is_nordic(y) => 10.0,
        _ if x == Russia || y == Russia => 45.0,
        _ if x == China || y == China => 40.0,
        _ if x == UnitedStates && is_nordic(y) => 18.0,
        _ if x == Canada && is_nordic(y) => 15.0,
        _ => 25.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_faction_once() {
        for id in FactionId::ALL {
            assert_eq!(faction_spec(id).id, id);
        }
        assert_eq!(FACTION_CATALOG.len(), FactionId::ALL.len());
    }

    #[test]
    fn test_starting_zones_are_disjoint() {
        let mut seen = Vec::new();
        for spec in &FACTION_CATALOG {
            for zone in spec.starting_zones {
                assert!(!seen.contains(zone), "{zone:?} assigned twice");
                seen.push(*zone);
            }
        }
    }

    #[test]
    fn test_starting_resources_within_gauges() {
        for spec in &FACTION_CATALOG {
            assert!((0.0..=100.0).contains(&spec.resources.military_readiness));
            assert!((0.0..=100.0).contains(&spec.resources.legitimacy));
            assert!(spec.resources.economic_output >= 0.0);
        }
    }

    #[test]
    fn test_starting_tension_symmetric() {
        for a in FactionId::ALL {
            for b in FactionId::ALL {
                if a != b {
                    assert_eq!(starting_tension(a, b), starting_tension(b, a));
                }
            }
        }
    }

    #[test]
    fn test_four_playable_factions_minimum() {
        let playable = FACTION_CATALOG.iter().filter(|s| s.playable).count();
        assert!(playable >= 4);
    }
}
