//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Turn counter (1-based; a standard game ends after turn 20)
pub type Turn = u32;

/// The nine Arctic powers. The set is closed for the life of a game.
///
/// Declaration order is the deterministic tie-break order used by the
/// ending evaluator, so keep it stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactionId {
    UnitedStates,
    Russia,
    Canada,
    Norway,
    Denmark,
    Iceland,
    Finland,
    Sweden,
    China,
}

impl FactionId {
    pub const ALL: [FactionId; 9] = [
        FactionId::UnitedStates,
        FactionId::Russia,
        FactionId::Canada,
        FactionId::Norway,
        FactionId::Denmark,
        FactionId::Iceland,
        FactionId::Finland,
        FactionId::Sweden,
        FactionId::China,
    ];

    /// Parse a short key as used by the CLI driver and config files
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "usa" => Some(FactionId::UnitedStates),
            "russia" => Some(FactionId::Russia),
            "canada" => Some(FactionId::Canada),
            "norway" => Some(FactionId::Norway),
            "denmark" => Some(FactionId::Denmark),
            "iceland" => Some(FactionId::Iceland),
            "finland" => Some(FactionId::Finland),
            "sweden" => Some(FactionId::Sweden),
            "china" => Some(FactionId::China),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FactionId::UnitedStates => "usa",
            FactionId::Russia => "russia",
            FactionId::Canada => "canada",
            FactionId::Norway => "norway",
            FactionId::Denmark => "denmark",
            FactionId::Iceland => "iceland",
            FactionId::Finland => "finland",
            FactionId::Sweden => "sweden",
            FactionId::China => "china",
        }
    }
}

/// Territorial units of the Arctic map. Closed set, fixed at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    BarentsSea,
    KaraSea,
    LaptevSea,
    EastSiberianSea,
    ChukchiSea,
    BeaufortSea,
    NorthwestPassage,
    GreenlandCoast,
    Svalbard,
    CentralArcticBasin,
    BeringStrait,
    NorthernSeaRoute,
}

impl ZoneId {
    pub const ALL: [ZoneId; 12] = [
        ZoneId::BarentsSea,
        ZoneId::KaraSea,
        ZoneId::LaptevSea,
        ZoneId::EastSiberianSea,
        ZoneId::ChukchiSea,
        ZoneId::BeaufortSea,
        ZoneId::NorthwestPassage,
        ZoneId::GreenlandCoast,
        ZoneId::Svalbard,
        ZoneId::CentralArcticBasin,
        ZoneId::BeringStrait,
        ZoneId::NorthernSeaRoute,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "barents" => Some(ZoneId::BarentsSea),
            "kara" => Some(ZoneId::KaraSea),
            "laptev" => Some(ZoneId::LaptevSea),
            "east-siberian" => Some(ZoneId::EastSiberianSea),
            "chukchi" => Some(ZoneId::ChukchiSea),
            "beaufort" => Some(ZoneId::BeaufortSea),
            "nw-passage" => Some(ZoneId::NorthwestPassage),
            "greenland" => Some(ZoneId::GreenlandCoast),
            "svalbard" => Some(ZoneId::Svalbard),
            "central-basin" => Some(ZoneId::CentralArcticBasin),
            "bering" => Some(ZoneId::BeringStrait),
            "sea-route" => Some(ZoneId::NorthernSeaRoute),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ZoneId::BarentsSea => "barents",
            ZoneId::KaraSea => "kara",
            ZoneId::LaptevSea => "laptev",
            ZoneId::EastSiberianSea => "east-siberian",
            ZoneId::ChukchiSea => "chukchi",
            ZoneId::BeaufortSea => "beaufort",
            ZoneId::NorthwestPassage => "nw-passage",
            ZoneId::GreenlandCoast => "greenland",
            ZoneId::Svalbard => "svalbard",
            ZoneId::CentralArcticBasin => "central-basin",
            ZoneId::BeringStrait => "bering",
            ZoneId::NorthernSeaRoute => "sea-route",
        }
    }
}

/// Heads of state. Each faction has exactly one leader (see content::leaders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaderId {
    Harlan,
    Volkov,
    Tremblay,
    Eriksen,
    Dahl,
    Jonsdottir,
    Korhonen,
    Lindqvist,
    Wei,
}

/// Season cycle; the year increments each time Winter wraps to Spring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Next season in the cycle; true when the cycle wrapped (year boundary)
    pub fn next(self) -> (Season, bool) {
        match self {
            Season::Spring => (Season::Summer, false),
            Season::Summer => (Season::Autumn, false),
            Season::Autumn => (Season::Winter, false),
            Season::Winter => (Season::Spring, true),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

/// Discrete diplomatic classification of a relation's tension score.
///
/// Ordered from calmest to hottest; `Ord` follows escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TensionLevel {
    Cooperation,
    Competition,
    Confrontation,
    Crisis,
    Conflict,
}

impl TensionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TensionLevel::Cooperation => "cooperation",
            TensionLevel::Competition => "competition",
            TensionLevel::Confrontation => "confrontation",
            TensionLevel::Crisis => "crisis",
            TensionLevel::Conflict => "conflict",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_key_round_trip() {
        for id in FactionId::ALL {
            assert_eq!(FactionId::from_key(id.key()), Some(id));
        }
        assert_eq!(FactionId::from_key("atlantis"), None);
    }

    #[test]
    fn test_zone_key_round_trip() {
        for id in ZoneId::ALL {
            assert_eq!(ZoneId::from_key(id.key()), Some(id));
        }
    }

    #[test]
    fn test_season_cycle_wraps_once() {
        let mut season = Season::Spring;
        let mut wraps = 0;
        for _ in 0..4 {
            let (next, wrapped) = season.next();
            season = next;
            if wrapped {
                wraps += 1;
            }
        }
        assert_eq!(season, Season::Spring);
        assert_eq!(wraps, 1);
    }

    #[test]
    fn test_tension_level_escalation_order() {
        assert!(TensionLevel::Cooperation < TensionLevel::Competition);
        assert!(TensionLevel::Competition < TensionLevel::Confrontation);
        assert!(TensionLevel::Confrontation < TensionLevel::Crisis);
        assert!(TensionLevel::Crisis < TensionLevel::Conflict);
    }

    #[test]
    fn test_faction_id_enum_order_is_tiebreak_order() {
        // The evaluator relies on declaration order for deterministic ties
        assert!(FactionId::UnitedStates < FactionId::Russia);
        assert!(FactionId::Russia < FactionId::China);
    }
}
