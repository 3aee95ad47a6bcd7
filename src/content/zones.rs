//! Zone catalog - the twelve contested Arctic territories
//!
//! Starting controllers reflect the pre-game status quo; several zones
//! start unclaimed and are the early objects of competition.

use crate::core::types::{FactionId, ZoneId};

#[derive(Clone, Copy, Debug)]
pub struct ZoneSpec {
    pub id: ZoneId,
    pub name: &'static str,
    pub controller: Option<FactionId>,
}

pub const ZONE_CATALOG: [ZoneSpec; 12] = [
    ZoneSpec {
        id: ZoneId::BarentsSea,
        name: "Barents Sea",
        controller: Some(FactionId::Norway),
    },
    ZoneSpec {
        id: ZoneId::KaraSea,
        name: "Kara Sea",
        controller: Some(FactionId::Russia),
    },
    ZoneSpec {
        id: ZoneId::LaptevSea,
        name: "Laptev Sea",
        controller: Some(FactionId::Russia),
    },
    ZoneSpec {
        id: ZoneId::EastSiberianSea,
        name: "East Siberian Sea",
        controller: None,
    },
    ZoneSpec {
        id: ZoneId::ChukchiSea,
        name: "Chukchi Sea",
        controller: Some(FactionId::UnitedStates),
    },
    ZoneSpec {
        id: ZoneId::BeaufortSea,
        name: "Beaufort Sea",
        controller: Some(FactionId::Canada),
    },
    ZoneSpec {
        id: ZoneId::NorthwestPassage,
        name: "Northwest Passage",
        controller: Some(FactionId::Canada),
    },
    ZoneSpec {
        id: ZoneId::GreenlandCoast,
        name: "Greenland Coast",
        controller: Some(FactionId::Denmark),
    },
    ZoneSpec {
        id: ZoneId::Svalbard,
        name: "Svalbard",
        controller: Some(FactionId::Norway),
    },
    ZoneSpec {
        id: ZoneId::CentralArcticBasin,
        name: "Central Arctic Basin",
        controller: None,
    },
    ZoneSpec {
        id: ZoneId::BeringStrait,
        name: "Bering Strait",
        controller: None,
    },
    ZoneSpec {
        id: ZoneId::NorthernSeaRoute,
        name: "Northern Sea Route",
        controller: Some(FactionId::Russia),
    },
];

pub fn zone_spec(id: ZoneId) -> &'static ZoneSpec {
    let spec = &ZONE_CATALOG[id as usize];
    debug_assert_eq!(spec.id, id);
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_zone_once() {
        for id in ZoneId::ALL {
            assert_eq!(zone_spec(id).id, id);
        }
        assert_eq!(ZONE_CATALOG.len(), ZoneId::ALL.len());
    }

    #[test]
    fn test_some_zones_start_unclaimed() {
        assert!(ZONE_CATALOG.iter().any(|z| z.controller.is_none()));
    }
}
