//! Narrative event pool consumed by the event deck
//!
//! Events are display-side color: the pipeline draws a few per turn and
//! installs them on the state for presentation. Weights bias the draw;
//! selection itself lives in sim::event.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    IceShelfCollapse,
    ShippingBoom,
    ResearchSummit,
    BorderIncident,
    EnergyDiscovery,
    IndigenousCouncil,
    MilitaryExercise,
    DiplomaticScandal,
}

#[derive(Clone, Copy, Debug)]
pub struct EventTemplate {
    pub kind: EventKind,
    pub headline: &'static str,
    pub weight: u32,
}

pub const EVENT_POOL: [EventTemplate; 8] = [
    EventTemplate {
        kind: EventKind::IceShelfCollapse,
        headline: "Satellite imagery confirms a major ice shelf collapse",
        weight: 3,
    },
    EventTemplate {
        kind: EventKind::ShippingBoom,
        headline: "Transit bookings on polar routes hit a seasonal record",
        weight: 4,
    },
    EventTemplate {
        kind: EventKind::ResearchSummit,
        headline: "Polar research stations announce a joint field campaign",
        weight: 4,
    },
    EventTemplate {
        kind: EventKind::BorderIncident,
        headline: "Patrol vessels shadow each other across a disputed meridian",
        weight: 3,
    },
    EventTemplate {
        kind: EventKind::EnergyDiscovery,
        headline: "Survey ship reports a significant hydrocarbon find",
        weight: 2,
    },
    EventTemplate {
        kind: EventKind::IndigenousCouncil,
        headline: "Circumpolar council demands a seat at the negotiating table",
        weight: 3,
    },
    EventTemplate {
        kind: EventKind::MilitaryExercise,
        headline: "Large-scale cold weather exercise announced on short notice",
        weight: 3,
    },
    EventTemplate {
        kind: EventKind::DiplomaticScandal,
        headline: "Leaked cable sours an ongoing bilateral negotiation",
        weight: 2,
    },
];
