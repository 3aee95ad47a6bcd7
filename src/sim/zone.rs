//! Zone - a discrete unit of Arctic territory with a single controller

use serde::{Deserialize, Serialize};

use crate::core::types::{FactionId, ZoneId};

/// A territorial unit. Exactly one controller at a time; ownership only
/// changes inside the turn pipeline, never mid-turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// `None` = unclaimed
    pub controller: Option<FactionId>,
}

impl Zone {
    pub fn is_unclaimed(&self) -> bool {
        self.controller.is_none()
    }
}
