//! Player data for the lineup optimization core.
//!
//! # Boundary Contract
//! - Rosters arrive from the ingestion collaborator already normalized:
//!   attributes are numeric and clamped to 0-100, missing values default
//!   to zero. [`AttributeSet::clamped`] re-applies the clamp defensively
//!   but the core never guesses at missing data.
//! - Profiles are immutable snapshots for the duration of one run.

use super::roles::{RoleFamily, SlotCode};
use serde::{Deserialize, Serialize};

/// Preferred foot of a player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Foot {
    Left,
    Right,
    Both,
    #[default]
    Unknown,
}

/// The 17 normalized attributes carried by every roster entry, 0-100 each.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AttributeSet {
    pub quality: f32,
    pub speed: f32,
    pub stamina: f32,
    pub strength: f32,
    pub balance: f32,
    pub agility: f32,
    pub jumping: f32,
    pub heading: f32,
    pub aerial: f32,
    pub passing: f32,
    pub vision: f32,
    pub first_touch: f32,
    pub finishing: f32,
    pub tackling: f32,
    pub positioning: f32,
    pub press_resistance: f32,
    pub off_ball: f32,
}

fn clamp_attr(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

impl AttributeSet {
    /// Return a copy with every field clamped to the 0-100 contract range.
    pub fn clamped(&self) -> AttributeSet {
        AttributeSet {
            quality: clamp_attr(self.quality),
            speed: clamp_attr(self.speed),
            stamina: clamp_attr(self.stamina),
            strength: clamp_attr(self.strength),
            balance: clamp_attr(self.balance),
            agility: clamp_attr(self.agility),
            jumping: clamp_attr(self.jumping),
            heading: clamp_attr(self.heading),
            aerial: clamp_attr(self.aerial),
            passing: clamp_attr(self.passing),
            vision: clamp_attr(self.vision),
            first_touch: clamp_attr(self.first_touch),
            finishing: clamp_attr(self.finishing),
            tackling: clamp_attr(self.tackling),
            positioning: clamp_attr(self.positioning),
            press_resistance: clamp_attr(self.press_resistance),
            off_ball: clamp_attr(self.off_ball),
        }
    }

    /// Mean of jumping, heading and aerial ability.
    pub fn aerial_composite(&self) -> f32 {
        (self.jumping + self.heading + self.aerial) / 3.0
    }

    /// All fields set to the same value. Used for neutral (midpoint)
    /// stand-ins and test fixtures.
    pub fn uniform(value: f32) -> AttributeSet {
        AttributeSet {
            quality: value,
            speed: value,
            stamina: value,
            strength: value,
            balance: value,
            agility: value,
            jumping: value,
            heading: value,
            aerial: value,
            passing: value,
            vision: value,
            first_touch: value,
            finishing: value,
            tackling: value,
            positioning: value,
            press_resistance: value,
            off_ball: value,
        }
    }
}

/// One own-roster entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerProfile {
    pub id: u32,
    pub name: String,
    /// The role family the player natively plays.
    pub native_role: RoleFamily,
    #[serde(default)]
    pub foot: Foot,
    pub attributes: AttributeSet,
}

impl PlayerProfile {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        native_role: RoleFamily,
        foot: Foot,
        attributes: AttributeSet,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            native_role,
            foot,
            attributes: attributes.clamped(),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.native_role.is_goalkeeper()
    }
}

/// One opponent-roster entry: a profile anchored to the formation slot the
/// opponent occupies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpponentProfile {
    pub profile: PlayerProfile,
    pub slot: SlotCode,
}

impl OpponentProfile {
    pub fn new(profile: PlayerProfile, slot_code: &str) -> Self {
        Self {
            profile,
            slot: SlotCode::parse(slot_code),
        }
    }
}
