//! Data model: players, roles, slot codes, formation templates.

pub mod formation;
pub mod player;
pub mod roles;

pub use formation::{default_catalog, FormationShape, FormationTemplate, SLOTS_PER_FORMATION};
pub use player::{AttributeSet, Foot, OpponentProfile, PlayerProfile};
pub use roles::{RoleBucket, RoleFamily, SlotCode, SlotSide};
