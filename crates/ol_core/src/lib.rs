//! # ol_core - Deterministic Lineup Optimization Core
//!
//! This library recommends an optimal player-to-position lineup against a
//! known opponent, given two rosters of normalized player attributes.
//!
//! ## Features
//! - Opponent-aware cost model over every (player, slot) pairing
//! - Exact minimum-cost assignment (Kuhn-Munkres, O(n^3))
//! - Multi-formation search with deterministic ranking
//! - Opponent insight aggregation and per-slot matchup analysis
//! - 100% deterministic: identical inputs produce identical reports
//!
//! The core performs no I/O and holds no state between runs; ingestion
//! and presentation are the caller's concern.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod optimizer;

// Re-export the main pipeline surface
pub use analysis::{
    analyze_matchups, analyze_opponent, MatchupCategory, MatchupReport, OpponentAnalysis,
    OpponentInsights,
};
pub use api::optimize_lineup_json;
pub use config::TacticalConfig;
pub use error::{OptimizeError, Result, RosterSide};
pub use models::{
    default_catalog, AttributeSet, Foot, FormationShape, FormationTemplate, OpponentProfile,
    PlayerProfile, RoleBucket, RoleFamily, SlotCode, SLOTS_PER_FORMATION,
};
pub use optimizer::{optimize, optimize_with_catalog, LineupResult, LineupSlot, OptimizationReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Costs closer than this are considered equal when comparing runs.
pub const COST_EPSILON: f64 = 1e-9;
