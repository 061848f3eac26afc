//! Optimization core: cost model, assignment solver, formation search.

pub mod assignment;
pub mod cost;
pub mod search;

pub use assignment::CostMatrix;
pub use cost::{player_slot_cost, CostContext};
pub use search::{
    optimize, optimize_with_catalog, LineupResult, LineupSlot, OptimizationReport, TOP_LINEUPS,
};
