//! Formation search: evaluate every catalog formation, rank the feasible
//! lineups, and assemble the final report.
//!
//! The per-formation matrix-build-and-solve steps share no mutable state,
//! so the catalog loop runs on rayon. Results are re-ranked afterwards in
//! canonical order (total cost ascending, catalog index as tie-break), so
//! the output is identical to serial execution.

use crate::analysis::matchup::{analyze_matchups, MatchupReport};
use crate::analysis::opponent::{analyze_opponent, OpponentAnalysis};
use crate::config::TacticalConfig;
use crate::error::{OptimizeError, Result, RosterSide};
use crate::models::formation::{default_catalog, FormationTemplate, SLOTS_PER_FORMATION};
use crate::models::player::{OpponentProfile, PlayerProfile};
use crate::models::roles::SlotCode;
use crate::optimizer::assignment::{discard_threshold, solve, CostMatrix};
use crate::optimizer::cost::{player_slot_cost, CostContext};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many ranked lineups the report retains.
pub const TOP_LINEUPS: usize = 3;

/// One filled slot of an accepted lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupSlot {
    pub player: PlayerProfile,
    pub slot: SlotCode,
    pub cost: f64,
}

/// A complete feasible lineup for one formation template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupResult {
    pub formation: String,
    /// All 11 filled slots, in template slot order.
    pub assignments: Vec<LineupSlot>,
    /// Sum of the 11 cell costs. May be negative.
    pub total_cost: f64,
}

/// Final output of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Ranked feasible lineups, best first, at most [`TOP_LINEUPS`].
    pub lineups: Vec<LineupResult>,
    pub opponent: OpponentAnalysis,
    /// Matchup analysis of the winning lineup.
    pub matchup: MatchupReport,
}

impl OptimizationReport {
    /// The canonical recommendation.
    pub fn best(&self) -> &LineupResult {
        &self.lineups[0]
    }
}

/// Run the full pipeline against the built-in formation catalog.
pub fn optimize(
    own: &[PlayerProfile],
    opponent: &[OpponentProfile],
    config: &TacticalConfig,
) -> Result<OptimizationReport> {
    optimize_with_catalog(own, opponent, default_catalog(), config)
}

/// Run the full pipeline against a caller-supplied formation catalog.
pub fn optimize_with_catalog(
    own: &[PlayerProfile],
    opponent: &[OpponentProfile],
    catalog: &[FormationTemplate],
    config: &TacticalConfig,
) -> Result<OptimizationReport> {
    if own.len() < SLOTS_PER_FORMATION {
        return Err(OptimizeError::InsufficientRoster {
            side: RosterSide::Own,
            expected: SLOTS_PER_FORMATION,
            found: own.len(),
        });
    }
    if opponent.len() < SLOTS_PER_FORMATION {
        return Err(OptimizeError::InsufficientRoster {
            side: RosterSide::Opponent,
            expected: SLOTS_PER_FORMATION,
            found: opponent.len(),
        });
    }
    // Goalkeeper exclusivity makes every formation infeasible without a
    // keeper, so bail before attempting any of them.
    if !own.iter().any(|p| p.is_goalkeeper()) {
        return Err(OptimizeError::MissingGoalkeeper);
    }

    let analysis = analyze_opponent(opponent, config);
    let shape_label = analysis.shape.label();

    let evaluated: Vec<Result<Option<LineupResult>>> = catalog
        .par_iter()
        .map(|template| evaluate_formation(template, own, opponent, &shape_label, &analysis, config))
        .collect();

    let mut accepted: Vec<(usize, LineupResult)> = Vec::new();
    for (idx, outcome) in evaluated.into_iter().enumerate() {
        match outcome? {
            Some(lineup) => {
                debug!(
                    formation = %lineup.formation,
                    total_cost = lineup.total_cost,
                    "formation candidate accepted"
                );
                accepted.push((idx, lineup));
            }
            None => {
                debug!(formation = %catalog[idx].id, "formation candidate infeasible, dropped");
            }
        }
    }

    if accepted.is_empty() {
        return Err(OptimizeError::NoFeasibleLineup);
    }

    // Canonical ranking: ascending total cost, catalog order on ties.
    accepted.sort_by(|a, b| {
        a.1.total_cost
            .partial_cmp(&b.1.total_cost)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    accepted.truncate(TOP_LINEUPS);

    let lineups: Vec<LineupResult> = accepted.into_iter().map(|(_, l)| l).collect();
    let matchup = analyze_matchups(&lineups[0], opponent, config);

    Ok(OptimizationReport {
        lineups,
        opponent: analysis,
        matchup,
    })
}

/// Evaluate one formation template. Returns `Ok(None)` when the template
/// cannot fill all 11 slots below the sentinel-discard threshold; that is
/// per-formation infeasibility, not an error.
fn evaluate_formation(
    template: &FormationTemplate,
    own: &[PlayerProfile],
    opponent: &[OpponentProfile],
    shape_label: &str,
    analysis: &OpponentAnalysis,
    config: &TacticalConfig,
) -> Result<Option<LineupResult>> {
    let ctx = CostContext {
        own_formation: &template.id,
        opponent_shape: shape_label,
        insights: &analysis.insights,
        config,
    };

    // Mirrored opponents resolved once per slot, by exact slot-code match.
    let mirrors: Vec<Option<&OpponentProfile>> = template
        .slots
        .iter()
        .map(|slot| opponent.iter().find(|o| o.slot.code == slot.code))
        .collect();

    let matrix = CostMatrix::from_fn(own.len(), SLOTS_PER_FORMATION, |row, col| {
        player_slot_cost(&own[row], &template.slots[col], mirrors[col], &ctx)
    });

    // NaN would corrupt the solver's comparisons unpredictably, so a
    // non-finite cell is a loud defect, never something to solve around.
    if let Some((row, col, value)) = matrix.first_non_finite() {
        return Err(OptimizeError::NonFiniteCost {
            player: own[row].name.clone(),
            slot: template.slots[col].code.clone(),
            value,
        });
    }

    let sentinel = config.blend.sentinel_cost;
    let padded = matrix.padded_to_square(sentinel);
    let assignment = solve(&padded);
    let threshold = discard_threshold(sentinel);

    // Keep only real-slot assignments below the discard threshold,
    // re-ordered into template slot order.
    let mut by_slot: Vec<Option<(usize, f64)>> = vec![None; SLOTS_PER_FORMATION];
    for (row, &col) in assignment.iter().enumerate() {
        if row < own.len() && col < SLOTS_PER_FORMATION {
            let cost = padded.get(row, col);
            if cost < threshold {
                by_slot[col] = Some((row, cost));
            }
        }
    }

    let mut assignments = Vec::with_capacity(SLOTS_PER_FORMATION);
    for (col, entry) in by_slot.into_iter().enumerate() {
        match entry {
            Some((row, cost)) => assignments.push(LineupSlot {
                player: own[row].clone(),
                slot: template.slots[col].clone(),
                cost,
            }),
            None => return Ok(None),
        }
    }

    let total_cost = assignments.iter().map(|a| a.cost).sum();

    Ok(Some(LineupResult {
        formation: template.id.clone(),
        assignments,
        total_cost,
    }))
}
