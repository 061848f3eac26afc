//! Cost model: scores one (player, slot) pairing.
//!
//! The cost function is pure: the same inputs always produce the same
//! cost, which the solver's determinism contract depends on. All tuning
//! numbers come from [`TacticalConfig`]; nothing is hard-coded here.
//!
//! Lower is better. Negative costs mark favorable pairings and are
//! deliberately unclamped, so strongly favorable matchups keep rewarding
//! the search; the upper bound is clamped to keep worst-case costs inside
//! a known range.

use crate::analysis::opponent::OpponentInsights;
use crate::config::TacticalConfig;
use crate::models::player::{Foot, OpponentProfile, PlayerProfile};
use crate::models::roles::{RoleBucket, RoleFamily, SlotCode};

/// Shared per-run context for cost evaluation.
#[derive(Debug, Clone, Copy)]
pub struct CostContext<'a> {
    /// Id of the own formation template under evaluation.
    pub own_formation: &'a str,
    /// Inferred opponent shape label (e.g. "4-3-3").
    pub opponent_shape: &'a str,
    pub insights: &'a OpponentInsights,
    pub config: &'a TacticalConfig,
}

/// Score one (player, slot) pairing against the mirrored opponent.
///
/// Goalkeeper exclusivity dominates everything: a non-keeper in the keeper
/// slot (or a keeper outfield) returns the sentinel cost directly, which
/// the solver can never prefer over any real alternative.
pub fn player_slot_cost(
    player: &PlayerProfile,
    slot: &SlotCode,
    mirror: Option<&OpponentProfile>,
    ctx: &CostContext,
) -> f64 {
    let cfg = ctx.config;
    let role = slot.role;

    if role.is_goalkeeper() != player.native_role.is_goalkeeper() {
        return cfg.blend.sentinel_cost;
    }

    let fitness = role_fitness(player, role, ctx);
    let foot_factor = footedness_factor(player.foot, role, ctx);
    let legacy = -opponent_differential(player, mirror);
    let bias_shift = weakness_shift(role, ctx);
    let penalty = role_change_penalty(player.native_role, role, ctx);
    let formation_mult =
        cfg.formation_rules
            .multiplier(ctx.own_formation, ctx.opponent_shape, role);

    let w = cfg.blend.advanced_weight;
    let raw = (1.0 - w) * legacy
        + w * (0.5 - fitness * foot_factor) * cfg.blend.bias_multiplier
        + bias_shift
        + penalty;

    (raw * formation_mult).min(cfg.blend.cost_ceiling)
}

/// Weighted role fitness in `[0, 1]`.
pub fn role_fitness(player: &PlayerProfile, role: RoleFamily, ctx: &CostContext) -> f64 {
    ctx.config
        .weights
        .for_role(role)
        .iter()
        .map(|entry| entry.weight * entry.attribute.value(&player.attributes) / 100.0)
        .sum()
}

/// Multiplicative footedness factor in `[0.85, 1.0]`.
///
/// Fullback slots favor the same-side foot; winger slots slightly favor
/// the inverted foot (a left-footed right winger cuts inside); central
/// slots take no adjustment. `Unknown` is treated like `Both`.
pub fn footedness_factor(foot: Foot, role: RoleFamily, ctx: &CostContext) -> f64 {
    let f = &ctx.config.footedness;
    match role {
        RoleFamily::RB => match foot {
            Foot::Right => f.fullback_match,
            Foot::Left => f.fullback_mismatch,
            Foot::Both | Foot::Unknown => f.fullback_both,
        },
        RoleFamily::LB => match foot {
            Foot::Left => f.fullback_match,
            Foot::Right => f.fullback_mismatch,
            Foot::Both | Foot::Unknown => f.fullback_both,
        },
        RoleFamily::RW => match foot {
            Foot::Left => f.winger_inverted,
            Foot::Right => f.winger_natural,
            Foot::Both | Foot::Unknown => f.winger_both,
        },
        RoleFamily::LW => match foot {
            Foot::Right => f.winger_inverted,
            Foot::Left => f.winger_natural,
            Foot::Both | Foot::Unknown => f.winger_both,
        },
        _ => 1.0,
    }
}

/// Centered-at-zero signal comparing the player against the mirrored
/// opponent over quality, pace, aerial ability and stamina. Positive when
/// the own player is better; 0 without a mirror.
pub fn opponent_differential(player: &PlayerProfile, mirror: Option<&OpponentProfile>) -> f64 {
    let Some(opponent) = mirror else {
        return 0.0;
    };
    let own = &player.attributes;
    let opp = &opponent.profile.attributes;

    let diffs = [
        (own.quality - opp.quality) as f64,
        (own.speed - opp.speed) as f64,
        (own.aerial_composite() - opp.aerial_composite()) as f64,
        (own.stamina - opp.stamina) as f64,
    ];
    diffs.iter().sum::<f64>() / (diffs.len() as f64 * 100.0)
}

/// Opponent-weakness bias shift, always <= 0: the further the relevant
/// opponent composite falls below the neutral midpoint, the cheaper the
/// pairing gets. Strong opponents never push the cost up through this
/// term.
pub fn weakness_shift(role: RoleFamily, ctx: &CostContext) -> f64 {
    let bias = &ctx.config.opponent_bias;
    let insights = ctx.insights;

    let (composite, impact) = match role.bucket() {
        RoleBucket::Attacker => (
            (insights.backline_pace + insights.backline_aerial) / 2.0,
            bias.backline_impact,
        ),
        RoleBucket::Midfielder => (
            (insights.midfield_stamina + insights.midfield_press) / 2.0,
            bias.midfield_impact,
        ),
        RoleBucket::Defender => (
            (insights.attack_speed + insights.attack_finishing) / 2.0,
            bias.attack_impact,
        ),
        RoleBucket::Goalkeeper => return 0.0,
    };

    let shortfall = (bias.neutral_midpoint - composite).max(0.0);
    -impact * shortfall / 100.0
}

/// Penalty for fielding a player outside their native role family.
pub fn role_change_penalty(native: RoleFamily, target: RoleFamily, ctx: &CostContext) -> f64 {
    use RoleFamily::*;
    let tiers = &ctx.config.penalties;

    if native == target {
        return 0.0;
    }

    let pair = |a: RoleFamily, b: RoleFamily| {
        (native == a && target == b) || (native == b && target == a)
    };

    let friendly = pair(LB, CB)
        || pair(RB, CB)
        || pair(LB, RB)
        || pair(CM, DM)
        || pair(CM, AM)
        || pair(LW, ST)
        || pair(RW, ST)
        || pair(LW, RW);
    if friendly {
        return tiers.friendly;
    }

    let hostile = pair(CB, ST) || pair(CB, LW) || pair(CB, RW) || pair(DM, ST);
    if hostile {
        return tiers.hostile;
    }

    tiers.other
}
