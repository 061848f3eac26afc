//! Centralized tactical configuration.
//!
//! Every numeric weight, penalty tier, and threshold used by the cost
//! model, opponent analysis, and matchup analyzer lives here. The
//! algorithm bodies contain no tuning constants; callers override any of
//! these by supplying their own [`TacticalConfig`].
//!
//! ## Categories
//!
//! | Category | Description |
//! |----------|-------------|
//! | Weights | Per-role-family attribute weight tables |
//! | Penalties | Role-change penalty tiers |
//! | Footedness | Flank foot-preference multipliers |
//! | Blend | Cost blend ratio, ceiling, sentinel |
//! | Opponent bias | Weakness-shift midpoint and impacts |
//! | Insights | Team-level suggestion thresholds |
//! | Matchup | Per-slot delta thresholds, impacts, category weights |
//! | Formation rules | Shape-vs-shape interaction multipliers |

use crate::models::player::AttributeSet;
use crate::models::roles::RoleFamily;
use serde::{Deserialize, Serialize};

/// Complete tactical configuration threaded through one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TacticalConfig {
    pub weights: RoleWeightTables,
    pub penalties: RolePenaltyTiers,
    pub footedness: FootednessAdjustments,
    pub blend: CostBlend,
    pub opponent_bias: OpponentBias,
    pub insights: InsightThresholds,
    pub matchup: MatchupConfig,
    pub formation_rules: FormationInteractionRules,
}

// ============================================================================
// Attribute weights
// ============================================================================

/// The attribute (or composite) a role weight applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Quality,
    Speed,
    Stamina,
    Strength,
    Balance,
    Agility,
    Jumping,
    Heading,
    Aerial,
    Passing,
    Vision,
    FirstTouch,
    Finishing,
    Tackling,
    Positioning,
    PressResistance,
    OffBall,
    /// Mean of jumping, heading and aerial.
    AerialComposite,
}

impl AttributeKind {
    /// Read this attribute from a player's attribute set (0-100 scale).
    pub fn value(&self, attrs: &AttributeSet) -> f64 {
        let v = match self {
            AttributeKind::Quality => attrs.quality,
            AttributeKind::Speed => attrs.speed,
            AttributeKind::Stamina => attrs.stamina,
            AttributeKind::Strength => attrs.strength,
            AttributeKind::Balance => attrs.balance,
            AttributeKind::Agility => attrs.agility,
            AttributeKind::Jumping => attrs.jumping,
            AttributeKind::Heading => attrs.heading,
            AttributeKind::Aerial => attrs.aerial,
            AttributeKind::Passing => attrs.passing,
            AttributeKind::Vision => attrs.vision,
            AttributeKind::FirstTouch => attrs.first_touch,
            AttributeKind::Finishing => attrs.finishing,
            AttributeKind::Tackling => attrs.tackling,
            AttributeKind::Positioning => attrs.positioning,
            AttributeKind::PressResistance => attrs.press_resistance,
            AttributeKind::OffBall => attrs.off_ball,
            AttributeKind::AerialComposite => attrs.aerial_composite(),
        };
        v as f64
    }
}

/// One (attribute, weight) entry of a role weight table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AttributeWeight {
    pub attribute: AttributeKind,
    pub weight: f64,
}

fn w(attribute: AttributeKind, weight: f64) -> AttributeWeight {
    AttributeWeight { attribute, weight }
}

/// Per-role-family attribute weight tables. Weights in each table sum to 1,
/// so the resulting fitness lands in `[0, 1]` for 0-100 attributes.
///
/// Left/right fullbacks share one table, as do the two winger families.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWeightTables {
    pub gk: Vec<AttributeWeight>,
    pub cb: Vec<AttributeWeight>,
    pub fullback: Vec<AttributeWeight>,
    pub dm: Vec<AttributeWeight>,
    pub cm: Vec<AttributeWeight>,
    pub am: Vec<AttributeWeight>,
    pub winger: Vec<AttributeWeight>,
    pub st: Vec<AttributeWeight>,
}

impl RoleWeightTables {
    pub fn for_role(&self, role: RoleFamily) -> &[AttributeWeight] {
        match role {
            RoleFamily::GK => &self.gk,
            RoleFamily::CB => &self.cb,
            RoleFamily::LB | RoleFamily::RB => &self.fullback,
            RoleFamily::DM => &self.dm,
            RoleFamily::CM => &self.cm,
            RoleFamily::AM => &self.am,
            RoleFamily::LW | RoleFamily::RW => &self.winger,
            RoleFamily::ST => &self.st,
        }
    }
}

impl Default for RoleWeightTables {
    fn default() -> Self {
        use AttributeKind::*;
        Self {
            gk: vec![
                w(Quality, 0.40),
                w(Agility, 0.20),
                w(Balance, 0.15),
                w(Positioning, 0.15),
                w(Jumping, 0.10),
            ],
            cb: vec![
                w(Quality, 0.25),
                w(Strength, 0.20),
                w(AerialComposite, 0.20),
                w(Tackling, 0.15),
                w(Positioning, 0.20),
            ],
            fullback: vec![
                w(Quality, 0.20),
                w(Speed, 0.25),
                w(Stamina, 0.20),
                w(Tackling, 0.15),
                w(Passing, 0.10),
                w(Agility, 0.10),
            ],
            dm: vec![
                w(Quality, 0.20),
                w(Tackling, 0.25),
                w(Passing, 0.20),
                w(Stamina, 0.15),
                w(Positioning, 0.10),
                w(PressResistance, 0.10),
            ],
            cm: vec![
                w(Quality, 0.20),
                w(Passing, 0.20),
                w(Stamina, 0.20),
                w(Vision, 0.15),
                w(FirstTouch, 0.10),
                w(PressResistance, 0.15),
            ],
            am: vec![
                w(Quality, 0.25),
                w(Passing, 0.20),
                w(Vision, 0.20),
                w(FirstTouch, 0.15),
                w(Finishing, 0.10),
                w(OffBall, 0.10),
            ],
            winger: vec![
                w(Quality, 0.20),
                w(Speed, 0.25),
                w(Agility, 0.20),
                w(Finishing, 0.15),
                w(OffBall, 0.10),
                w(Balance, 0.10),
            ],
            st: vec![
                w(Quality, 0.25),
                w(Finishing, 0.25),
                w(Positioning, 0.15),
                w(AerialComposite, 0.15),
                w(OffBall, 0.10),
                w(Strength, 0.10),
            ],
        }
    }
}

// ============================================================================
// Role-change penalties
// ============================================================================

/// Penalty tiers for fielding a player outside their native role family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePenaltyTiers {
    /// Friendly transitions (fullback<->CB, CM<->DM, CM<->AM, winger<->ST,
    /// LB<->RB, LW<->RW).
    pub friendly: f64,
    /// Hostile transitions (CB<->ST, CB<->winger, DM<->ST).
    pub hostile: f64,
    /// Every other mismatch.
    pub other: f64,
}

impl Default for RolePenaltyTiers {
    fn default() -> Self {
        Self {
            friendly: 0.15,
            hostile: 0.45,
            other: 0.30,
        }
    }
}

// ============================================================================
// Footedness
// ============================================================================

/// Multiplicative foot-preference factors, all in `[0.85, 1.0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootednessAdjustments {
    /// Fullback on the matching flank (right foot at right back).
    pub fullback_match: f64,
    /// Two-footed (or unknown) player at fullback.
    pub fullback_both: f64,
    /// Fullback on the wrong flank.
    pub fullback_mismatch: f64,
    /// Winger with the inverted foot (left foot on the right wing).
    pub winger_inverted: f64,
    /// Two-footed (or unknown) player on the wing.
    pub winger_both: f64,
    /// Winger with the natural foot.
    pub winger_natural: f64,
}

impl Default for FootednessAdjustments {
    fn default() -> Self {
        Self {
            fullback_match: 1.0,
            fullback_both: 0.95,
            fullback_mismatch: 0.90,
            winger_inverted: 1.0,
            winger_both: 0.975,
            winger_natural: 0.95,
        }
    }
}

// ============================================================================
// Cost blend
// ============================================================================

/// Blend ratio and bounds of the final cost expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBlend {
    /// Weight of the fitness-based term vs the legacy differential signal.
    pub advanced_weight: f64,
    /// Scalar applied to the fitness-based term.
    pub bias_multiplier: f64,
    /// Upper clamp of the final cost. Favorable (negative) costs are
    /// deliberately left unclamped.
    pub cost_ceiling: f64,
    /// Cost assigned to impossible pairings and padding cells. Must stay
    /// orders of magnitude above the normal cost range.
    pub sentinel_cost: f64,
}

impl Default for CostBlend {
    fn default() -> Self {
        Self {
            advanced_weight: 0.7,
            bias_multiplier: 1.0,
            cost_ceiling: 2.5,
            sentinel_cost: 1.0e6,
        }
    }
}

// ============================================================================
// Opponent-weakness bias
// ============================================================================

/// How far-below-midpoint opponent composites shift costs downward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentBias {
    /// Neutral composite value on the 0-100 scale. Also the documented
    /// default for empty opponent role groups.
    pub neutral_midpoint: f64,
    /// Impact of backline weakness on attacking-role costs.
    pub backline_impact: f64,
    /// Impact of midfield weakness on midfield-role costs.
    pub midfield_impact: f64,
    /// Impact of attack weakness on defender-role costs.
    pub attack_impact: f64,
}

impl Default for OpponentBias {
    fn default() -> Self {
        Self {
            neutral_midpoint: 50.0,
            backline_impact: 0.4,
            midfield_impact: 0.4,
            attack_impact: 0.3,
        }
    }
}

// ============================================================================
// Team-level insight thresholds
// ============================================================================

/// Thresholds driving opponent-analysis suggestion strings (0-100 scale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Below this, the backline is slow.
    pub backline_pace_max: f64,
    /// Below this, the backline is weak in the air.
    pub backline_aerial_max: f64,
    /// Below this, the midfield lacks endurance.
    pub midfield_stamina_max: f64,
    /// Below this, the midfield presses poorly.
    pub midfield_press_max: f64,
    /// Above this, the attack has dangerous pace.
    pub attack_speed_min: f64,
    /// Above this, the attack finishes clinically.
    pub attack_finishing_min: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            backline_pace_max: 70.0,
            backline_aerial_max: 65.0,
            midfield_stamina_max: 70.0,
            midfield_press_max: 65.0,
            attack_speed_min: 85.0,
            attack_finishing_min: 85.0,
        }
    }
}

// ============================================================================
// Matchup analyzer configuration
// ============================================================================

/// Per-slot matchup detection thresholds (normalized 0-1 deltas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupThresholds {
    pub pace: f64,
    pub aerial: f64,
    pub technical: f64,
    pub strength: f64,
    pub stamina: f64,
}

impl Default for MatchupThresholds {
    fn default() -> Self {
        Self {
            pace: 0.12,
            aerial: 0.10,
            technical: 0.10,
            strength: 0.10,
            stamina: 0.12,
        }
    }
}

/// Impact multipliers for different delta categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaImpact {
    pub speed: f64,
    pub stamina: f64,
    pub jumping: f64,
    pub quality: f64,
    pub strength: f64,
}

impl Default for DeltaImpact {
    fn default() -> Self {
        Self {
            speed: 1.2,
            stamina: 1.0,
            jumping: 0.9,
            quality: 1.1,
            strength: 1.0,
        }
    }
}

/// Weights applied to accumulated category scores before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub wings: f64,
    pub midfield: f64,
    pub aerial: f64,
    pub defense: f64,
    pub creation: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            wings: 1.2,
            midfield: 1.0,
            aerial: 0.9,
            defense: 1.0,
            creation: 1.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchupConfig {
    pub thresholds: MatchupThresholds,
    pub impact: DeltaImpact,
    pub category_weights: CategoryWeights,
}

// ============================================================================
// Formation interaction
// ============================================================================

/// One shape-interaction rule. `role: None` applies to every role family;
/// a role-scoped rule beats a formation-pair rule for that family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationInteractionRule {
    pub own: String,
    pub opponent: String,
    #[serde(default)]
    pub role: Option<RoleFamily>,
    pub multiplier: f64,
}

/// Multiplier table keyed by (own formation id, opponent shape label,
/// optional role family). Undefined pairs resolve to 1.0; results are
/// clamped to `[0.9, 1.1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationInteractionRules {
    pub rules: Vec<FormationInteractionRule>,
}

impl FormationInteractionRules {
    pub fn multiplier(&self, own: &str, opponent: &str, role: RoleFamily) -> f64 {
        let mut pair_rule = None;
        for rule in &self.rules {
            if rule.own != own || rule.opponent != opponent {
                continue;
            }
            match rule.role {
                Some(r) if r == role => return rule.multiplier.clamp(0.9, 1.1),
                Some(_) => {}
                None => pair_rule = Some(rule.multiplier),
            }
        }
        pair_rule.unwrap_or(1.0).clamp(0.9, 1.1)
    }
}

impl Default for FormationInteractionRules {
    fn default() -> Self {
        let rule = |own: &str, opponent: &str, multiplier: f64| FormationInteractionRule {
            own: own.to_string(),
            opponent: opponent.to_string(),
            role: None,
            multiplier,
        };
        Self {
            rules: vec![
                rule("4-3-3", "4-4-2", 0.95),
                rule("4-3-3", "3-5-2", 1.05),
                rule("4-4-2", "4-3-3", 1.05),
                rule("3-5-2", "4-3-3", 0.95),
            ],
        }
    }
}
