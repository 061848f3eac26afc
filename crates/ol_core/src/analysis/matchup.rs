//! Post-hoc matchup analysis of the winning lineup.
//!
//! Compares every assigned player against the opponent occupying the
//! mirrored slot, raises per-slot insight strings when a delta clears its
//! role-specific threshold, and accumulates category scores into a ranked
//! tactical suggestion.

use crate::config::TacticalConfig;
use crate::models::player::{AttributeSet, OpponentProfile};
use crate::models::roles::RoleFamily;
use crate::optimizer::search::LineupResult;
use serde::{Deserialize, Serialize};

/// Tactical categories the analyzer scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchupCategory {
    Wings,
    Midfield,
    Aerial,
    Defense,
    Creation,
}

impl MatchupCategory {
    pub const ALL: [MatchupCategory; 5] = [
        MatchupCategory::Wings,
        MatchupCategory::Midfield,
        MatchupCategory::Aerial,
        MatchupCategory::Defense,
        MatchupCategory::Creation,
    ];

    /// Fixed suggestion phrase for this category.
    pub fn phrase(&self) -> &'static str {
        match self {
            MatchupCategory::Wings => "Attack down the flanks with pace",
            MatchupCategory::Midfield => "Control the tempo through midfield",
            MatchupCategory::Aerial => "Attack crosses and set pieces",
            MatchupCategory::Defense => "Win the physical duels and press aggressively",
            MatchupCategory::Creation => "Play through the creative channels",
        }
    }
}

/// Matchup analysis output: per-slot insights, ranked suggestions, and the
/// single best recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupReport {
    pub insights: Vec<String>,
    pub suggestions: Vec<String>,
    pub best_suggestion: String,
}

/// Normalized attribute deltas for one mirrored pairing, own minus
/// opponent, on a 0-1 scale.
#[derive(Debug, Clone, Copy)]
struct SlotDeltas {
    pace: f64,
    stamina: f64,
    strength: f64,
    aerial: f64,
    technical: f64,
}

fn slot_deltas(own: &AttributeSet, opp: &AttributeSet) -> SlotDeltas {
    let technical_own = (own.quality + own.first_touch + own.press_resistance) as f64 / 3.0;
    let pressing_opp = (opp.tackling + opp.positioning) as f64 / 2.0;
    SlotDeltas {
        pace: (own.speed - opp.speed) as f64 / 100.0,
        stamina: (own.stamina - opp.stamina) as f64 / 100.0,
        strength: (own.strength - opp.strength) as f64 / 100.0,
        aerial: (own.aerial_composite() - opp.aerial_composite()) as f64 / 100.0,
        technical: (technical_own - pressing_opp) / 100.0,
    }
}

/// Analyze the winning lineup against the opponent roster.
///
/// A missing mirrored opponent is not an error: the pairing is evaluated
/// against a neutral midpoint stand-in.
pub fn analyze_matchups(
    lineup: &LineupResult,
    opponent: &[OpponentProfile],
    config: &TacticalConfig,
) -> MatchupReport {
    let t = &config.matchup.thresholds;
    let impact = &config.matchup.impact;
    let neutral = AttributeSet::uniform(config.opponent_bias.neutral_midpoint as f32);

    let mut insights = Vec::new();
    let mut scores = [0.0_f64; 5];

    for entry in &lineup.assignments {
        let mirror = opponent.iter().find(|o| o.slot.code == entry.slot.code);
        let opp_attrs = mirror.map(|o| o.profile.attributes).unwrap_or(neutral);
        let opp_name = mirror.map(|o| o.profile.name.as_str()).unwrap_or("their marker");

        let d = slot_deltas(&entry.player.attributes, &opp_attrs);
        let role = entry.slot.role;
        let own_name = entry.player.name.as_str();

        match role {
            RoleFamily::LW | RoleFamily::RW | RoleFamily::LB | RoleFamily::RB => {
                if d.pace > t.pace {
                    insights.push(format!(
                        "{} holds a wing advantage in pace over {} at {}",
                        own_name, opp_name, entry.slot.code
                    ));
                }
                if d.aerial > t.aerial {
                    insights.push(format!(
                        "{} wins the aerial battle against {} at {}",
                        own_name, opp_name, entry.slot.code
                    ));
                }
            }
            RoleFamily::CM | RoleFamily::AM => {
                if d.stamina > t.stamina {
                    insights.push(format!(
                        "{} can outrun {} in midfield",
                        own_name, opp_name
                    ));
                }
                if d.technical > t.technical {
                    insights.push(format!(
                        "{} has the technical edge over {}",
                        own_name, opp_name
                    ));
                }
            }
            RoleFamily::DM => {
                if d.stamina > t.stamina {
                    insights.push(format!(
                        "{} can outrun {} in midfield",
                        own_name, opp_name
                    ));
                }
                if d.technical > t.technical {
                    insights.push(format!(
                        "{} has the technical edge over {}",
                        own_name, opp_name
                    ));
                }
                if d.strength > t.strength {
                    insights.push(format!(
                        "{} brings a strength edge in the holding role against {}",
                        own_name, opp_name
                    ));
                }
            }
            RoleFamily::ST => {
                if d.pace > t.pace || d.aerial > t.aerial {
                    insights.push(format!(
                        "{} finds a finishing lane against {}",
                        own_name, opp_name
                    ));
                }
            }
            RoleFamily::GK | RoleFamily::CB => {}
        }

        // Category accumulation: positive delta parts only, scaled by the
        // per-attribute impact multipliers.
        if matches!(
            role,
            RoleFamily::LW | RoleFamily::RW | RoleFamily::LB | RoleFamily::RB
        ) {
            scores[0] += d.pace.max(0.0) * impact.speed;
        }
        if role.is_central_midfield() {
            scores[1] += d.stamina.max(0.0) * impact.stamina;
        }
        if role != RoleFamily::GK {
            scores[2] += d.aerial.max(0.0) * impact.jumping;
        }
        if matches!(role, RoleFamily::CB | RoleFamily::DM) {
            scores[3] += d.strength.max(0.0) * impact.strength;
        }
        if matches!(role, RoleFamily::CM | RoleFamily::AM | RoleFamily::ST) {
            scores[4] += d.technical.max(0.0) * impact.quality;
        }
    }

    let weights = &config.matchup.category_weights;
    let weighted = [
        scores[0] * weights.wings,
        scores[1] * weights.midfield,
        scores[2] * weights.aerial,
        scores[3] * weights.defense,
        scores[4] * weights.creation,
    ];

    // Rank categories by weighted score, descending; enum order breaks ties.
    let mut ranked: Vec<(MatchupCategory, f64)> = MatchupCategory::ALL
        .iter()
        .copied()
        .zip(weighted.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let suggestions: Vec<String> = ranked
        .iter()
        .take(2)
        .map(|(cat, _)| cat.phrase().to_string())
        .collect();
    let best_suggestion = suggestions
        .first()
        .cloned()
        .unwrap_or_else(|| "Maintain tactical discipline and wait for opportunities".to_string());

    if insights.is_empty() {
        insights.push("Evenly matched across all positions".to_string());
    }

    MatchupReport {
        insights,
        suggestions,
        best_suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{Foot, PlayerProfile};
    use crate::models::roles::SlotCode;
    use crate::optimizer::search::LineupSlot;

    fn lineup_with(player: PlayerProfile, slot: &str) -> LineupResult {
        LineupResult {
            formation: "4-3-3".to_string(),
            assignments: vec![LineupSlot {
                player,
                slot: SlotCode::parse(slot),
                cost: 0.0,
            }],
            total_cost: 0.0,
        }
    }

    fn midpoint_opponent(slot: &str) -> OpponentProfile {
        OpponentProfile::new(
            PlayerProfile::new(
                99,
                "Mirror",
                crate::models::roles::RoleFamily::CM,
                Foot::Right,
                AttributeSet::uniform(50.0),
            ),
            slot,
        )
    }

    #[test]
    fn test_fast_winger_raises_wing_advantage() {
        let config = TacticalConfig::default();
        let mut attrs = AttributeSet::uniform(50.0);
        attrs.speed = 66.0; // 16 points past a 50-rated marker, threshold 12
        let winger = PlayerProfile::new(
            1,
            "Quick Winger",
            crate::models::roles::RoleFamily::LW,
            Foot::Right,
            attrs,
        );

        let report = analyze_matchups(
            &lineup_with(winger, "11L"),
            &[midpoint_opponent("11L")],
            &config,
        );
        assert!(
            report.insights.iter().any(|i| i.contains("wing advantage")),
            "insights: {:?}",
            report.insights
        );
        assert_eq!(report.best_suggestion, MatchupCategory::Wings.phrase());
    }

    #[test]
    fn test_below_threshold_edge_stays_silent() {
        let config = TacticalConfig::default();
        let mut attrs = AttributeSet::uniform(50.0);
        attrs.speed = 58.0; // 8 points, below the 12-point threshold
        let winger = PlayerProfile::new(
            1,
            "Modest Winger",
            crate::models::roles::RoleFamily::LW,
            Foot::Right,
            attrs,
        );

        let report = analyze_matchups(
            &lineup_with(winger, "11L"),
            &[midpoint_opponent("11L")],
            &config,
        );
        assert_eq!(report.insights, vec!["Evenly matched across all positions"]);
    }

    #[test]
    fn test_missing_mirror_is_neutral_not_error() {
        let config = TacticalConfig::default();
        let mut attrs = AttributeSet::uniform(50.0);
        attrs.speed = 70.0;
        let winger = PlayerProfile::new(
            1,
            "Unmarked Winger",
            crate::models::roles::RoleFamily::RW,
            Foot::Left,
            attrs,
        );

        // Opponent roster has no entry at 11R: deltas run against the
        // midpoint stand-in.
        let report = analyze_matchups(
            &lineup_with(winger, "11R"),
            &[midpoint_opponent("9")],
            &config,
        );
        assert!(report.insights.iter().any(|i| i.contains("their marker")));
    }

    #[test]
    fn test_holding_mid_checks_strength_edge() {
        let config = TacticalConfig::default();
        let mut attrs = AttributeSet::uniform(50.0);
        attrs.strength = 65.0;
        let anchor = PlayerProfile::new(
            1,
            "Anchor",
            crate::models::roles::RoleFamily::DM,
            Foot::Right,
            attrs,
        );

        let report = analyze_matchups(
            &lineup_with(anchor, "6"),
            &[midpoint_opponent("6")],
            &config,
        );
        assert!(report
            .insights
            .iter()
            .any(|i| i.contains("strength edge in the holding role")));
    }

    #[test]
    fn test_suggestions_are_two_ranked_phrases() {
        let config = TacticalConfig::default();
        let mut attrs = AttributeSet::uniform(50.0);
        attrs.stamina = 80.0;
        let engine = PlayerProfile::new(
            1,
            "Engine",
            crate::models::roles::RoleFamily::CM,
            Foot::Right,
            attrs,
        );

        let report = analyze_matchups(
            &lineup_with(engine, "8R"),
            &[midpoint_opponent("8R")],
            &config,
        );
        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0], MatchupCategory::Midfield.phrase());
        assert_eq!(report.best_suggestion, report.suggestions[0]);
    }
}
