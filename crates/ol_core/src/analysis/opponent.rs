//! Opponent roster analysis.
//!
//! Aggregates the opponent roster into per-role-group composite metrics
//! and textual weakness suggestions. The composites feed straight back
//! into the cost model's weakness bias; the suggestions go to the caller
//! as-is.

use crate::config::TacticalConfig;
use crate::models::formation::FormationShape;
use crate::models::player::OpponentProfile;
use crate::models::roles::RoleBucket;
use serde::{Deserialize, Serialize};

/// Per-role-group composite averages on the 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OpponentInsights {
    pub backline_pace: f64,
    pub backline_aerial: f64,
    pub midfield_stamina: f64,
    pub midfield_press: f64,
    pub attack_speed: f64,
    pub attack_finishing: f64,
}

impl OpponentInsights {
    /// All composites at the given neutral value. Used for empty role
    /// groups and as the no-opponent baseline in tests.
    pub fn neutral(midpoint: f64) -> OpponentInsights {
        OpponentInsights {
            backline_pace: midpoint,
            backline_aerial: midpoint,
            midfield_stamina: midpoint,
            midfield_press: midpoint,
            attack_speed: midpoint,
            attack_finishing: midpoint,
        }
    }
}

/// Full opponent analysis: composites, suggestion strings, headline, and
/// the inferred shape triad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentAnalysis {
    pub insights: OpponentInsights,
    pub suggestions: Vec<String>,
    pub headline: String,
    pub shape: FormationShape,
}

fn mean_of(entries: &[&OpponentProfile], f: impl Fn(&OpponentProfile) -> f64, neutral: f64) -> f64 {
    if entries.is_empty() {
        return neutral;
    }
    entries.iter().map(|&p| f(p)).sum::<f64>() / entries.len() as f64
}

/// Analyze the opponent roster into composites, suggestions and shape.
///
/// Grouping is by slot-code role bucket; goalkeepers are excluded from
/// every group, and ambiguous slot codes land in midfield via the slot
/// parser's `CM` default. Empty groups report the configured neutral
/// midpoint rather than NaN.
pub fn analyze_opponent(roster: &[OpponentProfile], config: &TacticalConfig) -> OpponentAnalysis {
    let neutral = config.opponent_bias.neutral_midpoint;

    let defenders: Vec<&OpponentProfile> =
        roster.iter().filter(|p| p.slot.bucket() == RoleBucket::Defender).collect();
    let midfielders: Vec<&OpponentProfile> =
        roster.iter().filter(|p| p.slot.bucket() == RoleBucket::Midfielder).collect();
    let attackers: Vec<&OpponentProfile> =
        roster.iter().filter(|p| p.slot.bucket() == RoleBucket::Attacker).collect();

    let insights = OpponentInsights {
        // Defenders get caught by quick turns as much as straight sprints,
        // so their pace composite blends in agility.
        backline_pace: mean_of(
            &defenders,
            |p| 0.7 * p.profile.attributes.speed as f64 + 0.3 * p.profile.attributes.agility as f64,
            neutral,
        ),
        backline_aerial: mean_of(
            &defenders,
            |p| p.profile.attributes.aerial_composite() as f64,
            neutral,
        ),
        midfield_stamina: mean_of(&midfielders, |p| p.profile.attributes.stamina as f64, neutral),
        midfield_press: mean_of(
            &midfielders,
            |p| {
                0.5 * p.profile.attributes.tackling as f64
                    + 0.5 * p.profile.attributes.positioning as f64
            },
            neutral,
        ),
        attack_speed: mean_of(&attackers, |p| p.profile.attributes.speed as f64, neutral),
        attack_finishing: mean_of(&attackers, |p| p.profile.attributes.finishing as f64, neutral),
    };

    let suggestions = build_suggestions(&insights, config);
    let headline = build_headline(&suggestions);
    let shape = FormationShape::from_buckets(roster.iter().map(|p| p.slot.bucket()));

    OpponentAnalysis {
        insights,
        suggestions,
        headline,
        shape,
    }
}

fn build_suggestions(insights: &OpponentInsights, config: &TacticalConfig) -> Vec<String> {
    let t = &config.insights;
    let mut suggestions = Vec::new();

    if insights.backline_pace < t.backline_pace_max {
        suggestions.push("Exploit slow defense with pace on the wings".to_string());
    }
    if insights.backline_aerial < t.backline_aerial_max {
        suggestions.push("Target aerial duels and set pieces".to_string());
    }
    if insights.midfield_stamina < t.midfield_stamina_max {
        suggestions.push("Press high to exploit stamina weaknesses".to_string());
    }
    if insights.midfield_press < t.midfield_press_max {
        suggestions.push("Apply constant pressure in midfield".to_string());
    }
    if insights.attack_speed > t.attack_speed_min {
        suggestions.push("Drop the defensive line against rapid forwards".to_string());
    }
    if insights.attack_finishing > t.attack_finishing_min {
        suggestions.push("Deny central shooting chances".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Balanced approach against well-rounded opponent".to_string());
    }
    suggestions
}

fn build_headline(suggestions: &[String]) -> String {
    let joined = suggestions
        .iter()
        .take(2)
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ");
    format!("Focus on {}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{AttributeSet, Foot, PlayerProfile};
    use crate::models::roles::RoleFamily;

    fn opponent(id: u32, slot: &str, attrs: AttributeSet) -> OpponentProfile {
        OpponentProfile::new(
            PlayerProfile::new(id, format!("Opp {}", id), RoleFamily::CM, Foot::Right, attrs),
            slot,
        )
    }

    fn shape_433(value: f32) -> Vec<OpponentProfile> {
        ["1", "2R", "3R", "3L", "2L", "6", "8R", "8L", "11R", "9", "11L"]
            .iter()
            .enumerate()
            .map(|(i, slot)| opponent(i as u32, slot, AttributeSet::uniform(value)))
            .collect()
    }

    #[test]
    fn test_backline_pace_is_defender_mean() {
        let config = TacticalConfig::default();
        let mut roster = shape_433(50.0);
        // Two defenders with distinct speed/agility, rest midpoint.
        roster[1].profile.attributes.speed = 80.0;
        roster[1].profile.attributes.agility = 60.0;
        roster[2].profile.attributes.speed = 40.0;
        roster[2].profile.attributes.agility = 70.0;

        let analysis = analyze_opponent(&roster, &config);
        // Defenders: slots 2R, 3R, 3L, 2L. Composite = 0.7*speed + 0.3*agility.
        let expected = (0.7 * 80.0 + 0.3 * 60.0 + 0.7 * 40.0 + 0.3 * 70.0 + 2.0 * 50.0) / 4.0;
        assert!(
            (analysis.insights.backline_pace - expected).abs() < 1e-9,
            "got {}",
            analysis.insights.backline_pace
        );
    }

    #[test]
    fn test_empty_group_defaults_to_neutral_not_nan() {
        let config = TacticalConfig::default();
        // Midfielders only: no defenders, no attackers.
        let roster: Vec<OpponentProfile> = ["6", "8R", "8L"]
            .iter()
            .enumerate()
            .map(|(i, slot)| opponent(i as u32, slot, AttributeSet::uniform(60.0)))
            .collect();

        let analysis = analyze_opponent(&roster, &config);
        assert_eq!(analysis.insights.backline_pace, 50.0);
        assert_eq!(analysis.insights.attack_finishing, 50.0);
        assert!(analysis.insights.backline_pace.is_finite());
    }

    #[test]
    fn test_weak_backline_triggers_wing_suggestion() {
        let config = TacticalConfig::default();
        let mut roster = shape_433(75.0);
        for i in 1..=4 {
            roster[i].profile.attributes.speed = 40.0;
            roster[i].profile.attributes.agility = 40.0;
        }

        let analysis = analyze_opponent(&roster, &config);
        assert!(analysis
            .suggestions
            .iter()
            .any(|s| s.contains("pace on the wings")));
        assert!(analysis.headline.starts_with("Focus on "));
    }

    #[test]
    fn test_well_rounded_opponent_gets_balanced_suggestion() {
        let config = TacticalConfig::default();
        let roster = shape_433(75.0);
        let analysis = analyze_opponent(&roster, &config);
        assert_eq!(analysis.suggestions.len(), 1);
        assert!(analysis.suggestions[0].contains("Balanced approach"));
    }

    #[test]
    fn test_shape_inference_433() {
        let config = TacticalConfig::default();
        let analysis = analyze_opponent(&shape_433(50.0), &config);
        assert_eq!(analysis.shape.label(), "4-3-3");
    }

    #[test]
    fn test_ambiguous_slots_count_as_midfielders() {
        let config = TacticalConfig::default();
        let roster: Vec<OpponentProfile> = ["XX", "??", "weird"]
            .iter()
            .enumerate()
            .map(|(i, slot)| opponent(i as u32, slot, AttributeSet::uniform(55.0)))
            .collect();
        let analysis = analyze_opponent(&roster, &config);
        assert_eq!(analysis.insights.midfield_stamina, 55.0);
        assert_eq!(analysis.shape.midfielders, 3);
    }
}
