//! JSON boundary for the optimization core.
//!
//! String-in/string-out: the caller owns all transport and file I/O. The
//! request carries both rosters (already normalized by the ingestion
//! collaborator) and an optional tactical configuration override; the
//! response is the serialized [`OptimizationReport`].

use crate::config::TacticalConfig;
use crate::error::{OptimizeError, Result};
use crate::models::player::{AttributeSet, Foot, OpponentProfile, PlayerProfile};
use crate::models::roles::RoleFamily;
use crate::optimizer::search::optimize;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub schema_version: u8,
    pub own_roster: Vec<PlayerEntry>,
    pub opponent_roster: Vec<OpponentEntry>,
    /// Overrides the built-in tactical defaults when present.
    #[serde(default)]
    pub config: Option<TacticalConfig>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerEntry {
    pub id: u32,
    pub name: String,
    pub position: RoleFamily,
    #[serde(default)]
    pub foot: Foot,
    pub attributes: AttributeSet,
}

#[derive(Debug, Deserialize)]
pub struct OpponentEntry {
    #[serde(flatten)]
    pub player: PlayerEntry,
    /// Formation slot the opponent occupies, e.g. "11L" or "RB".
    pub slot: String,
}

#[derive(Debug, Serialize)]
struct OptimizeResponse<'a> {
    schema_version: u8,
    #[serde(flatten)]
    report: &'a crate::optimizer::search::OptimizationReport,
}

impl PlayerEntry {
    fn into_profile(self) -> PlayerProfile {
        PlayerProfile::new(self.id, self.name, self.position, self.foot, self.attributes)
    }
}

/// Run one optimization from a JSON request, returning the report as JSON.
pub fn optimize_lineup_json(request_json: &str) -> Result<String> {
    let request: OptimizeRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(OptimizeError::Request(format!(
            "unsupported schema_version {}, expected {}",
            request.schema_version, SCHEMA_VERSION
        )));
    }

    debug!(
        own = request.own_roster.len(),
        opponent = request.opponent_roster.len(),
        "optimize request received"
    );

    let own: Vec<PlayerProfile> =
        request.own_roster.into_iter().map(PlayerEntry::into_profile).collect();
    let opponent: Vec<OpponentProfile> = request
        .opponent_roster
        .into_iter()
        .map(|entry| {
            let slot = entry.slot;
            OpponentProfile::new(entry.player.into_profile(), &slot)
        })
        .collect();

    let config = request.config.unwrap_or_default();
    let report = optimize(&own, &opponent, &config)?;

    let response = OptimizeResponse {
        schema_version: SCHEMA_VERSION,
        report: &report,
    };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: u32, name: &str, position: &str, overrides: serde_json::Value) -> serde_json::Value {
        let mut attributes = json!({
            "quality": 55.0, "speed": 55.0, "stamina": 55.0, "strength": 55.0,
            "balance": 55.0, "agility": 55.0, "jumping": 55.0, "heading": 55.0,
            "aerial": 55.0, "passing": 55.0, "vision": 55.0, "first_touch": 55.0,
            "finishing": 55.0, "tackling": 55.0, "positioning": 55.0,
            "press_resistance": 55.0, "off_ball": 55.0
        });
        if let Some(map) = overrides.as_object() {
            for (k, v) in map {
                attributes[k] = v.clone();
            }
        }
        json!({
            "id": id,
            "name": name,
            "position": position,
            "attributes": attributes
        })
    }

    fn valid_request() -> serde_json::Value {
        let own = vec![
            entry(0, "Keeper", "GK", json!({"quality": 86.0})),
            entry(1, "Right Back", "RB", json!({"speed": 72.0, "tackling": 70.0})),
            entry(2, "First Stopper", "CB", json!({"strength": 80.0, "tackling": 78.0})),
            entry(3, "Second Stopper", "CB", json!({"strength": 78.0, "tackling": 76.0})),
            entry(4, "Left Back", "LB", json!({"speed": 70.0, "tackling": 69.0})),
            entry(5, "Anchor", "DM", json!({"tackling": 76.0, "passing": 70.0})),
            entry(6, "Engine", "CM", json!({"stamina": 80.0, "passing": 74.0})),
            entry(7, "Playmaker", "CM", json!({"passing": 79.0, "vision": 77.0})),
            entry(8, "Right Winger", "RW", json!({"speed": 85.0, "agility": 78.0})),
            entry(9, "Left Winger", "LW", json!({"speed": 83.0, "agility": 76.0})),
            entry(10, "Striker", "ST", json!({"finishing": 83.0, "positioning": 75.0})),
        ];

        let slots = ["1", "2R", "3R", "3L", "2L", "6", "8R", "8L", "11R", "9", "11L"];
        let opponent: Vec<serde_json::Value> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let mut e = entry(100 + i as u32, &format!("Opp {}", i), "CM", json!({}));
                e["slot"] = json!(slot);
                e
            })
            .collect();

        json!({
            "schema_version": 1,
            "own_roster": own,
            "opponent_roster": opponent
        })
    }

    #[test]
    fn test_optimize_json_round_trip() {
        let result = optimize_lineup_json(&valid_request().to_string()).expect("optimize");
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["lineups"].as_array().map(|l| !l.is_empty()).unwrap_or(false));
        assert_eq!(parsed["lineups"][0]["assignments"].as_array().unwrap().len(), 11);
        assert!(parsed["matchup"]["best_suggestion"].is_string());
        assert!(parsed["opponent"]["insights"]["backline_pace"].is_number());
    }

    #[test]
    fn test_wrong_schema_version_rejected() {
        let mut request = valid_request();
        request["schema_version"] = json!(9);
        let err = optimize_lineup_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, OptimizeError::Request(_)));
    }

    #[test]
    fn test_missing_goalkeeper_surfaces_verbatim() {
        let mut request = valid_request();
        request["own_roster"][0]["position"] = json!("CB");
        let err = optimize_lineup_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, OptimizeError::MissingGoalkeeper));
    }

    #[test]
    fn test_malformed_json_is_a_request_error() {
        let err = optimize_lineup_json("not json at all").unwrap_err();
        assert!(matches!(err, OptimizeError::Request(_)));
    }
}
