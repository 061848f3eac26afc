//! Formation templates and the default catalog.

use super::roles::{RoleBucket, SlotCode};
use crate::error::OptimizeError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The number of slots every formation template must fill.
pub const SLOTS_PER_FORMATION: usize = 11;

/// A named ordered list of exactly 11 unique slot codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationTemplate {
    pub id: String,
    pub slots: Vec<SlotCode>,
}

impl FormationTemplate {
    /// Build a template from raw slot codes, enforcing the 11-unique-slots
    /// invariant.
    pub fn new(id: &str, codes: &[&str]) -> Result<FormationTemplate, OptimizeError> {
        if codes.len() != SLOTS_PER_FORMATION {
            return Err(OptimizeError::InvalidFormation {
                id: id.to_string(),
                reason: format!("expected {} slots, got {}", SLOTS_PER_FORMATION, codes.len()),
            });
        }

        let slots: Vec<SlotCode> = codes.iter().map(|c| SlotCode::parse(c)).collect();

        let mut seen = HashSet::new();
        for slot in &slots {
            if !seen.insert(slot.code.clone()) {
                return Err(OptimizeError::InvalidFormation {
                    id: id.to_string(),
                    reason: format!("duplicate slot code '{}'", slot.code),
                });
            }
        }

        Ok(FormationTemplate {
            id: id.to_string(),
            slots,
        })
    }

    /// Defender-midfielder-attacker count triad of this template.
    pub fn shape(&self) -> FormationShape {
        FormationShape::from_buckets(self.slots.iter().map(|s| s.bucket()))
    }
}

/// A defender-midfielder-attacker count triad, displayed as e.g. "4-3-3".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormationShape {
    pub defenders: usize,
    pub midfielders: usize,
    pub attackers: usize,
}

impl FormationShape {
    /// Count buckets into a triad. A zero attacker count is reported as 1
    /// to avoid a degenerate label.
    pub fn from_buckets(buckets: impl Iterator<Item = RoleBucket>) -> FormationShape {
        let mut defenders = 0;
        let mut midfielders = 0;
        let mut attackers = 0;
        for bucket in buckets {
            match bucket {
                RoleBucket::Goalkeeper => {}
                RoleBucket::Defender => defenders += 1,
                RoleBucket::Midfielder => midfielders += 1,
                RoleBucket::Attacker => attackers += 1,
            }
        }
        FormationShape {
            defenders,
            midfielders,
            attackers: attackers.max(1),
        }
    }

    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.defenders, self.midfielders, self.attackers)
    }
}

impl std::fmt::Display for FormationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Default formation catalog. Slot codes use the shirt-number scheme with
/// L/R suffixes so mirrored-matchup lookups line up with opponent labels.
static DEFAULT_CATALOG: Lazy<Vec<FormationTemplate>> = Lazy::new(|| {
    let defs: [(&str, [&str; 11]); 5] = [
        (
            "4-3-3",
            ["1", "2R", "3R", "3L", "2L", "6", "8R", "8L", "11R", "9", "11L"],
        ),
        (
            "4-4-2",
            ["1", "2R", "3R", "3L", "2L", "7R", "8R", "8L", "7L", "9R", "9L"],
        ),
        (
            "3-5-2",
            ["1", "3R", "4", "3L", "2R", "6", "8R", "8L", "2L", "9R", "9L"],
        ),
        (
            "4-2-3-1",
            ["1", "2R", "3R", "3L", "2L", "6R", "6L", "11R", "10", "11L", "9"],
        ),
        (
            "3-4-3",
            ["1", "3R", "4", "3L", "2R", "8R", "8L", "2L", "11R", "9", "11L"],
        ),
    ];

    defs.iter()
        .map(|(id, codes)| {
            FormationTemplate::new(id, codes).expect("default catalog templates are valid")
        })
        .collect()
});

/// The built-in formation catalog used when the caller does not supply one.
pub fn default_catalog() -> &'static [FormationTemplate] {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roles::RoleFamily;

    #[test]
    fn test_catalog_templates_have_eleven_unique_slots() {
        for template in default_catalog() {
            assert_eq!(template.slots.len(), SLOTS_PER_FORMATION, "{}", template.id);
            let codes: HashSet<&str> =
                template.slots.iter().map(|s| s.code.as_str()).collect();
            assert_eq!(codes.len(), SLOTS_PER_FORMATION, "{}", template.id);
            assert!(
                template.slots[0].role.is_goalkeeper(),
                "{} must lead with the keeper slot",
                template.id
            );
        }
    }

    #[test]
    fn test_433_slots_resolve_to_expected_roles() {
        let catalog = default_catalog();
        let f433 = catalog.iter().find(|t| t.id == "4-3-3").unwrap();
        let roles: Vec<RoleFamily> = f433.slots.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                RoleFamily::GK,
                RoleFamily::RB,
                RoleFamily::CB,
                RoleFamily::CB,
                RoleFamily::LB,
                RoleFamily::DM,
                RoleFamily::CM,
                RoleFamily::CM,
                RoleFamily::RW,
                RoleFamily::ST,
                RoleFamily::LW,
            ]
        );
    }

    #[test]
    fn test_shape_labels() {
        let catalog = default_catalog();
        let shapes: Vec<String> =
            catalog.iter().map(|t| t.shape().label()).collect();
        assert_eq!(shapes[0], "4-3-3");
        assert_eq!(shapes[2], "5-3-2"); // wing-backs count as defenders
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let result = FormationTemplate::new(
            "bad",
            &["1", "2R", "2R", "3L", "2L", "6", "8R", "8L", "11R", "9", "11L"],
        );
        assert!(matches!(
            result,
            Err(OptimizeError::InvalidFormation { .. })
        ));
    }

    #[test]
    fn test_wrong_slot_count_rejected() {
        let result = FormationTemplate::new("short", &["1", "9"]);
        assert!(matches!(
            result,
            Err(OptimizeError::InvalidFormation { .. })
        ));
    }

    #[test]
    fn test_zero_attackers_defaults_to_one() {
        let shape = FormationShape::from_buckets(
            [RoleBucket::Defender, RoleBucket::Midfielder].into_iter(),
        );
        assert_eq!(shape.attackers, 1);
        assert_eq!(shape.label(), "1-1-1");
    }
}
