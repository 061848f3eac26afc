//! Role families and slot codes.
//!
//! A slot code is the short token identifying one position in a formation
//! template (`"1"`, `"2R"`, `"11L"`, `"CB"`). The role family it resolves to
//! is fixed at parse time via the lookup table in [`SlotCode::parse`] and
//! never re-derived during cost evaluation.

use serde::{Deserialize, Serialize};

/// One of the ten coarse tactical roles a formation slot requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleFamily {
    GK,
    CB,
    LB,
    RB,
    DM,
    CM,
    AM,
    LW,
    RW,
    ST,
}

/// Coarse grouping used by opponent analysis and matchup categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoleBucket {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl RoleFamily {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, RoleFamily::GK)
    }

    pub fn is_fullback(&self) -> bool {
        matches!(self, RoleFamily::LB | RoleFamily::RB)
    }

    pub fn is_winger(&self) -> bool {
        matches!(self, RoleFamily::LW | RoleFamily::RW)
    }

    pub fn is_central_midfield(&self) -> bool {
        matches!(self, RoleFamily::DM | RoleFamily::CM | RoleFamily::AM)
    }

    pub fn bucket(&self) -> RoleBucket {
        match self {
            RoleFamily::GK => RoleBucket::Goalkeeper,
            RoleFamily::CB | RoleFamily::LB | RoleFamily::RB => RoleBucket::Defender,
            RoleFamily::DM | RoleFamily::CM | RoleFamily::AM => RoleBucket::Midfielder,
            RoleFamily::LW | RoleFamily::RW | RoleFamily::ST => RoleBucket::Attacker,
        }
    }
}

impl std::fmt::Display for RoleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            RoleFamily::GK => "GK",
            RoleFamily::CB => "CB",
            RoleFamily::LB => "LB",
            RoleFamily::RB => "RB",
            RoleFamily::DM => "DM",
            RoleFamily::CM => "CM",
            RoleFamily::AM => "AM",
            RoleFamily::LW => "LW",
            RoleFamily::RW => "RW",
            RoleFamily::ST => "ST",
        };
        write!(f, "{}", s)
    }
}

/// Pitch side encoded by an `L`/`R` suffix on a slot code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SlotSide {
    Left,
    Right,
    Center,
}

/// A formation slot code with its role family resolved once at parse time.
///
/// Equality and mirrored-matchup lookups compare the normalized `code`
/// string, so an opponent labelled `"11L"` mirrors the template slot `"11L"`
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SlotCode {
    pub code: String,
    pub role: RoleFamily,
    pub side: SlotSide,
}

impl SlotCode {
    /// Resolve a raw slot token into a [`SlotCode`].
    ///
    /// Numeric tokens follow the classic shirt-number scheme: 1 keeper,
    /// 2/5 fullbacks, 3/4 centre-backs, 6 holding mid, 7/8 central mids,
    /// 10 attacking mid, 11 wingers, 9 striker. Alphabetic synonyms
    /// (`CB`, `RB`, `CDM`, `CAM`, ...) resolve to the same ten families.
    /// Unmatched tokens default to `CM`.
    pub fn parse(raw: &str) -> SlotCode {
        let code = raw.trim().to_uppercase();
        let side = if code.ends_with('L') {
            SlotSide::Left
        } else if code.ends_with('R') {
            SlotSide::Right
        } else {
            SlotSide::Center
        };

        let token: String = if code.chars().any(|c| c.is_ascii_digit()) {
            code.chars().filter(|c| c.is_ascii_digit()).collect()
        } else {
            code.trim_end_matches(['L', 'R']).to_string()
        };

        let role = match token.as_str() {
            "1" | "GK" => RoleFamily::GK,
            // Fullback tokens: the side suffix decides the flank; a bare 2
            // is the right back, a bare 5 the left back.
            "2" => match side {
                SlotSide::Left => RoleFamily::LB,
                _ => RoleFamily::RB,
            },
            "5" => match side {
                SlotSide::Right => RoleFamily::RB,
                _ => RoleFamily::LB,
            },
            "3" | "4" | "CB" => RoleFamily::CB,
            "RB" => RoleFamily::RB,
            "LB" => RoleFamily::LB,
            "6" | "CDM" | "DM" => RoleFamily::DM,
            "7" | "8" | "CM" => RoleFamily::CM,
            "10" | "CAM" | "AM" => RoleFamily::AM,
            "11" | "W" => match side {
                SlotSide::Left => RoleFamily::LW,
                _ => RoleFamily::RW,
            },
            "RW" => RoleFamily::RW,
            "LW" => RoleFamily::LW,
            "9" | "ST" | "CF" => RoleFamily::ST,
            _ => RoleFamily::CM,
        };

        // Flank roles imply a side even when the code carries no suffix
        // (alphabetic codes like "LB" or "RW").
        let side = match role {
            RoleFamily::LB | RoleFamily::LW => SlotSide::Left,
            RoleFamily::RB | RoleFamily::RW => SlotSide::Right,
            _ => side,
        };

        SlotCode { code, role, side }
    }

    pub fn bucket(&self) -> RoleBucket {
        self.role.bucket()
    }
}

impl std::fmt::Display for SlotCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_tokens_resolve_to_families() {
        assert_eq!(SlotCode::parse("1").role, RoleFamily::GK);
        assert_eq!(SlotCode::parse("2").role, RoleFamily::RB);
        assert_eq!(SlotCode::parse("2L").role, RoleFamily::LB);
        assert_eq!(SlotCode::parse("2R").role, RoleFamily::RB);
        assert_eq!(SlotCode::parse("5").role, RoleFamily::LB);
        assert_eq!(SlotCode::parse("5R").role, RoleFamily::RB);
        assert_eq!(SlotCode::parse("3").role, RoleFamily::CB);
        assert_eq!(SlotCode::parse("3L").role, RoleFamily::CB);
        assert_eq!(SlotCode::parse("4").role, RoleFamily::CB);
        assert_eq!(SlotCode::parse("6").role, RoleFamily::DM);
        assert_eq!(SlotCode::parse("7").role, RoleFamily::CM);
        assert_eq!(SlotCode::parse("8R").role, RoleFamily::CM);
        assert_eq!(SlotCode::parse("10").role, RoleFamily::AM);
        assert_eq!(SlotCode::parse("11L").role, RoleFamily::LW);
        assert_eq!(SlotCode::parse("11R").role, RoleFamily::RW);
        assert_eq!(SlotCode::parse("11").role, RoleFamily::RW);
        assert_eq!(SlotCode::parse("9").role, RoleFamily::ST);
        assert_eq!(SlotCode::parse("9L").role, RoleFamily::ST);
    }

    #[test]
    fn test_alphabetic_synonyms() {
        assert_eq!(SlotCode::parse("GK").role, RoleFamily::GK);
        assert_eq!(SlotCode::parse("cb").role, RoleFamily::CB);
        assert_eq!(SlotCode::parse("RB").role, RoleFamily::RB);
        assert_eq!(SlotCode::parse("LB").role, RoleFamily::LB);
        assert_eq!(SlotCode::parse("CDM").role, RoleFamily::DM);
        assert_eq!(SlotCode::parse("CAM").role, RoleFamily::AM);
        assert_eq!(SlotCode::parse("LW").role, RoleFamily::LW);
        assert_eq!(SlotCode::parse("RW").role, RoleFamily::RW);
        assert_eq!(SlotCode::parse("CF").role, RoleFamily::ST);
    }

    #[test]
    fn test_unmatched_token_defaults_to_cm() {
        assert_eq!(SlotCode::parse("XX").role, RoleFamily::CM);
        assert_eq!(SlotCode::parse("99").role, RoleFamily::CM);
        assert_eq!(SlotCode::parse("").role, RoleFamily::CM);
    }

    #[test]
    fn test_side_suffix() {
        assert_eq!(SlotCode::parse("11L").side, SlotSide::Left);
        assert_eq!(SlotCode::parse("8R").side, SlotSide::Right);
        assert_eq!(SlotCode::parse("6").side, SlotSide::Center);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(SlotCode::parse("1").bucket(), RoleBucket::Goalkeeper);
        assert_eq!(SlotCode::parse("3R").bucket(), RoleBucket::Defender);
        assert_eq!(SlotCode::parse("8").bucket(), RoleBucket::Midfielder);
        assert_eq!(SlotCode::parse("11L").bucket(), RoleBucket::Attacker);
    }
}
