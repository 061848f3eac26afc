use thiserror::Error;

/// Which roster failed a pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSide {
    Own,
    Opponent,
}

impl std::fmt::Display for RosterSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RosterSide::Own => write!(f, "own"),
            RosterSide::Opponent => write!(f, "opponent"),
        }
    }
}

#[derive(Error, Debug)]
pub enum OptimizeError {
    /// No goalkeeper-eligible player in the own roster. The search aborts
    /// before any formation is attempted.
    #[error("no goalkeeper-eligible player in own roster")]
    MissingGoalkeeper,

    #[error("{side} roster too small: expected at least {expected}, found {found}")]
    InsufficientRoster {
        side: RosterSide,
        expected: usize,
        found: usize,
    },

    /// Every catalog formation was infeasible. Distinct from the roster
    /// pre-check aborts: the roster was minimally sufficient but no shape fit.
    #[error("no valid lineup found: every formation candidate was infeasible")]
    NoFeasibleLineup,

    /// A NaN or infinite value reached a cost cell. This is a defect in the
    /// upstream data, not a recoverable condition.
    #[error("non-finite cost {value} for player '{player}' at slot '{slot}'")]
    NonFiniteCost {
        player: String,
        slot: String,
        value: f64,
    },

    #[error("invalid formation '{id}': {reason}")]
    InvalidFormation { id: String, reason: String },

    #[error("request error: {0}")]
    Request(String),
}

impl From<serde_json::Error> for OptimizeError {
    fn from(err: serde_json::Error) -> Self {
        OptimizeError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
