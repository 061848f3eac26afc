//! Opponent and matchup analysis.

pub mod matchup;
pub mod opponent;

pub use matchup::{analyze_matchups, MatchupCategory, MatchupReport};
pub use opponent::{analyze_opponent, OpponentAnalysis, OpponentInsights};
