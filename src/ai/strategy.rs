//! How the engine picks its moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Move-selection strategy, switchable at runtime.
///
/// Levels follow the classic key bindings: `0` plays randomly, `1` searches
/// the whole game tree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Uniform choice among the empty cells.
    Random,
    /// Full-depth minimax; never loses.
    #[default]
    ExhaustiveSearch,
}

impl Strategy {
    /// Numeric level of this strategy.
    pub fn level(self) -> u8 {
        match self {
            Strategy::Random => 0,
            Strategy::ExhaustiveSearch => 1,
        }
    }

    /// Strategy for a numeric level.
    #[instrument]
    pub fn from_level(level: u8) -> Result<Self, UnknownLevel> {
        match level {
            0 => Ok(Strategy::Random),
            1 => Ok(Strategy::ExhaustiveSearch),
            other => Err(UnknownLevel(other)),
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = UnknownLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

/// A level number with no matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown engine level {}: expected 0 (random) or 1 (exhaustive search)", _0)]
pub struct UnknownLevel(#[error(not(source))] pub u8);
