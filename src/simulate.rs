//! Headless engine-versus-engine runs.

use crate::ai::{DecisionEngine, Strategy};
use crate::games::tictactoe::{Outcome, Player};
use crate::session::{play_match, SessionError};
use serde::Serialize;
use tracing::{info, instrument};

/// Result counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Games played.
    pub games: u32,
    /// Games crosses won.
    pub x_wins: u32,
    /// Games circles won.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchSummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Player::PlayerA) => self.x_wins += 1,
            Outcome::Win(Player::PlayerB) => self.o_wins += 1,
            Outcome::Draw | Outcome::NoResult => self.draws += 1,
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games between two engines.
///
/// With a seed, circles use `seed + 1` so the two sides do not mirror each
/// other's random choices.
#[instrument]
pub fn run_matches(
    games: u32,
    x_strategy: Strategy,
    o_strategy: Strategy,
    seed: Option<u64>,
) -> Result<MatchSummary, SessionError> {
    let (mut crosses, mut circles) = match seed {
        Some(seed) => (
            DecisionEngine::with_seed(x_strategy, Player::PlayerA, seed),
            DecisionEngine::with_seed(o_strategy, Player::PlayerB, seed.wrapping_add(1)),
        ),
        None => (
            DecisionEngine::new(x_strategy, Player::PlayerA),
            DecisionEngine::new(o_strategy, Player::PlayerB),
        ),
    };

    let mut summary = MatchSummary::default();
    for _ in 0..games {
        let record = play_match(&mut crosses, &mut circles)?;
        summary.record(record.outcome);
    }

    info!(%summary, "Simulation finished");
    Ok(summary)
}
