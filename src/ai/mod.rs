//! Computer opponent: random play and exhaustive minimax search.

mod engine;
pub mod minimax;
mod strategy;

pub use engine::{Decision, DecisionEngine, NoLegalMove};
pub use minimax::{Evaluation, Score, SearchStats};
pub use strategy::{Strategy, UnknownLevel};
