//! The round state machine: active range, guess results, outcome, state.

pub mod guess;
pub mod outcome;
pub mod range;
pub mod state;

pub use guess::{GuessRecord, GuessResult};
pub use outcome::RoundOutcome;
pub use range::ActiveRange;
pub use state::Round;
