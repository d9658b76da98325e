//! Core engine types: players, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! round state machine. Presenters configure a round via `RoundConfig`
//! rather than modifying the core.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::RoundConfig;
pub use error::ConfigError;
pub use player::{PlayerId, PlayerMap};
pub use rng::RoundRng;
