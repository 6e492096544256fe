//! Shared round state for a turn-based party game: the roster, the active
//! turn, each player's submitted artifact, and the round phase machine.

pub mod avatar;
pub mod error;
pub mod protocol;
pub mod session;
pub mod telemetry;
pub mod theme;
pub mod types;
