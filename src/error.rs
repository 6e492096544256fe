/// Validation failures surfaced to the driving actor.
///
/// None of these are fatal: when a mutation is rejected the session state
/// is left untouched and the caller gets a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("The player limit has already been reached")]
    RosterFull,

    #[error("Player name must not be empty or start with whitespace")]
    InvalidPlayerName,
}
