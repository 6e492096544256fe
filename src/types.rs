use serde::{Deserialize, Serialize};

/// Opaque ID type for type safety
pub type PlayerId = String;

/// Session-wide state machine position for a round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Start,
    Middle,
    Final,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub minimum_players: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { minimum_players: 3 }
    }
}

/// The combined image + text one player produces during a round.
///
/// `master_id` is a non-owning back-reference to the player that owns this
/// artifact. Both payloads are independently settable and overwritable
/// until the round ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    pub master_id: PlayerId,
    pub image: Option<Vec<u8>>,
    pub description: Option<String>,
}

impl Artifact {
    pub fn new(master_id: PlayerId) -> Self {
        Self {
            master_id,
            image: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar_color: String,
    /// Created lazily on the player's first submission.
    pub artifact: Option<Artifact>,
}

/// Shared round state: who is playing, whose turn is active, and what has
/// been submitted so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Join order, unique by id, capped at 5 players.
    pub roster: Vec<Player>,
    pub current_player: Option<PlayerId>,
    /// Append-only within a round; a player appears at most once.
    pub completed_turns: Vec<PlayerId>,
    pub theme: String,
    pub opening_prompt: String,
    /// Emoji indices, append-only within a round.
    pub reactions: Vec<usize>,
}
