use crate::types::*;
use serde::{Deserialize, Serialize};

/// Immutable state snapshot delivered to observers.
///
/// One snapshot is published after every mutation that changes any of
/// these fields; subscribers see them in mutation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub roster: Vec<Player>,
    pub current_player: Option<PlayerId>,
    pub completed_turns: Vec<PlayerId>,
    pub reactions: Vec<usize>,
}
