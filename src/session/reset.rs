use super::GameSession;
use crate::types::GamePhase;

impl GameSession {
    /// Restart the round, keeping the roster and the active player.
    ///
    /// A new `begin_turn` call is expected before the next submission.
    pub fn restart_round(&mut self) {
        tracing::info!("Restarting round");
        self.state.completed_turns.clear();
        self.state.reactions.clear();
        self.change_phase(GamePhase::Start);
        self.publish();
    }

    /// Drop the round and the roster, returning to a pre-lobby state.
    pub fn full_reset(&mut self) {
        tracing::info!("Resetting session");
        self.state.completed_turns.clear();
        self.state.roster.clear();
        self.state.reactions.clear();
        self.state.current_player = None;
        self.change_phase(GamePhase::Start);
        self.publish();
    }
}
