use super::GameSession;
use crate::types::{GamePhase, Player, PlayerId};
use rand::seq::IndexedRandom;
use serde_json::json;
use std::time::Instant;

impl GameSession {
    /// Pick the next player to take a turn, uniformly at random.
    ///
    /// Players who already completed a turn this round are never
    /// candidates. When `excluding` is given, that player is skipped as
    /// well unless doing so would leave nobody to pick.
    pub fn select_next_player(&self, excluding: Option<&PlayerId>) -> Option<Player> {
        let candidates: Vec<&Player> = self
            .state
            .roster
            .iter()
            .filter(|p| !self.state.completed_turns.contains(&p.id))
            .collect();

        if let Some(current) = excluding {
            let narrowed: Vec<&Player> = candidates
                .iter()
                .copied()
                .filter(|p| p.id != *current)
                .collect();
            if let Some(player) = narrowed.choose(&mut rand::rng()) {
                return Some((*player).clone());
            }
        }

        candidates
            .choose(&mut rand::rng())
            .map(|player| (*player).clone())
    }

    /// Make `player_id` the active player and start the round-time
    /// measurement. No-op when the player is not on the roster.
    pub fn begin_turn(&mut self, player_id: &PlayerId) {
        if self.player(player_id).is_none() {
            tracing::warn!("begin_turn for unknown player {}", player_id);
            return;
        }

        self.state.current_player = Some(player_id.clone());
        self.turn_started_at = Some(Instant::now());
        self.publish();
    }

    /// Record the active player's completed turn.
    ///
    /// Emits the round-time telemetry event and closes the round once
    /// every player but the last has gone.
    pub(crate) fn mark_turn_complete(&mut self) {
        let Some(player_id) = self.state.current_player.clone() else {
            return;
        };
        if self.state.completed_turns.contains(&player_id) {
            return;
        }

        let elapsed_seconds = self
            .turn_started_at
            .map(|started| started.elapsed().as_secs_f64())
            .unwrap_or_default();
        let mut properties = serde_json::Map::new();
        properties.insert("Seconds".to_string(), json!(elapsed_seconds));
        properties.insert(
            "isFirstPlayer".to_string(),
            json!(self.state.completed_turns.is_empty()),
        );
        self.telemetry.record("Player Round Time", properties);

        self.state.completed_turns.push(player_id);
        if self.state.completed_turns.len() == self.state.roster.len().saturating_sub(1) {
            self.change_phase(GamePhase::Final);
        }
    }
}
