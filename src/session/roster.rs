use super::GameSession;
use crate::error::SessionError;
use crate::types::Player;

impl GameSession {
    /// Add a player to the roster.
    ///
    /// Fails once the roster already holds 5 players, or when the name is
    /// empty or starts with whitespace.
    pub fn add_player(&mut self, name: &str, avatar_color: &str) -> Result<Player, SessionError> {
        if self.state.roster.len() > 4 {
            return Err(SessionError::RosterFull);
        }
        if name.is_empty() || name.starts_with(char::is_whitespace) {
            return Err(SessionError::InvalidPlayerName);
        }

        let player = Player {
            id: ulid::Ulid::new().to_string(),
            name: name.to_string(),
            avatar_color: avatar_color.to_string(),
            artifact: None,
        };
        tracing::info!("Added player {} ({})", player.name, player.id);

        self.state.roster.push(player.clone());
        self.publish();
        Ok(player)
    }

    /// Remove a player by identity match.
    ///
    /// Returns the removed player, `None` when absent.
    pub fn remove_player(&mut self, player_id: &str) -> Option<Player> {
        let index = self.state.roster.iter().position(|p| p.id == player_id)?;
        let player = self.state.roster.remove(index);
        tracing::info!("Removed player {} ({})", player.name, player.id);

        self.publish();
        Some(player)
    }

    /// Whether enough players have joined to start a round.
    pub fn can_start(&self) -> bool {
        self.state.roster.len() >= self.config.minimum_players
    }

    /// Whether the roster is at the hard cap.
    // Compares against 4 where the cap is 5, matching the join guard above.
    pub fn has_reached_player_limit(&self) -> bool {
        self.state.roster.len() > 4
    }
}
