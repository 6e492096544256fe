mod artifact;
mod reset;
mod roster;
mod rotation;

use crate::protocol::SessionSnapshot;
use crate::telemetry::{NoopTelemetry, Telemetry};
use crate::theme::ThemeProvider;
use crate::types::*;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::broadcast;

pub use artifact::ArtifactSubmission;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 100;

/// Controller for one game session.
///
/// Owns the shared round state, the player-rotation algorithm, the
/// artifact-submission protocol, and round timing. All mutating operations
/// are driven sequentially by a single actor; each mutation is applied
/// synchronously and then published to subscribers as an immutable
/// snapshot.
pub struct GameSession {
    pub(crate) state: SessionState,
    pub(crate) phase: GamePhase,
    pub config: SessionConfig,
    pub(crate) themes: ThemeProvider,
    pub(crate) telemetry: Arc<dyn Telemetry>,
    pub(crate) snapshots: broadcast::Sender<SessionSnapshot>,
    pub(crate) turn_started_at: Option<Instant>,
}

impl GameSession {
    /// Session with the bundled theme data and no telemetry sink.
    pub fn new() -> Self {
        Self::with_providers(ThemeProvider::bundled(), Arc::new(NoopTelemetry))
    }

    /// Session with an explicit theme source and telemetry sink.
    pub fn with_providers(themes: ThemeProvider, telemetry: Arc<dyn Telemetry>) -> Self {
        let (snapshots, _rx) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);
        Self {
            state: SessionState::default(),
            phase: GamePhase::Start,
            config: SessionConfig::default(),
            themes,
            telemetry,
            snapshots,
            turn_started_at: None,
        }
    }

    /// Current phase of the round.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Read access to the shared round state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Subscribe to state snapshots.
    ///
    /// Delivery is asynchronous relative to the mutation that caused a
    /// snapshot, but snapshots arrive in mutation order.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    /// Build an immutable snapshot of the observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            roster: self.state.roster.clone(),
            current_player: self.state.current_player.clone(),
            completed_turns: self.state.completed_turns.clone(),
            reactions: self.state.reactions.clone(),
        }
    }

    /// Pick a uniformly random theme for the round.
    pub fn randomize_theme(&mut self) {
        if let Some(theme) = self.themes.themes().choose(&mut rand::rng()) {
            self.state.theme = theme.clone();
        }
    }

    /// Draw the round's opening prompt from the current theme.
    ///
    /// Keeps the previous prompt when the theme has no phrases.
    pub fn select_opening_prompt(&mut self) {
        if let Some(phrase) = self.themes.random_phrase(&self.state.theme) {
            self.state.opening_prompt = phrase.to_string();
        }
    }

    pub(crate) fn publish(&self) {
        // Ignore send errors (no subscribers connected is fine)
        let _ = self.snapshots.send(self.snapshot());
    }

    pub(crate) fn change_phase(&mut self, to: GamePhase) {
        tracing::debug!("Phase transition {:?} -> {:?}", self.phase, to);
        self.phase = to;
    }

    pub(crate) fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.state.roster.iter().find(|p| p.id == *id)
    }

    pub(crate) fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.state.roster.iter_mut().find(|p| p.id == *id)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
