use super::GameSession;
use crate::types::{Artifact, GamePhase};

/// One call's worth of submissions from the active player.
///
/// Parts are optional and applied in a fixed order: image, then
/// description, then emoji reaction.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSubmission {
    pub image: Option<Vec<u8>>,
    pub description: Option<String>,
    pub emoji_index: Option<usize>,
}

impl GameSession {
    /// Apply a submission from the active player.
    pub fn submit_artifact(&mut self, submission: ArtifactSubmission) {
        if let Some(image) = submission.image {
            self.submit_image(image);
        }
        if let Some(description) = submission.description {
            self.submit_description(description);
        }
        if let Some(index) = submission.emoji_index {
            self.submit_emoji_reaction(index);
        }
        self.publish();
    }

    fn submit_image(&mut self, data: Vec<u8>) {
        let Some(player_id) = self.state.current_player.clone() else {
            return;
        };

        match self.phase {
            GamePhase::Start => {
                if let Some(player) = self.player_mut(&player_id) {
                    player.artifact = Some(Artifact {
                        master_id: player_id.clone(),
                        image: Some(data),
                        description: None,
                    });
                }
                self.change_phase(GamePhase::Middle);
            }
            GamePhase::Middle => {
                // Only an existing artifact takes the image; the turn
                // still completes below either way.
                if let Some(artifact) = self
                    .player_mut(&player_id)
                    .and_then(|p| p.artifact.as_mut())
                {
                    artifact.image = Some(data);
                }
            }
            GamePhase::Final => return,
        }

        self.mark_turn_complete();
    }

    fn submit_description(&mut self, description: String) {
        if let Some(player_id) = self.state.current_player.clone() {
            if let Some(player) = self.player_mut(&player_id) {
                player
                    .artifact
                    .get_or_insert_with(|| Artifact::new(player_id.clone()))
                    .description = Some(description);
            }
        }

        // A description closes the turn only once the round has reached
        // its final phase.
        if self.phase == GamePhase::Final {
            self.mark_turn_complete();
        }
    }

    fn submit_emoji_reaction(&mut self, index: usize) {
        self.state.reactions.push(index);
    }

    /// Prompt shown to the active player: their own prior artifact
    /// description when present, otherwise the round's opening prompt.
    pub fn current_displayed_prompt(&self) -> &str {
        self.state
            .current_player
            .as_ref()
            .and_then(|id| self.player(id))
            .and_then(|p| p.artifact.as_ref())
            .and_then(|a| a.description.as_deref())
            .unwrap_or(&self.state.opening_prompt)
    }

    /// Image submitted by the most recently completed player, if any.
    pub fn last_image(&self) -> Option<&[u8]> {
        let last = self.state.completed_turns.last()?;
        self.player(last)?.artifact.as_ref()?.image.as_deref()
    }

    /// Asset name for the reaction stored at `position`.
    ///
    /// Index 0 is the "no reaction" sentinel; it and out-of-range
    /// positions read back as `None`.
    pub fn emoji_name(&self, position: usize) -> Option<String> {
        match self.state.reactions.get(position) {
            Some(&index) if index != 0 => Some(format!("Emoji{}", index)),
            _ => None,
        }
    }
}
