//! Snapshot export/import for restoring a board by hand during a live show.
//!
//! Nothing here touches disk: the host downloads a snapshot and can post it
//! back later to the same or a restarted server.

use super::GameStore;
use crate::error::{GameError, GameResult};
use crate::types::{GameState, MAX_STRIKES};
use serde::{Deserialize, Serialize};

/// Schema version for export format compatibility
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateExport {
    pub schema_version: u32,
    /// Export timestamp (ISO8601)
    pub exported_at: String,
    /// Revision of the board when exported. Informational only on import.
    #[serde(default)]
    pub revision: u64,
    pub state: GameState,
}

impl GameStateExport {
    pub fn new(revision: u64, state: GameState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            revision,
            state,
        }
    }

    /// Validate the export before import
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version > EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Export schema version {} is newer than supported version {}",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }

        if self.state.strikes > MAX_STRIKES {
            return Err(format!(
                "Strikes {} exceed the maximum of {}",
                self.state.strikes, MAX_STRIKES
            ));
        }

        if let Some(ref question) = self.state.current_question {
            if let Some(answer) = question.answers.iter().find(|a| a.score < 0) {
                return Err(format!("Answer '{}' has a negative score", answer.text));
            }
        }

        Ok(())
    }
}

impl GameStore {
    pub async fn export_state(&self) -> GameStateExport {
        let (revision, state) = self.snapshot().await;
        GameStateExport::new(revision, state)
    }

    /// Replace the whole board with an exported snapshot.
    pub async fn import_state(&self, export: GameStateExport) -> GameResult<GameState> {
        export.validate().map_err(GameError::InvalidImport)?;

        tracing::info!(
            "Importing snapshot exported at {} (revision {})",
            export.exported_at,
            export.revision
        );
        Ok(self.replace(export.state).await)
    }
}
