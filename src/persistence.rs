//! Persistence adapter: moves [`AppState`] in and out of a [`Storage`] blob.
//!
//! The persisted form is the camelCase JSON of the board tree plus
//! `activeBoardId`. The in-progress drag is never written.

use crate::config::TaskFlowConfig;
use crate::domain::AppState;
use crate::error::{Result, TaskFlowError};
use crate::storage::Storage;
use tracing::{debug, warn};

/// Serializes a state to its persisted JSON form
pub fn encode(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parses a persisted blob.
///
/// A missing or dangling `activeBoardId` is repaired to the first board.
/// Unparseable JSON or duplicate ids yield `CorruptState`.
pub fn decode(blob: &str) -> Result<AppState> {
    let mut state: AppState =
        serde_json::from_str(blob).map_err(|e| TaskFlowError::CorruptState(e.to_string()))?;
    if state.repair_active_board() {
        debug!(active = ?state.active_board_id, "repaired active board on load");
    }
    state.check_integrity()?;
    Ok(state)
}

/// Result of [`Persistence::load_or_seed`]
#[derive(Debug)]
pub struct Loaded {
    pub state: AppState,
    /// Set when the stored blob was unreadable and the seed state was used instead
    pub warning: Option<TaskFlowError>,
}

pub struct Persistence<S: Storage> {
    storage: S,
    key: String,
    seed_board_name: String,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S, config: &TaskFlowConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            seed_board_name: config.seed_board_name.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key the corrupt blob is copied to before it is replaced
    pub fn corrupt_backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Reads the stored state, or the seed state when nothing is stored.
    ///
    /// A malformed blob fails with `CorruptState`.
    pub async fn load(&self) -> Result<AppState> {
        match self.storage.get(&self.key).await? {
            Some(blob) => decode(&blob),
            None => {
                debug!(key = %self.key, "no persisted state, seeding");
                Ok(AppState::seeded(&self.seed_board_name))
            }
        }
    }

    /// Like [`load`](Self::load), but recovers from a corrupt blob by copying
    /// it to [`corrupt_backup_key`](Self::corrupt_backup_key) and returning the
    /// seed state along with the error. A failed backup is logged and does not
    /// stop the recovery.
    pub async fn load_or_seed(&self) -> Result<Loaded> {
        match self.load().await {
            Ok(state) => Ok(Loaded {
                state,
                warning: None,
            }),
            Err(err @ TaskFlowError::CorruptState(_)) => {
                warn!(key = %self.key, error = %err, "persisted state is corrupt, using seed state");
                if let Err(backup_err) = self.back_up_corrupt_blob().await {
                    warn!(
                        key = %self.corrupt_backup_key(),
                        error = %backup_err,
                        "could not back up corrupt state"
                    );
                }
                Ok(Loaded {
                    state: AppState::seeded(&self.seed_board_name),
                    warning: Some(err),
                })
            }
            Err(err) => Err(err),
        }
    }

    async fn back_up_corrupt_blob(&self) -> Result<()> {
        if let Some(blob) = self.storage.get(&self.key).await? {
            self.storage.set(&self.corrupt_backup_key(), &blob).await?;
        }
        Ok(())
    }

    /// Writes the state, excluding any in-progress drag
    pub async fn save(&self, state: &AppState) -> Result<()> {
        let blob = encode(state)?;
        self.storage.set(&self.key, &blob).await
    }
}
