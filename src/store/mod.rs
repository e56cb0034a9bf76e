//! The state store: sole owner of the [`AppState`] tree.
//!
//! Every mutation runs to completion, is flushed through the persistence
//! adapter, and only then triggers a render. A mutation that is rejected, or
//! whose flush fails, leaves the tree exactly as it was.

use crate::config::TaskFlowConfig;
use crate::domain::search::{filter_board, BoardView};
use crate::domain::{AppState, Board, BoardId, Card, CardId, DragDescriptor, ListId};
use crate::error::{Result, TaskFlowError};
use crate::persistence::Persistence;
use crate::render::{NoopRenderer, RenderScope, Renderer};
use crate::storage::Storage;
use tracing::{error, warn};

mod boards;
mod cards;
mod drag;
mod lists;
mod prompts;

pub use drag::DropOutcome;

pub struct StateStore<S: Storage> {
    state: AppState,
    persistence: Persistence<S>,
    renderer: Box<dyn Renderer>,
    config: TaskFlowConfig,
    load_warning: Option<TaskFlowError>,
}

impl<S: Storage> StateStore<S> {
    /// Loads the persisted state, falling back to the seed state when the
    /// stored blob is corrupt. The recovery is reported by [`load_warning`](Self::load_warning).
    pub async fn open(storage: S, config: TaskFlowConfig) -> Result<Self> {
        let persistence = Persistence::new(storage, &config);
        let loaded = persistence.load_or_seed().await?;
        Ok(Self {
            state: loaded.state,
            persistence,
            renderer: Box::new(NoopRenderer),
            config,
            load_warning: loaded.warning,
        })
    }

    /// Replaces the render trigger
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn config(&self) -> &TaskFlowConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    /// Why the persisted state was discarded at open, if it was
    pub fn load_warning(&self) -> Option<&TaskFlowError> {
        self.load_warning.as_ref()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn boards(&self) -> &[Board] {
        &self.state.boards
    }

    pub fn board(&self, board_id: &BoardId) -> Option<&Board> {
        self.state.find_board(board_id)
    }

    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.state.active_board_id.as_ref()
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.state.active_board()
    }

    /// The active board with cards filtered by a free-text query
    pub fn filtered_active_board(&self, query: &str) -> Option<BoardView<'_>> {
        self.active_board().map(|board| filter_board(board, query))
    }

    /// Looks up a card on the active board
    pub fn find_card(&self, card_id: &CardId, list_id: &ListId) -> Option<&Card> {
        self.active_board()?.find_card(list_id, card_id)
    }

    pub fn dragged_element(&self) -> Option<&DragDescriptor> {
        self.state.dragged_element.as_ref()
    }

    /// Applies `mutate`, flushes, then renders `scope`.
    async fn commit<T>(
        &mut self,
        operation: &'static str,
        scope: RenderScope,
        mutate: impl FnOnce(&mut AppState) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.state.clone();
        match mutate(&mut self.state) {
            Ok(value) => {
                self.flush(snapshot, scope).await?;
                Ok(value)
            }
            Err(err) => {
                self.state = snapshot;
                warn!(operation, error = %err, "operation rejected");
                Err(err)
            }
        }
    }

    /// Persists the current state; on failure restores `snapshot`
    async fn flush(&mut self, snapshot: AppState, scope: RenderScope) -> Result<()> {
        if let Err(err) = self.persistence.save(&self.state).await {
            error!(error = %err, "failed to persist state, rolling back");
            self.state = snapshot;
            return Err(err);
        }
        self.renderer.render(scope);
        Ok(())
    }
}
