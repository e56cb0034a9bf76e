use super::StateStore;
use crate::domain::BoardId;
use crate::error::Result;
use crate::render::RenderScope;
use crate::storage::Storage;
use tracing::info;

impl<S: Storage> StateStore<S> {
    /// Creates a board and makes it the active one
    pub async fn add_board(&mut self, name: &str) -> Result<BoardId> {
        let id = self
            .commit("add_board", RenderScope::App, |state| state.add_board(name))
            .await?;
        info!(board_id = %id, "created board");
        Ok(id)
    }

    pub async fn rename_board(&mut self, board_id: &BoardId, name: &str) -> Result<()> {
        self.commit("rename_board", RenderScope::App, |state| {
            state.rename_board(board_id, name)
        })
        .await?;
        info!(board_id = %board_id, "renamed board");
        Ok(())
    }

    /// Deletes a board with all of its lists and cards.
    ///
    /// Asking the user for confirmation is up to the caller.
    pub async fn delete_board(&mut self, board_id: &BoardId) -> Result<()> {
        let removed = self
            .commit("delete_board", RenderScope::App, |state| {
                state.delete_board(board_id)
            })
            .await?;
        info!(
            board_id = %board_id,
            lists = removed.lists.len(),
            cards = removed.card_count(),
            active = ?self.state.active_board_id,
            "deleted board"
        );
        Ok(())
    }

    pub async fn set_active_board(&mut self, board_id: &BoardId) -> Result<()> {
        self.commit("set_active_board", RenderScope::App, |state| {
            state.set_active_board(board_id)
        })
        .await?;
        info!(board_id = %board_id, "switched active board");
        Ok(())
    }
}
