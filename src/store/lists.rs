use super::StateStore;
use crate::domain::ListId;
use crate::error::Result;
use crate::render::RenderScope;
use crate::storage::Storage;
use tracing::info;

impl<S: Storage> StateStore<S> {
    /// Appends an empty list to the active board
    pub async fn add_list(&mut self, name: &str) -> Result<ListId> {
        let id = self
            .commit("add_list", RenderScope::Board, |state| {
                state.active_board_mut()?.add_list(name)
            })
            .await?;
        info!(list_id = %id, "created list");
        Ok(id)
    }

    pub async fn rename_list(&mut self, list_id: &ListId, name: &str) -> Result<()> {
        self.commit("rename_list", RenderScope::Board, |state| {
            state.active_board_mut()?.rename_list(list_id, name)
        })
        .await?;
        info!(list_id = %list_id, "renamed list");
        Ok(())
    }

    /// Deletes a list of the active board together with its cards
    pub async fn delete_list(&mut self, list_id: &ListId) -> Result<()> {
        let removed = self
            .commit("delete_list", RenderScope::Board, |state| {
                state.active_board_mut()?.delete_list(list_id)
            })
            .await?;
        info!(list_id = %list_id, cards = removed.cards.len(), "deleted list");
        Ok(())
    }
}
