//! Dialog-driven entry points: ask the presentation layer for input, then
//! run the matching mutation. A cancelled or blank dialog mutates nothing
//! and returns `Ok(None)` (or `Ok(false)` for edits).

use super::StateStore;
use crate::dialog::{CardForm, Dialog, InputRequest};
use crate::domain::{BoardId, CardId, ListId};
use crate::error::{EntityKind, Result, TaskFlowError};
use crate::storage::Storage;

impl<S: Storage> StateStore<S> {
    fn ask(dialog: &mut dyn Dialog, request: InputRequest) -> Option<String> {
        dialog
            .prompt(&request)
            .and_then(|raw| request.confirm(&raw))
    }

    pub async fn prompt_add_board(
        &mut self,
        dialog: &mut dyn Dialog,
    ) -> Result<Option<BoardId>> {
        match Self::ask(dialog, InputRequest::create_board()) {
            Some(name) => self.add_board(&name).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn prompt_rename_board(
        &mut self,
        dialog: &mut dyn Dialog,
        board_id: &BoardId,
    ) -> Result<bool> {
        let current = self
            .board(board_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Board, board_id))?
            .name
            .clone();
        match Self::ask(dialog, InputRequest::rename_board(&current)) {
            Some(name) => self.rename_board(board_id, &name).await.map(|_| true),
            None => Ok(false),
        }
    }

    pub async fn prompt_add_list(
        &mut self,
        dialog: &mut dyn Dialog,
    ) -> Result<Option<ListId>> {
        if self.active_board().is_none() {
            return Err(TaskFlowError::NoActiveBoard);
        }
        match Self::ask(dialog, InputRequest::add_list()) {
            Some(name) => self.add_list(&name).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn prompt_rename_list(
        &mut self,
        dialog: &mut dyn Dialog,
        list_id: &ListId,
    ) -> Result<bool> {
        let current = self
            .active_board()
            .ok_or(TaskFlowError::NoActiveBoard)?
            .find_list(list_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::List, list_id))?
            .name
            .clone();
        match Self::ask(dialog, InputRequest::rename_list(&current)) {
            Some(name) => self.rename_list(list_id, &name).await.map(|_| true),
            None => Ok(false),
        }
    }

    pub async fn prompt_add_card(
        &mut self,
        dialog: &mut dyn Dialog,
        list_id: &ListId,
    ) -> Result<Option<CardId>> {
        match Self::ask(dialog, InputRequest::add_card()) {
            Some(title) => self.add_card(list_id, &title).await.map(Some),
            None => Ok(None),
        }
    }

    /// Opens the card editor prefilled from the card and applies what was submitted
    pub async fn prompt_edit_card(
        &mut self,
        dialog: &mut dyn Dialog,
        card_id: &CardId,
        list_id: &ListId,
    ) -> Result<bool> {
        let card = self
            .find_card(card_id, list_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Card, card_id))?;
        let Some(form) = dialog.edit_card(CardForm::from_card(card)) else {
            return Ok(false);
        };
        let update = form.into_update(&self.config)?;
        self.update_card(card_id, list_id, update).await?;
        Ok(true)
    }
}
