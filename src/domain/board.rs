use crate::domain::card::{Card, CardUpdate};
use crate::domain::id::{BoardId, CardId, ListId};
use crate::domain::list::List;
use crate::domain::require_text;
use crate::error::{EntityKind, Result, TaskFlowError};
use serde::{Deserialize, Serialize};

/// Top-level container of ordered lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(id: BoardId, name: String) -> Self {
        Self {
            id,
            name,
            lists: Vec::new(),
        }
    }

    /// Index of the list with the given id
    pub fn list_position(&self, list_id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| &list.id == list_id)
    }

    pub fn find_list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == list_id)
    }

    pub fn find_list_mut(&mut self, list_id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| &list.id == list_id)
    }

    fn list_mut_or_err(&mut self, list_id: &ListId) -> Result<&mut List> {
        self.find_list_mut(list_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::List, list_id))
    }

    /// Looks up a card inside one of this board's lists
    pub fn find_card(&self, list_id: &ListId, card_id: &CardId) -> Option<&Card> {
        self.find_list(list_id)?.find_card(card_id)
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }

    /// Appends a new empty list
    pub fn add_list(&mut self, name: &str) -> Result<ListId> {
        let name = require_text(name, "List name")?;
        let list = List::new(ListId::generate(), name);
        let id = list.id.clone();
        self.lists.push(list);
        Ok(id)
    }

    pub fn rename_list(&mut self, list_id: &ListId, name: &str) -> Result<()> {
        let list = self.list_mut_or_err(list_id)?;
        list.name = require_text(name, "List name")?;
        Ok(())
    }

    /// Removes a list together with its cards
    pub fn delete_list(&mut self, list_id: &ListId) -> Result<List> {
        let index = self
            .list_position(list_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::List, list_id))?;
        Ok(self.lists.remove(index))
    }

    /// Appends a new card to the end of a list
    pub fn add_card(&mut self, list_id: &ListId, title: &str) -> Result<CardId> {
        let list = self.list_mut_or_err(list_id)?;
        let title = require_text(title, "Card title")?;
        let card = Card::new(CardId::generate(), title);
        let id = card.id.clone();
        list.cards.push(card);
        Ok(id)
    }

    pub fn update_card(
        &mut self,
        list_id: &ListId,
        card_id: &CardId,
        update: CardUpdate,
    ) -> Result<()> {
        let card = self
            .list_mut_or_err(list_id)?
            .find_card_mut(card_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Card, card_id))?;
        card.apply(update);
        Ok(())
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: &CardId) -> Result<Card> {
        self.list_mut_or_err(list_id)?
            .take_card(card_id)
            .ok_or_else(|| TaskFlowError::not_found(EntityKind::Card, card_id))
    }
}
