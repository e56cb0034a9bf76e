use crate::domain::card::Card;
use crate::domain::id::{CardId, ListId};
use serde::{Deserialize, Serialize};

/// Ordered column of cards within a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            cards: Vec::new(),
        }
    }

    /// Index of the card with the given id
    pub fn card_position(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }

    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == card_id)
    }

    pub fn find_card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == card_id)
    }

    /// Removes and returns the card with the given id
    pub fn take_card(&mut self, card_id: &CardId) -> Option<Card> {
        let index = self.card_position(card_id)?;
        Some(self.cards.remove(index))
    }
}
