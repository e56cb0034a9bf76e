use crate::domain::board::Board;
use crate::domain::card::Card;
use crate::domain::id::{BoardId, ListId};
use crate::domain::list::List;
use crate::domain::state::AppState;

/// Case-insensitive match of `query` against a card's title or description.
///
/// A blank query matches every card.
pub fn matches(card: &Card, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    card.title.to_lowercase().contains(&query)
        || card.description.to_lowercase().contains(&query)
}

/// A list as shown with a search filter applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub list: &'a List,
    pub cards: Vec<&'a Card>,
}

/// A board as shown with a search filter applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub lists: Vec<ListView<'a>>,
}

/// Filters every list's cards by `query`. Lists are never hidden and order is kept.
pub fn filter_board<'a>(board: &'a Board, query: &str) -> BoardView<'a> {
    let lists = board
        .lists
        .iter()
        .map(|list| ListView {
            list,
            cards: list.cards.iter().filter(|card| matches(card, query)).collect(),
        })
        .collect();
    BoardView { board, lists }
}

/// A card found by [`search_cards`], with the path leading to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHit<'a> {
    pub board_id: &'a BoardId,
    pub list_id: &'a ListId,
    pub card: &'a Card,
}

/// Searches cards across every board
pub fn search_cards<'a>(state: &'a AppState, query: &str) -> Vec<CardHit<'a>> {
    state
        .boards
        .iter()
        .flat_map(|board| {
            board.lists.iter().flat_map(move |list| {
                list.cards
                    .iter()
                    .filter(move |card| matches(card, query))
                    .map(move |card| CardHit {
                        board_id: &board.id,
                        list_id: &list.id,
                        card,
                    })
            })
        })
        .collect()
}
