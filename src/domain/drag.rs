//! Drag-and-drop relocation of cards and lists within a board.
//!
//! Relocation validates every id it needs before touching the board, so a
//! rejected drop never leaves a card detached from its list.

use crate::domain::board::Board;
use crate::domain::id::{CardId, ListId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Card,
    List,
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::List => write!(f, "list"),
        }
    }
}

/// What is being dragged, recorded at drag-start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragDescriptor {
    #[serde(rename_all = "camelCase")]
    Card { id: CardId, source_list_id: ListId },
    List { id: ListId },
}

impl DragDescriptor {
    pub fn card(id: impl Into<CardId>, source_list_id: impl Into<ListId>) -> Self {
        Self::Card {
            id: id.into(),
            source_list_id: source_list_id.into(),
        }
    }

    pub fn list(id: impl Into<ListId>) -> Self {
        Self::List { id: id.into() }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Card { .. } => DragKind::Card,
            Self::List { .. } => DragKind::List,
        }
    }
}

/// Where a drag was released: always a list, optionally over one of its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub list_id: ListId,
    #[serde(default)]
    pub card_id: Option<CardId>,
}

impl DropTarget {
    pub fn list(list_id: impl Into<ListId>) -> Self {
        Self {
            list_id: list_id.into(),
            card_id: None,
        }
    }

    pub fn card(list_id: impl Into<ListId>, card_id: impl Into<CardId>) -> Self {
        Self {
            list_id: list_id.into(),
            card_id: Some(card_id.into()),
        }
    }
}

/// Why a drop left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    NotDragging,
    NoActiveBoard,
    SourceListMissing,
    DraggedMissing,
    TargetListMissing,
    DroppedOnSelf,
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDragging => write!(f, "no drag in progress"),
            Self::NoActiveBoard => write!(f, "no active board"),
            Self::SourceListMissing => write!(f, "source list not found"),
            Self::DraggedMissing => write!(f, "dragged element not found"),
            Self::TargetListMissing => write!(f, "target list not found"),
            Self::DroppedOnSelf => write!(f, "dropped onto itself"),
        }
    }
}

/// Moves a card to `target`.
///
/// Over a card the moved card lands immediately before it, otherwise it is
/// appended. The target position is looked up after the card has been
/// removed from its source, which keeps same-list moves correct.
pub fn relocate_card(
    board: &mut Board,
    card_id: &CardId,
    source_list_id: &ListId,
    target: &DropTarget,
) -> Result<(), DropRejection> {
    let source_index = board
        .list_position(source_list_id)
        .ok_or(DropRejection::SourceListMissing)?;
    let card_index = board.lists[source_index]
        .card_position(card_id)
        .ok_or(DropRejection::DraggedMissing)?;
    let target_index = board
        .list_position(&target.list_id)
        .ok_or(DropRejection::TargetListMissing)?;
    if target.card_id.as_ref() == Some(card_id) {
        return Err(DropRejection::DroppedOnSelf);
    }

    let card = board.lists[source_index].cards.remove(card_index);

    let target_list = &mut board.lists[target_index];
    let insert_at = target
        .card_id
        .as_ref()
        .and_then(|id| target_list.card_position(id))
        .unwrap_or(target_list.cards.len());
    target_list.cards.insert(insert_at, card);
    Ok(())
}

/// Moves a list so that it sits where `target_list_id` currently is.
///
/// The target position is looked up after removal, so dragging forward
/// places the list immediately before its target and dragging backward
/// takes the target's slot, pushing the target one step right.
pub fn relocate_list(
    board: &mut Board,
    list_id: &ListId,
    target_list_id: &ListId,
) -> Result<(), DropRejection> {
    if list_id == target_list_id {
        return Err(DropRejection::DroppedOnSelf);
    }
    let from = board
        .list_position(list_id)
        .ok_or(DropRejection::DraggedMissing)?;
    if board.list_position(target_list_id).is_none() {
        return Err(DropRejection::TargetListMissing);
    }

    let list = board.lists.remove(from);
    let to = board
        .list_position(target_list_id)
        .ok_or(DropRejection::TargetListMissing)?;
    board.lists.insert(to, list);
    Ok(())
}
