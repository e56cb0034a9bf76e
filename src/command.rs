//! Commands the presentation layer sends for user interactions.
//!
//! Each variant maps to exactly one store operation, so an event handler
//! only has to build a `Command` from the ids it rendered and dispatch it.

use crate::domain::{BoardId, CardId, CardUpdate, DragDescriptor, DropTarget, ListId};
use crate::error::Result;
use crate::storage::Storage;
use crate::store::{DropOutcome, StateStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    AddBoard {
        name: String,
    },
    RenameBoard {
        board_id: BoardId,
        name: String,
    },
    DeleteBoard {
        board_id: BoardId,
    },
    SetActiveBoard {
        board_id: BoardId,
    },
    AddList {
        name: String,
    },
    RenameList {
        list_id: ListId,
        name: String,
    },
    DeleteList {
        list_id: ListId,
    },
    AddCard {
        list_id: ListId,
        title: String,
    },
    UpdateCard {
        card_id: CardId,
        list_id: ListId,
        #[serde(default)]
        update: CardUpdate,
    },
    DeleteCard {
        card_id: CardId,
        list_id: ListId,
    },
    DragStart {
        element: DragDescriptor,
    },
    Drop {
        target: DropTarget,
    },
    DragEnd,
}

impl Command {
    /// The interaction, e.g. `add` or `drop`
    pub fn verb(&self) -> &'static str {
        match self {
            Self::AddBoard { .. } | Self::AddList { .. } | Self::AddCard { .. } => "add",
            Self::RenameBoard { .. } | Self::RenameList { .. } => "rename",
            Self::UpdateCard { .. } => "update",
            Self::DeleteBoard { .. } | Self::DeleteList { .. } | Self::DeleteCard { .. } => {
                "delete"
            }
            Self::SetActiveBoard { .. } => "activate",
            Self::DragStart { .. } => "drag-start",
            Self::Drop { .. } => "drop",
            Self::DragEnd => "drag-end",
        }
    }

    /// The entity kind the command acts on
    pub fn noun(&self) -> &'static str {
        match self {
            Self::AddBoard { .. }
            | Self::RenameBoard { .. }
            | Self::DeleteBoard { .. }
            | Self::SetActiveBoard { .. } => "board",
            Self::AddList { .. } | Self::RenameList { .. } | Self::DeleteList { .. } => "list",
            Self::AddCard { .. } | Self::UpdateCard { .. } | Self::DeleteCard { .. } => "card",
            Self::DragStart { element } => match element {
                DragDescriptor::Card { .. } => "card",
                DragDescriptor::List { .. } => "list",
            },
            Self::Drop { .. } | Self::DragEnd => "drag",
        }
    }
}

/// What a dispatched command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    BoardCreated(BoardId),
    ListCreated(ListId),
    CardCreated(CardId),
    Dropped(DropOutcome),
    DragCleared(Option<DragDescriptor>),
}

impl<S: Storage> StateStore<S> {
    /// Runs the operation a command names
    pub async fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        debug!(verb = command.verb(), noun = command.noun(), "dispatching command");
        let outcome = match command {
            Command::AddBoard { name } => CommandOutcome::BoardCreated(self.add_board(&name).await?),
            Command::RenameBoard { board_id, name } => {
                self.rename_board(&board_id, &name).await?;
                CommandOutcome::Done
            }
            Command::DeleteBoard { board_id } => {
                self.delete_board(&board_id).await?;
                CommandOutcome::Done
            }
            Command::SetActiveBoard { board_id } => {
                self.set_active_board(&board_id).await?;
                CommandOutcome::Done
            }
            Command::AddList { name } => CommandOutcome::ListCreated(self.add_list(&name).await?),
            Command::RenameList { list_id, name } => {
                self.rename_list(&list_id, &name).await?;
                CommandOutcome::Done
            }
            Command::DeleteList { list_id } => {
                self.delete_list(&list_id).await?;
                CommandOutcome::Done
            }
            Command::AddCard { list_id, title } => {
                CommandOutcome::CardCreated(self.add_card(&list_id, &title).await?)
            }
            Command::UpdateCard {
                card_id,
                list_id,
                update,
            } => {
                self.update_card(&card_id, &list_id, update).await?;
                CommandOutcome::Done
            }
            Command::DeleteCard { card_id, list_id } => {
                self.delete_card(&card_id, &list_id).await?;
                CommandOutcome::Done
            }
            Command::DragStart { element } => {
                self.drag_start(element);
                CommandOutcome::Done
            }
            Command::Drop { target } => CommandOutcome::Dropped(self.drop(target).await?),
            Command::DragEnd => CommandOutcome::DragCleared(self.drag_end()),
        };
        Ok(outcome)
    }
}
