//! # TaskFlow Core
//!
//! State mutation and drag-and-drop reordering engine for a single-user
//! task board.
//!
//! The crate owns the board hierarchy (boards, lists, cards), applies every
//! user mutation against it, persists the whole state as one JSON blob after
//! each committed change and tells the presentation layer what to redraw.
//! Rendering and dialogs stay behind the [`Renderer`] and [`Dialog`] traits.

pub mod command;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod render;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use command::{Command, CommandOutcome};
pub use config::TaskFlowConfig;
pub use dialog::{CardForm, Dialog, InputRequest};
pub use domain::{
    search::{filter_board, search_cards, BoardView},
    AppState, Board, BoardId, Card, CardId, CardUpdate, DragDescriptor, DropRejection, DropTarget,
    Label, List, ListId,
};
pub use error::{EntityKind, Result, TaskFlowError};
pub use persistence::Persistence;
pub use render::{NoopRenderer, RenderScope, Renderer};
#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, Storage};
pub use store::{DropOutcome, StateStore};
