pub mod board;
pub mod card;
pub mod drag;
pub mod id;
pub mod list;
pub mod search;
pub mod state;

pub use board::Board;
pub use card::{parse_due_date, parse_labels, Card, CardUpdate, Label, DEFAULT_LABEL_COLOR};
pub use drag::{DragDescriptor, DragKind, DropRejection, DropTarget};
pub use id::{generate_id, BoardId, CardId, IdKind, ListId};
pub use list::List;
pub use state::AppState;

use crate::error::{Result, TaskFlowError};

/// Trims a required text field, rejecting blank input
pub(crate) fn require_text(text: &str, field: &'static str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskFlowError::Validation { field });
    }
    Ok(text.to_string())
}
