//! Drag state machine: Idle -> Dragging on drag-start, back to Idle on drop
//! or drag-end. Only a drop that actually relocates something mutates the
//! board, and only the active board is ever touched.

use super::StateStore;
use crate::domain::drag::{relocate_card, relocate_list};
use crate::domain::{DragDescriptor, DropRejection, DropTarget};
use crate::error::Result;
use crate::render::RenderScope;
use crate::storage::Storage;
use tracing::{debug, info};

/// What a drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged card or list was moved and the board persisted
    Moved,
    /// Nothing changed
    Ignored(DropRejection),
}

impl<S: Storage> StateStore<S> {
    /// Records what is being dragged. The board is not modified.
    pub fn drag_start(&mut self, element: DragDescriptor) {
        if let Some(previous) = &self.state.dragged_element {
            debug!(?previous, "drag started while another was in progress");
        }
        debug!(kind = %element.kind(), ?element, "drag started");
        self.state.dragged_element = Some(element);
    }

    /// Ends a drag without a drop; the board is left untouched.
    ///
    /// Returns the abandoned descriptor, if a drag was in progress.
    pub fn drag_end(&mut self) -> Option<DragDescriptor> {
        let previous = self.state.dragged_element.take();
        if previous.is_some() {
            debug!(?previous, "drag ended");
            self.renderer.render(RenderScope::Board);
        }
        previous
    }

    /// Drops the dragged element on `target` and returns to idle.
    ///
    /// A stray drop with no drag in progress, or one whose ids no longer
    /// resolve on the active board, is ignored without persisting.
    pub async fn drop(&mut self, target: DropTarget) -> Result<DropOutcome> {
        let Some(dragged) = self.state.dragged_element.take() else {
            debug!("drop without drag in progress");
            return Ok(DropOutcome::Ignored(DropRejection::NotDragging));
        };

        let snapshot = self.state.clone();
        let Ok(board) = self.state.active_board_mut() else {
            debug!("drop with no active board");
            return Ok(DropOutcome::Ignored(DropRejection::NoActiveBoard));
        };

        let relocated = match &dragged {
            DragDescriptor::Card { id, source_list_id } => {
                relocate_card(board, id, source_list_id, &target)
            }
            DragDescriptor::List { id } => relocate_list(board, id, &target.list_id),
        };
        if let Err(reason) = relocated {
            debug!(?dragged, ?target, %reason, "drop ignored");
            return Ok(DropOutcome::Ignored(reason));
        }

        self.flush(snapshot, RenderScope::Board).await?;
        info!(kind = %dragged.kind(), ?dragged, ?target, "relocated");
        Ok(DropOutcome::Moved)
    }
}
