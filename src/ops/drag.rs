use crate::io::slot::{SlotError, StateSlot};
use crate::ops::store::TaskStore;

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag is in progress; the value is the dragged record's current
    /// position in the list.
    Dragging(usize),
}

/// Tracks an in-progress reorder gesture and repositions the dragged record
/// as the cursor crosses other records. Transient overlay on the store: holds
/// only the dragged index and delegates every position change to
/// [`TaskStore::reorder`].
///
/// Reordering happens incrementally, one step per crossing, so the visible
/// order follows the cursor continuously — a live-preview reorder rather than
/// commit-on-drop. A gesture that ends without crossing anything is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        DragController::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Current position of the dragged record, if a drag is in progress.
    pub fn dragged(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(i) => Some(i),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start dragging the record at `index`.
    pub fn begin(&mut self, index: usize) {
        self.state = DragState::Dragging(index);
    }

    /// The cursor is now over position `over`. No-op when idle or when
    /// `over` is where the dragged record already sits; otherwise the record
    /// moves to `over` in one atomic reorder and keeps following the cursor.
    pub fn drag_over<S: StateSlot>(
        &mut self,
        store: &mut TaskStore<S>,
        over: usize,
    ) -> Result<bool, SlotError> {
        let dragged = match self.state {
            DragState::Idle => return Ok(false),
            DragState::Dragging(i) => i,
        };
        if dragged == over {
            return Ok(false);
        }
        let moved = store.reorder(dragged, over)?;
        if moved {
            // Only track positions the record actually reached; an
            // out-of-range crossing leaves the gesture where it was.
            self.state = DragState::Dragging(over);
        }
        Ok(moved)
    }

    /// End the gesture, whether or not one was in progress.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}
