use chrono::Utc;

use crate::io::slot::{SlotError, StateSlot};
use crate::model::task::{Category, Task};

/// Slot key holding the JSON-serialized ordered task list.
pub const TASKS_KEY: &str = "todos";
/// Slot key holding the JSON-serialized dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// The ordered task list plus the display-mode flag, kept continuously in
/// sync with the persistence slot: every mutation rewrites the affected key
/// before returning. The two keys are independent — task mutations never
/// touch the flag, and vice versa.
pub struct TaskStore<S: StateSlot> {
    tasks: Vec<Task>,
    dark_mode: bool,
    slot: S,
}

/// Read-only projections over the list; recomputed per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub completed: usize,
    pub total: usize,
}

impl StoreStats {
    /// Completion percentage in 0..=100. An empty list reads as 0%.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

impl<S: StateSlot> TaskStore<S> {
    /// Rehydrate from the slot. Absent or unparseable contents fall back to
    /// an empty list / light mode, silently.
    pub fn load(slot: S) -> Self {
        let tasks = slot
            .get(TASKS_KEY)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        let dark_mode = slot
            .get(DARK_MODE_KEY)
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or(false);
        TaskStore {
            tasks,
            dark_mode,
            slot,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Give the slot back, e.g. to rehydrate a second store from it.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Append a new task. Text is trimmed; empty text is a no-op returning
    /// `Ok(None)` with nothing persisted. Returns the new task's id.
    pub fn add(&mut self, text: &str, category: Category) -> Result<Option<i64>, SlotError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.next_id();
        self.tasks
            .push(Task::new(id, text.to_string(), category, Utc::now()));
        self.persist_tasks()?;
        Ok(Some(id))
    }

    /// Flip the completed flag on the matching task. An unknown id leaves the
    /// list unchanged; the slot is rewritten either way. Returns whether a
    /// task matched.
    pub fn toggle(&mut self, id: i64) -> Result<bool, SlotError> {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        };
        self.persist_tasks()?;
        Ok(found)
    }

    /// Remove the matching task, preserving the relative order of the rest.
    /// An unknown id is a no-op; the slot is rewritten either way.
    pub fn remove(&mut self, id: i64) -> Result<bool, SlotError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.persist_tasks()?;
        Ok(removed)
    }

    /// Remove the task at `from` and reinsert it at `to` in a single step,
    /// preserving the relative order of all other tasks. Out-of-range
    /// indices and `from == to` are no-ops with nothing persisted.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<bool, SlotError> {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return Ok(false);
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.persist_tasks()?;
        Ok(true)
    }

    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), SlotError> {
        self.dark_mode = dark;
        self.persist_dark_mode()
    }

    /// Flip the display-mode flag and persist it. Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, SlotError> {
        self.dark_mode = !self.dark_mode;
        self.persist_dark_mode()?;
        Ok(self.dark_mode)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            total: self.tasks.len(),
        }
    }

    /// Fresh identifier: the current time in milliseconds, bumped past the
    /// newest existing id when two creations land on the same millisecond.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    fn persist_tasks(&mut self) -> Result<(), SlotError> {
        let json = serde_json::to_string(&self.tasks)?;
        self.slot.set(TASKS_KEY, &json)
    }

    fn persist_dark_mode(&mut self) -> Result<(), SlotError> {
        let value = if self.dark_mode { "true" } else { "false" };
        self.slot.set(DARK_MODE_KEY, value)
    }
}
