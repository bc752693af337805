//! Task List State
//!
//! Plain data plus the in-place mutations the controller applies after each
//! server response.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, With};

use crate::models::{Task, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListState {
    /// Newest first
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    /// A create request is in flight
    pub submitting: bool,
    /// Tasks with a toggle request in flight
    pub pending_toggles: HashSet<TaskId>,
    /// Bumped by `reset`; responses issued under an older value are dropped
    pub generation: u64,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListState {
    /// Starts in the loading state; the first fetch follows immediately.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
            submitting: false,
            pending_toggles: HashSet::new(),
            generation: 0,
        }
    }

    /// Back to the initial state, under a new generation
    pub fn reset(&mut self) {
        *self = Self { generation: self.generation + 1, ..Self::new() };
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Replace the task with the same id in place. Returns false if absent.
    pub fn replace(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(task) => {
                *task = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    /// Flip completion, returning the previous value
    pub fn flip_completed(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| &task.id == id)?;
        let previous = task.is_completed;
        task.is_completed = !previous;
        Some(previous)
    }

    pub fn set_completed(&mut self, id: &TaskId, completed: bool) {
        if let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) {
            task.is_completed = completed;
        }
    }

    /// Claim the toggle slot for `id`; false if unknown or already claimed
    pub fn begin_toggle(&mut self, id: &TaskId) -> bool {
        self.find(id).is_some() && self.pending_toggles.insert(id.clone())
    }

    pub fn is_toggling(&self, id: &TaskId) -> bool {
        self.pending_toggles.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Completion ratio in percent (0 for an empty list)
    pub fn progress_percent(&self) -> f64 {
        match self.total_count() {
            0 => 0.0,
            total => self.completed_count() as f64 * 100.0 / total as f64,
        }
    }
}

/// Shared, interior-mutable state the controller writes through.
pub trait StateCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    /// `None` if the cell is gone (e.g. a disposed signal)
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        With::try_with(self, f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}
