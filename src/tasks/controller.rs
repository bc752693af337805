//! Task List Controller
//!
//! Orchestrates task requests and reconciles the local list with what the
//! server confirms. Every failure lands in `TaskListState::error`.
//!
//! Each operation captures `TaskListState::generation` before its request and
//! drops the response if a `reset` happened in the meantime.

use tracing::{debug, info};

use super::optimistic::optimistic;
use super::{StateCell, TaskListState};
use crate::api::ApiClient;
use crate::models::{Task, TaskId, TaskListResponse, TaskPayload};
use crate::validation::{self, ValidationError};

const TASKS_PATH: &str = "/api/tasks";
const EMPTY_RESPONSE: &str = "Empty response from server";

#[derive(Clone)]
pub struct TaskListController<S> {
    api: ApiClient,
    state: S,
}

impl<S: StateCell<TaskListState>> TaskListController<S> {
    pub fn new(api: ApiClient, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Start an operation: capture the generation and apply `f`.
    fn begin<R>(&self, f: impl FnOnce(&mut TaskListState) -> R) -> Option<(u64, R)> {
        self.state.update(|s| (s.generation, f(s)))
    }

    /// Apply `f` only if no reset happened since `generation` was captured.
    fn settle(&self, generation: u64, f: impl FnOnce(&mut TaskListState)) {
        self.state.update(|s| {
            if s.generation == generation {
                f(s);
            } else {
                debug!(generation, current = s.generation, "stale task response dropped");
            }
        });
    }

    /// Replace the local list with the server's.
    pub async fn load(&self) {
        let Some((generation, ())) = self.begin(|s| {
            s.loading = true;
            s.error = None;
        }) else {
            return;
        };

        let result = self.api.get::<TaskListResponse>(TASKS_PATH).await;

        self.settle(generation, |s| {
            match result {
                Ok(Some(response)) => {
                    debug!(count = response.tasks.len(), "tasks loaded");
                    s.replace_all(response.tasks);
                }
                Ok(None) => s.error = Some(EMPTY_RESPONSE.to_string()),
                Err(err) => s.error = Some(err.detail),
            }
            s.loading = false;
        });
    }

    /// Create a task and put it at the head of the list.
    ///
    /// Blank titles are rejected before any request is made.
    pub async fn create(&self, title: &str, description: Option<&str>) -> Result<(), ValidationError> {
        let title = validation::task_title(title)?;
        let description = validation::task_description(description);

        let Some((generation, ())) = self.begin(|s| {
            s.submitting = true;
            s.error = None;
        }) else {
            return Ok(());
        };

        let result = self.api.post::<Task, _>(TASKS_PATH, &TaskPayload { title, description }).await;

        self.settle(generation, |s| {
            match result {
                Ok(Some(task)) => {
                    info!(id = %task.id, "task created");
                    s.prepend(task);
                }
                Ok(None) => s.error = Some(EMPTY_RESPONSE.to_string()),
                Err(err) => s.error = Some(err.detail),
            }
            s.submitting = false;
        });
        Ok(())
    }

    /// Flip completion immediately, roll back if the server refuses.
    ///
    /// A toggle for a task that already has one in flight is dropped.
    pub async fn toggle(&self, id: &TaskId) {
        let generation = match self.begin(|s| s.begin_toggle(id)) {
            Some((generation, true)) => generation,
            _ => {
                debug!(%id, "toggle skipped");
                return;
            }
        };

        let path = format!("{}/{}/toggle", TASKS_PATH, id);
        let outcome = optimistic(
            &self.state,
            |s: &mut TaskListState| s.flip_completed(id),
            |s, previous| {
                if s.generation == generation {
                    s.set_completed(id, previous);
                }
            },
            || self.api.patch::<Task>(&path),
        )
        .await;

        self.settle(generation, |s| {
            s.pending_toggles.remove(id);
            match outcome {
                // Server state wins over the optimistic guess
                Some(Ok(Some(task))) => {
                    s.replace(task);
                }
                Some(Ok(None)) => s.error = Some(EMPTY_RESPONSE.to_string()),
                Some(Err(err)) => s.error = Some(err.detail),
                None => {}
            }
        });
    }

    /// Save title/description; the list changes only on success.
    pub async fn update(&self, id: &TaskId, title: &str, description: Option<&str>) -> Result<(), ValidationError> {
        let title = validation::task_title(title)?;
        let description = validation::task_description(description);
        let Some((generation, ())) = self.begin(|_| ()) else {
            return Ok(());
        };

        let path = format!("{}/{}", TASKS_PATH, id);
        let result = self.api.put::<Task, _>(&path, &TaskPayload { title, description }).await;

        self.settle(generation, |s| match result {
            Ok(Some(task)) => {
                s.replace(task);
            }
            Ok(None) => s.error = Some(EMPTY_RESPONSE.to_string()),
            Err(err) => s.error = Some(err.detail),
        });
        Ok(())
    }

    pub async fn delete(&self, id: &TaskId) {
        let Some((generation, ())) = self.begin(|_| ()) else {
            return;
        };

        let path = format!("{}/{}", TASKS_PATH, id);
        let result = self.api.delete(&path).await;

        self.settle(generation, |s| match result {
            Ok(()) => {
                info!(%id, "task deleted");
                s.remove(id);
            }
            Err(err) => s.error = Some(err.detail),
        });
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Forget the cached list, e.g. after sign-out.
    ///
    /// Requests still in flight settle into nothing.
    pub fn reset(&self) {
        self.state.update(TaskListState::reset);
    }
}
