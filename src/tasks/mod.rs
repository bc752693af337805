//! Task List
//!
//! Session cache of the user's tasks and the controller that keeps it in
//! step with the server.

mod controller;
mod optimistic;
mod state;

pub use controller::TaskListController;
pub use state::{StateCell, TaskListState};
