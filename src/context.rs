//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::auth::AuthService;
use crate::route::{Navigate, Route};
use crate::tasks::{TaskListController, TaskListState};

/// Task controller as wired into the UI (state lives in a signal)
pub type TaskController = TaskListController<RwSignal<TaskListState>>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible view - read
    pub route: ReadSignal<Route>,
    /// Currently visible view - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Follow `location.hash` after back/forward or a link click
    pub fn sync_from_location(&self) {
        let route = location_route();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

impl Navigate for AppContext {
    fn navigate(&self, route: Route) {
        self.set_route.set(route);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(route.to_hash());
        }
    }
}

/// View named by the current `location.hash`
pub fn location_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_auth() -> AuthService {
    expect_context::<AuthService>()
}

pub fn use_task_controller() -> TaskController {
    expect_context::<TaskController>()
}
