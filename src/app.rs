//! TaskFlow Frontend App
//!
//! Composition root: builds the services once, provides them via context,
//! and switches between views.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, ReqwestTransport};
use crate::auth::{AuthService, BrowserStorage, TokenStore};
use crate::config::AppConfig;
use crate::context::{location_route, AppContext, TaskController};
use crate::pages::{DashboardPage, LandingPage, SignInPage, SignUpPage};
use crate::route::{Navigate, Route};
use crate::store::SessionState;
use crate::tasks::{TaskListController, TaskListState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Services
    let tokens = TokenStore::new(Arc::new(BrowserStorage::new(config.token_storage_key.clone())));
    let api = ApiClient::new(&config.api_base_url, Arc::new(ReqwestTransport::new()), tokens.clone());
    let auth = AuthService::new(api.clone(), tokens);
    let tasks: TaskController = TaskListController::new(api, RwSignal::new(TaskListState::new()));

    // State
    let session = Store::new(SessionState {
        authenticated: auth.check_auth(),
        email: None,
    });
    let (route, set_route) = signal(location_route());
    let ctx = AppContext::new((route, set_route));

    // Provide context to all children
    provide_context(ctx);
    provide_context(session);
    provide_context(auth.clone());
    provide_context(tasks);

    // Back/forward and plain `#/...` links
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_from_location());

    // Views needing a credential bounce to sign-in
    let guard_auth = auth.clone();
    Effect::new(move |_| {
        let current = route.get();
        if current.requires_auth() && !guard_auth.check_auth() {
            tracing::info!(?current, "not signed in, redirecting");
            ctx.navigate(Route::sign_in());
        }
    });

    view! {
        <div class="app-root">
            {move || match route.get() {
                Route::Landing => view! { <LandingPage /> }.into_any(),
                Route::SignIn { registered } => view! { <SignInPage registered=registered /> }.into_any(),
                Route::SignUp => view! { <SignUpPage /> }.into_any(),
                Route::Dashboard if auth.check_auth() => view! { <DashboardPage /> }.into_any(),
                Route::Dashboard => ().into_any(),
            }}
        </div>
    }
}
