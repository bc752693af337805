//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Who is signed in, as far as the UI knows
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// A credential is stored
    pub authenticated: bool,
    /// Address used for the last sign-in (not persisted)
    pub email: Option<String>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_signed_in(store: &SessionStore, email: &str) {
    *store.authenticated().write() = true;
    *store.email().write() = Some(email.to_string());
}

pub fn store_signed_out(store: &SessionStore) {
    *store.authenticated().write() = false;
    *store.email().write() = None;
}
