//! Dashboard Page
//!
//! Header with sign-out, then the task list.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BrandMark, TaskList};
use crate::context::{use_app_context, use_auth, use_task_controller};
use crate::store::{store_signed_out, use_session_store, SessionStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let ctx = use_app_context();
    let session = use_session_store();
    let controller = use_task_controller();

    let today = Local::now().format("%A, %b %-d").to_string();
    let (signing_out, set_signing_out) = signal(false);

    let on_sign_out = move |_| {
        set_signing_out.set(true);
        let auth = auth.clone();
        let controller = controller.clone();
        spawn_local(async move {
            auth.sign_out(&ctx).await;
            store_signed_out(&session);
            controller.reset();
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <BrandMark compact=true />
                <div class="dashboard-user">
                    {move || session.email().get().map(|email| view! {
                        <span class="user-email">{email}</span>
                    })}
                    <button
                        class="secondary-btn"
                        disabled=move || signing_out.get()
                        on:click=on_sign_out
                    >
                        {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                    </button>
                </div>
            </header>

            <main class="dashboard-main">
                <div class="dashboard-title">
                    <div>
                        <h2>"My Tasks"</h2>
                        <p>"Stay organized and get things done"</p>
                    </div>
                    <span class="date-chip">{today}</span>
                </div>

                <TaskList />
            </main>
        </div>
    }
}
