//! Task List Component
//!
//! Loads the session's tasks on mount and renders form, errors, progress
//! and items from the controller state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, ProgressBar, TaskEmpty, TaskForm, TaskItem};
use crate::context::use_task_controller;

#[component]
pub fn TaskList() -> impl IntoView {
    let controller = use_task_controller();
    let state = *controller.state();

    // Initial fetch
    Effect::new({
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.load().await });
        }
    });

    let dismiss_error = Callback::new(move |_: ()| controller.dismiss_error());

    let loading = move || state.with(|s| s.loading);
    let is_empty = move || state.with(|s| s.tasks.is_empty());

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! {
                <div class="task-loading">
                    <div class="spinner"></div>
                    <p>"Loading your tasks..."</p>
                </div>
            }
        >
            <div class="task-list">
                <TaskForm />

                <ErrorBanner
                    message=Signal::derive(move || state.with(|s| s.error.clone()))
                    on_dismiss=dismiss_error
                />

                <Show when=move || !is_empty() fallback=|| view! { <TaskEmpty /> }>
                    <ProgressBar
                        completed=Signal::derive(move || state.with(|s| s.completed_count()))
                        total=Signal::derive(move || state.with(|s| s.total_count()))
                        percent=Signal::derive(move || state.with(|s| s.progress_percent()))
                    />

                    <div class="task-items">
                        <For
                            each=move || state.with(|s| s.tasks.clone())
                            key=|task| {
                                // Include mutable fields so edits re-render the row
                                (
                                    task.id.clone(),
                                    task.title.clone(),
                                    task.description.clone(),
                                    task.is_completed,
                                )
                            }
                            children=move |task| view! { <TaskItem task=task /> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
