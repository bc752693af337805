//! Task Form Component
//!
//! Title input with an optional, collapsible description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_task_controller;
use crate::validation;

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let controller = use_task_controller();
    let state = *controller.state();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (show_description, set_show_description) = signal(false);

    let submitting = move || state.with(|s| s.submitting);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get();
        if validation::task_title(&new_title).is_err() {
            return;
        }
        let new_description = description.get();

        set_title.set(String::new());
        set_description.set(String::new());
        set_show_description.set(false);

        let controller = controller.clone();
        spawn_local(async move {
            let _ = controller.create(&new_title, Some(&new_description)).await;
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="task-form-row">
                <span class="task-form-bullet"></span>
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=submitting
                />
                <button
                    type="submit"
                    class="primary-btn"
                    disabled=move || submitting() || title.get().trim().is_empty()
                >
                    {move || if submitting() { "Adding..." } else { "Add Task" }}
                </button>
            </div>

            {move || if show_description.get() {
                view! {
                    <div class="task-form-description">
                        <textarea
                            rows="2"
                            placeholder="Add a description (optional)"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            disabled=submitting
                        ></textarea>
                        <button
                            type="button"
                            class="link-btn"
                            on:click=move |_| {
                                set_show_description.set(false);
                                set_description.set(String::new());
                            }
                        >
                            "Remove description"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| set_show_description.set(true)
                    >
                        "+ Add description"
                    </button>
                }.into_any()
            }}
        </form>
    }
}
