//! Task Item Component
//!
//! One row of the task list with toggle, inline edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_task_controller;
use crate::models::Task;
use crate::validation;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let controller = use_task_controller();
    let state = *controller.state();

    let id = task.id.clone();
    let completed = task.is_completed;
    let title = task.title.clone();
    let description = task.description.clone();

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(task.title.clone());
    let (edit_description, set_edit_description) = signal(task.description.clone().unwrap_or_default());

    let toggling = {
        let id = id.clone();
        move || state.with(|s| s.is_toggling(&id))
    };

    let on_toggle = {
        let controller = controller.clone();
        let id = id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move { controller.toggle(&id).await });
        }
    };

    let on_save = {
        let controller = controller.clone();
        let id = id.clone();
        move |_| {
            let new_title = edit_title.get();
            if validation::task_title(&new_title).is_err() {
                return;
            }
            let new_description = edit_description.get();
            set_editing.set(false);

            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move {
                let _ = controller.update(&id, &new_title, Some(&new_description)).await;
            });
        }
    };

    let on_cancel = move |_| {
        set_edit_title.set(task.title.clone());
        set_edit_description.set(task.description.clone().unwrap_or_default());
        set_editing.set(false);
    };

    let on_delete = {
        let controller = controller.clone();
        let id = id.clone();
        move |_: ()| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move { controller.delete(&id).await });
        }
    };

    move || if editing.get() {
        view! {
            <div class="task-item editing">
                <input
                    type="text"
                    placeholder="Task title"
                    prop:value=move || edit_title.get()
                    on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                />
                <textarea
                    rows="2"
                    placeholder="Description (optional)"
                    prop:value=move || edit_description.get()
                    on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                ></textarea>
                <div class="task-edit-actions">
                    <button class="primary-btn" on:click=on_save.clone()>"Save"</button>
                    <button class="secondary-btn" on:click=on_cancel.clone()>"Cancel"</button>
                </div>
            </div>
        }.into_any()
    } else {
        view! {
            <div class=if completed { "task-item completed" } else { "task-item" }>
                <button
                    class=if completed { "task-toggle checked" } else { "task-toggle" }
                    title=if completed { "Mark as not done" } else { "Mark as done" }
                    disabled=toggling.clone()
                    on:click=on_toggle.clone()
                >
                    {completed.then_some("✓")}
                </button>

                <div class="task-body">
                    <h3 class="task-title">{title.clone()}</h3>
                    {description.clone().map(|text| view! { <p class="task-description">{text}</p> })}
                </div>

                <div class="task-actions">
                    <button class="icon-btn edit-btn" title="Edit task" on:click=move |_| set_editing.set(true)>
                        "✎"
                    </button>
                    <DeleteConfirmButton on_confirm=on_delete.clone() />
                </div>
            </div>
        }.into_any()
    }
}
