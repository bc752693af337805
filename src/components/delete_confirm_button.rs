//! Delete Confirm Button Component
//!
//! Inline delete confirmation: trash button, then "Delete" / "Cancel".

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="icon-btn delete-btn"
                title="Delete task"
                on:click=move |_| set_confirm_delete.set(true)
            >
                "🗑"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
