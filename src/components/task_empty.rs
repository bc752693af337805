//! Empty State Component

use leptos::prelude::*;

/// Shown when the task list has no entries
#[component]
pub fn TaskEmpty() -> impl IntoView {
    view! {
        <div class="task-empty">
            <div class="task-empty-icon">"📋"</div>
            <h3>"No tasks yet"</h3>
            <p>"Your task list is empty. Add your first task above and start getting things done!"</p>
            <span class="task-empty-hint">"↑ Type in the box above to add a task"</span>
        </div>
    }
}
