//! Progress Bar Component
//!
//! "N of M completed" with a proportional fill.

use leptos::prelude::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] completed: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    /// 0.0 ..= 100.0
    #[prop(into)] percent: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="progress-card">
            <div class="progress-header">
                <span class="progress-label">"Progress"</span>
                <span class="progress-count">
                    {move || format!("{} of {} completed", completed.get(), total.get())}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%;", percent.get())
                ></div>
            </div>
        </div>
    }
}
