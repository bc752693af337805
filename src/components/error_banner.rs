//! Error Banner Component

use leptos::prelude::*;

/// Renders nothing while `message` is `None`
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    /// Shows a close button when provided
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-icon">"!"</span>
                    <span class="error-text">{text}</span>
                    {on_dismiss.map(|dismiss| view! {
                        <button class="error-dismiss" on:click=move |_| dismiss.run(())>"×"</button>
                    })}
                </div>
            }
        })
    }
}
