//! Brand Mark Component

use leptos::prelude::*;

/// Logo tile plus product name
#[component]
pub fn BrandMark(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <div class=if compact { "brand brand-compact" } else { "brand" }>
            <div class="brand-logo">"✓"</div>
            <span class="brand-name">"TaskFlow"</span>
        </div>
    }
}
