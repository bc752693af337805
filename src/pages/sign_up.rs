use leptos::prelude::*;

use crate::components::{BrandMark, SignUpForm};
use crate::route::Route;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <a class="auth-brand" href=Route::Landing.to_hash()><BrandMark /></a>
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Create your account"</h1>
                    <p>"Start organizing your tasks in seconds"</p>
                </div>
                <SignUpForm />
            </div>
        </div>
    }
}
