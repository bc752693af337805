use leptos::prelude::*;

use crate::components::{BrandMark, SignInForm};
use crate::route::Route;

#[component]
pub fn SignInPage(registered: bool) -> impl IntoView {
    view! {
        <div class="auth-page">
            <a class="auth-brand" href=Route::Landing.to_hash()><BrandMark /></a>
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome back"</h1>
                    <p>"Sign in to continue to your tasks"</p>
                </div>
                <SignInForm registered=registered />
            </div>
        </div>
    }
}
