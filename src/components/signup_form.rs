//! Sign-Up Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::context::{use_app_context, use_auth};
use crate::route::{Navigate, Route};
use crate::validation::{self, MIN_PASSWORD_LEN};

/// Registration form; on success the sign-in view is shown with a notice.
#[component]
pub fn SignUpForm() -> impl IntoView {
    let auth = use_auth();
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if let Err(e) = validation::sign_up(&email_value, &password_value, &confirm.get()) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_loading.set(true);
        let auth = auth.clone();
        spawn_local(async move {
            let result = auth.sign_up(&email_value, &password_value).await;
            set_loading.set(false);
            match result {
                Ok(_) => ctx.navigate(Route::SignIn { registered: true }),
                Err(e) => set_error.set(Some(e.detail)),
            }
        });
    };

    let min_length = MIN_PASSWORD_LEN.to_string();

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label for="email">"Email address"</label>
            <input
                id="email"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                required
            />

            <label for="password">"Password"</label>
            <input
                id="password"
                type="password"
                placeholder="At least 8 characters"
                minlength=min_length.clone()
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                required
            />
            <p class="field-hint">"Must be at least 8 characters long"</p>

            <label for="confirm-password">"Confirm password"</label>
            <input
                id="confirm-password"
                type="password"
                placeholder="Confirm your password"
                minlength=min_length
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                required
            />

            <ErrorBanner message=error />

            <button type="submit" class="primary-btn wide" disabled=move || loading.get()>
                {move || if loading.get() { "Creating account..." } else { "Create account" }}
            </button>

            <p class="auth-switch">
                "Already have an account? "
                <a href=Route::sign_in().to_hash()>"Sign in instead"</a>
            </p>
        </form>
    }
}
