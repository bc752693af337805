//! Sign-In Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::context::{use_app_context, use_auth};
use crate::route::{Navigate, Route};
use crate::store::{store_signed_in, use_session_store};
use crate::validation;

/// Email/password form; on success the dashboard is shown.
///
/// # Arguments
/// * `registered` - Show the "account created" notice
#[component]
pub fn SignInForm(#[prop(optional)] registered: bool) -> impl IntoView {
    let auth = use_auth();
    let ctx = use_app_context();
    let session = use_session_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if let Err(e) = validation::sign_in(&email_value, &password_value) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_loading.set(true);
        let auth = auth.clone();
        spawn_local(async move {
            let result = auth.sign_in(&email_value, &password_value).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    store_signed_in(&session, &email_value);
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => set_error.set(Some(e.detail)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            {registered.then(|| view! {
                <div class="notice-success">"Account created successfully! Please sign in."</div>
            })}

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
                placeholder="Enter your password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                required
            />

            <ErrorBanner message=error />

            <button type="submit" class="primary-btn wide" disabled=move || loading.get()>
                {move || if loading.get() { "Signing in..." } else { "Sign in" }}
            </button>

            <p class="auth-switch">
                "Don't have an account? "
                <a href=Route::SignUp.to_hash()>"Create one"</a>
            </p>
        </form>
    }
}
