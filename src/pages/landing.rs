//! Landing Page
//!
//! Marketing page; the nav switches to "Go to Dashboard" when signed in.

use leptos::prelude::*;

use crate::components::BrandMark;
use crate::route::Route;
use crate::store::{use_session_store, SessionStateStoreFields};

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚡", "Lightning Fast", "Add, edit, and complete tasks in seconds. Our interface is designed for speed and efficiency."),
    ("🔒", "Secure & Private", "Your data is encrypted and secure. Only you can access your tasks and personal information."),
    ("📱", "Works Everywhere", "Access your tasks from any device. Desktop, tablet, or phone - we've got you covered."),
];

/// Sample rows for the hero preview (title, done)
const PREVIEW_TASKS: &[(&str, bool)] = &[
    ("Design new landing page", true),
    ("Build task management API", false),
    ("Deploy to production", false),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session_store();
    let authenticated = move || session.authenticated().get();

    view! {
        <div class="landing">
            <nav class="landing-nav">
                <BrandMark />
                <div class="landing-nav-links">
                    <Show
                        when=authenticated
                        fallback=|| view! {
                            <a class="nav-link" href=Route::sign_in().to_hash()>"Sign In"</a>
                            <a class="pill-btn" href=Route::SignUp.to_hash()>"Get Started"</a>
                        }
                    >
                        <a class="pill-btn" href=Route::Dashboard.to_hash()>"Go to Dashboard"</a>
                    </Show>
                </div>
            </nav>

            <main class="hero">
                <h1>
                    "Organize your life,"
                    <span class="hero-accent">"one task at a time"</span>
                </h1>
                <p class="hero-lead">
                    "TaskFlow helps you stay organized, focused, and in control. "
                    "Manage your tasks effortlessly with a clean and intuitive interface."
                </p>
                <div class="hero-actions">
                    <a class="pill-btn large" href=Route::SignUp.to_hash()>"Get Started Free →"</a>
                    <a class="outline-btn large" href=Route::sign_in().to_hash()>"I have an account"</a>
                </div>

                <div class="hero-preview">
                    {PREVIEW_TASKS.iter().map(|(title, done)| view! {
                        <div class=if *done { "preview-row done" } else { "preview-row" }>
                            <span class="preview-check">{done.then_some("✓")}</span>
                            <span class="preview-title">{*title}</span>
                        </div>
                    }).collect_view()}
                </div>
            </main>

            <section class="features">
                <h2>"Everything you need to stay productive"</h2>
                <div class="feature-grid">
                    {FEATURES.iter().map(|(icon, title, text)| view! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to get organized?"</h2>
                <p>"Join the people who have transformed their productivity with TaskFlow."</p>
                <a class="pill-btn large" href=Route::SignUp.to_hash()>"Start for Free →"</a>
            </section>

            <footer class="landing-footer">
                <BrandMark compact=true />
                <p>"© 2026 TaskFlow. All rights reserved."</p>
            </footer>
        </div>
    }
}
