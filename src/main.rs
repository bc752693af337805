//! TaskFlow Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod pages;
mod route;
mod store;
mod tasks;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);
    tracing::info!(api = %config.api_base_url, "starting TaskFlow");

    mount_to_body(move || view! { <App config=config /> });
}
