//! Schedule Grid Frontend Entry Point

mod models;
mod commands;
mod config;
mod context;
mod loader;
mod components;
mod app;

use app::App;
use config::{AppConfig, LOG_HISTORY};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if rolling_logger::init(LOG_HISTORY, config.log_level).is_ok() {
        log::info!("[APP] Starting, tasks at {}", config.tasks_url());
    }

    mount_to_body(move || view! { <App config=config /> });
}
