//! Todo Sync Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod logger;
mod models;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_document();
    logger::init(config.log_level);
    log::info!("[APP] starting: api={} user={}", config.base_url, config.user_id);

    mount_to_body(move || view! { <App config=config /> });
}
