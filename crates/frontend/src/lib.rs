//! Tour of Heroes - Yew WASM Frontend
//!
//! Dashboard, heroes list and hero detail screens over an in-memory
//! hero service.

mod app;
mod components;
mod config;
mod hooks;
mod pages;
mod services;

pub use app::{App, Route};
pub use config::AppConfig;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    for warning in &config.warnings {
        log::warn!("{warning}");
    }
    log::info!("starting {}", config.title);

    yew::Renderer::<App>::new().render();
}
