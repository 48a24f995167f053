//! Medical Certificate Editor Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod export;
mod logger;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
    leptos::mount::mount_to_body(app::App);
}
