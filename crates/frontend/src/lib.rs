pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// Wasm entry point: browser console logging, then the dashboard on `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    log::info!("shop admin {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}
