pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the app itself.
pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("Starting back office frontend");

    // Resolve the API base URL up front; requests issued before it settles
    // resolve it themselves.
    leptos::spawn_local(config::init());

    router::mount_app();
}
