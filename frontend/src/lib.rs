pub mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Browser entry point: logging, panic hook, runtime config, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting CSLSchedule frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
        router::mount_app();
    });
}
