//! Entry point for the WASM application

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 DocSort - Starting");

    if let Err(e) = docsort_frontend::start() {
        log::error!("Start-up aborted: {}", e);
    }
}
