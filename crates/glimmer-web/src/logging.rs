use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` records to the browser console and panics to `console.error`.
///
/// Idempotent. Release builds only forward `info` and above.
pub(crate) fn init_console_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        // Another crate on the page may own the logger already.
        if console_log::init_with_level(level).is_ok() {
            log::debug!("console logging initialized");
        }
    });
}
