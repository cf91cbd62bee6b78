#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging in native builds.
pub const DEBUG_ENV_VAR: &str = "WORDSIEVE_DEBUG";

/// Initialize logging for the library, CLI and browser builds.
///
/// # Behavior
/// - **Native (CLI):** `Info` level, `Debug` if `debug_enabled`; `RUST_LOG` overrides both.
/// - **WASM:** logs to the browser console at `Debug` or `Info`.
///
/// Calling it twice is harmless: the second call only fails to install a logger.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("WASM logger initialized at {level:?} level"),
            Err(e) => {
                // no logger means no log::error!, so go straight to the console
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
