//! Browser console plumbing: `log` output and a panic hook.

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` records at `level` and above to the browser console.
/// Later calls are no-ops.
pub fn init_logger(level: log::Level) {
    INIT.call_once(|| {
        // Console calls only work inside a wasm host.
        #[cfg(target_arch = "wasm32")]
        wasm_logger::init(wasm_logger::Config::new(level));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = level;
    });
}

pub fn panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("grid-wasm panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_is_idempotent() {
        init_logger(log::Level::Info);
        init_logger(log::Level::Debug);
        assert!(INIT.is_completed());
    }
}
