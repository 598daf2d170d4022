use std::panic;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(inline_js = "export function get_stack() { return new Error().stack; }")]
extern "C" {
    fn get_stack() -> String;
}

/// Reports a panic through the `log` facade, with the JS stack attached on
/// wasm so it lands in the browser console next to the console's own logs.
pub fn hook(info: &panic::PanicHookInfo) {
    #[cfg(target_arch = "wasm32")]
    log::error!("{}\n\nStack:\n\n{}\n\n", info, get_stack());

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", info);
    }
}

/// Installs `hook` once, before the app mounts.
pub fn install() {
    static SET: std::sync::Once = std::sync::Once::new();
    SET.call_once(|| panic::set_hook(Box::new(hook)));
}
