/// Log a one-line event to the browser console (web) or stderr (native).
#[cfg(target_arch = "wasm32")]
pub fn log_event(scope: &str, message: &str) {
    web_sys::console::log_1(&format!("[{scope}] {message}").into());
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn log_event(scope: &str, message: &str) {
    eprintln!("[{scope}] {message}");
}
