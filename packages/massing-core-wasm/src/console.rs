// Browser console on wasm32, stdout everywhere else so unit tests can log.

#[cfg(target_arch = "wasm32")]
pub fn log(s: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(s));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(s: &str) {
    println!("{}", s);
}

// Note: The console_log macro is defined in lib.rs to avoid duplication
