// Display helpers and logging setup.

/// "1 click", "2 clicks".
pub fn format_clicks(n: u64) -> String {
    if n == 1 {
        "1 click".to_string()
    } else {
        format!("{} clicks", n)
    }
}

pub fn format_rate(n: u64) -> String {
    format!("{}/sec", format_clicks(n))
}

/// Routes `tracing` to the browser console and panics to `console.error`.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_counts_are_pluralized() {
        assert_eq!(format_clicks(0), "0 clicks");
        assert_eq!(format_clicks(1), "1 click");
        assert_eq!(format_clicks(250), "250 clicks");
        assert_eq!(format_rate(1), "1 click/sec");
    }
}

/// Resolves after `ms` milliseconds of browser time.
#[cfg(all(test, target_arch = "wasm32"))]
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let window = web_sys::window().expect("window");
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("timer promise");
}
