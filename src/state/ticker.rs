// Browser interval that drives passive income while the player is signed in.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::{GameError, GameResult};

/// Repeating `setInterval` callback. Cancelled by [`Ticker::cancel`] or on drop,
/// so a torn-down effect never leaks a running timer.
pub struct Ticker {
    window: web_sys::Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    /// Calls `on_tick` every `period_ms` while the document is visible. Periods
    /// that elapse with the tab hidden are skipped, not caught up.
    pub fn start(period_ms: u32, mut on_tick: impl FnMut() + 'static) -> GameResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| GameError::JavaScript("no global `window`".into()))?;
        let document = window.document();
        let callback = Closure::wrap(Box::new(move || {
            if document.as_ref().is_some_and(|d| d.hidden()) {
                return;
            }
            on_tick();
        }) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            timeout,
        )?;
        tracing::debug!(id, period_ms, "ticker started");
        Ok(Self {
            window,
            id,
            _callback: callback,
        })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
        tracing::debug!(id = self.id, "ticker cancelled");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::util::sleep_ms;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_ticker(period_ms: u32) -> (Rc<Cell<u32>>, Ticker) {
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        let ticker = Ticker::start(period_ms, move || counter.set(counter.get() + 1)).unwrap();
        (fired, ticker)
    }

    // Shadows `Document.prototype.hidden` on the document instance.
    fn force_hidden(hidden: bool) {
        let document = web_sys::window().unwrap().document().unwrap();
        let target: &js_sys::Object = document.unchecked_ref();
        if hidden {
            let descriptor = js_sys::Object::new();
            js_sys::Reflect::set(&descriptor, &"value".into(), &JsValue::TRUE).unwrap();
            js_sys::Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).unwrap();
            js_sys::Object::define_property(target, &"hidden".into(), &descriptor);
        } else {
            js_sys::Reflect::delete_property(target, &"hidden".into()).unwrap();
        }
    }

    #[wasm_bindgen_test]
    async fn running_ticker_fires_each_period() {
        let (fired, ticker) = counting_ticker(10);
        sleep_ms(60).await;
        assert!(fired.get() >= 2, "fired {} times", fired.get());
        ticker.cancel();
    }

    #[wasm_bindgen_test]
    async fn cancelled_ticker_never_fires() {
        let (fired, ticker) = counting_ticker(5);
        ticker.cancel();
        // Several periods pass with the interval cleared.
        sleep_ms(50).await;
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn dropped_ticker_stops_firing() {
        let (fired, ticker) = counting_ticker(5);
        sleep_ms(30).await;
        drop(ticker);
        let seen = fired.get();
        sleep_ms(50).await;
        assert_eq!(fired.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn hidden_document_skips_ticks() {
        force_hidden(true);
        let (fired, ticker) = counting_ticker(5);
        sleep_ms(50).await;
        let while_hidden = fired.get();
        force_hidden(false);
        sleep_ms(50).await;
        ticker.cancel();

        assert_eq!(while_hidden, 0);
        assert!(fired.get() > 0);
    }
}
