//! DOM-ready startup wiring.
//!
//! Application startup and menu navigation are host collaborators reached
//! through FFI; this module only decides when to call them.

use std::sync::Once;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::i18n;

#[wasm_bindgen]
extern "C" {
    /// Host application startup (builds the map, loads overlays).
    #[wasm_bindgen(js_name = startApp)]
    fn start_app();

    /// Host navigation-menu wiring.
    #[wasm_bindgen(js_name = initNavigation)]
    fn init_navigation();
}

static STARTED: Once = Once::new();

/// Triggers startup on DOM readiness and installs the language listener.
///
/// The two subscriptions are independent: the language listener is installed
/// immediately, while startup waits for `DOMContentLoaded` if the document is
/// still loading.
pub fn run() -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let closure = Closure::once(move |_: web_sys::Event| on_dom_ready());
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        // DOMContentLoaded already fired.
        on_dom_ready();
    }

    i18n::install_listener()
}

fn on_dom_ready() {
    STARTED.call_once(|| {
        info!("DOM ready, starting application");
        start_app();
        init_navigation();
    });
}
