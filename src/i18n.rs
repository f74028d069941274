//! Language-change event plumbing.
//!
//! The host page fires a `languageChanged` custom event with
//! `detail.language` whenever the user switches language. The default
//! reaction is a log line; other modules hook in via
//! [`on_language_change`].

use std::cell::RefCell;

use log::info;

/// Name of the custom DOM event the host page fires.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

thread_local! {
    static HOOKS: RefCell<Vec<Box<dyn Fn(&str)>>> = RefCell::new(Vec::new());
}

/// Registers a hook invoked with the new language code on every change.
///
/// Hooks run in registration order on the UI thread and live for the page
/// lifetime.
pub fn on_language_change(hook: impl Fn(&str) + 'static) {
    HOOKS.with(|hooks| hooks.borrow_mut().push(Box::new(hook)));
}

/// Dispatches a language change to the log and all registered hooks.
pub fn notify_language_changed(language: &str) {
    info!("Language changed to {language}");
    HOOKS.with(|hooks| {
        for hook in hooks.borrow().iter() {
            hook(language);
        }
    });
}

/// Installs the process-wide `languageChanged` listener on the window.
#[cfg(target_arch = "wasm32")]
pub fn install_listener() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let closure = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(|event: web_sys::CustomEvent| {
        let language = js_sys::Reflect::get(&event.detail(), &JsValue::from_str("language"))
            .ok()
            .and_then(|value| value.as_string());
        match language {
            Some(language) => notify_language_changed(&language),
            None => log::warn!("{LANGUAGE_CHANGED_EVENT} event without detail.language"),
        }
    });

    window.add_event_listener_with_callback(LANGUAGE_CHANGED_EVENT, closure.as_ref().unchecked_ref())?;

    // Listener lives for the page lifetime.
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_hooks_receive_language_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        on_language_change(move |lang| first.borrow_mut().push(format!("first:{lang}")));
        let second = Rc::clone(&seen);
        on_language_change(move |lang| second.borrow_mut().push(format!("second:{lang}")));

        notify_language_changed("de");

        assert_eq!(*seen.borrow(), vec!["first:de", "second:de"]);
    }
}
