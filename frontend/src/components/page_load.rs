//! Fade-in on page load, restoring the saved theme.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use super::theme::{apply_preference, ThemeSurface};
use crate::services::PreferenceStore;
use crate::types::Preference;

/// Whether a document in `ready_state` has finished parsing its content.
pub fn content_loaded(ready_state: Option<&str>) -> bool {
    ready_state != Some("loading")
}

fn ready_state(document: &Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
}

pub struct PageLoadAnimator {
    surface: Rc<dyn ThemeSurface>,
    store: Rc<dyn PreferenceStore>,
}

impl PageLoadAnimator {
    pub fn new(surface: Rc<dyn ThemeSurface>, store: Rc<dyn PreferenceStore>) -> Self {
        Self { surface, store }
    }

    /// Mark the page loaded and restore a saved dark theme.
    pub fn run(&self) -> Preference {
        self.surface.mark_loaded();

        let preference = Preference::parse(self.store.load().as_deref());
        if preference.is_enabled() {
            apply_preference(self.surface.as_ref(), preference);
        }
        preference
    }

    /// Run now if the content has loaded, otherwise hand the run to
    /// `defer`.
    pub fn run_when(self, loaded: bool, defer: impl FnOnce(Box<dyn FnOnce()>)) {
        if loaded {
            self.run();
        } else {
            defer(Box::new(move || {
                self.run();
            }));
        }
    }

    /// Run once the document's content has loaded.
    pub fn attach(self, document: &Document) {
        let loaded = content_loaded(ready_state(document).as_deref());
        self.run_when(loaded, |run| {
            let closure = Closure::once(move || run());
            if let Err(e) = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            ) {
                log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
            }
            closure.forget();
        });
    }
}
