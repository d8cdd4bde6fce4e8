//! DOM access: element resolution, class markers and event listeners.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

use crate::config::ElementIds;
use crate::types::{AppError, AppResult};

/// Where [`PageElements::resolve`] finds the host-page elements.
pub trait ElementLookup {
    type Element;
    type Input;

    fn body(&self) -> Option<Self::Element>;
    fn element(&self, id: &str) -> Option<Self::Element>;
    /// The element with `id`, only if it is a file input.
    fn file_input(&self, id: &str) -> Option<Self::Input>;
}

impl ElementLookup for Document {
    type Element = Element;
    type Input = HtmlInputElement;

    fn body(&self) -> Option<Element> {
        Document::body(self).map(Element::from)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn file_input(&self, id: &str) -> Option<HtmlInputElement> {
        self.get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }
}

/// Handles to every host-page element the components bind to.
///
/// Built once at start-up by [`PageElements::resolve`] and passed to each
/// component's `attach`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageElements<E = Element, I = HtmlInputElement> {
    pub body: E,
    pub dark_mode_toggle: E,
    pub upload_trigger: E,
    pub file_input: I,
    pub file_name_label: E,
    pub drop_area: E,
    /// The page may not offer a download.
    pub download_trigger: Option<E>,
}

impl<E, I> PageElements<E, I> {
    /// Look up every required id, failing on the first one that is absent
    /// or of the wrong kind.
    pub fn resolve<L>(lookup: &L, ids: &ElementIds) -> AppResult<Self>
    where
        L: ElementLookup<Element = E, Input = I>,
    {
        let require = |id: &str| {
            lookup
                .element(id)
                .ok_or_else(|| AppError::MissingElement(id.to_string()))
        };

        Ok(Self {
            body: lookup
                .body()
                .ok_or_else(|| AppError::MissingElement("body".to_string()))?,
            dark_mode_toggle: require(&ids.dark_mode_toggle)?,
            upload_trigger: require(&ids.upload_trigger)?,
            file_input: lookup
                .file_input(&ids.file_input)
                .ok_or_else(|| AppError::MissingElement(ids.file_input.clone()))?,
            file_name_label: require(&ids.file_name_label)?,
            drop_area: require(&ids.drop_area)?,
            download_trigger: lookup.element(&ids.download_trigger),
        })
    }
}

/// Add or remove a class marker.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to update class '{}': {:?}", class, e);
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Register an event listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to listen for '{}': {:?}", event, e);
    }
    // Listeners are never removed
    closure.forget();
}
