//! Dark-mode toggle persisted across sessions.

use std::rc::Rc;

use web_sys::Element;

use crate::config::{
    CLASS_ACTIVE, CLASS_DARK_MODE, CLASS_LOADED, ICON_DARK_ACTIVE, ICON_LIGHT_ACTIVE,
};
use crate::services::{has_class, listen, set_class, PreferenceStore};
use crate::types::Preference;

/// Visual markers the theme components read and write.
pub trait ThemeSurface {
    /// Whether the root element currently carries the dark marker.
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
    fn set_control_active(&self, active: bool);
    fn set_control_icon(&self, icon: &str);
    /// One-shot fade-in marker.
    fn mark_loaded(&self);
}

/// [`ThemeSurface`] over `<body>` and the toggle button.
#[derive(Clone, Debug)]
pub struct DomThemeSurface {
    body: Element,
    control: Element,
}

impl DomThemeSurface {
    pub fn new(body: Element, control: Element) -> Self {
        Self { body, control }
    }
}

impl ThemeSurface for DomThemeSurface {
    fn is_dark(&self) -> bool {
        has_class(&self.body, CLASS_DARK_MODE)
    }

    fn set_dark(&self, dark: bool) {
        set_class(&self.body, CLASS_DARK_MODE, dark);
    }

    fn set_control_active(&self, active: bool) {
        set_class(&self.control, CLASS_ACTIVE, active);
    }

    fn set_control_icon(&self, icon: &str) {
        self.control.set_inner_html(icon);
    }

    fn mark_loaded(&self) {
        set_class(&self.body, CLASS_LOADED, true);
    }
}

/// Icon shown on the toggle for a given preference.
pub fn icon_for(preference: Preference) -> &'static str {
    match preference {
        Preference::Enabled => ICON_DARK_ACTIVE,
        Preference::Disabled => ICON_LIGHT_ACTIVE,
    }
}

/// Reflect a preference on every marker of the surface.
///
/// The control's `active` marker is set from the preference, not flipped,
/// so it stays in step with the root marker even if the page started out
/// inconsistent.
pub fn apply_preference(surface: &dyn ThemeSurface, preference: Preference) {
    surface.set_dark(preference.is_enabled());
    surface.set_control_active(preference.is_enabled());
    surface.set_control_icon(icon_for(preference));
}

/// Flips and persists the dark-mode preference.
pub struct ThemeToggle {
    surface: Rc<dyn ThemeSurface>,
    store: Rc<dyn PreferenceStore>,
}

impl ThemeToggle {
    pub fn new(surface: Rc<dyn ThemeSurface>, store: Rc<dyn PreferenceStore>) -> Self {
        Self { surface, store }
    }

    /// Flip the theme and return the new preference.
    ///
    /// A failed write still flips the page; the choice just won't survive
    /// a reload.
    pub fn toggle(&self) -> Preference {
        let preference = Preference::from_enabled(!self.surface.is_dark());
        // Sets (rather than flips) the control's active marker
        apply_preference(self.surface.as_ref(), preference);

        if let Err(e) = self.store.save(preference) {
            log::warn!("{} - dark mode kept for this page only", e);
        }

        log::debug!("Dark mode {}", preference.as_str());
        preference
    }

    /// Bind the toggle to clicks on its control.
    pub fn attach(self: Rc<Self>, control: &Element) {
        listen(control, "click", move |_| {
            self.toggle();
        });
    }
}
