//! DocSort - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the DocSort page: upload a document (picker
//! or drag & drop) to be sorted, download the sorted archive, and switch
//! between light and dark themes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  start()                                                     │
//! │  ├── AppConfig     (defaults + #docsort-config override)     │
//! │  └── PageElements  (host-page ids, validated up front)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PageLoadAnimator   ThemeToggle   UploadWidget   Download    │
//! │        │                │              │             │       │
//! │        └─ PreferenceStore ┘   Transport/Notifier   Navigator │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The components share no state; each receives its element handles and
//! capabilities explicitly.
//!
//! # Modules
//!
//! - [`types`] - Common types (Preference, UploadState, AppError, etc.)
//! - [`components`] - Page components and their DOM bindings
//! - [`services`] - Browser capabilities (fetch, storage, alert, DOM)

use std::rc::Rc;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Theme
    Preference,
    // Upload
    UploadOutcome, UploadPhase, UploadResponse, UploadState,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Resolve the host page and attach every component.
///
/// Fails with [`AppError::MissingElement`] before binding anything if a
/// required element is absent.
pub fn start() -> AppResult<()> {
    let document = gloo_utils::document();
    let config = AppConfig::from_document(&document);
    let elements = PageElements::resolve(&document, &config.elements)?;

    let store: Rc<dyn PreferenceStore> = Rc::new(LocalPreferenceStore::default());
    let surface: Rc<dyn ThemeSurface> = Rc::new(DomThemeSurface::new(
        elements.body.clone(),
        elements.dark_mode_toggle.clone(),
    ));

    PageLoadAnimator::new(surface.clone(), store.clone()).attach(&document);
    Rc::new(ThemeToggle::new(surface, store)).attach(&elements.dark_mode_toggle);

    let label = bind_label(&elements.file_name_label);
    let widget = UploadWidget::new(
        FetchTransport,
        &config,
        Rc::new(label),
        Rc::new(AlertNotifier),
        Rc::new(ConsoleDiagnostics),
    );
    attach_upload(Rc::new(widget), &elements);

    Rc::new(DownloadTrigger::new(Rc::new(WindowNavigator), &config))
        .attach(elements.download_trigger.as_ref());

    log::info!("Components attached");
    Ok(())
}
