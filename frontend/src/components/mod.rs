//! Page components of the DocSort frontend.
//!
//! Each component owns its logic, receives its capabilities by injection,
//! and exposes an `attach` that binds it to the resolved page elements:
//!
//! - [`PageLoadAnimator`] - Fade-in and saved theme on load
//! - [`ThemeToggle`] - Dark-mode switch persisted in localStorage
//! - [`UploadWidget`] - Picker and drag & drop upload
//! - [`DownloadTrigger`] - Optional link to the sorted archive

mod download;
mod page_load;
mod theme;
mod upload;

pub use download::*;
pub use page_load::*;
pub use theme::*;
pub use upload::*;
