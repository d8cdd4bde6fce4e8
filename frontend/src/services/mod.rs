//! Browser capabilities used by the components.
//!
//! Each capability is a small trait so components receive it by injection
//! and tests can swap in recording fakes:
//!
//! # Services
//!
//! - [`upload`] - Multipart POST to the upload endpoint ([`UploadTransport`])
//! - [`storage`] - Dark-mode preference in localStorage ([`PreferenceStore`])
//! - [`notify`] - User notifications, diagnostics and navigation
//! - [`dom`] - Element lookup, class markers and event listeners

pub mod dom;
pub mod notify;
pub mod storage;
pub mod upload;

pub use dom::*;
pub use notify::*;
pub use storage::*;
pub use upload::*;

use crate::types::{AppResult, LogEntry, Preference, UploadResponse};

/// Surfaces a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sink for diagnostic entries.
pub trait Diagnostics {
    fn record(&self, entry: LogEntry);
}

/// Moves the page to another location.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Persistent home of the dark-mode preference.
pub trait PreferenceStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    fn save(&self, preference: Preference) -> AppResult<()>;
}

/// Anything the upload widget can stage and send.
pub trait FileHandle {
    fn name(&self) -> String;
}

/// Sends one file to the upload endpoint.
///
/// Any answer from the server is `Ok`; only a request that could not be
/// completed (or whose body could not be read) is an error.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File: FileHandle;

    async fn post(&self, endpoint: &str, file: Self::File) -> AppResult<UploadResponse>;
}
