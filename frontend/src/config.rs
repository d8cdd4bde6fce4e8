//! Application configuration.
//!
//! Fixed constants for the DocSort frontend, plus [`AppConfig`], which the
//! host page may override with an embedded JSON block:
//!
//! ```html
//! <script type="application/json" id="docsort-config">
//!   { "uploadEndpoint": "/api/upload", "statusPolicy": "strict" }
//! </script>
//! ```
//!
//! Fields left out keep their defaults.

use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

/// Upload endpoint (multipart POST).
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Download endpoint (plain navigation).
pub const DOWNLOAD_ENDPOINT: &str = "/download";

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// localStorage key for the dark-mode preference.
pub const DARK_MODE_STORAGE_KEY: &str = "dark-mode";

/// Stored value when dark mode is on.
pub const PREFERENCE_ENABLED: &str = "enabled";

/// Stored value when dark mode is off.
pub const PREFERENCE_DISABLED: &str = "disabled";

/// Id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "docsort-config";

/// Label text while no file is chosen.
pub const NO_FILE_LABEL: &str = "No file selected";

/// Notification shown when the request itself fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "File upload failed.";

/// Toggle icon while dark mode is active.
pub const ICON_DARK_ACTIVE: &str = "☀️";

/// Toggle icon while light mode is active.
pub const ICON_LIGHT_ACTIVE: &str = "🌙";

/// Class put on `<body>` once the page has loaded.
pub const CLASS_LOADED: &str = "loaded";

/// Class put on `<body>` while dark mode is active.
pub const CLASS_DARK_MODE: &str = "dark-mode";

/// Class put on the toggle control while dark mode is active.
pub const CLASS_ACTIVE: &str = "active";

/// Class put on the drop region while a drag hovers it.
pub const CLASS_DRAG_OVER: &str = "drag-over";

/// How the upload widget reads HTTP status codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Any answered request is a success; the body is shown as is.
    #[default]
    Lenient,
    /// Non-2xx answers are reported as rejected uploads.
    Strict,
}

/// Ids of the host-page elements the components bind to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub dark_mode_toggle: String,
    pub upload_trigger: String,
    pub file_input: String,
    pub file_name_label: String,
    pub drop_area: String,
    /// Optional: the page may not offer a download.
    pub download_trigger: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            dark_mode_toggle: "dark-mode-btn".to_string(),
            upload_trigger: "upload-btn".to_string(),
            file_input: "fileInput".to_string(),
            file_name_label: "file-name".to_string(),
            drop_area: "drop-area".to_string(),
            download_trigger: "download-btn".to_string(),
        }
    }
}

/// Runtime configuration handed to every component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub upload_endpoint: String,
    pub download_endpoint: String,
    pub status_policy: StatusPolicy,
    pub elements: ElementIds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: UPLOAD_ENDPOINT.to_string(),
            download_endpoint: DOWNLOAD_ENDPOINT.to_string(),
            status_policy: StatusPolicy::default(),
            elements: ElementIds::default(),
        }
    }
}

impl AppConfig {
    /// Parse an embedded JSON override.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read the `#docsort-config` block from the document, falling back to
    /// defaults when it is absent or malformed.
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("Loaded embedded config: {:?}", config);
                config
            }
            Err(e) => {
                log::error!("{} - using defaults", e);
                Self::default()
            }
        }
    }
}
