//! Download link for the sorted-documents archive.

use std::rc::Rc;

use web_sys::Element;

use crate::config::AppConfig;
use crate::services::{listen, Navigator};

pub struct DownloadTrigger {
    navigator: Rc<dyn Navigator>,
    endpoint: String,
}

impl DownloadTrigger {
    pub fn new(navigator: Rc<dyn Navigator>, config: &AppConfig) -> Self {
        Self {
            navigator,
            endpoint: config.download_endpoint.clone(),
        }
    }

    /// Hand the download over to the browser.
    pub fn activate(&self) {
        log::info!("📥 Downloading {}", self.endpoint);
        self.navigator.navigate(&self.endpoint);
    }

    /// Bind to the control, if the page has one.
    pub fn attach(self: Rc<Self>, control: Option<&Element>) {
        let Some(control) = control else {
            log::debug!("No download control on this page");
            return;
        };
        listen(control, "click", move |_| self.activate());
    }
}
