//! Document upload widget with drag & drop support.
//!
//! Handles file selection (picker or drop), upload to the backend, and
//! reporting the outcome through the injected [`Notifier`].
//!
//! Every selection starts its own upload straight away. Uploads are never
//! cancelled, so two can be in flight at once and finish in either order.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, FileList};

use crate::config::{
    AppConfig, StatusPolicy, CLASS_DRAG_OVER, NO_FILE_LABEL, UPLOAD_FAILED_MESSAGE,
};
use crate::services::{
    listen, set_class, Diagnostics, FetchTransport, FileHandle, Notifier, PageElements,
    UploadTransport,
};
use crate::types::{
    AppError, LogEntry, LogLevel, UploadOutcome, UploadPhase, UploadResponse, UploadState,
};

// =============================================================================
// Drop region
// =============================================================================

/// Drag & drop events handled over the drop region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEventKind {
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
}

impl DropEventKind {
    pub const ALL: [DropEventKind; 4] = [
        DropEventKind::DragEnter,
        DropEventKind::DragOver,
        DropEventKind::DragLeave,
        DropEventKind::Drop,
    ];

    /// DOM event name.
    pub fn event_type(&self) -> &'static str {
        match self {
            DropEventKind::DragEnter => "dragenter",
            DropEventKind::DragOver => "dragover",
            DropEventKind::DragLeave => "dragleave",
            DropEventKind::Drop => "drop",
        }
    }

    pub fn from_event_type(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.event_type() == name)
    }

    /// Whether the region shows the drop-target marker after this event.
    pub fn highlights(&self) -> bool {
        matches!(self, DropEventKind::DragEnter | DropEventKind::DragOver)
    }
}

/// The parts of a drag event the drop region touches.
pub trait DropEventSink {
    type File;

    fn prevent_default(&self);
    fn stop_propagation(&self);
    /// Files carried by the event, in order.
    fn files(&self) -> Vec<Self::File>;
}

impl DropEventSink for Event {
    type File = web_sys::File;

    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }

    fn files(&self) -> Vec<web_sys::File> {
        self.dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .map(|transfer| collect_files(transfer.files()))
            .unwrap_or_default()
    }
}

/// Handle one drag event over the drop region.
///
/// Blocks the browser from opening the file, updates the drop-target
/// marker, and hands back the dropped files on `drop`.
pub fn on_drop_event<E: DropEventSink>(
    kind: DropEventKind,
    ev: &E,
    highlight: &dyn Fn(bool),
) -> Option<Vec<E::File>> {
    ev.prevent_default();
    ev.stop_propagation();
    highlight(kind.highlights());

    (kind == DropEventKind::Drop).then(|| ev.files())
}

// =============================================================================
// Widget
// =============================================================================

/// Where the selected files came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    /// The hidden file input's chooser.
    Picker,
    /// A drop on the drop region.
    Drop,
}

/// Text shown next to the upload button.
pub trait FileLabel {
    fn show(&self, text: &str);
}

impl FileLabel for RwSignal<String> {
    fn show(&self, text: &str) {
        self.set(text.to_string());
    }
}

pub struct UploadWidget<T: UploadTransport> {
    transport: T,
    endpoint: String,
    policy: StatusPolicy,
    label: Rc<dyn FileLabel>,
    notifier: Rc<dyn Notifier>,
    diagnostics: Rc<dyn Diagnostics>,
    state: RefCell<UploadState>,
}

impl<T: UploadTransport> UploadWidget<T> {
    pub fn new(
        transport: T,
        config: &AppConfig,
        label: Rc<dyn FileLabel>,
        notifier: Rc<dyn Notifier>,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        Self {
            transport,
            endpoint: config.upload_endpoint.clone(),
            policy: config.status_policy,
            label,
            notifier,
            diagnostics,
            state: RefCell::new(UploadState::default()),
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    /// Stage the first of `files` and return it for upload.
    ///
    /// Extra files are ignored. An empty drop changes nothing; an empty
    /// picker selection (chooser cancelled) clears the label.
    pub fn select(&self, files: Vec<T::File>, source: SelectionSource) -> Option<T::File> {
        let Some(file) = files.into_iter().next() else {
            if source == SelectionSource::Picker {
                self.label.show(NO_FILE_LABEL);
                self.state.borrow_mut().file_name = None;
            }
            return None;
        };

        let name = file.name();
        self.label.show(&name);

        let mut state = self.state.borrow_mut();
        state.phase = UploadPhase::Selected;
        state.file_name = Some(name);
        state.in_flight += 1;

        Some(file)
    }

    /// Send a staged file and report the outcome.
    pub async fn upload(&self, file: T::File) -> UploadOutcome {
        let name = file.name();
        log::info!("📤 Uploading {}", name);

        let outcome = match self.transport.post(&self.endpoint, file).await {
            Ok(response) => self.judge(response),
            Err(e) => UploadOutcome::Failed(e),
        };

        {
            let mut state = self.state.borrow_mut();
            state.in_flight = state.in_flight.saturating_sub(1);
            state.phase = if state.in_flight == 0 {
                UploadPhase::Result(outcome.clone())
            } else {
                UploadPhase::Selected
            };
        }

        match &outcome {
            UploadOutcome::Delivered(body) => {
                log::info!("✅ Uploaded {}", name);
                self.notifier.notify(body);
            }
            UploadOutcome::Failed(e @ AppError::Application { .. }) => {
                self.diagnostics
                    .record(LogEntry::now(LogLevel::Warning, format!("{}: {}", name, e)));
                self.notifier.notify(&e.to_string());
            }
            UploadOutcome::Failed(e) => {
                self.diagnostics.record(LogEntry::now(
                    LogLevel::Error,
                    format!("Error uploading file {}: {}", name, e),
                ));
                self.notifier.notify(UPLOAD_FAILED_MESSAGE);
            }
        }

        outcome
    }

    /// Select, then upload if something was staged.
    pub async fn handle(
        &self,
        files: Vec<T::File>,
        source: SelectionSource,
    ) -> Option<UploadOutcome> {
        let file = self.select(files, source)?;
        Some(self.upload(file).await)
    }

    fn judge(&self, response: UploadResponse) -> UploadOutcome {
        match self.policy {
            StatusPolicy::Strict if !response.is_success() => {
                UploadOutcome::Failed(AppError::Application {
                    status: response.status,
                    body: response.body,
                })
            }
            _ => UploadOutcome::Delivered(response.body),
        }
    }
}

// =============================================================================
// DOM binding
// =============================================================================

fn collect_files(list: Option<FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn dispatch(
    widget: &Rc<UploadWidget<FetchTransport>>,
    files: Vec<web_sys::File>,
    source: SelectionSource,
) {
    if let Some(file) = widget.select(files, source) {
        let widget = Rc::clone(widget);
        spawn_local(async move {
            widget.upload(file).await;
        });
    }
}

/// Reactive label text, mirrored into the label element.
pub fn bind_label(label: &Element) -> RwSignal<String> {
    let initial = label
        .text_content()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| NO_FILE_LABEL.to_string());
    let text = create_rw_signal(initial);

    let label = label.clone();
    create_effect(move |_| {
        label.set_text_content(Some(&text.get()));
    });

    text
}

/// Wire the trigger, the hidden input and the drop region to the widget.
pub fn attach_upload(widget: Rc<UploadWidget<FetchTransport>>, elements: &PageElements) {
    let input = elements.file_input.clone();
    listen(&elements.upload_trigger, "click", move |_| {
        input.click();
    });

    let input = elements.file_input.clone();
    let picker_widget = Rc::clone(&widget);
    listen(&elements.file_input, "change", move |_| {
        dispatch(&picker_widget, collect_files(input.files()), SelectionSource::Picker);
    });

    let drag_over = create_rw_signal(false);
    let area = elements.drop_area.clone();
    create_effect(move |_| {
        set_class(&area, CLASS_DRAG_OVER, drag_over.get());
    });

    for kind in DropEventKind::ALL {
        let widget = Rc::clone(&widget);
        listen(&elements.drop_area, kind.event_type(), move |ev| {
            let highlight = |on: bool| drag_over.set(on);
            if let Some(files) = on_drop_event(kind, &ev, &highlight) {
                dispatch(&widget, files, SelectionSource::Drop);
            }
        });
    }
}
