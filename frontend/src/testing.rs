//! In-memory fakes for the capability traits.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::components::{DropEventSink, FileLabel, ThemeSurface};
use crate::services::{
    Diagnostics, ElementLookup, FileHandle, Navigator, Notifier, PreferenceStore, UploadTransport,
};
use crate::types::{AppError, AppResult, LogEntry, Preference, UploadResponse};

#[derive(Default)]
pub struct FakeSurface {
    dark: Cell<bool>,
    active: Cell<bool>,
    loaded: Cell<bool>,
    icon: RefCell<String>,
}

impl FakeSurface {
    pub fn with_dark(dark: bool) -> Self {
        let surface = Self::default();
        surface.dark.set(dark);
        surface.active.set(dark);
        surface
    }

    pub fn dark(&self) -> bool {
        self.dark.get()
    }

    pub fn control_active(&self) -> bool {
        self.active.get()
    }

    pub fn loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn icon(&self) -> String {
        self.icon.borrow().clone()
    }
}

impl ThemeSurface for FakeSurface {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }

    fn set_control_active(&self, active: bool) {
        self.active.set(active);
    }

    fn set_control_icon(&self, icon: &str) {
        *self.icon.borrow_mut() = icon.to_string();
    }

    fn mark_loaded(&self) {
        self.loaded.set(true);
    }
}

/// Preference storage; `unavailable()` refuses every write.
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    available: bool,
}

impl MemoryStore {
    pub fn with(stored: Option<&str>) -> Self {
        Self { value: RefCell::new(stored.map(str::to_string)), available: true }
    }

    pub fn unavailable() -> Self {
        Self { value: RefCell::new(None), available: false }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, preference: Preference) -> AppResult<()> {
        if !self.available {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        *self.value.borrow_mut() = Some(preference.as_str().to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingDiagnostics {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingLabel {
    history: RefCell<Vec<String>>,
}

impl RecordingLabel {
    pub fn current(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl FileLabel for RecordingLabel {
    fn show(&self, text: &str) {
        self.history.borrow_mut().push(text.to_string());
    }
}

#[derive(Clone, Debug)]
pub struct FakeFile {
    name: String,
}

impl FakeFile {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl FileHandle for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }
}

enum Scripted {
    Now(AppResult<UploadResponse>),
    Later(oneshot::Receiver<AppResult<UploadResponse>>),
}

/// Transport answering per file name, recording what it was asked to send.
pub struct ScriptedTransport {
    label: Rc<RecordingLabel>,
    script: RefCell<HashMap<String, Scripted>>,
    sent: RefCell<Vec<String>>,
    endpoints: RefCell<Vec<String>>,
    labels_at_send: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(label: Rc<RecordingLabel>) -> Self {
        Self {
            label,
            script: RefCell::new(HashMap::new()),
            sent: RefCell::new(Vec::new()),
            endpoints: RefCell::new(Vec::new()),
            labels_at_send: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(&self, name: &str, result: AppResult<UploadResponse>) {
        self.script.borrow_mut().insert(name.to_string(), Scripted::Now(result));
    }

    pub fn respond_later(&self, name: &str, rx: oneshot::Receiver<AppResult<UploadResponse>>) {
        self.script.borrow_mut().insert(name.to_string(), Scripted::Later(rx));
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.endpoints.borrow().clone()
    }

    pub fn labels_at_send(&self) -> Vec<String> {
        self.labels_at_send.borrow().clone()
    }
}

impl UploadTransport for ScriptedTransport {
    type File = FakeFile;

    async fn post(&self, endpoint: &str, file: FakeFile) -> AppResult<UploadResponse> {
        self.sent.borrow_mut().push(file.name());
        self.endpoints.borrow_mut().push(endpoint.to_string());
        self.labels_at_send.borrow_mut().push(self.label.current());

        let scripted = self.script.borrow_mut().remove(&file.name());
        match scripted {
            Some(Scripted::Now(result)) => result,
            Some(Scripted::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::Transport("request dropped".to_string()))),
            None => Err(AppError::Transport(format!("no response scripted for {}", file.name()))),
        }
    }
}

/// Host page whose elements are just their ids.
pub struct FakePage {
    ids: HashSet<String>,
    has_body: bool,
    file_inputs: bool,
}

impl FakePage {
    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            ids: ids.into_iter().map(str::to_string).collect(),
            has_body: true,
            file_inputs: true,
        }
    }

    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }

    /// Every element exists but none of them is a file input.
    pub fn without_file_inputs(mut self) -> Self {
        self.file_inputs = false;
        self
    }
}

impl ElementLookup for FakePage {
    type Element = String;
    type Input = String;

    fn body(&self) -> Option<String> {
        self.has_body.then(|| "body".to_string())
    }

    fn element(&self, id: &str) -> Option<String> {
        self.ids.get(id).cloned()
    }

    fn file_input(&self, id: &str) -> Option<String> {
        if self.file_inputs {
            self.element(id)
        } else {
            None
        }
    }
}

/// Drag event recording what the handler did to it.
#[derive(Default)]
pub struct RecordingDragEvent {
    files: Vec<FakeFile>,
    prevented: Cell<bool>,
    stopped: Cell<bool>,
}

impl RecordingDragEvent {
    pub fn carrying(names: &[&str]) -> Self {
        Self {
            files: names.iter().map(|name| FakeFile::new(name)).collect(),
            ..Self::default()
        }
    }

    pub fn prevented(&self) -> bool {
        self.prevented.get()
    }

    pub fn stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl DropEventSink for RecordingDragEvent {
    type File = FakeFile;

    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    fn files(&self) -> Vec<FakeFile> {
        self.files.clone()
    }
}
