//! In-memory page surface adapter
//!
//! Stands in for the page the handlers were written against: the CLI seeds
//! it like a filled form, the use cases mutate it, and the runner reads the
//! result regions back for rendering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::ports::PageSurface;

/// Default submit control label
pub const DEFAULT_SUBMIT_LABEL: &str = "Process Transcript";

#[derive(Debug)]
struct PageState {
    fields: HashMap<String, String>,
    texts: HashMap<String, String>,
    links: HashMap<String, String>,
    visible: HashMap<String, bool>,
    submit_label: String,
    submit_enabled: bool,
    alerts: Vec<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
            texts: HashMap::new(),
            links: HashMap::new(),
            // Regions start hidden until revealed
            visible: HashMap::new(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            submit_enabled: true,
            alerts: Vec::new(),
        }
    }
}

/// In-memory page surface.
///
/// Clones share the same underlying state, so the runner can hold a handle
/// while a use case owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    state: Arc<Mutex<PageState>>,
}

impl MemoryPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with the given form fields pre-filled
    pub fn with_fields(values: &[(&str, &str)]) -> Self {
        let page = Self::new();
        for (id, value) in values {
            page.set_field(id, value);
        }
        page
    }

    /// Read a display region's text, if one was written
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.state.lock().unwrap().texts.get(id).cloned()
    }

    /// Read a link element's target, if one was set
    pub fn link_of(&self, id: &str) -> Option<String> {
        self.state.lock().unwrap().links.get(id).cloned()
    }

    /// Whether a region has been revealed. Regions start hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        *self.state.lock().unwrap().visible.get(id).unwrap_or(&false)
    }

    /// All alerts shown so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().unwrap().alerts.clone()
    }

    /// Current submit control state as (label, enabled)
    pub fn submit_state(&self) -> (String, bool) {
        let state = self.state.lock().unwrap();
        (state.submit_label.clone(), state.submit_enabled)
    }
}

impl PageSurface for MemoryPage {
    fn field(&self, id: &str) -> String {
        self.state
            .lock()
            .unwrap()
            .fields
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    fn set_field(&self, id: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .fields
            .insert(id.to_string(), value.to_string());
    }

    fn set_text(&self, id: &str, text: &str) {
        self.state
            .lock()
            .unwrap()
            .texts
            .insert(id.to_string(), text.to_string());
    }

    fn set_link(&self, id: &str, href: &str) {
        self.state
            .lock()
            .unwrap()
            .links
            .insert(id.to_string(), href.to_string());
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.state
            .lock()
            .unwrap()
            .visible
            .insert(id.to_string(), visible);
    }

    fn submit_label(&self) -> String {
        self.state.lock().unwrap().submit_label.clone()
    }

    fn set_submit_label(&self, label: &str) {
        self.state.lock().unwrap().submit_label = label.to_string();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state.lock().unwrap().submit_enabled = enabled;
    }

    fn alert(&self, message: &str) {
        self.state.lock().unwrap().alerts.push(message.to_string());
    }

    fn reset_form(&self) {
        // Only form controls reset; result regions keep their content
        self.state.lock().unwrap().fields.clear();
    }
}
