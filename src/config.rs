//! Binder Configuration
//!
//! Selectors default to the markup emitted by the summary page generator.
//! A page may override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="page-binder-config">
//!   { "log_level": "debug" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BindResult;

/// Id of the optional inline config element
pub const CONFIG_ELEMENT_ID: &str = "page-binder-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Top-level headers that collapse the container after them
    pub header_selector: String,
    /// Tag the header's next sibling must have to be toggled
    pub header_container_tag: String,
    /// Clickable event titles
    pub event_title_selector: String,
    /// Class of the title's direct parent
    pub event_heading_class: String,
    /// Class of the prep container following the heading
    pub event_prep_class: String,
    /// Persisted checkboxes
    pub todo_selector: String,
    /// Anchors opened in a new browsing context
    pub prep_link_selector: String,
    /// Value written to the anchors' `target` attribute
    pub link_target: String,
    pub log_level: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            header_selector: "h1".to_string(),
            header_container_tag: "div".to_string(),
            event_title_selector: ".event-title".to_string(),
            event_heading_class: "event-heading".to_string(),
            event_prep_class: "event-prep".to_string(),
            todo_selector: "input.todo".to_string(),
            prep_link_selector: ".event-prep a".to_string(),
            link_target: "_blank".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BinderConfig {
    /// Parse a JSON override; absent fields keep their defaults
    pub fn from_json(text: &str) -> BindResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Read the inline config element, if the page has one
    ///
    /// Malformed JSON is reported and the defaults are used.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                // The logger is not installed yet, so report straight to the console.
                web_sys::console::warn_1(&format!("[CONFIG] {}; using defaults", e).into());
                Self::default()
            }
        }
    }
}
