//! Event Summary Page Entry Point
//!
//! Attaches collapsible sections, persisted todo checkboxes and
//! new-tab prep links to the statically generated summary page.

mod binder;
mod config;
mod dom;
mod error;
mod links;
mod section;
mod todo;

use std::rc::Rc;

use web_kv_store::{KeyValueStore, LocalStore, MemoryStore};
use web_sys::Document;

use config::BinderConfig;
use error::{BindError, BindResult};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = start() {
        web_sys::console::error_1(&format!("[MAIN] {}", e).into());
    }
}

/// Bind now, or once the document has finished parsing
fn start() -> BindResult<()> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| boot(&doc))
    } else {
        boot(&document);
        Ok(())
    }
}

fn boot(document: &Document) {
    let config = BinderConfig::load(document);
    let level = console_logger::parse_level(&config.log_level);
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[MAIN] logger not installed: {}", e).into());
    }

    let store = open_store();
    binder::bind_page(document, &config, &store);
}

/// Local storage, or a session-only store when it is unavailable
fn open_store() -> Rc<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("{}; todo state will not survive a reload", e);
            Rc::new(MemoryStore::new())
        }
    }
}
