//! Page Binder
//!
//! Runs every binding against the document. Each binding is independent:
//! a failure in one is logged and the rest still run.

use std::rc::Rc;

use web_kv_store::KeyValueStore;

use crate::config::BinderConfig;
use crate::dom::PageDocument;
use crate::error::BindResult;
use crate::{links, section, todo};

/// How many elements each binding attached to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindReport {
    pub headers: usize,
    pub event_titles: usize,
    pub todos: usize,
    pub links: usize,
}

impl BindReport {
    pub fn total(&self) -> usize {
        self.headers + self.event_titles + self.todos + self.links
    }
}

impl std::fmt::Display for BindReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} headers, {} event titles, {} todos, {} links",
            self.headers, self.event_titles, self.todos, self.links
        )
    }
}

/// Count from a binding, or zero after logging its error
fn settle(what: &str, result: BindResult<usize>) -> usize {
    match result {
        Ok(count) => count,
        Err(e) => {
            log::error!("{} not bound: {}", what, e);
            0
        }
    }
}

/// Attach all page behavior
pub fn bind_page<D: PageDocument>(
    document: &D,
    config: &BinderConfig,
    store: &Rc<dyn KeyValueStore>,
) -> BindReport {
    let report = BindReport {
        headers: settle("headers", section::bind_headers(document, config)),
        event_titles: settle("event titles", section::bind_event_titles(document, config)),
        todos: settle("todos", todo::bind_todos(document, config, store)),
        links: settle("prep links", links::bind_prep_links(document, config)),
    };
    if report.total() == 0 {
        log::warn!("no elements matched; is this a summary page?");
    } else {
        log::info!("bound {}", report);
    }
    report
}
