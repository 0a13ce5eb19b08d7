//! Persisted Todo Checkboxes
//!
//! Checked state is mirrored into the key-value store under the
//! checkbox id as the literal `"true"` or `"false"`.

use std::rc::Rc;

use web_kv_store::KeyValueStore;

use crate::config::BinderConfig;
use crate::dom::{self, Checkable, PageDocument, PageNode};
use crate::error::BindResult;

pub const STORED_TRUE: &str = "true";
pub const STORED_FALSE: &str = "false";

/// Only the literal `"true"` reads as checked
pub fn stored_checked(value: Option<&str>) -> bool {
    value == Some(STORED_TRUE)
}

pub fn stored_value(checked: bool) -> &'static str {
    if checked { STORED_TRUE } else { STORED_FALSE }
}

/// A checkbox bound to its stored value
pub struct TodoBox<C: Checkable> {
    checkbox: C,
    key: String,
    store: Rc<dyn KeyValueStore>,
}

impl<C: Checkable> TodoBox<C> {
    pub fn new(checkbox: C, store: Rc<dyn KeyValueStore>) -> Option<Self> {
        let key = checkbox.key()?;
        Some(Self { checkbox, key, store })
    }

    /// Apply the stored state to the checkbox; returns it
    pub fn restore(&self) -> bool {
        let checked = stored_checked(self.store.get(&self.key).as_deref());
        self.checkbox.set_checked(checked);
        checked
    }

    /// Write the checkbox's current state to the store
    pub fn persist(&self) {
        let value = stored_value(self.checkbox.is_checked());
        match self.store.set(&self.key, value) {
            Ok(()) => log::debug!("{} = {}", self.key, value),
            Err(e) => log::warn!("could not save {}: {}", self.key, e),
        }
    }
}

/// Restore and persist every todo checkbox on the page
pub fn bind_todos<D: PageDocument>(
    document: &D,
    config: &BinderConfig,
    store: &Rc<dyn KeyValueStore>,
) -> BindResult<usize> {
    let mut bound = 0;
    for input in document.select(&config.todo_selector)? {
        let is_checkbox = input
            .input_type()
            .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
        if !is_checkbox {
            log::debug!("{} is not a checkbox; skipped", dom::describe(&input));
            continue;
        }
        let Some(todo) = TodoBox::new(input.clone(), store.clone()) else {
            log::warn!("{} has no id; state will not be saved", dom::describe(&input));
            continue;
        };
        if !dom::claim(&input, "todo") {
            continue;
        }
        todo.restore();
        input.on("change", Box::new(move || todo.persist()))?;
        bound += 1;
    }
    Ok(bound)
}
