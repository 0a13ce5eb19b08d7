//! DOM Helpers
//!
//! The bindings only see the page through `PageDocument` / `PageNode`.
//! `web` implements them over `web_sys`; tests use an in-memory page.

mod web;

#[cfg(test)]
pub mod fake;

pub use web::listen;

use crate::error::BindResult;

/// Trigger attribute naming the id of the element it toggles
pub const TOGGLE_TARGET_ATTR: &str = "data-toggle-target";

/// Prefix of the marker attributes set on bound elements
const BOUND_ATTR_PREFIX: &str = "data-bound-";

/// Something that can be shown or hidden
pub trait Displayable {
    fn is_shown(&self) -> bool;
    fn set_shown(&self, shown: bool);
}

/// A checkbox with a storage key
pub trait Checkable {
    /// Storage key; `None` when the checkbox has no usable id
    fn key(&self) -> Option<String>;
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
}

/// An element of the page
pub trait PageNode: Displayable + Checkable + Clone + 'static {
    /// Lowercase tag name
    fn tag(&self) -> String;
    fn has_class(&self, class: &str) -> bool;
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str) -> BindResult<()>;
    fn parent(&self) -> Option<Self>;
    /// Next element sibling, skipping text
    fn next_element(&self) -> Option<Self>;
    /// `type` of an `<input>`; `None` for other elements
    fn input_type(&self) -> Option<String>;
    fn text(&self) -> String;
    /// Run `handler` on every `event` for the page lifetime
    fn on(&self, event: &str, handler: Box<dyn FnMut()>) -> BindResult<()>;
}

/// The page the bindings run against
pub trait PageDocument {
    type Node: PageNode;

    /// Matches of `selector` in document order
    fn select(&self, selector: &str) -> BindResult<Vec<Self::Node>>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Target named by the trigger's `data-toggle-target` attribute
pub fn explicit_target<D: PageDocument>(document: &D, trigger: &D::Node) -> Option<D::Node> {
    let id = trigger.attr(TOGGLE_TARGET_ATTR)?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    document.by_id(id)
}

/// The immediately following element sibling, if it has tag `tag`
pub fn next_sibling_with_tag<N: PageNode>(el: &N, tag: &str) -> Option<N> {
    el.next_element().filter(|next| next.tag().eq_ignore_ascii_case(tag))
}

/// The immediately following element sibling, if it has class `class`
pub fn next_sibling_with_class<N: PageNode>(el: &N, class: &str) -> Option<N> {
    el.next_element().filter(|next| next.has_class(class))
}

/// Prep container for an event title: `title.parent(.heading).next(.prep)`
pub fn prep_for_title<N: PageNode>(title: &N, heading_class: &str, prep_class: &str) -> Option<N> {
    let heading = title.parent().filter(|p| p.has_class(heading_class))?;
    next_sibling_with_class(&heading, prep_class)
}

/// Mark `el` as bound for `kind`; false if it already was
pub fn claim<N: PageNode>(el: &N, kind: &str) -> bool {
    let attr = format!("{}{}", BOUND_ATTR_PREFIX, kind);
    if el.attr(&attr).is_some() {
        return false;
    }
    el.set_attr(&attr, "true").is_ok()
}

/// Short description of an element for log lines
pub fn describe<N: PageNode>(el: &N) -> String {
    let text = el.text().split_whitespace().collect::<Vec<_>>().join(" ");
    match el.attr("id").filter(|id| !id.is_empty()) {
        Some(id) => format!("<{}#{}> {:?}", el.tag(), id, text),
        None => format!("<{}> {:?}", el.tag(), text),
    }
}
