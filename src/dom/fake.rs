//! In-memory page for tests
//!
//! Supports the selectors the bindings use: `tag`, `.class`, `#id`,
//! compounds like `input.todo`, and descendant chains like `.event-prep a`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{Checkable, Displayable, PageDocument, PageNode};
use crate::error::{BindError, BindResult};

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: String,
    shown: bool,
    checked: bool,
    children: Vec<FakeNode>,
    parent: Weak<RefCell<NodeData>>,
    handlers: Vec<(String, Handler)>,
}

#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", super::describe(self))
    }
}

impl FakeNode {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_lowercase(),
            classes: Vec::new(),
            attrs: Vec::new(),
            text: String::new(),
            shown: true,
            checked: false,
            children: Vec::new(),
            parent: Weak::new(),
            handlers: Vec::new(),
        })))
    }

    /// `<input type="checkbox" class="todo" id=..>`
    pub fn checkbox(id: &str) -> Self {
        Self::new("input").with_attr("type", "checkbox").with_class("todo").with_id(id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.write_attr(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_child(self, child: &FakeNode) -> Self {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        self
    }

    /// Rendered hidden, as if by markup
    pub fn hidden(self) -> Self {
        self.0.borrow_mut().shown = false;
        self
    }

    pub fn checked(self) -> Self {
        self.0.borrow_mut().checked = true;
        self
    }

    fn write_attr(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        match data.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => data.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.0.borrow().handlers.iter().filter(|(e, _)| e == event).count()
    }

    /// Run every handler registered for `event`
    pub fn dispatch(&self, event: &str) {
        let handlers: Vec<Handler> = self
            .0
            .borrow()
            .handlers
            .iter()
            .filter(|(e, _)| e == event)
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            let mut run = handler.borrow_mut();
            (*run)();
        }
    }

    pub fn click(&self) {
        self.dispatch("click");
    }

    /// User toggles a checkbox: flip it, then fire `change`
    pub fn toggle_checkbox(&self) {
        let checked = self.0.borrow().checked;
        self.0.borrow_mut().checked = !checked;
        self.dispatch("change");
    }

    fn descendants(&self, out: &mut Vec<FakeNode>) {
        for child in &self.0.borrow().children {
            out.push(child.clone());
            child.descendants(out);
        }
    }
}

impl Displayable for FakeNode {
    fn is_shown(&self) -> bool {
        self.0.borrow().shown
    }

    fn set_shown(&self, shown: bool) {
        self.0.borrow_mut().shown = shown;
    }
}

impl Checkable for FakeNode {
    fn key(&self) -> Option<String> {
        self.attr("id").filter(|id| !id.is_empty())
    }

    fn is_checked(&self) -> bool {
        self.0.borrow().checked
    }

    fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }
}

impl PageNode for FakeNode {
    fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }

    fn set_attr(&self, name: &str, value: &str) -> BindResult<()> {
        self.write_attr(name, value);
        Ok(())
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(FakeNode)
    }

    fn next_element(&self) -> Option<Self> {
        let parent = self.parent()?;
        let data = parent.0.borrow();
        let index = data.children.iter().position(|c| c == self)?;
        data.children.get(index + 1).cloned()
    }

    fn input_type(&self) -> Option<String> {
        (self.tag() == "input").then(|| self.attr("type").unwrap_or_else(|| "text".to_string()))
    }

    fn text(&self) -> String {
        let data = self.0.borrow();
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&child.text());
        }
        text
    }

    fn on(&self, event: &str, handler: Box<dyn FnMut()>) -> BindResult<()> {
        self.0.borrow_mut().handlers.push((event.to_string(), Rc::new(RefCell::new(handler))));
        Ok(())
    }
}

#[derive(Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    id: Option<String>,
}

impl Compound {
    fn parse(part: &str, selector: &str) -> BindResult<Self> {
        let invalid = || BindError::Selector(selector.to_string());
        let mut compound = Compound::default();
        let mut kind = None;
        let mut buf = String::new();

        for c in part.chars().chain(std::iter::once('\0')) {
            if c == '.' || c == '#' || c == '\0' {
                match kind {
                    None if buf.is_empty() => {}
                    None => compound.tag = Some(buf.to_lowercase()),
                    Some(_) if buf.is_empty() => return Err(invalid()),
                    Some('.') => compound.classes.push(buf.clone()),
                    Some(_) => compound.id = Some(buf.clone()),
                }
                buf.clear();
                kind = Some(c);
            } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                buf.push(c);
            } else {
                return Err(invalid());
            }
        }
        Ok(compound)
    }

    fn matches(&self, node: &FakeNode) -> bool {
        self.tag.as_ref().map_or(true, |t| *t == node.tag())
            && self.classes.iter().all(|c| node.has_class(c))
            && self.id.as_ref().map_or(true, |id| node.attr("id").as_ref() == Some(id))
    }
}

fn matches_chain(node: &FakeNode, chain: &[Compound]) -> bool {
    let Some((last, ancestors)) = chain.split_last() else {
        return false;
    };
    if !last.matches(node) {
        return false;
    }
    let mut current = node.parent();
    for compound in ancestors.iter().rev() {
        loop {
            let Some(ancestor) = current.take() else {
                return false;
            };
            current = ancestor.parent();
            if compound.matches(&ancestor) {
                break;
            }
        }
    }
    true
}

/// A `<body>` holding the given top-level nodes
pub struct FakePage {
    body: FakeNode,
}

impl FakePage {
    pub fn new(nodes: &[&FakeNode]) -> Self {
        let body = nodes.iter().fold(FakeNode::new("body"), |body, node| body.with_child(node));
        Self { body }
    }
}

impl PageDocument for FakePage {
    type Node = FakeNode;

    fn select(&self, selector: &str) -> BindResult<Vec<FakeNode>> {
        let chain = selector
            .split_whitespace()
            .map(|part| Compound::parse(part, selector))
            .collect::<BindResult<Vec<_>>>()?;
        if chain.is_empty() {
            return Err(BindError::Selector(selector.to_string()));
        }

        let mut all = Vec::new();
        self.body.descendants(&mut all);
        Ok(all.into_iter().filter(|node| matches_chain(node, &chain)).collect())
    }

    fn by_id(&self, id: &str) -> Option<FakeNode> {
        let mut all = Vec::new();
        self.body.descendants(&mut all);
        all.into_iter().find(|node| node.attr("id").as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_compound_and_descendant() {
        let link = FakeNode::new("a");
        let stray = FakeNode::new("a");
        let prep = FakeNode::new("div").with_class("event-prep").with_child(&FakeNode::new("p").with_child(&link));
        let todo = FakeNode::checkbox("chk_1");
        let page = FakePage::new(&[&prep, &stray, &todo]);

        assert_eq!(page.select(".event-prep a").unwrap(), vec![link]);
        assert_eq!(page.select("input.todo").unwrap(), vec![todo.clone()]);
        assert_eq!(page.select("#chk_1").unwrap(), vec![todo]);
        assert_eq!(page.select("a").unwrap().len(), 2);
    }

    #[test]
    fn test_select_rejects_unsupported_syntax() {
        let page = FakePage::new(&[]);
        assert!(matches!(page.select("h1["), Err(BindError::Selector(_))));
        assert!(matches!(page.select("div."), Err(BindError::Selector(_))));
        assert!(matches!(page.select("  "), Err(BindError::Selector(_))));
    }
}
