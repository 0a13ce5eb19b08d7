//! `web_sys` backed page

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement};

use super::{Checkable, Displayable, PageDocument, PageNode};
use crate::error::{BindError, BindResult};

/// Register `handler` for `event` on `target` for the page lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> BindResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn report_style(result: Result<impl Sized, JsValue>, what: &str) {
    if let Err(e) = result {
        log::debug!("could not {} display: {}", what, BindError::from(e));
    }
}

impl Displayable for Element {
    fn is_shown(&self) -> bool {
        let computed = web_sys::window()
            .and_then(|w| w.get_computed_style(self).ok().flatten())
            .and_then(|style| style.get_property_value("display").ok());

        match (computed, self.dyn_ref::<HtmlElement>()) {
            (Some(display), _) => display != "none",
            (None, Some(el)) => el.style().get_property_value("display").map_or(true, |d| d != "none"),
            (None, None) => true,
        }
    }

    fn set_shown(&self, shown: bool) {
        let Some(el) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        if !shown {
            report_style(style.set_property("display", "none"), "set");
            return;
        }
        report_style(style.remove_property("display"), "clear");
        // Hidden by a stylesheet rather than inline style
        if !self.is_shown() {
            report_style(style.set_property("display", "block"), "set");
        }
    }
}

impl Checkable for Element {
    fn key(&self) -> Option<String> {
        let id = self.id();
        (!id.is_empty()).then_some(id)
    }

    fn is_checked(&self) -> bool {
        self.dyn_ref::<HtmlInputElement>().is_some_and(|input| input.checked())
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }
}

impl PageNode for Element {
    fn tag(&self) -> String {
        self.tag_name().to_lowercase()
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) -> BindResult<()> {
        Ok(self.set_attribute(name, value)?)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn next_element(&self) -> Option<Self> {
        self.next_element_sibling()
    }

    fn input_type(&self) -> Option<String> {
        self.dyn_ref::<HtmlInputElement>().map(|input| input.type_())
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn on(&self, event: &str, mut handler: Box<dyn FnMut()>) -> BindResult<()> {
        listen(self, event, move |_| handler())
    }
}

impl PageDocument for Document {
    type Node = Element;

    fn select(&self, selector: &str) -> BindResult<Vec<Element>> {
        let list = self
            .query_selector_all(selector)
            .map_err(|_| BindError::Selector(selector.to_string()))?;

        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}
