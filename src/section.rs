//! Collapsible Sections
//!
//! Headers toggle the container after them; event titles toggle their
//! prep container, which starts hidden. Each target is resolved once at
//! bind time and the click handler keeps a direct reference to it.
//! Visibility is always read from the container itself, so several
//! triggers naming the same container stay consistent.

use crate::config::BinderConfig;
use crate::dom::{self, Displayable, PageDocument, PageNode};
use crate::error::BindResult;

/// A collapsible container
#[derive(Clone)]
pub struct Section<T: Displayable> {
    target: T,
}

impl<T: Displayable> Section<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Section forced hidden regardless of markup
    pub fn hidden(target: T) -> Self {
        target.set_shown(false);
        Self { target }
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_shown()
    }

    /// Flip the container's current visibility; returns the new state
    pub fn toggle(&self) -> bool {
        let visible = !self.target.is_shown();
        self.target.set_shown(visible);
        visible
    }
}

fn attach<N: PageNode>(trigger: &N, section: Section<N>) -> BindResult<()> {
    trigger.on(
        "click",
        Box::new(move || {
            let visible = section.toggle();
            log::debug!("toggled section, visible={}", visible);
        }),
    )
}

/// Bind every header to the container that follows it
pub fn bind_headers<D: PageDocument>(document: &D, config: &BinderConfig) -> BindResult<usize> {
    let mut bound = 0;
    for header in document.select(&config.header_selector)? {
        let target = dom::explicit_target(document, &header)
            .or_else(|| dom::next_sibling_with_tag(&header, &config.header_container_tag));
        let Some(target) = target else {
            log::debug!("{} has no container; skipped", dom::describe(&header));
            continue;
        };
        if !dom::claim(&header, "header") {
            continue;
        }
        attach(&header, Section::new(target))?;
        bound += 1;
    }
    Ok(bound)
}

/// Bind every event title to its prep container and hide the container
pub fn bind_event_titles<D: PageDocument>(document: &D, config: &BinderConfig) -> BindResult<usize> {
    let mut bound = 0;
    for title in document.select(&config.event_title_selector)? {
        let target = dom::explicit_target(document, &title).or_else(|| {
            dom::prep_for_title(&title, &config.event_heading_class, &config.event_prep_class)
        });
        let Some(target) = target else {
            log::debug!("{} has no prep container; skipped", dom::describe(&title));
            continue;
        };
        if !dom::claim(&title, "event-title") {
            continue;
        }
        attach(&title, Section::hidden(target))?;
        bound += 1;
    }
    Ok(bound)
}
