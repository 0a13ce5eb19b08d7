//! Prep Link Targets

use crate::config::BinderConfig;
use crate::dom::{self, PageDocument, PageNode};
use crate::error::BindResult;

/// Set `target` on every link; returns how many were updated
pub fn retarget_all<N: PageNode>(links: &[N], target: &str) -> BindResult<usize> {
    for link in links {
        link.set_attr("target", target)?;
    }
    Ok(links.len())
}

/// Open every link inside a prep container in a new browsing context
pub fn bind_prep_links<D: PageDocument>(document: &D, config: &BinderConfig) -> BindResult<usize> {
    let links: Vec<D::Node> = document
        .select(&config.prep_link_selector)?
        .into_iter()
        .filter(|a| dom::claim(a, "link"))
        .collect();
    retarget_all(&links, &config.link_target)
}
