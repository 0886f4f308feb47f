//! Opens off-site links in a new tab.

use web_sys::HtmlAnchorElement;

use super::{document, query_all, window};
use crate::error::SiteError;

pub fn is_external(link_host: &str, page_host: &str) -> bool {
	!link_host.eq_ignore_ascii_case(page_host)
}

pub fn install() -> Result<(), SiteError> {
	let page_host = window()?.location().hostname()?;
	let links: Vec<HtmlAnchorElement> = query_all(&document()?, "a[href^=\"http\"]")?;

	for link in links.iter().filter(|l| is_external(&l.hostname(), &page_host)) {
		link.set_attribute("target", "_blank")?;
		link.set_attribute("rel", "noopener noreferrer")?;
	}
	Ok(())
}
