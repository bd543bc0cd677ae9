// Mobile navigation menu toggle

use crate::dom;
use crate::ports::{Doc, Elem};
use crate::util;

const BUTTON_SEL: &str = ".mobile-menu-btn";
const LINKS_SEL: &str = ".nav-links";
const ACTIVE_CLASS: &str = "active";

// Toggle the mobile navigation open or closed.
// No-op, unless both the button and the links container are present.
pub fn toggle(doc: &impl Doc) {
	if let (Some(links), Some(btn)) = (doc.query(LINKS_SEL), doc.query(BUTTON_SEL))
	{
		links.toggle_class(ACTIVE_CLASS);
		btn.toggle_class(ACTIVE_CLASS);
	}
}

pub fn init(doc: &web_sys::Document) {
	if let (Some(_), Some(btn)) = (doc.query(LINKS_SEL), doc.query(BUTTON_SEL)) {
		dom::on_click(&btn, move |_| toggle(util::document()));
	}
}
