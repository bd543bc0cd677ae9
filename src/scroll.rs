// Smooth scrolling to in-page anchor targets

use crate::dom;
use crate::ports::{Doc, Elem};
use crate::util;

const ANCHOR_SEL: &str = "a[href^=\"#\"]";

// Scroll the element targeted by an in-page fragment into view.
// A bare "#" and fragments without a matching element are ignored.
pub fn jump_to(doc: &impl Doc, href: &str) {
	match href.strip_prefix('#') {
		Some(id) if !id.is_empty() => {
			if let Some(target) = doc.by_id(id) {
				target.scroll_to();
			}
		}
		_ => (),
	}
}

// Replace the default jump of every in-page anchor with a smooth scroll
pub fn init(doc: &web_sys::Document) {
	for a in doc.query_all(ANCHOR_SEL) {
		let el = a.clone();
		dom::on_click_cancelable(&a, move |e| {
			e.prevent_default();
			if let Some(href) = el.attr("href") {
				jump_to(util::document(), &href);
			}
		});
	}
}
