// Tabbed content panel switching

use crate::dom;
use crate::ports::{Doc, Elem};
use crate::util;

const TRIGGER_SEL: &str = ".tab-btn";
const PANEL_SEL: &str = ".tab-content";
const TRIGGER_NAME_ATTR: &str = "data-tab";
const PANEL_NAME_ATTR: &str = "data-tab-content";
const ACTIVE_CLASS: &str = "active";

// Activate the trigger and panel carrying the given tab name, deactivating
// all others. A name with no matching panel deactivates everything else and
// is logged.
pub fn activate(doc: &impl Doc, name: &str) {
	for btn in doc.query_all(TRIGGER_SEL) {
		if btn.attr(TRIGGER_NAME_ATTR).as_deref() == Some(name) {
			btn.add_class(ACTIVE_CLASS);
		} else {
			btn.remove_class(ACTIVE_CLASS);
		}
	}

	let mut found = false;
	for panel in doc.query_all(PANEL_SEL) {
		if panel.attr(PANEL_NAME_ATTR).as_deref() == Some(name) {
			panel.add_class(ACTIVE_CLASS);
			found = true;
		} else {
			panel.remove_class(ACTIVE_CLASS);
		}
	}
	if !found {
		log::warn!("no tab panel matching {:?}", name);
	}
}

// Wire a click handler to each tab trigger on the page.
// The tab name is read off the clicked trigger at event time.
pub fn init(doc: &web_sys::Document) {
	for btn in doc.query_all(TRIGGER_SEL) {
		let el = btn.clone();
		dom::on_click(&btn, move |_| match el.attr(TRIGGER_NAME_ATTR) {
			Some(name) => activate(util::document(), &name),
			None => {
				log::warn!("tab trigger without a {} attribute", TRIGGER_NAME_ATTR)
			}
		});
	}
}
