// web-sys implementations of the browser ports and DOM event wiring

use crate::ports::{Doc, Elem, Store};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;

impl Store for web_sys::Storage {
	fn get(&self, key: &str) -> Option<String> {
		self.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, val: &str) {
		self.set_item(key, val).ok();
	}

	fn remove(&self, key: &str) {
		self.remove_item(key).ok();
	}
}

impl Elem for web_sys::Element {
	fn add_class(&self, class: &str) {
		self.class_list().add_1(class).ok();
	}

	fn remove_class(&self, class: &str) {
		self.class_list().remove_1(class).ok();
	}

	fn toggle_class(&self, class: &str) {
		self.class_list().toggle(class).ok();
	}

	fn attr(&self, name: &str) -> Option<String> {
		self.get_attribute(name)
	}

	fn scroll_to(&self) {
		self.scroll_into_view_with_scroll_into_view_options(&{
			let mut opts = web_sys::ScrollIntoViewOptions::new();
			opts.behavior(web_sys::ScrollBehavior::Smooth)
				.block(web_sys::ScrollLogicalPosition::Start);
			opts
		});
	}
}

impl Doc for web_sys::Document {
	type El = web_sys::Element;

	fn by_id(&self, id: &str) -> Option<web_sys::Element> {
		self.get_element_by_id(id)
	}

	fn query(&self, selector: &str) -> Option<web_sys::Element> {
		self.query_selector(selector).ok().flatten()
	}

	fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
		let mut els = Vec::new();
		if let Ok(list) = self.query_selector_all(selector) {
			for i in 0..list.length() {
				if let Some(el) = list
					.get(i)
					.and_then(|n| n.dyn_into::<web_sys::Element>().ok())
				{
					els.push(el);
				}
			}
		}
		els
	}
}

// Add static passive click listener.
// Never dropped, as all page wiring lives as long as the document.
pub fn on_click<F>(target: &web_sys::Element, cb: F)
where
	F: FnMut(&web_sys::Event) + 'static,
{
	EventListener::new(target.as_ref(), "click", cb).forget();
}

// Like on_click, but the handler may call prevent_default()
pub fn on_click_cancelable<F>(target: &web_sys::Element, cb: F)
where
	F: FnMut(&web_sys::Event) + 'static,
{
	EventListener::new_with_options(
		target.as_ref(),
		"click",
		EventListenerOptions::enable_prevent_default(),
		cb,
	)
	.forget();
}
