mod banner;
mod dom;
mod menu;
mod ports;
mod scroll;
mod tabs;
#[cfg(test)]
mod testing;
mod util;

use wasm_bindgen::prelude::*;

// Current time as integer epoch milliseconds
fn now_ms() -> u64 {
	js_sys::Date::now() as u64
}

// Dismissal tracker over the real browser storage and document
fn tracker() -> banner::DismissalTracker<web_sys::Storage, web_sys::Document> {
	banner::DismissalTracker::new(
		util::local_storage().clone(),
		util::document().clone(),
	)
}

// Close the promotional banner and remember the dismissal for 30 days.
// Called by the banner's close control on the host page.
#[wasm_bindgen(js_name = closeBanner)]
pub fn close_banner() {
	tracker().dismiss(now_ms());
}

#[wasm_bindgen(start)]
pub fn main_js() -> util::Result {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	tracker().evaluate_on_load(now_ms());

	let doc = util::document();
	tabs::init(doc);
	scroll::init(doc);
	menu::init(doc);

	Ok(())
}
