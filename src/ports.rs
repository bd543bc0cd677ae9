// Capability seams between page logic and the browser.
//
// Logic modules never reach for window/document/localStorage directly. They
// are handed these ports instead, so the browser wiring can pass the real
// web-sys handles and tests can substitute in-memory fakes.

// Key-value storage scoped to the page origin.
//
// Absence is the only failure mode in this domain, so reads collapse any
// backend error into None and writes swallow theirs.
pub trait Store {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, val: &str);
	fn remove(&self, key: &str);
}

// Minimal element capability: presentation class changes, attribute reads
// and scrolling into view
pub trait Elem {
	fn add_class(&self, class: &str);
	fn remove_class(&self, class: &str);
	fn toggle_class(&self, class: &str);
	fn attr(&self, name: &str) -> Option<String>;
	fn scroll_to(&self);
}

// Document lookup port.
//
// Selectors are static strings owned by the calling module. Matching an
// element out of a group by name goes through attr(), never through
// interpolated selectors.
pub trait Doc {
	type El: Elem;

	fn by_id(&self, id: &str) -> Option<Self::El>;
	fn query(&self, selector: &str) -> Option<Self::El>;
	fn query_all(&self, selector: &str) -> Vec<Self::El>;
}
