// In-memory implementations of the browser ports for tests.
//
// Clones share state through Rc, so a test can hand a fake to a component
// and still inspect it afterwards.

use crate::ports::{Doc, Elem, Store};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Default, Clone)]
pub struct FakeStore(Rc<RefCell<HashMap<String, String>>>);

impl Store for FakeStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, val: &str) {
		self.0.borrow_mut().insert(key.into(), val.into());
	}

	fn remove(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}

#[derive(Default)]
struct ElInner {
	attrs: HashMap<String, String>,
	classes: RefCell<HashSet<String>>,
	scrolls: Cell<usize>,
}

#[derive(Default, Clone)]
pub struct FakeEl(Rc<ElInner>);

impl FakeEl {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_attr(name: &str, val: &str) -> Self {
		let mut inner = ElInner::default();
		inner.attrs.insert(name.into(), val.into());
		Self(Rc::new(inner))
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.0.classes.borrow().contains(class)
	}

	pub fn scroll_count(&self) -> usize {
		self.0.scrolls.get()
	}
}

impl Elem for FakeEl {
	fn add_class(&self, class: &str) {
		self.0.classes.borrow_mut().insert(class.into());
	}

	fn remove_class(&self, class: &str) {
		self.0.classes.borrow_mut().remove(class);
	}

	fn toggle_class(&self, class: &str) {
		if self.has_class(class) {
			self.remove_class(class);
		} else {
			self.add_class(class);
		}
	}

	fn attr(&self, name: &str) -> Option<String> {
		self.0.attrs.get(name).cloned()
	}

	fn scroll_to(&self) {
		self.0.scrolls.set(self.0.scrolls.get() + 1);
	}
}

#[derive(Default)]
struct DocInner {
	by_id: RefCell<HashMap<String, FakeEl>>,
	groups: RefCell<HashMap<String, Vec<FakeEl>>>,
}

// Fake document: elements are registered under an id or under the exact
// selector string a module queries with
#[derive(Default, Clone)]
pub struct FakeDoc(Rc<DocInner>);

impl FakeDoc {
	pub fn add_by_id(&self, id: &str, el: FakeEl) {
		self.0.by_id.borrow_mut().insert(id.into(), el);
	}

	pub fn add_to(&self, selector: &str, el: FakeEl) {
		self.0
			.groups
			.borrow_mut()
			.entry(selector.into())
			.or_default()
			.push(el);
	}
}

impl Doc for FakeDoc {
	type El = FakeEl;

	fn by_id(&self, id: &str) -> Option<FakeEl> {
		self.0.by_id.borrow().get(id).cloned()
	}

	fn query(&self, selector: &str) -> Option<FakeEl> {
		self.query_all(selector).into_iter().next()
	}

	fn query_all(&self, selector: &str) -> Vec<FakeEl> {
		self.0
			.groups
			.borrow()
			.get(selector)
			.cloned()
			.unwrap_or_default()
	}
}
