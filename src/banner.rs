// Promotional banner dismissal, persisted for 30 days

use crate::ports::{Doc, Elem, Store};

// Storage keys of the persisted dismissal record
const CLOSED_KEY: &str = "starBannerClosed";
const CLOSED_AT_KEY: &str = "starBannerClosedTime";

// DOM contract of the banner
const BANNER_ID: &str = "starBanner";
const HIDDEN_CLASS: &str = "hidden";

// How long a dismissal keeps the banner suppressed
pub const SUPPRESSION_WINDOW_MS: u64 = 30 * 24 * 60 * 60 * 1000;

// Tracks the user's dismissal of the promotional banner and keeps the banner
// suppressed until the dismissal expires.
//
// All browser access goes through the injected ports and the current time is
// passed in by the caller, so tests can drive the tracker with in-memory
// fakes and a fixed clock.
pub struct DismissalTracker<S, D> {
	store: S,
	doc: D,
}

impl<S, D> DismissalTracker<S, D>
where
	S: Store,
	D: Doc,
{
	pub fn new(store: S, doc: D) -> Self {
		Self { store, doc }
	}

	// Hide the banner and persist the dismissal.
	// No-op, if the page carries no banner.
	pub fn dismiss(&self, now_ms: u64) {
		if let Some(banner) = self.doc.by_id(BANNER_ID) {
			banner.add_class(HIDDEN_CLASS);
			self.store.set(CLOSED_KEY, "true");
			self.store.set(CLOSED_AT_KEY, &now_ms.to_string());
		}
	}

	// Apply or expire a previously persisted dismissal. Run once per page
	// load.
	//
	// Reapplies the hidden state, while the record is younger than the
	// suppression window, and removes both keys together once it no longer
	// is. A record with a missing or unparsable timestamp counts as expired,
	// restoring the no-partial-state invariant.
	pub fn evaluate_on_load(&self, now_ms: u64) {
		let banner = match self.doc.by_id(BANNER_ID) {
			Some(b) => b,
			None => return,
		};
		if self.store.get(CLOSED_KEY).as_deref() != Some("true") {
			return;
		}

		let unexpired = self
			.store
			.get(CLOSED_AT_KEY)
			.and_then(|v| v.parse::<u64>().ok())
			.map(|at| now_ms.saturating_sub(at) < SUPPRESSION_WINDOW_MS)
			.unwrap_or(false);
		if unexpired {
			banner.add_class(HIDDEN_CLASS);
		} else {
			log::debug!("banner dismissal expired; clearing record");
			self.store.remove(CLOSED_KEY);
			self.store.remove(CLOSED_AT_KEY);
		}
	}
}
