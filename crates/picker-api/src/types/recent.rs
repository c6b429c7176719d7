use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::{ItemId, Model, PickerItem};

/// An item from the global recency feed, stamped with its last use.
///
/// Recency ordering is decided by the remote feed; the picker never re-sorts
/// by `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentItem<I> {
	#[serde(flatten)]
	pub item: I,
	pub timestamp: DateTime<Utc>,
}

impl<I> RecentItem<I> {
	pub fn new(item: I, timestamp: DateTime<Utc>) -> Self {
		Self { item, timestamp }
	}

	pub fn into_item(self) -> I {
		self.item
	}
}

impl<I: PickerItem> PickerItem for RecentItem<I> {
	fn id(&self) -> &ItemId {
		self.item.id()
	}

	fn model(&self) -> &Model {
		self.item.model()
	}
}
