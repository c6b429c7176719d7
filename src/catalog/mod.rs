//! In-memory item catalog read from a JSON file.
//!
//! A catalog declares the picker's tabs, the items each tab lists, a recency
//! feed and the keys that must not be confirmed:
//!
//! ```json
//! {
//!   "tabs": [{ "model": "table", "display_name": "Tables", "icon": "table" }],
//!   "items": [{ "id": 1, "model": "table", "name": "Orders" }],
//!   "recents": [{ "id": 1, "model": "table", "name": "Orders", "timestamp": "2024-05-01T10:00:00Z" }],
//!   "unselectable": ["table:2"]
//! }
//! ```

mod error;
mod search;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tabpick_api::{
	FetchError, ItemId, ItemKey, Model, PickerItem, RecentItem, RecentsContext, RecentsProvider,
	SelectablePredicate, Tab,
};

pub use error::CatalogError;
pub use search::CatalogSearch;

/// One entry of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
	pub id: ItemId,
	pub model: Model,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl CatalogItem {
	pub fn new(id: impl Into<ItemId>, model: impl Into<Model>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			model: model.into(),
			name: name.into(),
			description: None,
		}
	}
}

impl PickerItem for CatalogItem {
	fn id(&self) -> &ItemId {
		&self.id
	}

	fn model(&self) -> &Model {
		&self.model
	}
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogTab {
	model: Model,
	display_name: String,
	#[serde(default)]
	icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
	tabs: Vec<CatalogTab>,
	items: Vec<CatalogItem>,
	recents: Vec<RecentItem<CatalogItem>>,
	unselectable: Vec<String>,
}

/// A parsed catalog. Tab content is the list of items the tab browses.
#[derive(Debug, Clone)]
pub struct Catalog {
	tabs: Vec<Tab<Vec<CatalogItem>>>,
	items: Arc<[CatalogItem]>,
	recents: Vec<RecentItem<CatalogItem>>,
	unselectable: Arc<HashSet<ItemKey>>,
}

impl Catalog {
	/// Read and validate a catalog file.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let file: CatalogFile =
			serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
				path: path.to_path_buf(),
				source,
			})?;
		Self::from_file(file)
	}

	/// Parse a catalog from JSON text.
	pub fn from_json(text: &str) -> Result<Self, CatalogError> {
		let file: CatalogFile = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
			path: "<inline>".into(),
			source,
		})?;
		Self::from_file(file)
	}

	fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
		if file.tabs.is_empty() {
			return Err(CatalogError::NoTabs);
		}

		let unselectable = file
			.unselectable
			.iter()
			.map(String::as_str)
			.map(parse_key)
			.collect::<Result<HashSet<_>, _>>()?;

		let tabs = file
			.tabs
			.into_iter()
			.map(|tab| {
				let content: Vec<CatalogItem> = file
					.items
					.iter()
					.filter(|item| item.model == tab.model)
					.cloned()
					.collect();
				Tab::new(tab.model, tab.display_name, content).with_icon(tab.icon)
			})
			.collect();

		tracing::debug!(
			items = file.items.len(),
			recents = file.recents.len(),
			"catalog loaded"
		);

		Ok(Self {
			tabs,
			items: file.items.into(),
			recents: file.recents,
			unselectable: Arc::new(unselectable),
		})
	}

	pub fn tabs(&self) -> &[Tab<Vec<CatalogItem>>] {
		&self.tabs
	}

	pub fn items(&self) -> &[CatalogItem] {
		&self.items
	}

	/// Look an item up by its `model:id` key.
	pub fn find(&self, key: &ItemKey) -> Option<&CatalogItem> {
		self.items
			.iter()
			.find(|item| item.id == key.id && item.model == key.model)
	}

	/// Predicate refusing every key listed under `unselectable`.
	pub fn selectable(&self) -> SelectablePredicate<CatalogItem> {
		let blocked = Arc::clone(&self.unselectable);
		Arc::new(move |item: &CatalogItem| !blocked.contains(&item.key()))
	}

	/// Fuzzy search provider over every catalog item.
	pub fn search_provider(&self) -> CatalogSearch {
		CatalogSearch::new(Arc::clone(&self.items))
	}

	/// Provider replaying the catalog's recency feed.
	pub fn recents_provider(&self) -> CatalogRecents {
		CatalogRecents {
			recents: self.recents.clone(),
		}
	}
}

/// Recents provider backed by the catalog's `recents` list, newest first.
#[derive(Debug, Clone)]
pub struct CatalogRecents {
	recents: Vec<RecentItem<CatalogItem>>,
}

impl RecentsProvider<CatalogItem> for CatalogRecents {
	fn fetch_recents(
		&self,
		context: &RecentsContext,
	) -> Result<Vec<RecentItem<CatalogItem>>, FetchError> {
		tracing::trace!(contexts = ?context.contexts, "serving catalog recents");
		let mut recents = self.recents.clone();
		recents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
		Ok(recents)
	}
}

/// Parse a `model:id` key as written on the command line and in catalogs.
pub fn parse_key(text: &str) -> Result<ItemKey, CatalogError> {
	match text.split_once(':') {
		Some((model, id)) if !model.is_empty() && !id.is_empty() => {
			Ok(ItemKey::new(ItemId::parse(id), model))
		}
		_ => Err(CatalogError::InvalidKey(text.to_string())),
	}
}

#[cfg(test)]
mod tests;
