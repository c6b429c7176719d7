use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tab::RECENTS_MODEL;

/// Opaque identifier of an item. Remote sources hand out either numeric or
/// string identifiers, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
	Int(i64),
	Str(String),
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ItemId::Int(value) => write!(f, "{value}"),
			ItemId::Str(value) => f.write_str(value),
		}
	}
}

impl From<i64> for ItemId {
	fn from(value: i64) -> Self {
		ItemId::Int(value)
	}
}

impl From<&str> for ItemId {
	fn from(value: &str) -> Self {
		ItemId::Str(value.to_string())
	}
}

impl From<String> for ItemId {
	fn from(value: String) -> Self {
		ItemId::Str(value)
	}
}

impl ItemId {
	/// Parse user supplied text, preferring the numeric form when it fits.
	#[must_use]
	pub fn parse(text: &str) -> Self {
		text.parse::<i64>()
			.map(ItemId::Int)
			.unwrap_or_else(|_| ItemId::Str(text.to_string()))
	}
}

/// Type tag shared by items and tabs (`"card"`, `"table"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
	#[must_use]
	pub fn new(tag: impl Into<String>) -> Self {
		Self(tag.into())
	}

	/// The synthetic tag used for the Recents tab.
	#[must_use]
	pub fn recents() -> Self {
		Self(RECENTS_MODEL.to_string())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[must_use]
	pub fn is_recents(&self) -> bool {
		self.0 == RECENTS_MODEL
	}

	/// Empty tags never identify a real item type.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Model {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Model {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for Model {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl Borrow<str> for Model {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for Model {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Model {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// Owned `(id, model)` pair identifying an entity regardless of where it was
/// listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
	pub id: ItemId,
	pub model: Model,
}

impl ItemKey {
	#[must_use]
	pub fn new(id: impl Into<ItemId>, model: impl Into<Model>) -> Self {
		Self {
			id: id.into(),
			model: model.into(),
		}
	}
}

impl fmt::Display for ItemKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.model, self.id)
	}
}

/// Anything the picker can list and select.
///
/// Two items denote the same entity iff both their id and model match; the
/// remaining fields are the caller's business.
pub trait PickerItem: Clone + fmt::Debug {
	fn id(&self) -> &ItemId;

	fn model(&self) -> &Model;

	fn key(&self) -> ItemKey {
		ItemKey {
			id: self.id().clone(),
			model: self.model().clone(),
		}
	}

	fn same_entity<O: PickerItem + ?Sized>(&self, other: &O) -> bool {
		self.id() == other.id() && self.model() == other.model()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone)]
	struct Row {
		id: ItemId,
		model: Model,
	}

	impl PickerItem for Row {
		fn id(&self) -> &ItemId {
			&self.id
		}

		fn model(&self) -> &Model {
			&self.model
		}
	}

	#[test]
	fn identity_requires_both_id_and_model() {
		let card = Row {
			id: 1.into(),
			model: "card".into(),
		};
		let table = Row {
			id: 1.into(),
			model: "table".into(),
		};
		let same_card = Row {
			id: 1.into(),
			model: "card".into(),
		};

		assert!(!card.same_entity(&table));
		assert!(card.same_entity(&same_card));
		assert_eq!(card.key(), ItemKey::new(1, "card"));
	}

	#[test]
	fn ids_deserialize_from_numbers_and_strings() {
		let numeric: ItemId = serde_json::from_str("42").expect("number");
		let textual: ItemId = serde_json::from_str("\"abc\"").expect("string");
		assert_eq!(numeric, ItemId::Int(42));
		assert_eq!(textual, ItemId::Str("abc".into()));
	}

	#[test]
	fn parse_prefers_numeric_ids() {
		assert_eq!(ItemId::parse("7"), ItemId::Int(7));
		assert_eq!(ItemId::parse("orders"), ItemId::Str("orders".into()));
	}

	#[test]
	fn recents_tag_is_recognised() {
		assert!(Model::recents().is_recents());
		assert!(!Model::new("card").is_recents());
	}
}
