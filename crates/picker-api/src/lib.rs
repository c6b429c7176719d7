//! Shared data model and collaborator interfaces for `tabpick`.
//!
//! Embedders depend on this crate to describe their items and tabs and to
//! plug in the remote sources (recents feed, search endpoint) that the picker
//! core orchestrates.

pub mod error;
pub mod options;
pub mod provider;
pub mod types;

pub use error::FetchError;
pub use options::PickerOptions;
pub use provider::{RecentsContext, RecentsProvider, SearchProvider, SelectablePredicate};
pub use types::{
	ItemId, ItemKey, Model, PickerItem, RECENTS_MODEL, RecentItem, SearchParams, SearchRequest,
	Tab,
};
