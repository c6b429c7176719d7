//! Embeddable item picker: tabbed browsing, cross-tab search and a Recents
//! tab, resolved to a single confirmed selection.
//!
//! The data model lives in `tabpick-api` and the orchestration in
//! `tabpick-core`; this crate re-exports both and adds the pieces the
//! `tabpick` binary needs (directories, logging and a JSON catalog provider).

pub mod app_dirs;
pub mod catalog;
pub mod logging;

pub use tabpick_api::{
	FetchError, ItemId, ItemKey, Model, PickerItem, PickerOptions, RECENTS_MODEL, RecentItem,
	RecentsContext, RecentsProvider, SearchParams, SearchProvider, SearchRequest,
	SelectablePredicate, Tab,
};
pub use tabpick_core::{
	ConfirmError, Effect, EffectiveTab, Picker, PickerConfig, PickerError, PickerEvent,
	PickerListener, PickerOutcome, PickerState, PickerView, RecentsFilter, RenderMode,
	SearchFilter, TabBody, TabSet, ViewKind,
};
