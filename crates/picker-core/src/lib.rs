//! Orchestration core for the `tabpick` item picker.
//!
//! The picker reconciles three item sources (caller tabs, free-text search
//! results, recency history) into one tab set and a single selection. All
//! state transitions go through [`PickerState::update`]; [`Picker`] wraps it
//! with the background search worker and recents loader.

pub mod error;
pub mod picker;
pub mod recents;
pub mod search;
pub mod selection;
pub mod tabs;

pub use error::{ConfirmError, PickerError};
pub use picker::{
	Effect, Picker, PickerConfig, PickerEvent, PickerListener, PickerOutcome, PickerState,
	PickerView, RenderMode, ViewKind,
};
pub use recents::{RecentsFilter, filter_recents};
pub use search::{QueryTransition, Resolution, SearchFilter, SearchSession, SessionState};
pub use selection::{SelectionController, SelectionState};
pub use tabs::{EffectiveTab, TabBody, TabSet, declared_models};
