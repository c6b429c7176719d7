//! The picker orchestrator.
//!
//! [`PickerState`] is the pure event driven state machine; [`Picker`] runs
//! it against real providers and reports to a [`PickerListener`].

mod config;
mod events;
mod runtime;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use config::PickerConfig;
pub use events::{Effect, PickerEvent};
pub use runtime::{Picker, PickerListener, PickerOutcome};
pub use state::PickerState;
pub use view::{PickerView, RenderMode, ViewKind};
