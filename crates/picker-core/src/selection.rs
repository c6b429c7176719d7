//! Single-item selection and the confirm gate.

use std::sync::Arc;

use tabpick_api::{PickerItem, SelectablePredicate};

use crate::error::ConfirmError;

/// Currently highlighted item and whether it may be confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<I> {
	pub selected_item: Option<I>,
	pub selectable: bool,
}

impl<I> Default for SelectionState<I> {
	fn default() -> Self {
		Self {
			selected_item: None,
			selectable: false,
		}
	}
}

/// Tracks the selected item. Recents, browsed tabs and search results all
/// go through [`SelectionController::select`]; where an item came from does
/// not matter.
pub struct SelectionController<I> {
	state: SelectionState<I>,
	can_select: SelectablePredicate<I>,
	finished: bool,
}

impl<I: PickerItem> SelectionController<I> {
	pub fn new(can_select: SelectablePredicate<I>) -> Self {
		Self {
			state: SelectionState::default(),
			can_select,
			finished: false,
		}
	}

	/// Replace the selection. The caller's predicate runs exactly once per
	/// call; its answer is returned and remembered for the confirm gate.
	pub fn select(&mut self, item: I) -> bool {
		let selectable = (self.can_select)(&item);
		tracing::trace!(key = %item.key(), selectable, "item selected");
		self.state = SelectionState {
			selected_item: Some(item),
			selectable,
		};
		selectable
	}

	/// Emit the selected item and end the session. Refused, without side
	/// effects, when nothing selectable is selected or the session is over.
	pub fn confirm(&mut self) -> Result<I, ConfirmError> {
		if self.finished {
			return Err(ConfirmError::Finished);
		}
		let Some(item) = self.state.selected_item.as_ref() else {
			return Err(ConfirmError::NothingSelected);
		};
		if !self.state.selectable {
			return Err(ConfirmError::NotSelectable);
		}
		let item = item.clone();
		self.finished = true;
		Ok(item)
	}
}

impl<I> SelectionController<I> {
	pub fn current(&self) -> &SelectionState<I> {
		&self.state
	}

	/// Whether [`SelectionController::confirm`] would succeed right now.
	pub fn can_confirm(&self) -> bool {
		!self.finished && self.state.selected_item.is_some() && self.state.selectable
	}

	/// End the session without a confirmation.
	pub fn finish(&mut self) {
		self.finished = true;
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}
}

impl<I: PickerItem + 'static> SelectionController<I> {
	/// Controller that treats every item as selectable.
	pub fn permissive() -> Self {
		Self::new(Arc::new(|_: &I| true))
	}
}
