use thiserror::Error;

/// Errors raised while constructing a picker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
	/// The caller supplied no tabs, so there is nothing to browse.
	#[error("a picker needs at least one tab")]
	NoTabs,
}

/// Reasons a confirm request was refused. These are guards, never fatal.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfirmError {
	#[error("no item is selected")]
	NothingSelected,

	#[error("the selected item cannot be chosen")]
	NotSelectable,

	/// The session already confirmed or was cancelled.
	#[error("the picker session has already finished")]
	Finished,
}
