use serde::{Deserialize, Serialize};

const DEFAULT_CONFIRM_TEXT: &str = "Select";
const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Dialog level switches. Unspecified fields take the documented defaults:
/// search, confirm buttons and recents are all enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
	pub show_search: bool,
	pub has_confirm_buttons: bool,
	pub has_recents: bool,
	pub confirm_button_text: Option<String>,
	pub cancel_button_text: Option<String>,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			show_search: true,
			has_confirm_buttons: true,
			has_recents: true,
			confirm_button_text: None,
			cancel_button_text: None,
		}
	}
}

impl PickerOptions {
	#[must_use]
	pub fn confirm_label(&self) -> &str {
		self.confirm_button_text
			.as_deref()
			.unwrap_or(DEFAULT_CONFIRM_TEXT)
	}

	#[must_use]
	pub fn cancel_label(&self) -> &str {
		self.cancel_button_text
			.as_deref()
			.unwrap_or(DEFAULT_CANCEL_TEXT)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_options_keep_defaults() {
		let options: PickerOptions =
			serde_json::from_str(r#"{"has_recents": false}"#).expect("options");
		assert!(options.show_search);
		assert!(options.has_confirm_buttons);
		assert!(!options.has_recents);
		assert_eq!(options.confirm_label(), "Select");
		assert_eq!(options.cancel_label(), "Cancel");
	}
}
