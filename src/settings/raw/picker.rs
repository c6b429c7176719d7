use std::time::Duration;

use serde::Deserialize;
use tabpick::{Model, PickerOptions, SearchParams};

use crate::cli::CliArgs;

pub(crate) const DEFAULT_TITLE: &str = "Choose an item";
pub(crate) const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5_000;

/// `[picker]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PickerSection {
	pub(crate) title: Option<String>,
	pub(crate) show_search: Option<bool>,
	pub(crate) has_confirm_buttons: Option<bool>,
	pub(crate) has_recents: Option<bool>,
	pub(crate) default_to_recent_tab: Option<bool>,
	pub(crate) confirm_button_text: Option<String>,
	pub(crate) cancel_button_text: Option<String>,
	pub(crate) search_models: Option<Vec<String>>,
	pub(crate) search_limit: Option<usize>,
	pub(crate) wait_timeout_ms: Option<u64>,
}

pub(crate) struct PickerResolution {
	pub(crate) title: String,
	pub(crate) options: PickerOptions,
	pub(crate) default_to_recent_tab: bool,
	pub(crate) search_params: SearchParams,
	pub(crate) wait_timeout: Duration,
}

impl PickerSection {
	pub(crate) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(value) = cli.show_search {
			self.show_search = Some(value);
		}
		if let Some(value) = cli.has_confirm_buttons {
			self.has_confirm_buttons = Some(value);
		}
		if let Some(value) = cli.has_recents {
			self.has_recents = Some(value);
		}
		if let Some(value) = cli.default_to_recent_tab {
			self.default_to_recent_tab = Some(value);
		}
		if let Some(label) = cli.confirm_label.clone() {
			self.confirm_button_text = Some(label);
		}
		if let Some(label) = cli.cancel_label.clone() {
			self.cancel_button_text = Some(label);
		}
		if let Some(models) = &cli.search_models {
			self.search_models = Some(models.clone());
		}
		if let Some(limit) = cli.search_limit {
			self.search_limit = Some(limit);
		}
		if let Some(timeout) = cli.wait_timeout_ms {
			self.wait_timeout_ms = Some(timeout);
		}
	}

	pub(crate) fn finalize(self) -> PickerResolution {
		let defaults = PickerOptions::default();
		let options = PickerOptions {
			show_search: self.show_search.unwrap_or(defaults.show_search),
			has_confirm_buttons: self
				.has_confirm_buttons
				.unwrap_or(defaults.has_confirm_buttons),
			has_recents: self.has_recents.unwrap_or(defaults.has_recents),
			confirm_button_text: non_blank(self.confirm_button_text),
			cancel_button_text: non_blank(self.cancel_button_text),
		};

		let search_params = SearchParams {
			models: self.search_models.map(|models| {
				models
					.into_iter()
					.map(|model| Model::new(model.trim()))
					.collect()
			}),
			limit: self.search_limit,
			..SearchParams::default()
		};

		PickerResolution {
			title: non_blank(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			options,
			default_to_recent_tab: self.default_to_recent_tab.unwrap_or(true),
			search_params,
			wait_timeout: Duration::from_millis(
				self.wait_timeout_ms.unwrap_or(DEFAULT_WAIT_TIMEOUT_MS),
			),
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|text| !text.trim().is_empty())
}
