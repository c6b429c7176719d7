use std::path::PathBuf;
use std::time::Duration;

use tabpick::{PickerOptions, SearchParams};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) catalog: PathBuf,
	pub(crate) title: String,
	pub(crate) options: PickerOptions,
	pub(crate) default_to_recent_tab: bool,
	pub(crate) search_params: SearchParams,
	/// Upper bound on waiting for outstanding search and recents fetches.
	pub(crate) wait_timeout: Duration,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
