use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod catalog;
mod picker;

use catalog::CatalogSection;
use picker::PickerSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) picker: PickerSection,
	pub(super) catalog: CatalogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.picker.apply_cli_overrides(cli);
		self.catalog.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_limit: detect_source(
				cli.search_limit.is_some(),
				self.picker.search_limit.is_some(),
				"TABPICK__PICKER__SEARCH_LIMIT",
				"--limit",
				"picker.search_limit",
			),
			search_models: detect_source(
				cli.search_models.is_some(),
				self.picker.search_models.is_some(),
				"TABPICK__PICKER__SEARCH_MODELS",
				"--search-models",
				"picker.search_models",
			),
			wait_timeout: detect_source(
				cli.wait_timeout_ms.is_some(),
				self.picker.wait_timeout_ms.is_some(),
				"TABPICK__PICKER__WAIT_TIMEOUT_MS",
				"--timeout-ms",
				"picker.wait_timeout_ms",
			),
		};

		let catalog = self.catalog.resolve()?;
		let picker = self.picker.finalize();

		let config = ResolvedConfig {
			catalog,
			title: picker.title,
			options: picker.options,
			default_to_recent_tab: picker.default_to_recent_tab,
			search_params: picker.search_params,
			wait_timeout: picker.wait_timeout,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
