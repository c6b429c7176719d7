use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(limit) = config.search_params.limit
		&& limit == 0
	{
		return Err(ConfigError::invalid(
			"picker.search_limit",
			limit.to_string(),
			sources.source_for_search_limit(),
			"must be greater than zero",
		));
	}

	if let Some(models) = &config.search_params.models
		&& let Some(model) = models
			.iter()
			.find(|model| model.is_empty() || model.is_recents())
	{
		return Err(ConfigError::invalid(
			"picker.search_models",
			model.to_string(),
			sources.source_for_search_models(),
			"must name a caller tab model",
		));
	}

	if config.wait_timeout == Duration::ZERO {
		return Err(ConfigError::invalid(
			"picker.wait_timeout_ms",
			"0",
			sources.source_for_wait_timeout(),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use tabpick::{Model, PickerOptions, SearchParams};

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			catalog: PathBuf::from("/tmp/items.json"),
			title: "Choose an item".into(),
			options: PickerOptions::default(),
			default_to_recent_tab: true,
			search_params: SearchParams::default(),
			wait_timeout: Duration::from_secs(5),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_the_recents_model_as_search_scope() {
		let mut config = config();
		config.search_params.models = Some(vec![Model::new("table"), Model::recents()]);
		let sources = ConfigSources {
			search_models: Some(SettingSource::Environment("TABPICK__PICKER__SEARCH_MODELS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "picker.search_models");
		let message = err.to_string();
		assert!(message.contains("value: recents"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let mut config = config();
		config.wait_timeout = Duration::ZERO;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "picker.wait_timeout_ms");
		assert!(err.to_string().contains("configuration key"));
	}
}
