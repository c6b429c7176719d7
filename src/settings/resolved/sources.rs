use std::fmt;

/// Where a setting's effective value came from.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_limit: Option<SettingSource>,
	pub(crate) search_models: Option<SettingSource>,
	pub(crate) wait_timeout: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_search_limit(&self) -> SettingSource {
		self.search_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.search_limit"))
	}

	pub(crate) fn source_for_search_models(&self) -> SettingSource {
		self.search_models
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.search_models"))
	}

	pub(crate) fn source_for_wait_timeout(&self) -> SettingSource {
		self.wait_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.wait_timeout_ms"))
	}
}
