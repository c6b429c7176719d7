use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Deserialize;
use tabpick::app_dirs;

use crate::cli::CliArgs;

/// `[catalog]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogSection {
	pub(crate) path: Option<PathBuf>,
}

impl CatalogSection {
	pub(crate) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}

	/// Pick the catalog file. A relative path that does not exist under the
	/// working directory is looked up in the data directory.
	pub(crate) fn resolve(self) -> Result<PathBuf> {
		let Some(path) = self.path else {
			bail!("no catalog given; pass --catalog or set catalog.path");
		};

		if path.is_absolute() || path.exists() {
			return Ok(path);
		}

		if let Ok(data_dir) = app_dirs::get_data_dir() {
			let candidate = data_dir.join(&path);
			if candidate.exists() {
				tracing::debug!(path = %candidate.display(), "using catalog from data directory");
				return Ok(candidate);
			}
		}

		Ok(path)
	}
}
