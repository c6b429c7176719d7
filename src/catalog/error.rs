use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse catalog {}: {source}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("invalid item key {0:?}; expected MODEL:ID")]
	InvalidKey(String),
	#[error("catalog declares no tabs")]
	NoTabs,
}
