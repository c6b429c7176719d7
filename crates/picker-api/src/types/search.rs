use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::item::Model;

/// Caller supplied overrides merged into every search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
	/// Restrict the search to these models. Ignored unless it narrows the
	/// models declared by the caller's tabs.
	pub models: Option<Vec<Model>>,
	/// Upper bound on the number of results requested from the endpoint.
	pub limit: Option<usize>,
	/// Endpoint specific parameters passed through untouched.
	#[serde(flatten)]
	pub extra: IndexMap<String, serde_json::Value>,
}

/// A single search call issued by the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
	/// Monotonic sequence number; only the latest issued request is shown.
	pub seq: u64,
	pub query: String,
	/// Models the endpoint may return. Always a subset of the tab models.
	pub models: Vec<Model>,
	pub params: SearchParams,
}

impl SearchRequest {
	/// Whether `model` falls within this request's scope.
	#[must_use]
	pub fn allows(&self, model: &Model) -> bool {
		self.models.contains(model)
	}
}
