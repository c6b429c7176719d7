use std::sync::Arc;

use tabpick_api::{FetchError, Model, PickerItem, SearchParams, SearchRequest};

/// Caller override applied to every accepted result batch.
pub type SearchFilter<I> = Arc<dyn Fn(Vec<I>) -> Vec<I> + Send + Sync>;

/// Query and browsing context of an open picker.
///
/// The picker is in search mode exactly when `query` is non-empty. `results`
/// stays `None` until the first answer for the current search arrives and is
/// always `None` while browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState<I> {
	pub query: String,
	pub results: Option<Vec<I>>,
	pub active_tab_model: Model,
}

/// What a query change asks the caller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTransition {
	/// Nothing to do; the query did not change the session.
	Unchanged,
	/// Send this request to the search provider.
	Issued(SearchRequest),
	/// The query was cleared; any in-flight request is obsolete.
	Cleared,
}

/// How a provider answer was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// The answer belongs to the latest request and is now shown.
	Applied,
	/// The answer belongs to a superseded or cancelled request and was dropped.
	Stale,
	/// The latest request failed; the previous results stay on screen.
	Failed,
}

/// Owns the transition between browsing tabs and showing search results.
pub struct SearchSession<I> {
	state: SessionState<I>,
	models: Vec<Model>,
	params: SearchParams,
	filter: Option<SearchFilter<I>>,
	next_seq: u64,
	current: Option<PendingScope>,
	in_flight: bool,
	unavailable: bool,
}

/// Sequence number and model scope of the latest issued request.
#[derive(Debug, Clone)]
struct PendingScope {
	seq: u64,
	models: Vec<Model>,
}

impl<I> std::fmt::Debug for SearchSession<I>
where
	I: std::fmt::Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchSession")
			.field("state", &self.state)
			.field("models", &self.models)
			.field("next_seq", &self.next_seq)
			.field("in_flight", &self.in_flight)
			.field("unavailable", &self.unavailable)
			.finish_non_exhaustive()
	}
}

impl<I> SearchSession<I> {
	pub fn state(&self) -> &SessionState<I> {
		&self.state
	}

	pub fn query(&self) -> &str {
		&self.state.query
	}

	pub fn results(&self) -> Option<&[I]> {
		self.state.results.as_deref()
	}

	pub fn active_tab(&self) -> &Model {
		&self.state.active_tab_model
	}

	pub fn is_searching(&self) -> bool {
		!self.state.query.is_empty()
	}

	/// Whether an answer for the latest request is still outstanding.
	pub fn is_pending(&self) -> bool {
		self.in_flight
	}

	/// Whether the latest search failed. Cleared by the next successful answer
	/// or by leaving search mode.
	pub fn is_unavailable(&self) -> bool {
		self.unavailable
	}

	/// Sequence number of the latest issued request, if it is still current.
	pub fn latest_seq(&self) -> Option<u64> {
		self.current.as_ref().map(|scope| scope.seq)
	}
}

impl<I: PickerItem> SearchSession<I> {
	/// Start a session in browsing mode on `active_tab_model`. `models` are the
	/// models declared by the caller's tabs.
	pub fn new(models: Vec<Model>, active_tab_model: Model) -> Self {
		Self {
			state: SessionState {
				query: String::new(),
				results: None,
				active_tab_model,
			},
			models,
			params: SearchParams::default(),
			filter: None,
			next_seq: 0,
			current: None,
			in_flight: false,
			unavailable: false,
		}
	}

	#[must_use]
	pub fn with_params(mut self, params: SearchParams) -> Self {
		self.params = params;
		self
	}

	#[must_use]
	pub fn with_filter(mut self, filter: Option<SearchFilter<I>>) -> Self {
		self.filter = filter;
		self
	}

	/// Record the active browsing tab. Search mode does not touch it, so the
	/// tab is still there when the query is cleared.
	pub fn activate_tab(&mut self, model: Model) {
		self.state.active_tab_model = model;
	}

	/// Replace the declared models after the caller's tabs changed. Takes
	/// effect with the next issued request.
	pub fn set_models(&mut self, models: Vec<Model>) {
		self.models = models;
	}

	pub fn set_filter(&mut self, filter: Option<SearchFilter<I>>) {
		self.filter = filter;
	}

	/// React to new query text.
	///
	/// A non-empty query issues a fresh request, superseding any request
	/// still in flight. An empty query leaves search mode, discarding results.
	pub fn set_query(&mut self, query: impl Into<String>) -> QueryTransition {
		let query = query.into();
		if query.is_empty() {
			return self.clear();
		}
		if query == self.state.query && self.in_flight {
			return QueryTransition::Unchanged;
		}

		self.state.query = query;
		QueryTransition::Issued(self.issue())
	}

	/// Leave search mode. The active tab is left untouched.
	pub fn clear(&mut self) -> QueryTransition {
		if self.state.query.is_empty() && self.current.is_none() {
			return QueryTransition::Unchanged;
		}
		self.state.query.clear();
		self.state.results = None;
		self.current = None;
		self.in_flight = false;
		self.unavailable = false;
		QueryTransition::Cleared
	}

	/// Apply a provider answer. Only the latest issued request may change the
	/// visible results; anything else is dropped regardless of arrival order.
	pub fn resolve(&mut self, seq: u64, outcome: Result<Vec<I>, FetchError>) -> Resolution {
		let Some(scope) = self
			.current
			.as_ref()
			.filter(|scope| scope.seq == seq)
			.map(|scope| scope.models.clone())
		else {
			tracing::trace!(seq, latest = ?self.latest_seq(), "discarding stale search response");
			return Resolution::Stale;
		};
		self.in_flight = false;

		match outcome {
			Ok(mut items) => {
				items.retain(|item| scope.contains(item.model()));
				let mut items = match &self.filter {
					Some(filter) => filter(items),
					None => items,
				};
				items.retain(|item| scope.contains(item.model()));
				tracing::debug!(seq, count = items.len(), "search results applied");
				self.state.results = Some(items);
				self.unavailable = false;
				Resolution::Applied
			}
			Err(err) => {
				tracing::warn!(seq, error = %err, "search failed; keeping previous results");
				self.unavailable = true;
				Resolution::Failed
			}
		}
	}

	fn issue(&mut self) -> SearchRequest {
		self.next_seq = self.next_seq.saturating_add(1);
		let seq = self.next_seq;
		let models = self.request_models();
		self.current = Some(PendingScope {
			seq,
			models: models.clone(),
		});
		self.in_flight = true;
		tracing::debug!(seq, query = %self.state.query, "issuing search");

		SearchRequest {
			seq,
			query: self.state.query.clone(),
			models,
			params: self.params.clone(),
		}
	}

	/// Declared models, narrowed by the caller's parameter override when that
	/// override selects a non-empty strict subset of them.
	fn request_models(&self) -> Vec<Model> {
		let Some(requested) = &self.params.models else {
			return self.models.clone();
		};
		let narrowed: Vec<Model> = self
			.models
			.iter()
			.filter(|model| requested.contains(model))
			.cloned()
			.collect();
		if narrowed.is_empty() {
			self.models.clone()
		} else {
			narrowed
		}
	}
}
