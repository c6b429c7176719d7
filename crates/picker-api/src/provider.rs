use std::sync::Arc;

use crate::error::FetchError;
use crate::types::{RecentItem, SearchRequest};

/// Caller declared predicate deciding whether an item may be confirmed.
pub type SelectablePredicate<I> = Arc<dyn Fn(&I) -> bool + Send + Sync>;

/// Which recency contexts the feed should draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentsContext {
	pub contexts: Vec<String>,
}

impl Default for RecentsContext {
	fn default() -> Self {
		Self {
			contexts: vec!["views".to_string(), "selections".to_string()],
		}
	}
}

/// Source of the global recency feed.
///
/// Implementations are called from a background thread and may block.
pub trait RecentsProvider<I>: Send + Sync {
	fn fetch_recents(&self, context: &RecentsContext) -> Result<Vec<RecentItem<I>>, FetchError>;
}

/// Remote search endpoint. One call per issued query.
///
/// A call may be superseded while it runs; the picker discards its answer,
/// so implementations need not support cancellation themselves.
pub trait SearchProvider<I>: Send + Sync {
	fn search(&self, request: &SearchRequest) -> Result<Vec<I>, FetchError>;
}

impl<I, F> RecentsProvider<I> for F
where
	F: Fn(&RecentsContext) -> Result<Vec<RecentItem<I>>, FetchError> + Send + Sync,
{
	fn fetch_recents(&self, context: &RecentsContext) -> Result<Vec<RecentItem<I>>, FetchError> {
		self(context)
	}
}

impl<I, F> SearchProvider<I> for F
where
	F: Fn(&SearchRequest) -> Result<Vec<I>, FetchError> + Send + Sync,
{
	fn search(&self, request: &SearchRequest) -> Result<Vec<I>, FetchError> {
		self(request)
	}
}
