use tabpick_api::{FetchError, SearchRequest};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Call the search provider for this request.
	Query(SearchRequest),
	/// Stop the background worker thread.
	Shutdown,
}

/// Provider answer sent back to the picker thread.
#[derive(Debug)]
pub(crate) struct SearchResponse<I> {
	/// Sequence number of the [`SearchRequest`] that produced the answer.
	pub(crate) seq: u64,
	pub(crate) outcome: Result<Vec<I>, FetchError>,
}
