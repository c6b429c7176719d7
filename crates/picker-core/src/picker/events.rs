use tabpick_api::{FetchError, Model, RecentItem, Tab};

use crate::recents::RecentsFilter;
use crate::search::SearchFilter;

/// Discrete inputs to [`PickerState::update`](super::PickerState::update).
pub enum PickerEvent<C, I> {
	/// The search box text changed.
	QueryChanged(String),
	/// The search provider answered request `seq`.
	SearchResolved {
		seq: u64,
		outcome: Result<Vec<I>, FetchError>,
	},
	/// The recency feed arrived (or failed).
	RecentsLoaded(Result<Vec<RecentItem<I>>, FetchError>),
	/// The user switched to another tab.
	TabActivated(Model),
	/// The user highlighted an item in any tab or in the search results.
	ItemSelected(I),
	/// The confirm button was pressed.
	Confirm,
	/// The cancel button was pressed or an escape signal arrived.
	Cancel,
	/// The caller replaced its tabs.
	TabsChanged(Vec<Tab<C>>),
	/// The caller replaced its recents override.
	RecentsFilterChanged(Option<RecentsFilter<I>>),
	/// The caller replaced its search results override.
	SearchFilterChanged(Option<SearchFilter<I>>),
}

/// Work the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<I> {
	/// Send this request to the search provider.
	IssueSearch(tabpick_api::SearchRequest),
	/// Every outstanding search request is obsolete.
	CancelSearch,
	/// Notify listeners of a new selection (live preview).
	ItemSelected(I),
	/// The session confirmed this item.
	Confirmed(I),
	/// The session is over; release resources and close the dialog.
	Closed,
}
