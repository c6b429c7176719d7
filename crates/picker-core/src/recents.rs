//! Narrowing of the global recency feed to the caller's item types.

use std::sync::Arc;

use tabpick_api::{Model, PickerItem, RecentItem};

/// Caller override applied after the model filter.
pub type RecentsFilter<I> = Arc<dyn Fn(Vec<RecentItem<I>>) -> Vec<RecentItem<I>> + Send + Sync>;

/// Keep the recent items whose model one of the caller's tabs declares, then
/// hand them to the optional override.
///
/// The raw feed is only borrowed and its order is kept. Whatever the override
/// returns is checked against `allowed_models` once more, so the Recents tab
/// can never surface an item type the caller cannot handle.
pub fn filter_recents<I>(
	raw: &[RecentItem<I>],
	allowed_models: &[Model],
	override_filter: Option<&RecentsFilter<I>>,
) -> Vec<RecentItem<I>>
where
	I: PickerItem,
{
	let relevant: Vec<RecentItem<I>> = raw
		.iter()
		.filter(|recent| allowed_models.contains(recent.item.model()))
		.cloned()
		.collect();

	let Some(filter) = override_filter else {
		return relevant;
	};

	let mut narrowed = filter(relevant);
	let before = narrowed.len();
	narrowed.retain(|recent| allowed_models.contains(recent.item.model()));
	if narrowed.len() != before {
		tracing::debug!(
			dropped = before - narrowed.len(),
			"recents override returned items outside the declared models"
		);
	}
	narrowed
}
