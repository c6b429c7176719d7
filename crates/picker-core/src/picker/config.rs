use std::sync::Arc;

use tabpick_api::{
	Model, PickerItem, PickerOptions, RecentsContext, SearchParams, SelectablePredicate, Tab,
};

use crate::recents::RecentsFilter;
use crate::search::SearchFilter;

const DEFAULT_TITLE: &str = "Choose an item";

/// Everything the caller declares when opening a picker.
pub struct PickerConfig<C, I> {
	pub title: String,
	pub tabs: Vec<Tab<C>>,
	pub options: PickerOptions,
	/// Model of the value the picker was opened with; picks the initial tab
	/// when Recents is not preferred.
	pub initial_model: Option<Model>,
	/// Open on the Recents tab when it exists.
	pub default_to_recent_tab: bool,
	pub search_params: SearchParams,
	pub search_filter: Option<SearchFilter<I>>,
	pub recents_filter: Option<RecentsFilter<I>>,
	pub can_select: SelectablePredicate<I>,
	pub recents_context: RecentsContext,
}

impl<C, I> PickerConfig<C, I>
where
	I: PickerItem + 'static,
{
	pub fn new(tabs: Vec<Tab<C>>) -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			tabs,
			options: PickerOptions::default(),
			initial_model: None,
			default_to_recent_tab: true,
			search_params: SearchParams::default(),
			search_filter: None,
			recents_filter: None,
			can_select: Arc::new(|_: &I| true),
			recents_context: RecentsContext::default(),
		}
	}
}

impl<C, I> PickerConfig<C, I> {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_options(mut self, options: PickerOptions) -> Self {
		self.options = options;
		self
	}

	#[must_use]
	pub fn with_initial_model(mut self, model: impl Into<Model>) -> Self {
		self.initial_model = Some(model.into());
		self
	}

	#[must_use]
	pub fn with_default_to_recent_tab(mut self, enabled: bool) -> Self {
		self.default_to_recent_tab = enabled;
		self
	}

	#[must_use]
	pub fn with_search_params(mut self, params: SearchParams) -> Self {
		self.search_params = params;
		self
	}

	#[must_use]
	pub fn with_search_filter(mut self, filter: SearchFilter<I>) -> Self {
		self.search_filter = Some(filter);
		self
	}

	#[must_use]
	pub fn with_recents_filter(mut self, filter: RecentsFilter<I>) -> Self {
		self.recents_filter = Some(filter);
		self
	}

	#[must_use]
	pub fn with_recents_context(mut self, context: RecentsContext) -> Self {
		self.recents_context = context;
		self
	}

	#[must_use]
	pub fn with_can_select(mut self, predicate: SelectablePredicate<I>) -> Self {
		self.can_select = predicate;
		self
	}
}
