use tabpick_api::{FetchError, Model, PickerItem, PickerOptions, RecentItem, Tab};

use super::config::PickerConfig;
use super::events::{Effect, PickerEvent};
use crate::error::{ConfirmError, PickerError};
use crate::recents::{RecentsFilter, filter_recents};
use crate::search::{QueryTransition, SearchSession};
use crate::selection::SelectionController;
use crate::tabs::{TabSet, declared_models};

/// Lifecycle of a picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Open,
	Confirmed,
	Cancelled,
}

/// Orchestration state of one open picker.
///
/// Every change goes through [`PickerState::update`], which returns the
/// effects the host has to perform. The search session owns the query,
/// results and active tab; the selection controller owns the selection.
pub struct PickerState<C, I> {
	pub(super) title: String,
	pub(super) options: PickerOptions,
	caller_tabs: Vec<Tab<C>>,
	models: Vec<Model>,
	initial_model: Option<Model>,
	default_to_recent_tab: bool,
	recents_filter: Option<RecentsFilter<I>>,
	raw_recents: Vec<RecentItem<I>>,
	pub(super) recents_loading: bool,
	pub(super) tabs: TabSet<C, I>,
	pub(super) search: SearchSession<I>,
	pub(super) selection: SelectionController<I>,
	user_chose_tab: bool,
	phase: Phase,
}

impl<C, I> PickerState<C, I>
where
	C: Clone,
	I: PickerItem,
{
	/// Open a session. Recents count as loading until a
	/// [`PickerEvent::RecentsLoaded`] arrives, unless the Recents tab is
	/// disabled altogether.
	pub fn new(config: PickerConfig<C, I>) -> Result<Self, PickerError> {
		let PickerConfig {
			title,
			tabs,
			options,
			initial_model,
			default_to_recent_tab,
			search_params,
			search_filter,
			recents_filter,
			can_select,
			recents_context: _,
		} = config;

		if tabs.is_empty() {
			return Err(PickerError::NoTabs);
		}

		let models = declared_models(&tabs);
		let tab_set = TabSet::build(&tabs, &[], options.has_recents);
		let placeholder = tab_set
			.first()
			.map(|tab| tab.model.clone())
			.ok_or(PickerError::NoTabs)?;
		let search = SearchSession::new(models.clone(), placeholder)
			.with_params(search_params)
			.with_filter(search_filter);

		let mut state = Self {
			title,
			recents_loading: options.has_recents,
			options,
			caller_tabs: tabs,
			models,
			initial_model,
			default_to_recent_tab,
			recents_filter,
			raw_recents: Vec::new(),
			tabs: tab_set,
			search,
			selection: SelectionController::new(can_select),
			user_chose_tab: false,
			phase: Phase::Open,
		};
		state.refresh_tabs();
		Ok(state)
	}

	/// Apply one event and return the effects it causes. Once the session is
	/// closed every event is ignored, so late answers cannot change anything.
	pub fn update(&mut self, event: PickerEvent<C, I>) -> Vec<Effect<I>> {
		if self.is_closed() {
			tracing::trace!("picker closed; ignoring event");
			return Vec::new();
		}

		match event {
			PickerEvent::QueryChanged(query) => self.on_query(query),
			PickerEvent::SearchResolved { seq, outcome } => {
				self.search.resolve(seq, outcome);
				Vec::new()
			}
			PickerEvent::RecentsLoaded(outcome) => {
				self.on_recents(outcome);
				Vec::new()
			}
			PickerEvent::TabActivated(model) => {
				self.on_tab(model);
				Vec::new()
			}
			PickerEvent::ItemSelected(item) => self.on_select(item),
			PickerEvent::Confirm => self.on_confirm(),
			PickerEvent::Cancel => self.on_cancel(),
			PickerEvent::TabsChanged(tabs) => {
				self.on_tabs(tabs);
				Vec::new()
			}
			PickerEvent::RecentsFilterChanged(filter) => {
				self.recents_filter = filter;
				self.refresh_tabs();
				Vec::new()
			}
			PickerEvent::SearchFilterChanged(filter) => {
				self.search.set_filter(filter);
				Vec::new()
			}
		}
	}

	fn on_query(&mut self, query: String) -> Vec<Effect<I>> {
		if !self.options.show_search {
			tracing::debug!("search is disabled; ignoring query");
			return Vec::new();
		}
		match self.search.set_query(query) {
			QueryTransition::Issued(request) => vec![Effect::IssueSearch(request)],
			QueryTransition::Cleared => vec![Effect::CancelSearch],
			QueryTransition::Unchanged => Vec::new(),
		}
	}

	fn on_recents(&mut self, outcome: Result<Vec<RecentItem<I>>, FetchError>) {
		self.recents_loading = false;
		self.raw_recents = match outcome {
			Ok(items) => items,
			Err(err) => {
				tracing::warn!(error = %err, "recents unavailable; hiding the Recents tab");
				Vec::new()
			}
		};
		self.refresh_tabs();
	}

	fn on_tab(&mut self, model: Model) {
		if !self.tabs.contains(&model) {
			tracing::debug!(%model, "ignoring activation of unknown tab");
			return;
		}
		self.user_chose_tab = true;
		self.search.activate_tab(model);
	}

	fn on_select(&mut self, item: I) -> Vec<Effect<I>> {
		let selectable = self.selection.select(item.clone());
		let mut effects = vec![Effect::ItemSelected(item)];
		if !self.options.has_confirm_buttons && selectable {
			effects.extend(self.on_confirm());
		}
		effects
	}

	fn on_confirm(&mut self) -> Vec<Effect<I>> {
		match self.selection.confirm() {
			Ok(item) => {
				tracing::debug!(key = %item.key(), "picker confirmed");
				self.phase = Phase::Confirmed;
				vec![Effect::Confirmed(item), Effect::CancelSearch, Effect::Closed]
			}
			Err(err) => {
				tracing::debug!(error = %err, "confirm refused");
				Vec::new()
			}
		}
	}

	fn on_cancel(&mut self) -> Vec<Effect<I>> {
		tracing::debug!("picker cancelled");
		self.phase = Phase::Cancelled;
		self.selection.finish();
		vec![Effect::CancelSearch, Effect::Closed]
	}

	fn on_tabs(&mut self, tabs: Vec<Tab<C>>) {
		if tabs.is_empty() {
			tracing::warn!("ignoring an empty tab list");
			return;
		}
		self.models = declared_models(&tabs);
		self.search.set_models(self.models.clone());
		self.caller_tabs = tabs;
		self.refresh_tabs();
	}

	/// Recompute the filtered recents and the tab set, then make sure the
	/// active tab still exists.
	fn refresh_tabs(&mut self) {
		let recents = filter_recents(&self.raw_recents, &self.models, self.recents_filter.as_ref());
		self.tabs = TabSet::build(&self.caller_tabs, &recents, self.options.has_recents);

		let active = self.search.active_tab();
		if !self.user_chose_tab || !self.tabs.contains(active) {
			if let Some(model) = self.default_tab() {
				self.search.activate_tab(model);
			}
		}
	}

	/// Recents when preferred and present, else the initial value's tab,
	/// else the first tab.
	fn default_tab(&self) -> Option<Model> {
		if self.default_to_recent_tab && self.tabs.has_recents() {
			return Some(Model::recents());
		}
		if let Some(model) = &self.initial_model
			&& self.tabs.contains(model)
		{
			return Some(model.clone());
		}
		self.tabs.first().map(|tab| tab.model.clone())
	}
}

impl<C, I> PickerState<C, I> {
	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn options(&self) -> &PickerOptions {
		&self.options
	}

	pub fn tabs(&self) -> &TabSet<C, I> {
		&self.tabs
	}

	pub fn search(&self) -> &SearchSession<I> {
		&self.search
	}

	pub fn selection(&self) -> &SelectionController<I> {
		&self.selection
	}

	pub fn recents_loading(&self) -> bool {
		self.recents_loading
	}

	pub fn is_closed(&self) -> bool {
		self.phase != Phase::Open
	}

	pub fn is_confirmed(&self) -> bool {
		self.phase == Phase::Confirmed
	}

	/// Why confirming right now would be refused, if it would.
	pub fn confirm_blocker(&self) -> Option<ConfirmError> {
		if self.is_closed() {
			return Some(ConfirmError::Finished);
		}
		let state = self.selection.current();
		match (&state.selected_item, state.selectable) {
			(None, _) => Some(ConfirmError::NothingSelected),
			(Some(_), false) => Some(ConfirmError::NotSelectable),
			(Some(_), true) => None,
		}
	}
}
