use tabpick_api::Model;

use super::state::PickerState;
use crate::selection::SelectionState;
use crate::tabs::EffectiveTab;

/// Coarse render mode, handy for hosts that only branch on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
	Single,
	Tabbed,
	SearchResults,
}

/// What the dialog body should show.
#[derive(Debug)]
pub enum RenderMode<'a, C, I> {
	/// Exactly one tab and no query: draw its content without a tab strip.
	Single(&'a EffectiveTab<C, I>),
	/// Several tabs: draw the strip with `active` selected.
	Tabbed {
		tabs: &'a [EffectiveTab<C, I>],
		active: &'a Model,
	},
	/// A query is active: the result list replaces per-tab content.
	SearchResults {
		query: &'a str,
		/// `None` until the first answer for this search arrives.
		results: Option<&'a [I]>,
		pending: bool,
		/// The latest search failed; results are from an earlier query.
		unavailable: bool,
	},
}

impl<C, I> RenderMode<'_, C, I> {
	pub fn kind(&self) -> ViewKind {
		match self {
			RenderMode::Single(_) => ViewKind::Single,
			RenderMode::Tabbed { .. } => ViewKind::Tabbed,
			RenderMode::SearchResults { .. } => ViewKind::SearchResults,
		}
	}

	/// Whether a tab strip (or the results list standing in for it) is drawn.
	pub fn has_tab_strip(&self) -> bool {
		!matches!(self, RenderMode::Single(_))
	}
}

/// Read-only projection of the picker for the rendering layer.
#[derive(Debug)]
pub struct PickerView<'a, C, I> {
	pub title: &'a str,
	pub mode: RenderMode<'a, C, I>,
	/// Active browsing tab, also while searching. Side panels keyed on the
	/// item type read this.
	pub active_tab: &'a Model,
	pub selection: &'a SelectionState<I>,
	pub show_search: bool,
	pub query: &'a str,
	pub has_confirm_buttons: bool,
	pub confirm_enabled: bool,
	pub confirm_label: &'a str,
	pub cancel_label: &'a str,
	pub recents_loading: bool,
}

impl<C, I> PickerState<C, I> {
	/// Project the current state into what should be drawn.
	pub fn view(&self) -> PickerView<'_, C, I> {
		PickerView {
			title: &self.title,
			mode: self.render_mode(),
			active_tab: self.search.active_tab(),
			selection: self.selection.current(),
			show_search: self.options.show_search,
			query: self.search.query(),
			has_confirm_buttons: self.options.has_confirm_buttons,
			confirm_enabled: self.confirm_blocker().is_none(),
			confirm_label: self.options.confirm_label(),
			cancel_label: self.options.cancel_label(),
			recents_loading: self.recents_loading,
		}
	}

	pub fn render_mode(&self) -> RenderMode<'_, C, I> {
		if self.search.is_searching() {
			return RenderMode::SearchResults {
				query: self.search.query(),
				results: self.search.results(),
				pending: self.search.is_pending(),
				unavailable: self.search.is_unavailable(),
			};
		}

		match self.tabs.as_slice() {
			[only] => RenderMode::Single(only),
			tabs => RenderMode::Tabbed {
				tabs,
				active: self.search.active_tab(),
			},
		}
	}
}
