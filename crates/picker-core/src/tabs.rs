//! Effective tab set: the caller's tabs, optionally led by a Recents tab.

use tabpick_api::{Model, RecentItem, Tab};

const RECENTS_DISPLAY_NAME: &str = "Recents";
const RECENTS_ICON: &str = "clock";

/// Body of an effective tab.
#[derive(Debug, Clone, PartialEq)]
pub enum TabBody<C, I> {
	/// The synthetic Recents tab, listing the filtered recency feed.
	Recents(Vec<RecentItem<I>>),
	/// A caller supplied tab with its opaque content.
	Caller(C),
}

/// A tab as it is shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveTab<C, I> {
	pub model: Model,
	pub display_name: String,
	pub icon: String,
	pub body: TabBody<C, I>,
}

impl<C: Clone, I> EffectiveTab<C, I> {
	fn from_caller(tab: &Tab<C>) -> Self {
		Self {
			model: tab.model.clone(),
			display_name: tab.display_name.clone(),
			icon: tab.icon.clone(),
			body: TabBody::Caller(tab.content.clone()),
		}
	}
}

impl<C, I> EffectiveTab<C, I> {
	fn recents(items: Vec<RecentItem<I>>) -> Self {
		Self {
			model: Model::recents(),
			display_name: RECENTS_DISPLAY_NAME.to_string(),
			icon: RECENTS_ICON.to_string(),
			body: TabBody::Recents(items),
		}
	}

	#[must_use]
	pub fn is_recents(&self) -> bool {
		matches!(self.body, TabBody::Recents(_))
	}
}

/// Ordered list of effective tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSet<C, I> {
	tabs: Vec<EffectiveTab<C, I>>,
}

impl<C: Clone, I: Clone> TabSet<C, I> {
	/// Derive the effective tabs. The Recents tab leads only when enabled and
	/// there is at least one recent item to show; the caller's order is kept
	/// as is, duplicates included.
	pub fn build(caller_tabs: &[Tab<C>], recents: &[RecentItem<I>], has_recents: bool) -> Self {
		let mut tabs = Vec::with_capacity(caller_tabs.len() + 1);
		if has_recents && !recents.is_empty() {
			tabs.push(EffectiveTab::recents(recents.to_vec()));
		}
		tabs.extend(caller_tabs.iter().map(EffectiveTab::from_caller));
		Self { tabs }
	}
}

impl<C, I> TabSet<C, I> {
	#[must_use]
	pub fn len(&self) -> usize {
		self.tabs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tabs.is_empty()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[EffectiveTab<C, I>] {
		&self.tabs
	}

	pub fn iter(&self) -> impl Iterator<Item = &EffectiveTab<C, I>> {
		self.tabs.iter()
	}

	#[must_use]
	pub fn first(&self) -> Option<&EffectiveTab<C, I>> {
		self.tabs.first()
	}

	/// First tab declaring `model`.
	#[must_use]
	pub fn get(&self, model: &Model) -> Option<&EffectiveTab<C, I>> {
		self.tabs.iter().find(|tab| &tab.model == model)
	}

	#[must_use]
	pub fn contains(&self, model: &Model) -> bool {
		self.get(model).is_some()
	}

	#[must_use]
	pub fn has_recents(&self) -> bool {
		self.tabs.first().is_some_and(EffectiveTab::is_recents)
	}
}

/// Models declared by the caller's tabs, in tab order, without blanks or
/// repeats. This is the scope for both the recents filter and search.
pub fn declared_models<C>(tabs: &[Tab<C>]) -> Vec<Model> {
	let mut models: Vec<Model> = Vec::with_capacity(tabs.len());
	for tab in tabs {
		if tab.model.is_empty() || models.contains(&tab.model) {
			continue;
		}
		models.push(tab.model.clone());
	}
	models
}
