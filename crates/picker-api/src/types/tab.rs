use super::item::Model;

/// Model tag of the synthetic tab listing recently used items.
pub const RECENTS_MODEL: &str = "recents";

/// A caller supplied tab listing items of a single model.
///
/// `content` is opaque to the picker: it is whatever the caller's renderer
/// needs to draw the tab body.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab<C> {
	pub model: Model,
	pub display_name: String,
	pub icon: String,
	pub content: C,
}

impl<C> Tab<C> {
	pub fn new(model: impl Into<Model>, display_name: impl Into<String>, content: C) -> Self {
		Self {
			model: model.into(),
			display_name: display_name.into(),
			icon: String::new(),
			content,
		}
	}

	#[must_use]
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = icon.into();
		self
	}
}
