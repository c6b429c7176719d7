use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tabpick::catalog::{Catalog, CatalogItem, parse_key};
use tabpick::{
	ItemKey, Model, Picker, PickerConfig, PickerItem, PickerListener, PickerOutcome,
	RecentsProvider, SearchProvider, TabBody,
};

use crate::cli::{CliArgs, FinishArg};
use crate::settings::ResolvedConfig;

type CatalogPicker = Picker<Vec<CatalogItem>, CatalogItem>;

/// Scripted user interaction replayed against the picker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Script {
	pub(crate) initial: Option<ItemKey>,
	pub(crate) tab: Option<Model>,
	pub(crate) query: Option<String>,
	pub(crate) select: Option<ItemKey>,
	pub(crate) finish: FinishArg,
}

impl Script {
	pub(crate) fn from_cli(cli: &CliArgs) -> Result<Self> {
		let initial = cli.initial.as_deref().map(parse_key).transpose()?;
		let select = cli.select.as_deref().map(parse_key).transpose()?;
		Ok(Self {
			initial,
			tab: cli.tab.as_deref().map(Model::new),
			query: cli.query.clone(),
			select,
			finish: cli.finish,
		})
	}
}

/// Logs picker callbacks so `-v` shows what a host would have received.
struct TraceListener;

impl PickerListener<CatalogItem> for TraceListener {
	fn on_item_select(&mut self, item: &CatalogItem) {
		tracing::info!(key = %item.key(), name = %item.name, "item selected");
	}

	fn on_confirm(&mut self, item: &CatalogItem) {
		tracing::info!(key = %item.key(), "selection confirmed");
	}

	fn on_close(&mut self) {
		tracing::info!("picker closed");
	}
}

/// Opens a picker over a catalog and drives it through a [`Script`].
pub(crate) struct PickerWorkflow {
	picker: CatalogPicker,
	script: Script,
	wait_timeout: Duration,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig, script: Script) -> Result<Self> {
		let catalog = Catalog::load(&config.catalog)?;
		Self::with_catalog(&catalog, config, script)
	}

	fn with_catalog(catalog: &Catalog, config: ResolvedConfig, script: Script) -> Result<Self> {
		let ResolvedConfig {
			catalog: _,
			title,
			options,
			default_to_recent_tab,
			search_params,
			wait_timeout,
		} = config;

		let mut picker_config = PickerConfig::new(catalog.tabs().to_vec())
			.with_title(title)
			.with_options(options)
			.with_default_to_recent_tab(default_to_recent_tab)
			.with_search_params(search_params)
			.with_can_select(catalog.selectable());
		if let Some(key) = &script.initial {
			picker_config = picker_config.with_initial_model(key.model.clone());
		}

		let search: Arc<dyn SearchProvider<CatalogItem>> = Arc::new(catalog.search_provider());
		let recents: Arc<dyn RecentsProvider<CatalogItem>> = Arc::new(catalog.recents_provider());
		let picker = Picker::open(picker_config, search, Some(recents))
			.context("failed to open the picker")?
			.with_listener(TraceListener);

		Ok(Self {
			picker,
			script,
			wait_timeout,
		})
	}

	pub(crate) fn run(mut self) -> Result<PickerOutcome<CatalogItem>> {
		self.settle();

		if let Some(model) = self.script.tab.clone() {
			self.picker.activate_tab(model);
		}
		if let Some(query) = self.script.query.clone() {
			self.picker.set_query(query);
			self.settle();
		}
		if let Some(key) = self.script.select.clone() {
			let item = self.visible_item(&key)?;
			self.picker.select(item);
		}

		match self.script.finish {
			FinishArg::Confirm => {
				if !self.picker.confirm() {
					let reason = self
						.picker
						.state()
						.confirm_blocker()
						.map(|err| err.to_string())
						.unwrap_or_default();
					tracing::warn!(%reason, "confirm refused; leaving the picker open");
				}
			}
			FinishArg::Cancel => self.picker.cancel(),
			FinishArg::Open => {}
		}

		Ok(self.picker.into_outcome())
	}

	fn settle(&mut self) {
		if !self.picker.wait_idle(self.wait_timeout) {
			tracing::warn!(
				timeout_ms = self.wait_timeout.as_millis() as u64,
				"gave up waiting for pending fetches"
			);
		}
	}

	/// Find `key` among the items currently on screen: the search results
	/// while a query is active, otherwise the active tab's list.
	fn visible_item(&self, key: &ItemKey) -> Result<CatalogItem> {
		let state = self.picker.state();
		let search = state.search();
		let matches = |item: &&CatalogItem| item.key() == *key;

		let found = if search.is_searching() {
			search
				.results()
				.and_then(|results| results.iter().find(matches))
				.cloned()
		} else {
			match state.tabs().get(search.active_tab()).map(|tab| &tab.body) {
				Some(TabBody::Recents(recents)) => recents
					.iter()
					.map(|recent| &recent.item)
					.find(matches)
					.cloned(),
				Some(TabBody::Caller(items)) => items.iter().find(matches).cloned(),
				None => None,
			}
		};

		found.ok_or_else(|| {
			anyhow!(
				"{key} is not listed on the {} view",
				if search.is_searching() {
					"search results"
				} else {
					search.active_tab().as_str()
				}
			)
		})
	}
}
