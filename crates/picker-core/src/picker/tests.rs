use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tabpick_api::{
	FetchError, ItemId, Model, PickerItem, PickerOptions, RecentItem, RecentsContext,
	RecentsProvider, SearchProvider, SearchRequest, Tab,
};

use super::*;
use crate::error::ConfirmError;

#[derive(Debug, Clone, PartialEq)]
struct Row {
	id: ItemId,
	model: Model,
	name: String,
	archived: bool,
}

impl PickerItem for Row {
	fn id(&self) -> &ItemId {
		&self.id
	}

	fn model(&self) -> &Model {
		&self.model
	}
}

fn row(id: i64, model: &str) -> Row {
	Row {
		id: id.into(),
		model: model.into(),
		name: format!("{model} {id}"),
		archived: false,
	}
}

fn archived(id: i64, model: &str) -> Row {
	Row {
		archived: true,
		..row(id, model)
	}
}

fn recent(item: Row) -> RecentItem<Row> {
	RecentItem::new(item, Utc::now())
}

fn two_tabs() -> Vec<Tab<&'static str>> {
	vec![
		Tab::new("card", "Questions", "card-browser"),
		Tab::new("table", "Tables", "table-browser"),
	]
}

fn open(config: PickerConfig<&'static str, Row>) -> PickerState<&'static str, Row> {
	PickerState::new(config).expect("picker opens")
}

fn issued(effects: &[Effect<Row>]) -> SearchRequest {
	effects
		.iter()
		.find_map(|effect| match effect {
			Effect::IssueSearch(request) => Some(request.clone()),
			_ => None,
		})
		.expect("a search request")
}

fn unarchived(config: PickerConfig<&'static str, Row>) -> PickerConfig<&'static str, Row> {
	config.with_can_select(Arc::new(|row: &Row| !row.archived))
}

#[test]
fn opening_without_tabs_fails() {
	let config: PickerConfig<&'static str, Row> = PickerConfig::new(Vec::new());
	assert!(matches!(PickerState::new(config), Err(crate::PickerError::NoTabs)));
}

#[test]
fn single_tab_without_query_renders_single_view() {
	let tabs = vec![Tab::new("table", "Tables", "table-browser")];
	let mut state = open(PickerConfig::new(tabs));
	state.update(PickerEvent::RecentsLoaded(Ok(Vec::new())));

	let view = state.view();
	assert_eq!(view.mode.kind(), ViewKind::Single);
	assert!(!view.mode.has_tab_strip());
	match view.mode {
		RenderMode::Single(tab) => assert_eq!(tab.model, "table"),
		other => panic!("unexpected mode {other:?}"),
	}
}

#[test]
fn single_tab_with_query_switches_to_search_results() {
	let tabs = vec![Tab::new("table", "Tables", "table-browser")];
	let mut state = open(PickerConfig::new(tabs));
	state.update(PickerEvent::QueryChanged("orders".into()));

	assert_eq!(state.view().mode.kind(), ViewKind::SearchResults);
}

#[test]
fn single_tab_plus_recents_renders_tabbed_view() {
	let tabs = vec![Tab::new("table", "Tables", "table-browser")];
	let mut state = open(PickerConfig::new(tabs));
	state.update(PickerEvent::RecentsLoaded(Ok(vec![recent(row(1, "table"))])));

	let view = state.view();
	assert_eq!(view.mode.kind(), ViewKind::Tabbed);
	assert_eq!(view.active_tab, &Model::recents());
}

#[test]
fn recents_tab_never_lists_foreign_models() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::RecentsLoaded(Ok(vec![
		recent(row(1, "card")),
		recent(row(2, "foo")),
		recent(row(3, "table")),
	])));

	let recents = match &state.tabs().as_slice()[0].body {
		crate::TabBody::Recents(items) => items.clone(),
		crate::TabBody::Caller(_) => panic!("recents tab should lead"),
	};
	assert_eq!(recents.len(), 2);
	assert!(recents.iter().all(|recent| recent.item.model != "foo"));
}

#[test]
fn failed_recents_hide_the_tab_but_keep_the_dialog() {
	let mut state = open(PickerConfig::new(two_tabs()));
	assert!(state.recents_loading());

	state.update(PickerEvent::RecentsLoaded(Err(FetchError::unavailable(
		"recents", "offline",
	))));

	assert!(!state.recents_loading());
	assert_eq!(state.tabs().len(), 2);
	assert!(!state.tabs().has_recents());
	assert_eq!(state.view().mode.kind(), ViewKind::Tabbed);
	assert_eq!(state.search().active_tab(), &Model::new("card"));
}

#[test]
fn clearing_the_query_restores_the_browsed_tab() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::RecentsLoaded(Ok(vec![recent(row(1, "card"))])));
	state.update(PickerEvent::TabActivated(Model::new("table")));

	let request = issued(&state.update(PickerEvent::QueryChanged("orders".into())));
	state.update(PickerEvent::SearchResolved {
		seq: request.seq,
		outcome: Ok(vec![row(7, "card")]),
	});
	assert_eq!(state.view().mode.kind(), ViewKind::SearchResults);

	let effects = state.update(PickerEvent::QueryChanged(String::new()));
	assert_eq!(effects, vec![Effect::CancelSearch]);
	assert_eq!(state.search().active_tab(), &Model::new("table"));
	assert_eq!(state.search().results(), None);
	match state.view().mode {
		RenderMode::Tabbed { active, .. } => assert_eq!(active, &Model::new("table")),
		other => panic!("unexpected mode {other:?}"),
	}
}

#[test]
fn superseded_search_results_are_never_shown() {
	for answer_first_query_last in [true, false] {
		let mut state = open(PickerConfig::new(two_tabs()));
		let first = issued(&state.update(PickerEvent::QueryChanged("a".into())));
		let second = issued(&state.update(PickerEvent::QueryChanged("ab".into())));

		let mut answers = vec![
			(first.seq, vec![row(1, "card")]),
			(second.seq, vec![row(2, "table")]),
		];
		if answer_first_query_last {
			answers.reverse();
		}
		for (seq, items) in answers {
			state.update(PickerEvent::SearchResolved {
				seq,
				outcome: Ok(items),
			});
		}

		assert_eq!(state.search().results(), Some(&[row(2, "table")][..]));
		match state.view().mode {
			RenderMode::SearchResults {
				query,
				results,
				pending,
				..
			} => {
				assert_eq!(query, "ab");
				assert_eq!(results, Some(&[row(2, "table")][..]));
				assert!(!pending);
			}
			other => panic!("unexpected mode {other:?}"),
		}
	}
}

#[test]
fn search_requests_are_scoped_to_declared_models() {
	let mut state = open(PickerConfig::new(two_tabs()));
	let request = issued(&state.update(PickerEvent::QueryChanged("x".into())));
	assert_eq!(request.models, vec![Model::new("card"), Model::new("table")]);
}

#[test]
fn failed_search_keeps_query_and_flags_unavailable() {
	let mut state = open(PickerConfig::new(two_tabs()));
	let request = issued(&state.update(PickerEvent::QueryChanged("x".into())));
	state.update(PickerEvent::SearchResolved {
		seq: request.seq,
		outcome: Err(FetchError::unavailable("search", "502")),
	});

	match state.view().mode {
		RenderMode::SearchResults {
			query,
			results,
			unavailable,
			..
		} => {
			assert_eq!(query, "x");
			assert_eq!(results, None);
			assert!(unavailable);
		}
		other => panic!("unexpected mode {other:?}"),
	}
}

#[test]
fn confirm_without_selection_emits_nothing() {
	let mut state = open(PickerConfig::new(two_tabs()));
	assert!(state.update(PickerEvent::Confirm).is_empty());
	assert!(!state.is_closed());
	assert_eq!(state.confirm_blocker(), Some(ConfirmError::NothingSelected));
	assert!(!state.view().confirm_enabled);
}

#[test]
fn confirm_requires_a_selectable_item() {
	let mut state = open(unarchived(PickerConfig::new(two_tabs())));

	let effects = state.update(PickerEvent::ItemSelected(archived(1, "card")));
	assert_eq!(effects, vec![Effect::ItemSelected(archived(1, "card"))]);
	assert!(state.update(PickerEvent::Confirm).is_empty());
	assert_eq!(state.confirm_blocker(), Some(ConfirmError::NotSelectable));

	state.update(PickerEvent::ItemSelected(row(2, "card")));
	assert!(state.view().confirm_enabled);
	let effects = state.update(PickerEvent::Confirm);
	assert_eq!(
		effects,
		vec![
			Effect::Confirmed(row(2, "card")),
			Effect::CancelSearch,
			Effect::Closed
		]
	);
	assert!(state.update(PickerEvent::Confirm).is_empty());
	assert!(state.is_confirmed());
}

#[test]
fn selection_payload_does_not_depend_on_provenance() {
	let run = |from_recents: bool| {
		let mut state = open(PickerConfig::new(two_tabs()));
		state.update(PickerEvent::RecentsLoaded(Ok(vec![recent(row(5, "table"))])));
		let item = if from_recents {
			state.update(PickerEvent::TabActivated(Model::recents()));
			match &state.tabs().as_slice()[0].body {
				crate::TabBody::Recents(items) => items[0].item.clone(),
				crate::TabBody::Caller(_) => panic!("recents tab should lead"),
			}
		} else {
			state.update(PickerEvent::TabActivated(Model::new("table")));
			row(5, "table")
		};
		let mut effects = state.update(PickerEvent::ItemSelected(item));
		effects.extend(state.update(PickerEvent::Confirm));
		effects
	};

	assert_eq!(run(true), run(false));
}

#[test]
fn cancel_is_idempotent_and_ignores_late_answers() {
	let mut state = open(PickerConfig::new(two_tabs()));
	let request = issued(&state.update(PickerEvent::QueryChanged("x".into())));

	assert_eq!(
		state.update(PickerEvent::Cancel),
		vec![Effect::CancelSearch, Effect::Closed]
	);
	assert!(state.update(PickerEvent::Cancel).is_empty());

	state.update(PickerEvent::SearchResolved {
		seq: request.seq,
		outcome: Ok(vec![row(1, "card")]),
	});
	assert_eq!(state.search().results(), None);
	assert!(state.update(PickerEvent::ItemSelected(row(1, "card"))).is_empty());
	assert!(state.update(PickerEvent::Confirm).is_empty());
}

#[test]
fn initial_tab_prefers_recents_then_initial_model() {
	let recents = || Ok(vec![recent(row(1, "card"))]);

	let mut state = open(PickerConfig::new(two_tabs()).with_initial_model("table"));
	assert_eq!(state.search().active_tab(), &Model::new("table"));
	state.update(PickerEvent::RecentsLoaded(recents()));
	assert_eq!(state.search().active_tab(), &Model::recents());

	let mut state = open(
		PickerConfig::new(two_tabs())
			.with_initial_model("table")
			.with_default_to_recent_tab(false),
	);
	state.update(PickerEvent::RecentsLoaded(recents()));
	assert_eq!(state.search().active_tab(), &Model::new("table"));
}

#[test]
fn late_recents_do_not_override_a_tab_the_user_chose() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::TabActivated(Model::new("table")));
	state.update(PickerEvent::RecentsLoaded(Ok(vec![recent(row(1, "card"))])));

	assert!(state.tabs().has_recents());
	assert_eq!(state.search().active_tab(), &Model::new("table"));
}

#[test]
fn unknown_tabs_cannot_be_activated() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::TabActivated(Model::new("recents")));
	assert_eq!(state.search().active_tab(), &Model::new("card"));
}

#[test]
fn tab_changes_move_off_a_removed_tab() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::TabActivated(Model::new("table")));
	state.update(PickerEvent::TabsChanged(vec![Tab::new(
		"card",
		"Questions",
		"card-browser",
	)]));

	assert_eq!(state.search().active_tab(), &Model::new("card"));
	let request = issued(&state.update(PickerEvent::QueryChanged("x".into())));
	assert_eq!(request.models, vec![Model::new("card")]);
}

#[test]
fn recents_filter_changes_rebuild_the_tab_set() {
	let mut state = open(PickerConfig::new(two_tabs()));
	state.update(PickerEvent::RecentsLoaded(Ok(vec![recent(row(1, "card"))])));
	assert!(state.tabs().has_recents());

	let drop_all: crate::RecentsFilter<Row> = Arc::new(|_| Vec::new());
	state.update(PickerEvent::RecentsFilterChanged(Some(drop_all)));
	assert!(!state.tabs().has_recents());
	assert_eq!(state.search().active_tab(), &Model::new("card"));
}

#[test]
fn disabled_search_ignores_queries() {
	let options = PickerOptions {
		show_search: false,
		..PickerOptions::default()
	};
	let mut state = open(PickerConfig::new(two_tabs()).with_options(options));
	assert!(state.update(PickerEvent::QueryChanged("x".into())).is_empty());
	assert!(!state.search().is_searching());
	assert!(!state.view().show_search);
}

#[test]
fn without_confirm_buttons_selecting_confirms() {
	let options = PickerOptions {
		has_confirm_buttons: false,
		..PickerOptions::default()
	};
	let mut state = open(unarchived(PickerConfig::new(two_tabs()).with_options(options)));

	let effects = state.update(PickerEvent::ItemSelected(archived(1, "card")));
	assert_eq!(effects, vec![Effect::ItemSelected(archived(1, "card"))]);

	let effects = state.update(PickerEvent::ItemSelected(row(2, "card")));
	assert_eq!(
		effects,
		vec![
			Effect::ItemSelected(row(2, "card")),
			Effect::Confirmed(row(2, "card")),
			Effect::CancelSearch,
			Effect::Closed,
		]
	);
}

#[test]
fn view_exposes_labels_and_title() {
	let options = PickerOptions {
		confirm_button_text: Some("Use".into()),
		..PickerOptions::default()
	};
	let state = open(
		PickerConfig::new(two_tabs())
			.with_title("Pick a table")
			.with_options(options),
	);
	let view = state.view();
	assert_eq!(view.title, "Pick a table");
	assert_eq!(view.confirm_label, "Use");
	assert_eq!(view.cancel_label, "Cancel");
	assert!(view.recents_loading);
}

#[derive(Clone, Default)]
struct Recorder {
	events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
	fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.events.lock().expect("lock"))
	}
}

impl PickerListener<Row> for Recorder {
	fn on_item_select(&mut self, item: &Row) {
		self.events.lock().expect("lock").push(format!("select {}", item.name));
	}

	fn on_confirm(&mut self, item: &Row) {
		self.events.lock().expect("lock").push(format!("confirm {}", item.name));
	}

	fn on_close(&mut self) {
		self.events.lock().expect("lock").push("close".to_string());
	}
}

fn catalog_search() -> Arc<dyn SearchProvider<Row>> {
	Arc::new(|request: &SearchRequest| -> Result<Vec<Row>, FetchError> {
		Ok(request
			.models
			.iter()
			.map(|model| Row {
				name: request.query.clone(),
				..row(request.seq as i64, model.as_str())
			})
			.collect())
	})
}

fn fixed_recents(items: Vec<RecentItem<Row>>) -> Arc<dyn RecentsProvider<Row>> {
	Arc::new(move |_: &RecentsContext| -> Result<Vec<RecentItem<Row>>, FetchError> {
		Ok(items.clone())
	})
}

#[test]
fn runtime_delivers_search_results_and_recents() {
	let mut picker = Picker::open(
		PickerConfig::new(two_tabs()),
		catalog_search(),
		Some(fixed_recents(vec![recent(row(9, "table"))])),
	)
	.expect("picker opens");

	picker.set_query("a");
	picker.set_query("ab");
	assert!(picker.wait_idle(Duration::from_secs(5)));

	let results = picker.state().search().results().expect("results");
	assert!(results.iter().all(|row| row.name == "ab"));
	assert!(picker.state().tabs().has_recents());
}

#[test]
fn runtime_fires_listener_callbacks_once() {
	let recorder = Recorder::default();
	let mut picker = Picker::open(PickerConfig::new(two_tabs()), catalog_search(), None)
		.expect("picker opens")
		.with_listener(recorder.clone());

	assert!(!picker.confirm());
	picker.select(row(1, "card"));
	assert!(picker.confirm());
	assert!(!picker.confirm());
	picker.cancel();

	assert_eq!(recorder.take(), vec!["select card 1", "confirm card 1", "close"]);
	let outcome = picker.into_outcome();
	assert!(outcome.accepted);
	assert_eq!(outcome.selected(), Some(&row(1, "card")));
}

#[test]
fn runtime_cancel_reports_an_unaccepted_outcome() {
	let mut picker = Picker::open(PickerConfig::new(two_tabs()), catalog_search(), None)
		.expect("picker opens");
	picker.set_query("orders");
	picker.select(row(1, "card"));
	picker.cancel();
	picker.cancel();

	let outcome = picker.outcome().cloned().expect("closed");
	assert!(!outcome.accepted);
	assert_eq!(outcome.selected(), None);
	assert_eq!(outcome.query, "orders");
	assert_eq!(picker.pump(), 0);
}

#[test]
fn runtime_skips_recents_when_disabled() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let provider: Arc<dyn RecentsProvider<Row>> = Arc::new(
		move |_: &RecentsContext| -> Result<Vec<RecentItem<Row>>, FetchError> {
			counter.fetch_add(1, Ordering::SeqCst);
			Ok(Vec::new())
		},
	);
	let options = PickerOptions {
		has_recents: false,
		..PickerOptions::default()
	};

	let mut picker = Picker::open(
		PickerConfig::new(two_tabs()).with_options(options),
		catalog_search(),
		Some(provider),
	)
	.expect("picker opens");

	assert!(picker.wait_idle(Duration::from_secs(5)));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
	assert!(!picker.view().recents_loading);
}

#[test]
fn runtime_reports_search_unavailable_when_the_worker_dies() {
	let crashing: Arc<dyn SearchProvider<Row>> =
		Arc::new(|_: &SearchRequest| -> Result<Vec<Row>, FetchError> {
			panic!("search index went away")
		});
	let mut picker =
		Picker::open(PickerConfig::new(two_tabs()), crashing, None).expect("picker opens");

	picker.set_query("a");
	assert!(picker.wait_idle(Duration::from_secs(5)));
	assert!(!picker.state().search().is_pending());
	assert!(picker.state().search().is_unavailable());

	picker.set_query("ab");
	assert!(picker.wait_idle(Duration::from_secs(5)));
	assert!(!picker.state().search().is_pending());
	assert!(picker.state().search().is_unavailable());
	assert_eq!(picker.state().search().query(), "ab");

	picker.select(row(1, "card"));
	assert!(picker.confirm());
	assert!(picker.into_outcome().accepted);
}
