use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tabpick_api::{
	FetchError, Model, PickerItem, RecentItem, RecentsContext, RecentsProvider, SearchProvider,
};

use super::config::PickerConfig;
use super::events::{Effect, PickerEvent};
use super::state::PickerState;
use super::view::PickerView;
use crate::error::PickerError;
use crate::search::{self, SearchRuntime};

const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(2);

type RecentsOutcome<I> = Result<Vec<RecentItem<I>>, FetchError>;

/// Callbacks fired by a running [`Picker`]. All methods default to no-ops.
pub trait PickerListener<I> {
	/// Fired on every selection, not just on confirm, for live previews.
	fn on_item_select(&mut self, _item: &I) {}

	/// Fired exactly once, when a selectable item is confirmed.
	fn on_confirm(&mut self, _item: &I) {}

	/// Fired once when the picker closes, after a confirm or a cancel.
	fn on_close(&mut self) {}
}

impl<I> PickerListener<I> for () {}

/// How a picker session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOutcome<I> {
	pub accepted: bool,
	pub selection: Option<I>,
	pub query: String,
	pub active_tab: Model,
}

impl<I> PickerOutcome<I> {
	/// Return the confirmed item, if the user accepted one.
	#[must_use]
	pub fn selected(&self) -> Option<&I> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}

/// A picker wired to its collaborators.
///
/// Search requests run on a background worker and recents on a one-shot
/// loader thread; [`Picker::pump`] feeds their answers back into the state
/// machine on the caller's thread.
pub struct Picker<C, I> {
	state: PickerState<C, I>,
	search: SearchRuntime<I>,
	recents_rx: Option<Receiver<RecentsOutcome<I>>>,
	listener: Box<dyn PickerListener<I>>,
	confirmed: Option<I>,
	outcome: Option<PickerOutcome<I>>,
}

impl<C, I> Drop for Picker<C, I> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

impl<C, I> Picker<C, I>
where
	C: Clone,
	I: PickerItem + Send + 'static,
{
	/// Open a picker. The recency feed is requested right away unless the
	/// Recents tab is disabled.
	pub fn open(
		config: PickerConfig<C, I>,
		search_provider: Arc<dyn SearchProvider<I>>,
		recents_provider: Option<Arc<dyn RecentsProvider<I>>>,
	) -> Result<Self, PickerError> {
		let context = config.recents_context.clone();
		let state = PickerState::new(config)?;

		let (search_tx, search_rx, latest_query_id) = search::spawn(search_provider);
		let search = SearchRuntime::new(search_tx, search_rx, latest_query_id);

		let mut picker = Self {
			state,
			search,
			recents_rx: None,
			listener: Box::new(()),
			confirmed: None,
			outcome: None,
		};

		if picker.state.recents_loading() {
			match recents_provider {
				Some(provider) => picker.recents_rx = Some(spawn_recents(provider, context)),
				None => picker.dispatch(PickerEvent::RecentsLoaded(Ok(Vec::new()))),
			}
		}

		Ok(picker)
	}

	#[must_use]
	pub fn with_listener(mut self, listener: impl PickerListener<I> + 'static) -> Self {
		self.listener = Box::new(listener);
		self
	}

	/// Feed one event to the state machine and carry out its effects.
	pub fn dispatch(&mut self, event: PickerEvent<C, I>) {
		let effects = self.state.update(event);
		for effect in effects {
			self.apply(effect);
		}
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.dispatch(PickerEvent::QueryChanged(query.into()));
	}

	pub fn activate_tab(&mut self, model: impl Into<Model>) {
		self.dispatch(PickerEvent::TabActivated(model.into()));
	}

	pub fn select(&mut self, item: I) {
		self.dispatch(PickerEvent::ItemSelected(item));
	}

	/// Try to confirm the current selection. Returns whether this call
	/// confirmed; a refused confirm leaves everything as it was.
	pub fn confirm(&mut self) -> bool {
		let effects = self.state.update(PickerEvent::Confirm);
		let confirmed = effects
			.iter()
			.any(|effect| matches!(effect, Effect::Confirmed(_)));
		for effect in effects {
			self.apply(effect);
		}
		confirmed
	}

	/// Close without confirming. Further calls do nothing.
	pub fn cancel(&mut self) {
		self.dispatch(PickerEvent::Cancel);
	}

	/// Apply every answer that has arrived from the search worker and the
	/// recents loader. Returns how many answers were applied.
	pub fn pump(&mut self) -> usize {
		let mut applied = 0;

		loop {
			match self.search.try_recv() {
				Ok(response) => {
					self.dispatch(PickerEvent::SearchResolved {
						seq: response.seq,
						outcome: response.outcome,
					});
					applied += 1;
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if self.fail_pending_search() {
						applied += 1;
					}
					break;
				}
			}
		}

		if let Some(rx) = &self.recents_rx {
			let outcome = match rx.try_recv() {
				Ok(outcome) => Some(outcome),
				Err(TryRecvError::Empty) => None,
				Err(TryRecvError::Disconnected) => Some(Err(FetchError::unavailable(
					"recents",
					"loader stopped before answering",
				))),
			};
			if let Some(outcome) = outcome {
				self.recents_rx = None;
				self.dispatch(PickerEvent::RecentsLoaded(outcome));
				applied += 1;
			}
		}

		applied
	}

	/// Pump until no search answer or recents feed is outstanding, or until
	/// `timeout` passes. Returns whether the picker went idle.
	pub fn wait_idle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		loop {
			self.pump();
			if self.is_idle() {
				return true;
			}
			if Instant::now() >= deadline {
				return false;
			}
			thread::sleep(IDLE_POLL_INTERVAL);
		}
	}

	fn is_idle(&self) -> bool {
		self.state.is_closed() || (!self.state.search().is_pending() && !self.state.recents_loading())
	}

	fn apply(&mut self, effect: Effect<I>) {
		match effect {
			Effect::IssueSearch(request) => {
				let seq = request.seq;
				if !self.search.issue(request) {
					self.dispatch(PickerEvent::SearchResolved {
						seq,
						outcome: Err(worker_stopped()),
					});
				}
			}
			Effect::CancelSearch => self.search.cancel(),
			Effect::ItemSelected(item) => self.listener.on_item_select(&item),
			Effect::Confirmed(item) => {
				self.listener.on_confirm(&item);
				self.confirmed = Some(item);
			}
			Effect::Closed => self.close(),
		}
	}

	/// Resolve the outstanding request as failed once the worker is gone, so
	/// the dialog reports search as unavailable instead of waiting forever.
	fn fail_pending_search(&mut self) -> bool {
		if self.state.is_closed() || !self.state.search().is_pending() {
			return false;
		}
		let Some(seq) = self.state.search().latest_seq() else {
			return false;
		};
		tracing::warn!(seq, "search worker stopped with a request outstanding");
		self.dispatch(PickerEvent::SearchResolved {
			seq,
			outcome: Err(worker_stopped()),
		});
		true
	}

	fn close(&mut self) {
		self.search.shutdown();
		self.recents_rx = None;
		self.outcome = Some(self.snapshot());
		self.listener.on_close();
	}

	fn snapshot(&self) -> PickerOutcome<I> {
		PickerOutcome {
			accepted: self.confirmed.is_some(),
			selection: self.confirmed.clone(),
			query: self.state.search().query().to_string(),
			active_tab: self.state.search().active_tab().clone(),
		}
	}

	/// Consume the picker, returning how it ended. A picker that is still
	/// open counts as cancelled.
	pub fn into_outcome(mut self) -> PickerOutcome<I> {
		match self.outcome.take() {
			Some(outcome) => outcome,
			None => self.snapshot(),
		}
	}
}

impl<C, I> Picker<C, I> {
	pub fn state(&self) -> &PickerState<C, I> {
		&self.state
	}

	pub fn view(&self) -> PickerView<'_, C, I> {
		self.state.view()
	}

	/// How the session ended, once it has.
	pub fn outcome(&self) -> Option<&PickerOutcome<I>> {
		self.outcome.as_ref()
	}
}

fn worker_stopped() -> FetchError {
	FetchError::unavailable("search", "worker stopped")
}

/// Fetch the recency feed once on a background thread. Recents are never
/// cancelled; a slow feed only delays the Recents tab.
fn spawn_recents<I>(
	provider: Arc<dyn RecentsProvider<I>>,
	context: RecentsContext,
) -> Receiver<RecentsOutcome<I>>
where
	I: Send + 'static,
{
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let outcome = provider.fetch_recents(&context);
		let _ = tx.send(outcome);
	});
	rx
}
