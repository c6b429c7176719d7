use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tabpick_api::SearchRequest;

use super::commands::{SearchCommand, SearchResponse};

/// Picker side handle to the search worker.
///
/// The shared `latest_query_id` lets the worker skip requests that were
/// superseded before it got to them; zero means nothing is current.
pub(crate) struct SearchRuntime<I> {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse<I>>,
	latest_query_id: Arc<AtomicU64>,
	shut_down: bool,
}

impl<I> SearchRuntime<I> {
	pub(crate) fn new(
		tx: Sender<SearchCommand>,
		rx: Receiver<SearchResponse<I>>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			shut_down: false,
		}
	}

	/// Hand a request to the worker. Returns false when the worker is gone.
	pub(crate) fn issue(&self, request: SearchRequest) -> bool {
		self.latest_query_id.store(request.seq, AtomicOrdering::Release);
		if self.tx.send(SearchCommand::Query(request)).is_err() {
			tracing::warn!("search worker is gone; request dropped");
			return false;
		}
		true
	}

	/// Mark every issued request obsolete.
	pub(crate) fn cancel(&self) {
		self.latest_query_id.store(0, AtomicOrdering::Release);
	}

	pub(crate) fn shutdown(&mut self) {
		if self.shut_down {
			return;
		}
		self.shut_down = true;
		self.cancel();
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	pub(crate) fn try_recv(&self) -> Result<SearchResponse<I>, TryRecvError> {
		if self.shut_down {
			return Err(TryRecvError::Disconnected);
		}
		self.rx.try_recv()
	}
}
