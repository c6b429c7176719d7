use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tabpick_api::{SearchProvider, SearchRequest};

use super::commands::{SearchCommand, SearchResponse};

/// Launches the background search worker thread and returns communication channels.
pub(crate) fn spawn<I>(
	provider: Arc<dyn SearchProvider<I>>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse<I>>,
	Arc<AtomicU64>,
)
where
	I: Send + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(provider.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop<I>(
	provider: &dyn SearchProvider<I>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResponse<I>>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(provider, &result_tx, latest_query_id, command) {
			break;
		}
	}
	tracing::trace!("search worker stopped");
}

fn handle_command<I>(
	provider: &dyn SearchProvider<I>,
	result_tx: &Sender<SearchResponse<I>>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query(request) => run_query(provider, result_tx, latest_query_id, &request),
		SearchCommand::Shutdown => false,
	}
}

/// Run one request unless a newer one already superseded it. Returns `false`
/// once the picker side has hung up.
fn run_query<I>(
	provider: &dyn SearchProvider<I>,
	result_tx: &Sender<SearchResponse<I>>,
	latest_query_id: &AtomicU64,
	request: &SearchRequest,
) -> bool {
	if should_abort(request.seq, latest_query_id) {
		tracing::trace!(seq = request.seq, "skipping superseded search");
		return true;
	}

	let outcome = provider.search(request);
	if should_abort(request.seq, latest_query_id) {
		tracing::trace!(seq = request.seq, "dropping superseded search answer");
		return true;
	}

	result_tx
		.send(SearchResponse {
			seq: request.seq,
			outcome,
		})
		.is_ok()
}

fn should_abort(id: u64, latest_query_id: &AtomicU64) -> bool {
	latest_query_id.load(AtomicOrdering::Acquire) != id
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use tabpick_api::{FetchError, Model, SearchParams};

	use super::*;

	fn request(seq: u64, query: &str) -> SearchRequest {
		SearchRequest {
			seq,
			query: query.to_string(),
			models: vec![Model::new("card")],
			params: SearchParams::default(),
		}
	}

	fn echo() -> Arc<dyn SearchProvider<String>> {
		Arc::new(|request: &SearchRequest| -> Result<Vec<String>, FetchError> {
			Ok(vec![request.query.clone()])
		})
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, rx, latest) = spawn(echo());
		assert_eq!(latest.load(AtomicOrdering::Relaxed), 0);
		tx.send(SearchCommand::Shutdown).expect("send");
		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
	}

	#[test]
	fn answers_the_latest_query() {
		let (tx, rx, latest) = spawn(echo());
		latest.store(1, AtomicOrdering::Release);
		tx.send(SearchCommand::Query(request(1, "orders"))).expect("send");

		let response = rx.recv_timeout(Duration::from_secs(5)).expect("response");
		assert_eq!(response.seq, 1);
		assert_eq!(response.outcome, Ok(vec!["orders".to_string()]));
		tx.send(SearchCommand::Shutdown).expect("send");
	}

	#[test]
	fn superseded_queries_are_skipped() {
		let (tx, rx, latest) = spawn(echo());
		latest.store(2, AtomicOrdering::Release);
		tx.send(SearchCommand::Query(request(1, "a"))).expect("send");
		tx.send(SearchCommand::Query(request(2, "ab"))).expect("send");

		let response = rx.recv_timeout(Duration::from_secs(5)).expect("response");
		assert_eq!(response.seq, 2);
		tx.send(SearchCommand::Shutdown).expect("send");
	}
}
