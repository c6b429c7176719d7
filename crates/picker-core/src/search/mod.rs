//! Search mode: the query driven session state and the background worker
//! that talks to the search provider.

mod commands;
mod runtime;
mod session;
mod worker;

pub(crate) use runtime::SearchRuntime;
pub use session::{QueryTransition, Resolution, SearchFilter, SearchSession, SessionState};
pub(crate) use worker::spawn;
