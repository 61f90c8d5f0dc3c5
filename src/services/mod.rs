//! Application service layer.
//!
//! The query engine orchestrates the Document Store, the classifier and the
//! block pipeline; the session holds caller-owned query state.

mod query_engine;
mod query_session;

pub use query_engine::{QueryEngine, SearchService};
pub use query_session::QuerySession;
