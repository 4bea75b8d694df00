//! Services coordinating list views and their data sources.

pub mod busy;
pub mod list_query;

pub use busy::{BusyGuard, BusyTracker};
pub use list_query::{ListController, ListControllerBuilder, ListPhase, ListQueryState, LoadOutcome};
