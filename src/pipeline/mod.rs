//! Async interception pipeline.
//!
//! Submissions are either plain events, forwarded straight to the store,
//! or intents: procedures that run immediately and may schedule
//! asynchronous continuations which submit further events later.

mod dispatcher;
mod error;
mod in_flight;
mod intent;
mod ordering;

pub use dispatcher::{Dispatcher, IntentContext};
pub use error::IntentError;
pub use intent::{Intent, Submission};
pub use ordering::{OrderingPolicy, Ticket};
