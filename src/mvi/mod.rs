//! Model-Event-Reducer primitives.
//!
//! This module provides the base traits for unidirectional data flow
//! through a single state cell.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ Subscribers
//!   ↑                                  │
//!   └──────────────────────────────────┘
//! ```
//!
//! - **Model**: Immutable snapshot of the state cell
//! - **Event**: A request for a state transition
//! - **Reducer**: Pure function that transforms state based on events

mod descriptor;
mod event;
mod reducer;
mod state;

pub use descriptor::{DescriptorError, EventDescriptor};
pub use event::Event;
pub use reducer::{apply, Reducer};
pub use state::Model;
