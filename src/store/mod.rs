//! The state container.
//!
//! Holds the single state cell, applies events through a [`Reducer`],
//! and notifies subscribers synchronously after each application.
//!
//! [`Reducer`]: crate::mvi::Reducer

mod container;
mod subscription;

pub use container::{Store, WeakStore};
pub use subscription::Subscription;
