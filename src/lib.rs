//! Single-cell state synchronization with asynchronous intents.
//!
//! A [`store::Store`] holds one state value that only changes through a
//! pure [`mvi::Reducer`]. A [`pipeline::Dispatcher`] sits in front of it
//! and accepts intents as well as events, so asynchronous work such as
//! the [`workflow::LoadVideo`] fetch can produce further transitions.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod pipeline;
pub mod store;
pub mod video;
pub mod workflow;
