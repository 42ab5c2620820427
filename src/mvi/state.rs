//! Base trait for the state held by a store.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a view needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait Model: Clone + PartialEq + Default + Send + Sync + 'static {}
