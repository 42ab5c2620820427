//! Base trait for events in the state cell.

/// Trait for event objects.
///
/// Events represent:
/// - Progress of asynchronous work (loading started)
/// - Outcomes of that work (success, failure)
///
/// Events are processed by reducers to produce new states.
pub trait Event: Send + 'static {
    /// Stable name of the event kind, used in logs.
    fn kind(&self) -> &'static str;
}
