use crate::mvi::Reducer;

use super::dispatcher::IntentContext;
use super::error::IntentError;

/// A deferred producer of events.
///
/// `invoke` runs synchronously on the dispatching thread. Work that has to
/// wait is handed to [`IntentContext::spawn`]. Taking `Box<Self>` means an
/// intent can only ever be invoked once.
pub trait Intent<R: Reducer, S: ?Sized>: Send + 'static {
    fn invoke(self: Box<Self>, ctx: IntentContext<R, S>) -> Result<(), IntentError>;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Ordering channel. Intents sharing a channel supersede each other
    /// under [`OrderingPolicy::LatestWins`](super::OrderingPolicy).
    fn channel(&self) -> Option<&'static str> {
        None
    }
}

impl<R, S, F> Intent<R, S> for F
where
    R: Reducer,
    S: ?Sized,
    F: FnOnce(IntentContext<R, S>) -> Result<(), IntentError> + Send + 'static,
{
    fn invoke(self: Box<Self>, ctx: IntentContext<R, S>) -> Result<(), IntentError> {
        (*self)(ctx)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

/// What a caller hands to the dispatcher.
pub enum Submission<R: Reducer, S: ?Sized> {
    Event(R::Event),
    Intent(Box<dyn Intent<R, S>>),
}

impl<R: Reducer, S: ?Sized> Submission<R, S> {
    pub fn event(event: R::Event) -> Self {
        Self::Event(event)
    }

    pub fn intent(intent: impl Intent<R, S>) -> Self {
        Self::Intent(Box::new(intent))
    }
}
