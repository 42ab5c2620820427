//! Submission entry point that intercepts intents before they reach the store.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::mvi::Reducer;
use crate::store::Store;

use super::error::IntentError;
use super::in_flight::InFlight;
use super::intent::{Intent, Submission};
use super::ordering::{OrderingPolicy, Ticket, TicketBook};

/// Routes submissions: events to the store, intents to their own code.
///
/// `S` is the capability intents are given (for the video workflow, the
/// backend fetch). Cloning yields another handle to the same pipeline.
pub struct Dispatcher<R: Reducer, S: ?Sized> {
    store: Store<R>,
    capability: Arc<S>,
    runtime: Handle,
    tickets: Arc<TicketBook>,
    in_flight: InFlight,
}

impl<R: Reducer, S: ?Sized> Clone for Dispatcher<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            capability: Arc::clone(&self.capability),
            runtime: self.runtime.clone(),
            tickets: Arc::clone(&self.tickets),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<R, S> Dispatcher<R, S>
where
    R: Reducer,
    R::Event: From<IntentError>,
    S: ?Sized + Send + Sync + 'static,
{
    /// Create a pipeline in front of `store`. Continuations are spawned on
    /// `runtime`.
    pub fn new(store: Store<R>, capability: Arc<S>, runtime: Handle) -> Self {
        Self {
            store,
            capability,
            runtime,
            tickets: Arc::new(TicketBook::new(OrderingPolicy::default())),
            in_flight: InFlight::default(),
        }
    }

    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.tickets = Arc::new(TicketBook::new(policy));
        self
    }

    pub fn policy(&self) -> OrderingPolicy {
        self.tickets.policy()
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    /// Submit an event or an intent.
    ///
    /// Events are applied before this returns. Intents are invoked before
    /// this returns; their spawned continuations are not awaited.
    pub fn dispatch(&self, submission: impl Into<Submission<R, S>>) {
        match submission.into() {
            Submission::Event(event) => self.store.submit(event),
            Submission::Intent(intent) => self.run_intent(intent),
        }
    }

    /// Number of intent continuations still running.
    pub fn pending(&self) -> usize {
        self.in_flight.count()
    }

    /// Resolve once no intent continuation is running.
    pub async fn settled(&self) {
        self.in_flight.settled().await;
    }

    fn run_intent(&self, intent: Box<dyn Intent<R, S>>) {
        let name = intent.name();
        let ticket = self.tickets.issue(intent.channel());
        tracing::debug!(intent = name, ticket = ?ticket, "invoking intent");

        let ctx = IntentContext {
            dispatcher: self.clone(),
            name,
            ticket,
        };
        let error = match panic::catch_unwind(AssertUnwindSafe(move || intent.invoke(ctx))) {
            Ok(Ok(())) => return,
            Ok(Err(err)) => err,
            Err(payload) => IntentError::from_panic(payload.as_ref()),
        };
        self.contain(name, ticket, error);
    }

    /// Turn a failed intent into one failure event, unless a later intent
    /// on the same channel has superseded it.
    fn contain(&self, name: &'static str, ticket: Option<Ticket>, error: IntentError) {
        if let Some(ticket) = &ticket {
            if !self.tickets.is_current(ticket) {
                tracing::debug!(
                    intent = name,
                    ticket = ?ticket,
                    error = %error,
                    "dropping failure from superseded intent"
                );
                return;
            }
        }
        tracing::warn!(intent = name, error = %error, "intent failed, submitting failure event");
        self.store.submit(R::Event::from(error));
    }
}

/// What an intent sees of the pipeline while it runs.
pub struct IntentContext<R: Reducer, S: ?Sized> {
    dispatcher: Dispatcher<R, S>,
    name: &'static str,
    ticket: Option<Ticket>,
}

impl<R: Reducer, S: ?Sized> Clone for IntentContext<R, S> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            name: self.name,
            ticket: self.ticket,
        }
    }
}

impl<R, S> IntentContext<R, S>
where
    R: Reducer,
    R::Event: From<IntentError>,
    S: ?Sized + Send + Sync + 'static,
{
    /// Submit through the pipeline, so nested intents are intercepted too.
    pub fn dispatch(&self, submission: impl Into<Submission<R, S>>) {
        self.dispatcher.dispatch(submission);
    }

    pub fn submit(&self, event: R::Event) {
        self.dispatcher.store.submit(event);
    }

    pub fn capability(&self) -> Arc<S> {
        Arc::clone(&self.dispatcher.capability)
    }

    pub fn state(&self) -> Arc<R::State> {
        self.dispatcher.store.get_state()
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    /// False once a later intent on the same channel has been dispatched
    /// under [`OrderingPolicy::LatestWins`].
    pub fn is_current(&self) -> bool {
        match &self.ticket {
            Some(ticket) => self.dispatcher.tickets.is_current(ticket),
            None => true,
        }
    }

    /// Run a continuation on the runtime.
    ///
    /// An `Err` or panic from the continuation becomes one failure event,
    /// unless the intent has been superseded by then.
    /// The continuation counts as pending until it has finished.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = Result<(), IntentError>> + Send + 'static,
    {
        let guard = self.dispatcher.in_flight.enter();
        let dispatcher = self.dispatcher.clone();
        let name = self.name;
        let ticket = self.ticket;
        let task = self.dispatcher.runtime.spawn(future);

        self.dispatcher.runtime.spawn(async move {
            let _guard = guard;
            let error = match task.await {
                Ok(Ok(())) => return,
                Ok(Err(err)) => err,
                Err(join) if join.is_panic() => IntentError::from_panic(join.into_panic().as_ref()),
                Err(_) => {
                    tracing::debug!(intent = name, "continuation cancelled");
                    return;
                }
            };
            dispatcher.contain(name, ticket, error);
        });
    }
}
