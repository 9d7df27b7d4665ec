//! Test doubles for `mutation-client`: a transport that plays back a script and records
//! every request, and a clock that never actually waits.

use async_trait::async_trait;
use mutation_client::{
    clock::Clock,
    transport::{Transport, TransportResponse},
    MutationBody, TransportError
};
use parking_lot::Mutex;
use serde_json::Value;
use std::{collections::VecDeque, sync::Arc, time::Duration};

pub type SyncCounter = Arc<Mutex<Counter>>;

#[derive(Debug, Default)]
pub struct Counter {
    n: u32
}

impl Counter {
    pub fn new() -> Self {
        Counter { n: 0 }
    }

    pub fn sync() -> SyncCounter {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn inc(&mut self) -> u32 {
        self.n += 1;
        self.n
    }

    pub fn get(&self) -> u32 {
        self.n
    }
}

impl PartialEq<u32> for Counter {
    fn eq(&self, other: &u32) -> bool {
        &self.n == other
    }
}

/// One scripted reaction of the transport.
#[derive(Debug, Clone)]
pub enum Step {
    Respond(TransportResponse),
    Fail(TransportError),
    /// Never answer. Only a timeout or cancellation gets the client past this.
    Hang
}

impl Step {
    pub fn json(status: u16, body: Value) -> Self {
        Step::Respond(TransportResponse::json(status, &body))
    }

    pub fn data(data: Value) -> Self {
        Self::json(200, serde_json::json!({ "data": data }))
    }

    pub fn network_error() -> Self {
        Step::Fail(TransportError::Network("connection reset by peer".to_string()))
    }
}

/// A request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation_name: String,
    pub query: String,
    pub variables: Value
}

type SendHook = Arc<dyn Fn(u32) + Send + Sync>;

/// Plays back its steps in order, repeating the last one once the script runs out.
#[derive(Clone)]
pub struct ScriptedTransport {
    steps: Arc<Mutex<VecDeque<Step>>>,
    last: Arc<Mutex<Option<Step>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    counter: SyncCounter,
    on_send: Option<SendHook>
}

impl ScriptedTransport {
    pub fn new<I: IntoIterator<Item = Step>>(steps: I) -> Self {
        ScriptedTransport {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            last: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
            counter: Counter::sync(),
            on_send: None
        }
    }

    /// Call `hook` with the attempt number every time a request comes in, before answering it.
    pub fn on_send<F: Fn(u32) + Send + Sync + 'static>(mut self, hook: F) -> Self {
        self.on_send = Some(Arc::new(hook));
        self
    }

    pub fn call_count(&self) -> u32 {
        self.counter.lock().get()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// The `randomId` sent with every call so far.
    pub fn dedup_tokens(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .iter()
            .map(|call| {
                call.variables
                    .get("randomId")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .collect()
    }

    fn next_step(&self) -> Option<Step> {
        let next = self.steps.lock().pop_front();
        let mut last = self.last.lock();
        if let Some(ref step) = next {
            *last = Some(step.clone());
        }
        last.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, body: &MutationBody<'_>) -> Result<TransportResponse, TransportError> {
        let attempt = self.counter.lock().inc();
        self.calls.lock().push(RecordedCall {
            operation_name: body.operation_name.to_string(),
            query: body.query.to_string(),
            variables: serde_json::to_value(body.variables).unwrap_or(Value::Null)
        });
        if let Some(ref hook) = self.on_send {
            hook(attempt);
        }

        match self.next_step() {
            Some(Step::Respond(response)) => Ok(response),
            Some(Step::Fail(error)) => Err(error),
            Some(Step::Hang) => futures::future::pending().await,
            None => Err(TransportError::Network("script is empty".to_string()))
        }
    }
}

/// A clock that returns immediately and remembers every sleep it was asked for.
#[derive(Clone, Default)]
pub struct InstantClock {
    sleeps: Arc<Mutex<Vec<Duration>>>
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().clone()
    }
}

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().push(duration);
    }
}

/// A clock whose sleeps never finish, for calls that must not time out or back off.
#[derive(Clone, Copy, Default)]
pub struct FrozenClock;

#[async_trait]
impl Clock for FrozenClock {
    async fn sleep(&self, _duration: Duration) {
        futures::future::pending::<()>().await
    }
}
