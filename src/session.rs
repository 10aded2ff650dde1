// src/session.rs
use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, PoisonError,
    },
    thread::{self, JoinHandle},
};

use thiserror::Error;

use crate::{
    config::options::{AppOptions, FetchOptions},
    dispatch::FetchDispatcher,
    model::{FetchResult, Platform},
    providers::{LiveProviders, ProviderFactory},
    sink::ResultSink,
    table::ResultsTable,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionInputError {
    #[error("Please enter a valid number (got {0:?})")]
    NotANumber(String),
    #[error("Please enter a positive number (got {0})")]
    NotPositive(i64),
}

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Session {session}: fetch already in progress")]
    InProgress { session: usize },
    #[error("Session {session}: could not start fetch thread: {source}")]
    Spawn { session: usize, source: io::Error },
}

/// Session count as typed by the user.
pub fn parse_session_count(input: &str) -> Result<usize, SessionInputError> {
    let t = input.trim();
    let n: i64 = t.parse().map_err(|_| SessionInputError::NotANumber(s!(t)))?;
    if n <= 0 {
        return Err(SessionInputError::NotPositive(n));
    }
    usize::try_from(n).map_err(|_| SessionInputError::NotANumber(s!(t)))
}

/// Creates isolated sessions that all dispatch through one shared dispatcher.
///
/// The manager owns the aggregate results table; that table is the only
/// state any two sessions have in common.
pub struct SessionManager {
    dispatcher: Arc<FetchDispatcher>,
    created: usize,
}

impl SessionManager {
    pub fn new(factory: Arc<dyn ProviderFactory>, options: FetchOptions) -> Self {
        let table = Arc::new(ResultsTable::new());
        Self {
            dispatcher: Arc::new(FetchDispatcher::new(factory, table, options)),
            created: 0,
        }
    }

    /// Manager backed by the real network providers.
    pub fn live(opts: &AppOptions) -> Self {
        Self::new(Arc::new(LiveProviders::new(opts.browser.clone())), opts.fetch.clone())
    }

    pub fn table(&self) -> &Arc<ResultsTable> {
        self.dispatcher.table()
    }

    pub fn record_result(&self, platform: Platform, result: FetchResult) {
        self.table().record_result(platform, result);
    }

    pub fn snapshot(&self) -> Vec<(Platform, FetchResult)> {
        self.table().snapshot()
    }

    /// Sessions created so far, over all calls.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Validate `input` and build that many sessions, each with its own sink.
    ///
    /// `make_sink` gets the new session's 1-based index. On invalid input
    /// nothing is created and `make_sink` is never called.
    pub fn create_sessions<F>(&mut self, input: &str, mut make_sink: F) -> Result<Vec<Session>, SessionInputError>
    where
        F: FnMut(usize) -> Box<dyn ResultSink>,
    {
        let n = match parse_session_count(input) {
            Ok(n) => n,
            Err(e) => {
                loge!("Sessions: rejected input {input:?}: {e}");
                return Err(e);
            }
        };

        let sessions: Vec<Session> = (0..n)
            .map(|i| {
                let index = self.created + i + 1;
                Session::new(index, make_sink(index), Arc::clone(&self.dispatcher))
            })
            .collect();
        self.created += n;

        logf!("Sessions: created {n} (total {})", self.created);
        Ok(sessions)
    }
}

/// Clears the in-flight flag when the fetch thread ends, however it ends.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One user-facing fetch unit: its own inputs, its own sink.
pub struct Session {
    index: usize,
    platform: String,
    identifier: String,
    count: Option<usize>,
    sink: Arc<Mutex<Box<dyn ResultSink>>>,
    busy: Arc<AtomicBool>,
    dispatcher: Arc<FetchDispatcher>,
}

impl Session {
    fn new(index: usize, sink: Box<dyn ResultSink>, dispatcher: Arc<FetchDispatcher>) -> Self {
        Self {
            index,
            platform: s!(Platform::Facebook.name()),
            identifier: s!(),
            count: None,
            sink: Arc::new(Mutex::new(sink)),
            busy: Arc::new(AtomicBool::new(false)),
            dispatcher,
        }
    }

    pub fn index(&self) -> usize { self.index }

    pub fn title(&self) -> String { format!("Session {}", self.index) }

    /// Platform selector, as free text (the dispatcher validates it).
    pub fn platform(&self) -> &str { &self.platform }

    pub fn set_platform<S: Into<String>>(&mut self, selector: S) { self.platform = selector.into(); }

    pub fn identifier(&self) -> &str { &self.identifier }

    pub fn set_identifier<S: Into<String>>(&mut self, identifier: S) { self.identifier = identifier.into(); }

    /// Direct handle for text widgets.
    pub fn identifier_mut(&mut self) -> &mut String { &mut self.identifier }

    pub fn count(&self) -> Option<usize> { self.count }

    pub fn set_count(&mut self, count: Option<usize>) { self.count = count; }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start one dispatch on a new thread; its result goes to this session's sink.
    ///
    /// Inputs are copied at trigger time, so editing them mid-fetch has no
    /// effect on the running fetch. A second trigger while one is running is
    /// refused with `TriggerError::InProgress`.
    pub fn trigger_fetch(&self) -> Result<JoinHandle<()>, TriggerError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            logd!("Session {}: trigger ignored, fetch in progress", self.index);
            return Err(TriggerError::InProgress { session: self.index });
        }
        let guard = InFlight(Arc::clone(&self.busy));

        let index = self.index;
        let platform = self.platform.clone();
        let identifier = self.identifier.clone();
        let count = self.count;
        let sink = Arc::clone(&self.sink);
        let dispatcher = Arc::clone(&self.dispatcher);

        logf!("Session {index}: fetch platform={platform} subject={identifier:?}");

        thread::Builder::new()
            .name(format!("fetch-{index}"))
            .spawn(move || {
                let _guard = guard;
                let result = dispatcher.dispatch(&platform, &identifier, count);
                sink.lock().unwrap_or_else(PoisonError::into_inner).present(result);
            })
            .map_err(|source| {
                loge!("Session {index}: spawn failed: {source}");
                TriggerError::Spawn { session: index, source }
            })
    }
}
