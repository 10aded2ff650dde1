// tests/common/mod.rs
//
// Fakes shared by the integration tests: a spy provider factory, a
// recording sink and a gate to hold fetches open.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc, Condvar, Mutex,
    },
};

use social_fetch::{
    config::options::FetchOptions,
    core::FetchError,
    model::{FetchResult, Platform, ProviderOutput, Record},
    providers::{ProfileProvider, ProviderFactory},
    sink::ResultSink,
};

/// Closed until `open()`; fetches wait on it when a spy is gated.
#[derive(Default)]
pub struct Gate {
    open: Mutex<bool>,
    cv: Condvar,
}

impl Gate {
    pub fn wait(&self) {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.cv.wait(open).unwrap();
        }
    }
    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.cv.notify_all();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Fail,
    Panic,
}

/// Counts every create/fetch/close across all providers it builds.
pub struct SpyFactory {
    pub behavior: Behavior,
    pub created: AtomicUsize,
    pub fetched: AtomicUsize,
    pub closed: AtomicUsize,
    pub seen_counts: Mutex<Vec<usize>>,
    pub gate: Option<Arc<Gate>>,
}

impl SpyFactory {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            created: AtomicUsize::new(0),
            fetched: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            seen_counts: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    pub fn gated(behavior: Behavior, gate: Arc<Gate>) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            created: AtomicUsize::new(0),
            fetched: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            seen_counts: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn created(&self) -> usize { self.created.load(Ordering::SeqCst) }
    pub fn fetched(&self) -> usize { self.fetched.load(Ordering::SeqCst) }
    pub fn closed(&self) -> usize { self.closed.load(Ordering::SeqCst) }
}

struct SpyProvider {
    platform: Platform,
    factory: Arc<SpyFactory>,
    closed_once: bool,
}

impl ProfileProvider for SpyProvider {
    fn platform(&self) -> Platform { self.platform }

    fn fetch(&mut self, identifier: &str, opts: &FetchOptions) -> ProviderOutput {
        let f = &self.factory;
        f.fetched.fetch_add(1, Ordering::SeqCst);
        f.seen_counts.lock().unwrap().push(opts.count);
        if let Some(g) = &f.gate {
            g.wait();
        }
        match f.behavior {
            Behavior::Succeed => fake_output(self.platform, identifier, opts.count),
            Behavior::Fail => ProviderOutput::Failed(format!("timeout loading {identifier}")),
            Behavior::Panic => panic!("spy provider blew up"),
        }
    }

    fn close(&mut self) {
        assert!(!self.closed_once, "close called twice");
        self.closed_once = true;
        self.factory.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Builds spies; the factory handle is shared so counters survive the provider.
pub struct SpyHandle(pub Arc<SpyFactory>);

impl ProviderFactory for SpyHandle {
    fn create(&self, platform: Platform) -> Result<Box<dyn ProfileProvider>, FetchError> {
        self.0.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SpyProvider { platform, factory: Arc::clone(&self.0), closed_once: false }))
    }
}

pub fn fake_output(platform: Platform, identifier: &str, count: usize) -> ProviderOutput {
    match platform {
        Platform::Facebook => ProviderOutput::Single(
            [("ID", identifier), ("Name", "Fake Name"), ("Profile Picture", "N/A")]
                .into_iter()
                .collect(),
        ),
        Platform::Instagram => ProviderOutput::Single(
            [("Username", identifier), ("Full Name", "Fake"), ("Profile Picture", "N/A")]
                .into_iter()
                .collect(),
        ),
        Platform::Twitter => ProviderOutput::Items(
            (0..count)
                .map(|i| {
                    let mut r = Record::new();
                    r.insert("user_name", identifier);
                    r.insert("text", format!("tweet {i}"));
                    r.insert("profile_picture", "N/A");
                    r
                })
                .collect(),
        ),
    }
}

/// Sink that forwards every result (tagged with its session index) to a channel.
pub struct ChannelSink {
    pub index: usize,
    pub tx: mpsc::Sender<(usize, FetchResult)>,
}

impl ResultSink for ChannelSink {
    fn present(&mut self, result: FetchResult) {
        let _ = self.tx.send((self.index, result));
    }
}

/// Collect exactly `n` deliveries, grouped by sink index.
pub fn collect(rx: &mpsc::Receiver<(usize, FetchResult)>, n: usize) -> HashMap<usize, Vec<FetchResult>> {
    let mut out: HashMap<usize, Vec<FetchResult>> = HashMap::new();
    for _ in 0..n {
        let (idx, res) = rx
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("sink delivery");
        out.entry(idx).or_default().push(res);
    }
    out
}
