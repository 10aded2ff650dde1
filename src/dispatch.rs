// src/dispatch.rs
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    time::Instant,
};

use crate::{
    config::options::FetchOptions,
    model::{
        result::round_elapsed, FetchFailure, FetchResult, Platform, ProviderOutput,
    },
    providers::{ProfileProvider, ProviderFactory},
    table::ResultsTable,
};

/// Owns a provider for the length of one dispatch; closes it on the way out.
struct ScopedProvider {
    inner: Box<dyn ProfileProvider>,
}

impl Drop for ScopedProvider {
    fn drop(&mut self) {
        self.inner.close();
    }
}

/// Selector → provider → timed, normalized result.
///
/// Cheap to share: every fetch thread holds an `Arc` of the same dispatcher.
/// The only shared mutable state it touches is the aggregate table.
pub struct FetchDispatcher {
    factory: Arc<dyn ProviderFactory>,
    table: Arc<ResultsTable>,
    options: FetchOptions,
}

impl FetchDispatcher {
    pub fn new(factory: Arc<dyn ProviderFactory>, table: Arc<ResultsTable>, options: FetchOptions) -> Self {
        Self { factory, table, options }
    }

    pub fn table(&self) -> &Arc<ResultsTable> {
        &self.table
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Run one fetch to completion on the calling thread.
    ///
    /// Always yields exactly one result. Unknown selectors and provider
    /// failures come back as `FetchResult::Err`; nothing here panics or returns early.
    pub fn dispatch(&self, selector: &str, identifier: &str, count: Option<usize>) -> FetchResult {
        let start = Instant::now();

        let platform: Platform = match selector.parse() {
            Ok(p) => p,
            Err(e) => {
                loge!("Dispatch: {e}");
                return FetchResult::Err(FetchFailure {
                    platform: None,
                    selector: s!(selector),
                    subject: s!(identifier),
                    message: e.to_string(),
                    elapsed: round_elapsed(start.elapsed().as_secs_f64()),
                });
            }
        };

        let mut opts = self.options.clone();
        if let Some(n) = count {
            opts.count = n;
        }

        let output = self.run_provider(platform, identifier, &opts);
        let elapsed = round_elapsed(start.elapsed().as_secs_f64());
        let result = FetchResult::from_output(platform, identifier, output, elapsed);

        match &result {
            FetchResult::Ok(ok) => logf!(
                "Dispatch: OK platform={} subject={:?} records={} elapsed={:.2}s",
                platform, identifier, ok.items.as_ref().map_or(1, Vec::len), elapsed
            ),
            FetchResult::Err(err) => loge!(
                "Dispatch: Error platform={} subject={:?} elapsed={:.2}s: {}",
                platform, identifier, elapsed, err.message
            ),
        }

        self.table.record_result(platform, result.clone());
        result
    }

    fn run_provider(&self, platform: Platform, identifier: &str, opts: &FetchOptions) -> ProviderOutput {
        let mut scoped = match self.factory.create(platform) {
            Ok(inner) => ScopedProvider { inner },
            Err(e) => return ProviderOutput::Failed(e.to_string()),
        };

        // A panicking provider still yields a result, and `scoped` still closes it.
        panic::catch_unwind(AssertUnwindSafe(|| scoped.inner.fetch(identifier, opts)))
            .unwrap_or_else(|payload| ProviderOutput::Failed(format!("provider panicked: {}", panic_message(&*payload))))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unknown panic")
    }
}
