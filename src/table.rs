// src/table.rs
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::model::{FetchResult, Platform};

/// Most recent result per platform, shared by every fetch thread.
///
/// Last write wins. The lock is held for a single insert or clone and never
/// across I/O. Providers never read it; it exists for inspection.
#[derive(Debug, Default)]
pub struct ResultsTable {
    inner: Mutex<HashMap<Platform, FetchResult>>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicked holder can only have died between statements of an insert/clone.
    fn lock(&self) -> MutexGuard<'_, HashMap<Platform, FetchResult>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_result(&self, platform: Platform, result: FetchResult) {
        self.lock().insert(platform, result);
        logd!("Table: recorded {platform}");
    }

    pub fn get(&self, platform: Platform) -> Option<FetchResult> {
        self.lock().get(&platform).cloned()
    }

    /// Copy of the whole table, sorted by platform.
    pub fn snapshot(&self) -> Vec<(Platform, FetchResult)> {
        let mut rows: Vec<(Platform, FetchResult)> =
            self.lock().iter().map(|(p, r)| (*p, r.clone())).collect();
        rows.sort_by_key(|(p, _)| *p);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProviderOutput;
    use std::{sync::Arc, thread};

    fn ok(platform: Platform, subject: &str) -> FetchResult {
        FetchResult::from_output(platform, subject, ProviderOutput::Single(record! { "k" => subject }), 0.0)
    }

    #[test]
    fn last_write_wins_per_platform() {
        let t = ResultsTable::new();
        t.record_result(Platform::Twitter, ok(Platform::Twitter, "a"));
        t.record_result(Platform::Twitter, ok(Platform::Twitter, "b"));
        t.record_result(Platform::Facebook, ok(Platform::Facebook, "c"));

        let snap = t.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].0, Platform::Facebook);
        assert_eq!(t.get(Platform::Twitter).map(|r| s!(r.subject())), Some(s!("b")));
        assert_eq!(t.get(Platform::Instagram), None);
    }

    #[test]
    fn concurrent_writers_never_mix_entries() {
        let t = Arc::new(ResultsTable::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let t = Arc::clone(&t);
                thread::spawn(move || {
                    let p = Platform::ALL[i % 3];
                    t.record_result(p, ok(p, &format!("{}-{i}", p.name())));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        for (p, r) in t.snapshot() {
            assert_eq!(r.platform(), Some(p));
            assert!(r.subject().starts_with(p.name()));
        }
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let t = Arc::new(ResultsTable::new());
        let t2 = Arc::clone(&t);
        let _ = thread::spawn(move || {
            let _g = t2.inner.lock().unwrap();
            panic!("poison");
        })
        .join();
        t.record_result(Platform::Facebook, ok(Platform::Facebook, "after"));
        assert!(t.get(Platform::Facebook).is_some());
    }
}
