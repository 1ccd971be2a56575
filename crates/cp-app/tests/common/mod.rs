#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cp_app::HistoryStore;
use cp_core::ports::{ClockPort, HistoryNotifierPort, NotificationError, StateStoragePort};
use cp_infra::InMemoryStateStorage;
use serde_json::Value;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Arc<Self> {
        Arc::new(Self {
            now: AtomicI64::new(now_ms),
        })
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// In-memory storage that counts writes per key and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: InMemoryStateStorage,
    writes: Mutex<HashMap<String, usize>>,
    fail_writes: AtomicBool,
}

impl CountingStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seeded<I>(entries: I) -> Arc<Self>
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        Arc::new(Self {
            inner: InMemoryStateStorage::with_entries(entries),
            ..Self::default()
        })
    }

    pub fn writes(&self, key: &str) -> usize {
        self.writes.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn raw(&self, key: &str) -> Option<Value> {
        self.inner.get(key).await.unwrap()
    }
}

#[async_trait]
impl StateStoragePort for CountingStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        *self.writes.lock().unwrap().entry(key.to_string()).or_default() += 1;
        self.inner.set(key, value).await
    }
}

/// Notifier that counts signals and always succeeds.
#[derive(Debug, Default)]
pub struct CountingNotifier {
    count: AtomicUsize,
}

impl CountingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl HistoryNotifierPort for CountingNotifier {
    fn notify_history_updated(&self) -> Result<(), NotificationError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct Harness {
    pub store: Arc<HistoryStore>,
    pub storage: Arc<CountingStorage>,
    pub notifier: Arc<CountingNotifier>,
    pub clock: Arc<FixedClock>,
}

pub fn harness(now_ms: i64) -> Harness {
    harness_with(CountingStorage::new(), now_ms)
}

pub fn harness_with(storage: Arc<CountingStorage>, now_ms: i64) -> Harness {
    let notifier = CountingNotifier::new();
    let clock = FixedClock::at(now_ms);
    let store = Arc::new(HistoryStore::new(
        storage.clone(),
        notifier.clone(),
        clock.clone(),
    ));
    Harness {
        store,
        storage,
        notifier,
        clock,
    }
}
