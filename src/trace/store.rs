//! Bounded in-memory trace history.
//!
//! # Design Decisions
//! - Fixed capacity, oldest entry evicted first
//! - Order is completion order: an entry is appended when its response is ready
//! - A single mutex guards the queue; appends are O(1) and never await

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use axum::http::{HeaderMap, HeaderName};

use crate::config::TraceConfig;
use crate::trace::entry::{CapturedHeaders, TraceEntry};

/// Thread-safe FIFO ring of the most recent exchanges.
#[derive(Debug)]
pub struct TraceStore {
    capacity: usize,
    excluded_headers: Vec<HeaderName>,
    entries: Mutex<VecDeque<TraceEntry>>,
}

impl TraceStore {
    /// Create an empty store retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            excluded_headers: Vec::new(),
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Never capture the given headers.
    pub fn with_excluded_headers(mut self, names: Vec<HeaderName>) -> Self {
        self.excluded_headers = names;
        self
    }

    /// Build from the `trace` config section. Invalid header names are skipped;
    /// validation reports them before this point.
    pub fn from_config(config: &TraceConfig) -> Self {
        let excluded = config
            .excluded_headers
            .iter()
            .filter_map(|name| HeaderName::from_bytes(name.as_bytes()).ok())
            .collect();

        Self::new(config.capacity).with_excluded_headers(excluded)
    }

    /// Append an entry, evicting the oldest if the store is full.
    pub fn record(&self, entry: TraceEntry) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<TraceEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy `headers` into trace form, dropping excluded names.
    pub fn capture_headers(&self, headers: &HeaderMap) -> CapturedHeaders {
        let mut captured = CapturedHeaders::new();
        for (name, value) in headers {
            if self.excluded_headers.contains(name) {
                continue;
            }
            captured
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        captured
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<TraceEntry>> {
        // A panicking writer cannot leave the deque half-updated.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
