#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

/// Collects everything a shell writes to its output sink.
#[derive(Default)]
pub struct Capture {
    text: Mutex<String>,
    writes: AtomicUsize,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, text: &str) {
        self.text.lock().unwrap().push_str(text);
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Drain captured text.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.text.lock().unwrap())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

/// Records every invocation of a handler.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Vec<String>>>,
    status: AtomicI32,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(status: i32) -> Self {
        let recorder = Self::default();
        recorder.status.store(status, Ordering::Relaxed);
        recorder
    }

    pub fn record(&self, argc: usize, argv: &[&str]) -> i32 {
        assert_eq!(argc, argv.len());
        self.calls
            .lock()
            .unwrap()
            .push(argv.iter().map(|s| s.to_string()).collect());
        self.status.load(Ordering::Relaxed)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().cloned()
    }
}
