//! A recording [`SyslogSink`] for tests.
//!
//! [`SyslogSink`]: ../trait.SyslogSink.html

use libc::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::sink::SyslogSink;

/// One observed sink call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// The sink's `open` was called (successfully or not).
    Open {
        ident: Option<String>,
        options: c_int,
        facility: c_int,
    },
    /// The sink's `write` was called.
    Write {
        priority: c_int,
        message: String,
    },
}

/// Sink that records every call and can be scripted to fail `open`.
#[derive(Debug, Default)]
pub struct MockSink {
    events: Mutex<Vec<Event>>,
    fail_open: AtomicBool,
}

impl MockSink {
    /// Creates an empty `MockSink` whose `open` succeeds.
    pub fn new() -> Self {
        MockSink::default()
    }

    /// Makes subsequent `open` calls report failure (or success again).
    /// Failed opens are still recorded.
    pub fn fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::SeqCst);
    }

    /// All events recorded so far, in call order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// How many times `open` has been called, successful or not.
    pub fn open_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Event::Open { .. }))
            .count()
    }

    /// The `(priority, message)` pairs written so far, in call order.
    pub fn writes(&self) -> Vec<(c_int, String)> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::Write { priority, message } => Some((*priority, message.clone())),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl SyslogSink for MockSink {
    fn open(&self, ident: Option<&str>, options: c_int, facility: c_int) -> bool {
        self.push(Event::Open {
            ident: ident.map(String::from),
            options,
            facility,
        });

        !self.fail_open.load(Ordering::SeqCst)
    }

    fn write(&self, priority: c_int, message: &str) {
        self.push(Event::Write {
            priority,
            message: message.to_string(),
        });
    }
}
