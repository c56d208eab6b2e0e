//! Common test helpers and utilities.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use pattern_demos::observer::Observer;

/// A cloneable in-memory sink, so a test can keep reading what a display or
/// context has written after handing it a writer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output should be UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Shared, ordered log of which observer received which values.
pub type CallLog = Rc<RefCell<Vec<(String, f64, f64, f64)>>>;

/// An observer that appends its name and the pushed values to a [`CallLog`].
pub struct RecordingObserver {
    name: String,
    log: CallLog,
}

impl RecordingObserver {
    pub fn new(name: &str, log: &CallLog) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name: name.to_string(),
            log: Rc::clone(log),
        }))
    }
}

impl Observer for RecordingObserver {
    fn update(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.log
            .borrow_mut()
            .push((self.name.clone(), temperature, humidity, pressure));
    }
}

/// Names in the log, in call order.
pub fn call_names(log: &CallLog) -> Vec<String> {
    log.borrow().iter().map(|(name, ..)| name.clone()).collect()
}
