//! Test support: a minimal effect system and log capture.

use std::cell::{Cell, RefCell};
use std::io;
use std::sync::{Arc, Mutex};

use slotmap::SlotMap;

use crate::reactive::{dependencies, DepKey, ObjectRef, SubscriberKey, TrackOp, Tracker, TriggerOp};

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    Track { target: ObjectRef, op: TrackOp, key: DepKey },
    Trigger { target: ObjectRef, op: TriggerOp, key: DepKey },
}

/// Records every track/trigger and keeps dependency sets in the registry, the way an effect
/// system would.
///
/// Reads made while a subscriber is active (see [`run`](Self::run)) subscribe it to the key
/// that was read; triggers collect the subscribers of the written key.
#[derive(Default)]
pub struct RecordingTracker {
    subscribers: RefCell<SlotMap<SubscriberKey, &'static str>>,
    active: Cell<Option<SubscriberKey>>,
    events: RefCell<Vec<TrackerEvent>>,
    triggered: RefCell<Vec<SubscriberKey>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber(&self, name: &'static str) -> SubscriberKey {
        self.subscribers
            .borrow_mut()
            .insert(name)
    }

    /// Runs `f` with `subscriber` active.
    pub fn run<R>(&self, subscriber: SubscriberKey, f: impl FnOnce() -> R) -> R {
        let previous = self.active.replace(Some(subscriber));
        let result = f();
        self.active.set(previous);
        result
    }

    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<TrackerEvent> {
        self.events.take()
    }

    pub fn take_triggered(&self) -> Vec<SubscriberKey> {
        self.triggered.take()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, target: &ObjectRef, op: TrackOp, key: &DepKey) {
        self.events
            .borrow_mut()
            .push(TrackerEvent::Track {
                target: target.clone(),
                op,
                key: key.clone(),
            });

        let Some(subscriber) = self.active.get() else {
            return;
        };
        if let Some(deps) = dependencies(target) {
            deps.borrow_mut()
                .entry(key.clone())
                .or_default()
                .insert(subscriber);
        }
    }

    fn trigger(&self, target: &ObjectRef, op: TriggerOp, key: &DepKey) {
        self.events
            .borrow_mut()
            .push(TrackerEvent::Trigger {
                target: target.clone(),
                op,
                key: key.clone(),
            });

        if let Some(deps) = dependencies(target) {
            if let Some(dep) = deps.borrow().get(key) {
                self.triggered
                    .borrow_mut()
                    .extend(dep.iter().copied());
            }
        }
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        inner.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a `tracing` subscriber that records everything, returns the result and the
/// formatted log output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let logs = buffer
        .0
        .lock()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();
    (result, logs)
}
