//! A named channel and its set of observers.

use std::collections::HashSet;

use crate::output::OutputSink;

use super::user::{ChannelObserver, ObserverKey};

/// A named topic that notifies its observers when a video is published.
///
/// Observers are deduplicated by [`ObserverKey`] and notified in the order
/// they were first attached.
pub struct Channel {
    name: String,
    observers: Vec<Box<dyn ChannelObserver>>,
    keys: HashSet<ObserverKey>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observers: Vec::new(),
            keys: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct observers attached.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn has_observer(&self, key: &ObserverKey) -> bool {
        self.keys.contains(key)
    }

    /// Attaches an observer. Returns false if an equivalent one was already attached.
    pub fn attach(&mut self, observer: Box<dyn ChannelObserver>) -> bool {
        if !self.keys.insert(observer.key()) {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Detaches the observer with the given key. Returns false if none was attached.
    pub fn detach(&mut self, key: &ObserverKey) -> bool {
        if !self.keys.remove(key) {
            return false;
        }
        self.observers.retain(|o| &o.key() != key);
        true
    }

    /// Writes the notification header and lets every observer report itself.
    ///
    /// Returns the number of observers notified.
    pub fn notify_video_published(&self, out: &mut dyn OutputSink) -> usize {
        out.emit(&format!("Notifying subscribers of {}:", self.name));
        for observer in &self.observers {
            observer.on_video_published(out);
        }
        self.observers.len()
    }
}

impl std::fmt::Debug for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<ObserverKey> = self.observers.iter().map(|o| o.key()).collect();
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("observers", &keys)
            .finish()
    }
}
