//! In-memory channel registry.
//!
//! Maps channel names to their [`Channel`] and the users who subscribed to it.
//! The registry is built once by the caller and handed to every command; there
//! is no global instance.

pub mod channel;
pub mod user;

pub use channel::Channel;
pub use user::{
    ChannelObserver, ConsoleNotifier, EmailNotifier, NotifierKind, ObserverKey, User,
};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::info;

/// Shared handle to a channel. Every holder sees the same observers.
pub type ChannelHandle = Rc<RefCell<Channel>>;

struct Entry {
    channel: ChannelHandle,
    subscribers: Vec<User>,
}

/// Channel store with get-or-create lookup.
#[derive(Default)]
pub struct Registry {
    channels: HashMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the channel with this name, creating an empty one if needed.
    pub fn get_or_create(&mut self, name: &str) -> ChannelHandle {
        let entry = self.channels.entry(name.to_string()).or_insert_with(|| {
            info!(channel = %name, "Creating channel");
            Entry {
                channel: Rc::new(RefCell::new(Channel::new(name))),
                subscribers: Vec::new(),
            }
        });
        Rc::clone(&entry.channel)
    }

    /// Returns the channel with this name if it exists. Never creates one.
    pub fn lookup(&self, name: &str) -> Option<ChannelHandle> {
        self.channels.get(name).map(|e| Rc::clone(&e.channel))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Records a subscription of `username` against the channel.
    ///
    /// Users are appended in subscription order and not deduplicated.
    pub fn add_user_to_channel(&mut self, channel: &ChannelHandle, username: &str) {
        let name = channel.borrow().name().to_string();
        let entry = self.channels.entry(name).or_insert_with(|| Entry {
            channel: Rc::clone(channel),
            subscribers: Vec::new(),
        });
        entry.subscribers.push(User::new(username));
    }

    /// Users recorded against a channel, in subscription order.
    pub fn subscribers(&self, name: &str) -> Option<&[User]> {
        self.channels.get(name).map(|e| e.subscribers.as_slice())
    }

    /// All channel names, sorted.
    pub fn channel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
