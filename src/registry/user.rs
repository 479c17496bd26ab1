//! Users and the observers that notify them.

use std::fmt;

use tracing::debug;

use crate::output::OutputSink;

/// A subscriber, identified only by its display name.
///
/// The name may be empty; nothing downstream depends on it being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// The way an observer delivers its notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifierKind {
    /// Writes the user's name to the console.
    Console,
    /// Delivers out of band. Never writes to the console.
    Email,
}

/// Identity of an observer inside a channel.
///
/// Two observers with the same key are interchangeable, so a channel keeps
/// at most one of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObserverKey {
    pub username: String,
    pub kind: NotifierKind,
}

impl ObserverKey {
    pub fn new(username: impl Into<String>, kind: NotifierKind) -> Self {
        Self {
            username: username.into(),
            kind,
        }
    }
}

/// Something that wants to hear about videos published on a channel.
pub trait ChannelObserver {
    /// Deduplication key for this observer.
    fn key(&self) -> ObserverKey;

    /// Called once per publish on every channel the observer is attached to.
    fn on_video_published(&self, out: &mut dyn OutputSink);
}

/// Prints the owning user's name, indented by a tab, when a video is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleNotifier {
    user: User,
}

impl ConsoleNotifier {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl ChannelObserver for ConsoleNotifier {
    fn key(&self) -> ObserverKey {
        ObserverKey::new(self.user.username(), NotifierKind::Console)
    }

    fn on_video_published(&self, out: &mut dyn OutputSink) {
        out.emit(&format!("\t{}", self.user));
    }
}

/// Notifies the owning user by email. Nothing is written to the console.
///
/// There is no mail transport; delivery is recorded in the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotifier {
    user: User,
}

impl EmailNotifier {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl ChannelObserver for EmailNotifier {
    fn key(&self) -> ObserverKey {
        ObserverKey::new(self.user.username(), NotifierKind::Email)
    }

    fn on_video_published(&self, _out: &mut dyn OutputSink) {
        debug!(user = %self.user, "Email notification sent");
    }
}
