//! `publish video on <CHANNEL>`

use tracing::{debug, error, warn};

use super::formats::{extract_publish, is_publish};
use super::Command;
use crate::output::OutputSink;
use crate::registry::Registry;

/// Notifies every subscriber of an existing channel.
///
/// Publishing never creates a channel: an unknown name fails without output.
pub struct Publish<'r> {
    registry: &'r Registry,
    matcher: fn(&str) -> bool,
    extractor: fn(&str) -> Option<&str>,
}

impl<'r> Publish<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            matcher: is_publish,
            extractor: extract_publish,
        }
    }
}

impl Command for Publish<'_> {
    fn is_type(&self, line: &str) -> bool {
        (self.matcher)(line)
    }

    fn execute(&mut self, line: &str, out: &mut dyn OutputSink) -> bool {
        let Some(channel_name) = (self.extractor)(line) else {
            error!(line = %line, "Publish line could not be parsed");
            return false;
        };

        let Some(channel) = self.registry.lookup(channel_name) else {
            warn!(channel = %channel_name, "Publish to unknown channel");
            return false;
        };

        let notified = channel.borrow().notify_video_published(out);
        debug!(channel = %channel_name, notified, "Video published");
        true
    }
}
