//! `subscribe <USER> to <CHANNEL>`

use tracing::{debug, error};

use super::formats::{extract_subscription, is_subscription};
use super::Command;
use crate::output::OutputSink;
use crate::registry::{ConsoleNotifier, Registry, User};

/// Subscribes a user to a channel, creating the channel on first use.
pub struct Subscribe<'r> {
    registry: &'r mut Registry,
    matcher: fn(&str) -> bool,
    extractor: fn(&str) -> Option<(&str, &str)>,
}

impl<'r> Subscribe<'r> {
    pub fn new(registry: &'r mut Registry) -> Self {
        Self {
            registry,
            matcher: is_subscription,
            extractor: extract_subscription,
        }
    }
}

impl Command for Subscribe<'_> {
    fn is_type(&self, line: &str) -> bool {
        (self.matcher)(line)
    }

    fn execute(&mut self, line: &str, out: &mut dyn OutputSink) -> bool {
        let Some((user, channel_name)) = (self.extractor)(line) else {
            error!(line = %line, "Subscription line could not be parsed");
            return false;
        };

        let channel = self.registry.get_or_create(channel_name);
        let added = channel
            .borrow_mut()
            .attach(Box::new(ConsoleNotifier::new(User::new(user))));
        if !added {
            debug!(user = %user, channel = %channel_name, "Already subscribed");
        }
        self.registry.add_user_to_channel(&channel, user);

        out.emit(&format!("{user} subscribed to {channel_name}"));
        true
    }
}
