//! Command routing for Subcast.
//!
//! Picks the command whose shape a line matches and binds it to the registry.

use tracing::debug;

use super::formats::{is_publish, is_subscription};
use super::publish::Publish;
use super::subscribe::Subscribe;
use super::Command;
use crate::registry::Registry;

/// The command variants the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `subscribe <USER> to <CHANNEL>`
    Subscribe,
    /// `publish video on <CHANNEL>`
    Publish,
}

impl CommandKind {
    /// Variants in the order the router tries them.
    pub const PRIORITY: [CommandKind; 2] = [CommandKind::Subscribe, CommandKind::Publish];

    /// Returns true if the line has this variant's shape.
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Subscribe => is_subscription(line),
            Self::Publish => is_publish(line),
        }
    }

    /// Binds this variant to a registry.
    pub fn bind(self, registry: &mut Registry) -> Box<dyn Command + '_> {
        match self {
            Self::Subscribe => Box::new(Subscribe::new(registry)),
            Self::Publish => Box::new(Publish::new(registry)),
        }
    }
}

/// Command router for raw input lines.
pub struct CommandRouter;

impl CommandRouter {
    /// Returns the variant a line would be routed to, if any.
    pub fn classify(line: &str) -> Option<CommandKind> {
        CommandKind::PRIORITY
            .into_iter()
            .find(|kind| kind.matches(line))
    }

    /// Resolves a line into a command bound to the registry.
    ///
    /// Returns `None` for lines that match no command shape.
    pub fn evaluate<'r>(
        line: &str,
        registry: &'r mut Registry,
    ) -> Option<Box<dyn Command + 'r>> {
        let Some(kind) = Self::classify(line) else {
            debug!(line = %line, "No command matches line");
            return None;
        };
        debug!(?kind, "Routing line");
        Some(kind.bind(registry))
    }
}
