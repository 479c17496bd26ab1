//! Command recognition and execution for Subcast.
//!
//! A raw line is classified by the matchers in [`formats`], turned into a
//! bound command by the [`CommandRouter`], and executed against the
//! [`Registry`](crate::registry::Registry). Output goes through an
//! [`OutputSink`] so the core never touches the terminal directly.

pub mod formats;
pub mod publish;
pub mod router;
pub mod subscribe;

pub use crate::output::{BufferedOutput, ConsoleOutput, OutputSink};
pub use publish::Publish;
pub use router::{CommandKind, CommandRouter};
pub use subscribe::Subscribe;

/// An executable command bound to a registry.
pub trait Command {
    /// Returns true if the line has this command's shape.
    fn is_type(&self, line: &str) -> bool;

    /// Applies the command to the registry.
    ///
    /// Returns false when a precondition fails, e.g. publishing to a channel
    /// nobody has subscribed to. Failures produce no output.
    fn execute(&mut self, line: &str, out: &mut dyn OutputSink) -> bool;
}
