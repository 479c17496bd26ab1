//! Line shapes understood by the command core.
//!
//! Matchers decide whether a raw line has the shape of a command. Extractors
//! pull the bracketed fields out of a line a matcher has already accepted.
//!
//! ```text
//! subscribe <USER> to <CHANNEL>
//! publish video on <CHANNEL>
//! ```
//!
//! Bracket counts are exact, not minimums, so a line with an extra field is
//! rejected before any extraction happens.

const SUBSCRIBE_PREFIX: &str = "subscribe";
const SUBSCRIBE_SEPARATOR: &str = "> to <";
const PUBLISH_PREFIX: &str = "publish video on";

/// Returns true if the line has the `subscribe <USER> to <CHANNEL>` shape.
pub fn is_subscription(line: &str) -> bool {
    line.starts_with(SUBSCRIBE_PREFIX)
        && line.contains(SUBSCRIBE_SEPARATOR)
        && count(line, '<') == 2
        && count(line, '>') == 2
}

/// Returns true if the line has the `publish video on <CHANNEL>` shape.
pub fn is_publish(line: &str) -> bool {
    line.starts_with(PUBLISH_PREFIX) && count(line, '<') == 1 && count(line, '>') == 1
}

/// Extracts `(user, channel)` from a subscription line.
///
/// The user sits between the first `<` and the first `>`, the channel between
/// the last `<` and the last `>`. Returns `None` when either pair is missing
/// or closes before it opens.
pub fn extract_subscription(line: &str) -> Option<(&str, &str)> {
    let user = between(line, line.find('<')?, line.find('>')?)?;
    let channel = between(line, line.rfind('<')?, line.rfind('>')?)?;
    Some((user, channel))
}

/// Extracts the channel from a publish line: the text between the first `<`
/// and the first `>`.
pub fn extract_publish(line: &str) -> Option<&str> {
    between(line, line.find('<')?, line.find('>')?)
}

fn between(line: &str, open: usize, close: usize) -> Option<&str> {
    // Both delimiters are ASCII, so open + 1 is always a char boundary.
    line.get(open + 1..close)
}

fn count(line: &str, c: char) -> usize {
    line.matches(c).count()
}
