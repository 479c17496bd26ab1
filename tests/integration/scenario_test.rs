//! Session scenarios run through the library loop.

use pretty_assertions::assert_eq;

use super::common::run_session;

#[test]
fn test_subscribe_then_publish() {
    let (lines, stats, _) =
        run_session("subscribe <alice> to <cd>\npublish video on <cd>\n\n");

    assert_eq!(
        lines,
        vec![
            "alice subscribed to cd",
            "Notifying subscribers of cd:",
            "\talice",
        ]
    );
    assert_eq!(stats.executed, 2);
}

#[test]
fn test_publish_to_unknown_channel_is_silent() {
    let (lines, stats, registry) = run_session("publish video on <unknown>\n\n");

    assert!(lines.is_empty());
    assert_eq!(stats.failed, 1);
    assert!(!registry.contains("unknown"));
}

#[test]
fn test_two_subscribers_each_notified_once() {
    let (lines, _, _) = run_session(
        "subscribe <bob> to <news>\nsubscribe <carol> to <news>\npublish video on <news>\n\n",
    );

    assert_eq!(
        lines,
        vec![
            "bob subscribed to news",
            "carol subscribed to news",
            "Notifying subscribers of news:",
            "\tbob",
            "\tcarol",
        ]
    );
}

#[test]
fn test_resubscribe_does_not_duplicate_notifications() {
    let (lines, _, registry) = run_session(
        "subscribe <bob> to <news>\nsubscribe <bob> to <news>\npublish video on <news>\n\n",
    );

    assert_eq!(lines.iter().filter(|l| *l == "\tbob").count(), 1);
    assert_eq!(registry.subscribers("news").map(<[_]>::len), Some(2));
}

#[test]
fn test_unrecognised_lines_are_ignored() {
    let (lines, stats, registry) = run_session(
        "hello\nsubscribe alice to cd\nSUBSCRIBE <alice> to <cd>\npublish video on <a> and <b>\n\n",
    );

    assert!(lines.is_empty());
    assert_eq!(stats.ignored, 4);
    assert!(registry.is_empty());
}

#[test]
fn test_publish_repeats_reach_same_subscribers() {
    let (lines, _, _) = run_session(
        "subscribe <alice> to <cd>\npublish video on <cd>\npublish video on <cd>\n",
    );

    assert_eq!(
        lines,
        vec![
            "alice subscribed to cd",
            "Notifying subscribers of cd:",
            "\talice",
            "Notifying subscribers of cd:",
            "\talice",
        ]
    );
}

#[test]
fn test_names_with_spaces() {
    let (lines, _, registry) = run_session(
        "subscribe <Ana Maria> to <Continuous Delivery>\npublish video on <Continuous Delivery>\n",
    );

    assert_eq!(
        lines,
        vec![
            "Ana Maria subscribed to Continuous Delivery",
            "Notifying subscribers of Continuous Delivery:",
            "\tAna Maria",
        ]
    );
    assert_eq!(registry.channel_names(), vec!["Continuous Delivery"]);
}

#[test]
fn test_lines_after_empty_line_are_not_read() {
    let (lines, stats, registry) =
        run_session("subscribe <alice> to <cd>\n\nsubscribe <bob> to <news>\n");

    assert_eq!(lines, vec!["alice subscribed to cd"]);
    assert_eq!(stats.lines_read, 1);
    assert!(!registry.contains("news"));
}
