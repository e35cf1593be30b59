//! Relative-time formatting specs
//!
//! `ago`, `until`, and `delta` against a pinned clock.

use crate::prelude::*;

fn behind(offset_ms: i64) -> String {
    (NOW_MS - offset_ms).to_string()
}

fn ahead(offset_ms: i64) -> String {
    (NOW_MS + offset_ms).to_string()
}

#[test]
fn ago_hours_in_english() {
    cli()
        .args(&["ago", &behind(2 * HOUR)])
        .passes()
        .stdout_eq("about 2 hours ago\n");
}

#[test]
fn ago_just_now() {
    cli()
        .args(&["ago", &behind(0)])
        .passes()
        .stdout_eq("less than a minute ago\n");
}

#[test]
fn ago_of_future_timestamp_is_seconds_ago() {
    cli()
        .args(&["ago", &ahead(3 * DAY)])
        .passes()
        .stdout_eq("less than a minute ago\n");
}

#[test]
fn until_past_timestamp_reads_from_now() {
    cli()
        .args(&["until", &behind(5 * MINUTE)])
        .passes()
        .stdout_eq("5 minutes from now\n");
}

#[test]
fn until_future_timestamp_keeps_sign() {
    cli()
        .args(&["until", &ahead(10 * DAY)])
        .passes()
        .stdout_eq("10 days ago\n");
}

#[test]
fn ago_days_in_spanish() {
    cli()
        .args(&["-l", "es", "ago", &behind(3 * DAY)])
        .passes()
        .stdout_eq("hace 3 días\n");
}

#[test]
fn until_days_in_italian() {
    cli()
        .args(&["--locale", "it", "until", &behind(2 * DAY)])
        .passes()
        .stdout_eq("tra 2 giorni\n");
}

#[test]
fn delta_groups_large_counts_per_locale() {
    let millennium = (1000 * 365 * DAY).to_string();
    cli()
        .args(&["delta", &millennium])
        .passes()
        .stdout_eq("1,000 years ago\n");
    cli()
        .args(&["-l", "es", "delta", &millennium])
        .passes()
        .stdout_eq("hace 1.000 años\n");
}

#[test]
fn delta_negative_without_future_is_seconds() {
    cli()
        .args(&["delta", "-7200000"])
        .passes()
        .stdout_eq("less than a minute ago\n");
}

#[test]
fn delta_negative_with_future() {
    cli()
        .args(&["delta", "-7200000", "--future"])
        .passes()
        .stdout_eq("about 2 hours from now\n");
}

#[test]
fn json_output_carries_classification() {
    let run = cli()
        .args(&["-o", "json", "-l", "es", "until", &behind(45 * DAY)])
        .passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!({
            "locale": "es",
            "text": "dentro de un mes",
            "bucket": "month",
            "count": null,
            "direction": "from_now",
        })
    );
}

#[test]
fn set_overrides_a_phrase() {
    cli()
        .args(&["--set", "seconds=just now", "--set", "suffix_ago=", "ago", &behind(0)])
        .passes()
        .stdout_eq("just now\n");
}

#[test]
fn set_accepts_count_placeholder() {
    cli()
        .args(&["--set", "hours={count}h", "ago", &behind(5 * HOUR)])
        .passes()
        .stdout_eq("5h ago\n");
}
