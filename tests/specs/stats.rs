//! Behavioral specs for the stats command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn stats_text_output() {
    stats()
        .patterns(&["he", "she", "his", "hers"])
        .exits(0)
        .stdout_eq(
            "alphabet: lowercase\n\
             patterns: 4\n\
             nodes: 10\n\
             terminal nodes: 4\n\
             max depth: 4\n\
             failure links: 4\n\
             output links: 1\n",
        );
}

#[test]
fn stats_json_output() {
    let result = stats().patterns(&["a", "aa", "aaa"]).json().exits(0);
    let json = result.json();
    assert_eq!(json["alphabet"], "lowercase");
    assert_eq!(json["patterns"], 3);
    assert_eq!(json["nodes"], 4);
    assert_eq!(json["max_depth"], 3);
    assert_eq!(json["output_links"], 2);
}

#[test]
fn stats_counts_duplicates_once() {
    stats()
        .patterns(&["abc", "abc"])
        .exits(0)
        .stdout_has("patterns: 1\n");
}

#[test]
fn stats_rejects_invalid_pattern() {
    stats()
        .patterns(&["ab1"])
        .exits(2)
        .stderr_has("outside the lowercase alphabet");
}
