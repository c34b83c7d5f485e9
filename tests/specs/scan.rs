//! Behavioral specs for the scan command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Matching semantics
// =============================================================================

/// > Overlapping and nested occurrences are all reported
#[test]
fn overlapping_patterns_on_stdin() {
    scan()
        .patterns(&["a", "aa", "aaa"])
        .stdin("aaaa")
        .matches()
        .stdout_eq(
            "-:1:0: a\n\
             -:1:0: aa\n\
             -:1:0: aaa\n\
             -:1:1: a\n\
             -:1:1: aa\n\
             -:1:1: aaa\n\
             -:1:2: a\n\
             -:1:2: aa\n\
             -:1:3: a\n\
             9 matches in 1 file\n",
        );
}

/// > A pattern that is a suffix of another is reported via output links
#[test]
fn suffix_pattern_is_reported() {
    scan()
        .patterns(&["abc", "bc"])
        .stdin("xabc")
        .matches()
        .stdout_eq("-:1:1: abc\n-:1:2: bc\n2 matches in 1 file\n");
}

#[test]
fn classic_dictionary() {
    scan()
        .patterns(&["he", "she", "his", "hers"])
        .stdin("ushers")
        .matches()
        .stdout_eq("-:1:1: she\n-:1:2: he\n-:1:2: hers\n3 matches in 1 file\n");
}

/// > No occurrence exits 1 with an empty summary
#[test]
fn no_match_exits_one() {
    scan()
        .patterns(&["xyz"])
        .stdin("aaaa")
        .no_match()
        .stdout_eq("0 matches in 0 files\n");
}

#[test]
fn empty_stdin_is_no_match() {
    scan().patterns(&["he"]).no_match();
}

/// > Bytes outside the lowercase alphabet break a match
#[test]
fn out_of_alphabet_text_resets_state() {
    scan()
        .patterns(&["abc"])
        .stdin("ab-c ABC abc")
        .matches()
        .stdout_eq("-:1:9: abc\n1 match in 1 file\n");
}

#[test]
fn line_numbers_follow_newlines() {
    scan()
        .patterns(&["fox"])
        .stdin("the fox\njumps\nover the fox\n")
        .matches()
        .stdout_eq("-:1:4: fox\n-:3:23: fox\n2 matches in 1 file\n");
}

#[test]
fn bytes_alphabet_matches_utf8() {
    scan()
        .patterns(&["Café", "fé"])
        .args(&["--alphabet", "bytes"])
        .stdin("Le Café")
        .matches()
        .stdout_has("-:1:3: Café")
        .stdout_has("-:1:5: fé");
}

/// > Duplicate patterns are reported once
#[test]
fn duplicate_patterns_report_once() {
    scan()
        .patterns(&["he", "he", "he"])
        .stdin("hehe")
        .matches()
        .stdout_eq("-:1:0: he\n-:1:2: he\n2 matches in 1 file\n");
}

// =============================================================================
// Dictionary errors
// =============================================================================

#[test]
fn no_patterns_is_an_argument_error() {
    scan()
        .stdin("hello")
        .exits(2)
        .stderr_has("acscan: argument error: no patterns given");
}

#[test]
fn empty_pattern_is_rejected() {
    scan()
        .patterns(&["he", ""])
        .stdin("hello")
        .exits(2)
        .stderr_has("pattern #1 is empty");
}

#[test]
fn uppercase_pattern_is_rejected_for_lowercase() {
    scan()
        .patterns(&["Hello"])
        .stdin("hello")
        .exits(2)
        .stderr_has("outside the lowercase alphabet");
}

#[test]
fn dictionary_error_does_not_wait_for_large_stdin() {
    scan()
        .patterns(&["Hello"])
        .stdin(vec![b'a'; 1 << 20])
        .exits(2)
        .stderr_has("outside the lowercase alphabet");
}

#[test]
fn patterns_file_is_read() {
    let temp = Project::empty();
    temp.file("words.txt", "he\n\nshe\r\n");
    scan()
        .args(&["-f", "words.txt"])
        .pwd(temp.path())
        .stdin("she")
        .matches()
        .stdout_eq("-:1:0: she\n-:1:1: he\n2 matches in 1 file\n");
}

#[test]
fn missing_patterns_file_is_io_error() {
    let temp = Project::empty();
    scan()
        .args(&["-f", "absent.txt"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("absent.txt");
}

// =============================================================================
// Files and directories
// =============================================================================

#[test]
fn scans_named_files_in_order() {
    let temp = Project::empty();
    temp.file("b.txt", "she");
    temp.file("a.txt", "hers");
    scan()
        .patterns(&["he", "she", "hers"])
        .args(&["b.txt", "a.txt"])
        .pwd(temp.path())
        .matches()
        .stdout_eq(
            "a.txt:1:0: he\n\
             a.txt:1:0: hers\n\
             b.txt:1:0: she\n\
             b.txt:1:1: he\n\
             4 matches in 2 files\n",
        );
}

#[test]
fn walks_directories_respecting_gitignore() {
    let temp = Project::empty();
    temp.file(".gitignore", "ignored/\n");
    temp.file("docs/a.txt", "fox");
    temp.file("docs/b.txt", "dog");
    temp.file("ignored/c.txt", "fox");
    scan()
        .patterns(&["fox"])
        .args(&["."])
        .pwd(temp.path())
        .matches()
        .stdout_has("docs/a.txt:1:0: fox")
        .stdout_lacks("ignored")
        .stdout_has("1 match in 1 file");
}

#[test]
fn no_ignore_includes_ignored_files() {
    let temp = Project::empty();
    temp.file(".gitignore", "ignored/\n");
    temp.file("ignored/c.txt", "fox");
    scan()
        .patterns(&["fox"])
        .args(&["--no-ignore", "."])
        .pwd(temp.path())
        .matches()
        .stdout_has("ignored/c.txt:1:0: fox");
}

#[test]
fn hidden_files_need_flag() {
    let temp = Project::empty();
    temp.file(".notes/a.txt", "fox");
    scan()
        .patterns(&["fox"])
        .args(&["."])
        .pwd(temp.path())
        .no_match();
    scan()
        .patterns(&["fox"])
        .args(&["--hidden", "."])
        .pwd(temp.path())
        .matches()
        .stdout_has(".notes/a.txt:1:0: fox");
}

#[test]
fn missing_path_is_io_error() {
    scan()
        .patterns(&["fox"])
        .args(&["does-not-exist.txt"])
        .exits(3)
        .stderr_has("does-not-exist.txt");
}

#[test]
fn oversized_walked_file_is_skipped() {
    let temp = Project::empty();
    temp.file("docs/big.txt", &"fox ".repeat(100));
    temp.file("docs/small.txt", "fox");
    scan()
        .patterns(&["fox"])
        .args(&["--max-file-size", "10", "docs"])
        .pwd(temp.path())
        .matches()
        .stdout_has("docs/small.txt")
        .stdout_has("1 match in 1 file (1 skipped)")
        .stdout_lacks("big.txt");
}

#[test]
fn oversized_named_file_is_an_error() {
    let temp = Project::empty();
    temp.file("big.txt", &"fox ".repeat(100));
    scan()
        .patterns(&["fox"])
        .args(&["--max-file-size", "10", "big.txt"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("file too large");
}

// =============================================================================
// Output formats
// =============================================================================

#[test]
fn count_mode_prints_per_pattern_totals() {
    scan()
        .patterns(&["a", "aa"])
        .args(&["--count"])
        .stdin("aaa")
        .matches()
        .stdout_eq("-: a 3\n-: aa 2\n5 matches in 1 file\n");
}

#[test]
fn json_output_shape() {
    let result = scan()
        .patterns(&["a", "aa", "aaa", "xyz"])
        .json()
        .stdin("aaaa")
        .matches();
    let json = result.json();

    assert_eq!(json["total"], 9);
    assert_eq!(json["files_scanned"], 1);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "-");
    assert_eq!(files[0]["matches"]["a"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(files[0]["matches"]["aa"], serde_json::json!([0, 1, 2]));
    assert_eq!(files[0]["matches"]["aaa"], serde_json::json!([0, 1]));
    assert!(files[0]["matches"].get("xyz").is_none());
}

#[test]
fn json_output_without_matches() {
    let result = scan().patterns(&["xyz"]).json().stdin("aaaa").no_match();
    let json = result.json();
    assert_eq!(json["total"], 0);
    assert_eq!(json["files"], serde_json::json!([]));
}
