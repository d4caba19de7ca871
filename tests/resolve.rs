//! End-to-end checks for `bfmt resolve`.

mod common;

use common::Sandbox;

#[test]
fn resolves_words_joined_from_arguments() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve", "Ex", "9:9,25;", "10:1"], None);
    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "Exodus 9:9; Exodus 9:25; Exodus 10:1\n");
}

#[test]
fn resolves_key_flag_with_dutch_names() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve", "-k", "1 Kor 13:4; Judas 3"], None);
    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "1Corinthians 13:4; Jude 1:3\n");
}

#[test]
fn stdin_lines_resolve_independently() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve"], Some("Gen 1:1\n\nXyz\nPs 23\n"));
    assert_eq!(out.code, Some(1));
    assert_eq!(out.stdout, "Genesis 1:1\nPsalms 23\n");
    assert!(out.stderr.contains("ERROR: Unknown Bible book: 'xyz'"), "stderr: {}", out.stderr);
}

#[test]
fn missing_book_context_fails() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve", "10:1"], None);
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("ERROR: Reference '10:1' has no book context"));
}

#[test]
fn echo_prints_lookup_command() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve", "--echo", "-b", "KJV", "-o", "n", "Ps", "23"], None);
    assert!(out.success, "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "[CMD] diatheke -b KJV -f plain -o n -k 'Psalms 23'\nPsalms 23\n"
    );
}

#[test]
fn echo_uses_default_module() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["resolve", "--echo", "Gen", "1:1"], None);
    assert!(out.stdout.starts_with("[CMD] diatheke -b HSV -f plain -k "));
}

#[test]
fn apocrypha_requires_opt_in() {
    let sandbox = Sandbox::new();
    let refused = sandbox.run(&["resolve", "Tobit", "1:1"], None);
    assert_eq!(refused.code, Some(1));

    let accepted = sandbox.run(&["resolve", "--apocrypha", "Tobit", "1:1"], None);
    assert!(accepted.success, "stderr: {}", accepted.stderr);
    assert!(accepted.stdout.starts_with("Tob"));
}

#[test]
fn settings_file_supplies_module() {
    let sandbox = Sandbox::new();
    sandbox.write_default_settings(r#"{"schema_version": 1, "module": "NBV21"}"#);
    let out = sandbox.run(&["resolve", "--echo", "Ps", "1"], None);
    assert!(out.success, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("-b NBV21"));
}
