//! Edge case and error handling tests for vaultmap


use harness::{TestVault, run_vaultmap, tree_json};
use serde_json::json;

#[test]
fn test_hidden_entries_are_skipped() {
    let vault = TestVault::new();
    vault.add_file(".obsidian/workspace.json", "{}");
    vault.add_file("note.md", "n");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &[]);
    assert!(success);

    let value = tree_json(&stdout);
    assert_eq!(value["vault"]["files"], json!(["note.md"]));
    assert!(value["vault"]["subFolders"].is_null());
}

#[test]
fn test_deeply_nested_counts_reach_the_root() {
    let vault = TestVault::new();
    vault.add_file("a/b/c/deep.md", "d");
    vault.add_file("a/shallow.md", "s");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &[]);
    assert!(success);

    let value = tree_json(&stdout);
    assert_eq!(value["vault"]["extensionCounts"]["md"], 2);
    let a = &value["vault"]["subFolders"]["a"];
    assert_eq!(a["extensionCounts"]["md"], 2);
    assert_eq!(a["subFolders"]["b"]["extensionCounts"]["md"], 1);
}

#[test]
fn test_extension_is_lowercased() {
    let vault = TestVault::new();
    vault.add_file("Photo.JPG", "img");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_json(&stdout)["vault"]["extensionCounts"],
        json!({"jpg": 1})
    );
}

#[test]
fn test_trailing_dot_counts_as_unknown() {
    let vault = TestVault::new();
    vault.add_file("weird.", "w");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_json(&stdout)["vault"]["extensionCounts"],
        json!({"unknown": 1})
    );
}

#[test]
fn test_folder_with_only_excluded_files_vanishes() {
    let vault = TestVault::new();
    vault.add_file("drafts/x.tmp", "x");
    vault.add_file("keep.md", "k");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &["-X", "*.tmp"]);
    assert!(success);

    let value = tree_json(&stdout);
    assert!(value["vault"]["subFolders"].is_null());
    assert_eq!(value["vault"]["files"], json!(["keep.md"]));
}

#[test]
fn test_slash_pattern_excludes_by_path() {
    let vault = TestVault::new();
    vault.add_file("archive/old.md", "o");
    vault.add_file("notes/new.md", "n");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &["-X", "archive/*"]);
    assert!(success);

    let value = tree_json(&stdout);
    let subs = value["vault"]["subFolders"].as_object().unwrap();
    assert!(!subs.contains_key("archive"));
    assert!(subs.contains_key("notes"));
}

#[test]
fn test_nonexistent_path_fails() {
    let vault = TestVault::new();
    let (stdout, stderr, success) = run_vaultmap(vault.path(), &["does-not-exist"]);
    assert!(!success, "should fail on missing directory");
    assert!(stdout.is_empty());
    assert!(stderr.contains("vaultmap:"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_glob_pattern_fails() {
    let vault = TestVault::new();
    let (_stdout, stderr, success) = run_vaultmap(vault.path(), &["-X", "["]);
    assert!(!success, "should fail on invalid pattern");
    assert!(stderr.contains("invalid pattern"), "stderr: {}", stderr);
}

#[test]
fn test_unicode_file_names_survive() {
    let vault = TestVault::new();
    vault.add_file("日記/メモ.md", "memo");

    let (stdout, _stderr, success) = run_vaultmap(vault.path(), &[]);
    assert!(success);

    let value = tree_json(&stdout);
    assert_eq!(
        value["vault"]["subFolders"]["日記"]["files"],
        json!(["メモ.md"])
    );
}
