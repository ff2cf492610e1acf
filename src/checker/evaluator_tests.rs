use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::hasher::compute_hash_from_bytes;
use crate::scanner::{FnFilter, GlobFilter};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn base_pattern(root: &Path, glob: &str) -> String {
    format!("{}/{glob}", root.join("base").to_string_lossy())
}

#[test]
fn matching_correspond_file_is_in_sync() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "hello");
    write(temp_dir.path(), "mirror/a.txt", "hello");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    let hash = compute_hash_from_bytes(b"hello");
    let file = &output["a.txt"];
    assert_eq!(file.base.hash, hash);
    let mirror = file.correspond["mirror"].as_ref().unwrap();
    assert_eq!(mirror.hash, hash);
    assert_eq!(mirror.base_hash, hash);
    assert!(file.is_consistent());
}

#[test]
fn missing_correspond_file_is_null() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "hello");
    fs::create_dir_all(temp_dir.path().join("mirror")).unwrap();

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    assert_eq!(output["a.txt"].correspond.get("mirror"), Some(&None));
}

#[test]
fn differing_content_keeps_both_hashes() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "hello");
    write(temp_dir.path(), "mirror/a.txt", "world");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    let mirror = output["a.txt"].correspond["mirror"].as_ref().unwrap();
    assert_eq!(mirror.hash, compute_hash_from_bytes(b"world"));
    assert_eq!(mirror.base_hash, compute_hash_from_bytes(b"hello"));
    assert!(!mirror.is_in_sync());
}

#[test]
fn pattern_matching_nothing_gives_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "hello");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.md"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));

    assert!(evaluate(&item).unwrap().is_empty());
}

#[test]
fn nonexistent_base_root_gives_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"));

    assert!(evaluate(&item).unwrap().is_empty());
}

#[test]
fn item_without_labels_records_base_hashes_only() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    write(temp_dir.path(), "base/sub/b.txt", "b");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"));
    let output = evaluate(&item).unwrap();

    assert_eq!(output.keys().collect::<Vec<_>>(), vec!["a.txt", "sub/b.txt"]);
    assert!(output.values().all(|file| file.correspond.is_empty()));
}

#[test]
fn every_label_is_recorded_for_every_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    write(temp_dir.path(), "base/sub/b.txt", "b");
    write(temp_dir.path(), "one/a.txt", "a");
    write(temp_dir.path(), "two/sub/b.txt", "changed");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"))
        .with_correspond("one", temp_dir.path().join("one"))
        .with_correspond("two", temp_dir.path().join("two"));
    let output = evaluate(&item).unwrap();

    for file in output.values() {
        assert_eq!(file.correspond.keys().collect::<Vec<_>>(), vec!["one", "two"]);
    }
    assert!(output["a.txt"].correspond["one"].is_some());
    assert!(output["a.txt"].correspond["two"].is_none());
    assert!(output["sub/b.txt"].correspond["one"].is_none());
    assert!(!output["sub/b.txt"].correspond["two"].as_ref().unwrap().is_in_sync());
}

#[test]
fn missing_label_directory_marks_all_files_absent() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    write(temp_dir.path(), "base/b.txt", "b");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("gone", temp_dir.path().join("does-not-exist"));
    let output = evaluate(&item).unwrap();

    assert_eq!(output.len(), 2);
    assert!(output.values().all(|file| file.correspond["gone"].is_none()));
}

#[test]
fn file_in_place_of_label_directory_marks_absent() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/sub/a.txt", "a");
    write(temp_dir.path(), "mirror/sub", "not a directory");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    assert_eq!(output["sub/a.txt"].correspond.get("mirror"), Some(&None));
}

#[test]
fn directory_at_correspond_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    fs::create_dir_all(temp_dir.path().join("mirror/a.txt")).unwrap();

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let err = evaluate(&item).unwrap_err();

    assert!(matches!(err, FccError::FileAccess { .. }));
}

#[test]
fn filter_excludes_files_from_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/keep.md", "k");
    write(temp_dir.path(), "base/skip.txt", "s");
    write(temp_dir.path(), "base/drafts/wip.md", "w");

    let filter = GlobFilter::new(&["**/*.md".to_string()], &["drafts/**".to_string()]).unwrap();
    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*")).with_filter(filter);
    let output = evaluate(&item).unwrap();

    assert_eq!(output.keys().collect::<Vec<_>>(), vec!["keep.md"]);
}

#[test]
fn filter_sees_base_relative_paths() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a/x.txt", "x");
    write(temp_dir.path(), "base/b/y.txt", "y");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"))
        .with_filter(FnFilter(|path: &str| path.starts_with("a/")));
    let output = evaluate(&item).unwrap();

    assert_eq!(output.keys().collect::<Vec<_>>(), vec!["a/x.txt"]);
}

#[test]
fn repeated_evaluation_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..20 {
        write(temp_dir.path(), &format!("base/f{i}.txt"), &format!("content {i}"));
        if i % 3 != 0 {
            write(temp_dir.path(), &format!("mirror/f{i}.txt"), &format!("content {i}"));
        }
    }

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));

    assert_eq!(evaluate(&item).unwrap(), evaluate(&item).unwrap());
}

#[test]
fn progress_counts_every_hashed_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    write(temp_dir.path(), "base/b.txt", "b");
    write(temp_dir.path(), "mirror/a.txt", "a");

    let progress = HashProgress::hidden();
    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    CheckMapEvaluator::with_progress(progress.clone())
        .evaluate(&item)
        .unwrap();

    assert_eq!(progress.count(), 3);
}

#[test]
fn hidden_base_files_are_not_reported() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "base/a.txt", "a");
    write(temp_dir.path(), "base/.hidden", "h");
    write(temp_dir.path(), "base/.git/config", "c");

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "**/*"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    assert_eq!(output.keys().collect::<Vec<_>>(), vec!["a.txt"]);
}

#[cfg(unix)]
#[test]
fn non_utf8_base_name_is_hashed_and_mirrored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    fs::create_dir_all(temp_dir.path().join("base")).unwrap();
    fs::create_dir_all(temp_dir.path().join("mirror")).unwrap();
    fs::write(temp_dir.path().join("base").join(name), "same").unwrap();
    fs::write(temp_dir.path().join("mirror").join(name), "same").unwrap();

    let item = CheckMapItem::new(base_pattern(temp_dir.path(), "*.txt"))
        .with_correspond("mirror", temp_dir.path().join("mirror"));
    let output = evaluate(&item).unwrap();

    let file = &output["caf\u{fffd}.txt"];
    assert_eq!(file.base.hash, compute_hash_from_bytes(b"same"));
    assert!(file.is_consistent());
}
