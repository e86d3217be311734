use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn scan_counts_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.cpp"), "int main(){}").unwrap();
    let sub = temp_dir.path().join("src");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("util.h"), "#pragma once").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.source_file_count, 1);
    assert_eq!(summary.header_file_count, 1);
    assert_eq!(summary.total_files(), 2);
}

#[test]
fn scan_records_relative_paths() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("proj");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("app.sln"), "").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.solutions, vec![format!("proj{}app.sln", std::path::MAIN_SEPARATOR)]);
}

#[test]
fn scan_skips_excluded_directory_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.cpp"), "CreateWindow(0);").unwrap();
    let git = temp_dir.path().join(".git");
    fs::create_dir(&git).unwrap();
    fs::write(git.join("hidden.cpp"), "CreateWindow(0); RegOpenKey(0);").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.total_files(), 1);
    assert_eq!(summary.indicator_matches["CreateWindow"], vec!["keep.cpp".to_string()]);
    assert!(!summary.indicator_matches.contains_key("RegOpenKey"));
}

#[test]
fn scan_skips_files_named_like_excluded_directories() {
    // Exclusion applies to every relative-path segment, including the file
    // name itself.
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Debug"), "data").unwrap();
    fs::write(temp_dir.path().join("normal.txt"), "data").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.total_files(), 1);
    assert_eq!(summary.extension_counts.get(".txt"), Some(&1));
}

#[test]
fn scan_root_itself_may_carry_an_excluded_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Debug");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("inside.cpp"), "int x;").unwrap();

    let summary = InventoryScanner::scan(&root).unwrap();

    assert_eq!(summary.source_file_count, 1);
}

#[test]
fn scan_rejects_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = InventoryScanner::scan(&missing).unwrap_err();
    assert!(matches!(err, PortInventoryError::InvalidRoot(_)));
}

#[test]
fn scan_rejects_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "").unwrap();

    let err = InventoryScanner::scan(&file).unwrap_err();
    assert!(matches!(err, PortInventoryError::InvalidRoot(_)));
}

#[test]
fn scan_tolerates_undecodable_content() {
    let temp_dir = TempDir::new().unwrap();
    let mut bytes = b"WinMain(".to_vec();
    bytes.extend([0xff, 0xfe, 0x80]);
    fs::write(temp_dir.path().join("garbled.cpp"), &bytes).unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.indicator_matches["WinMain("], vec!["garbled.cpp".to_string()]);
}

#[test]
fn scan_only_inspects_whitelisted_extensions() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.md"), "CreateWindow foo.dll").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert!(summary.indicator_matches.is_empty());
    assert!(summary.external_libs.is_empty());
    assert_eq!(summary.other_file_count, 1);
}

#[test]
fn scan_finalizes_indicator_counts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.cpp"), "CoCreateInstance();").unwrap();
    fs::write(temp_dir.path().join("b.cpp"), "CoCreateInstance();").unwrap();

    let summary = InventoryScanner::scan(temp_dir.path()).unwrap();

    assert_eq!(summary.indicator_counts["CoCreateInstance"], 2);
    assert_eq!(
        summary.indicator_counts["CoCreateInstance"],
        summary.indicator_matches["CoCreateInstance"].len()
    );
}

#[test]
fn read_text_lossy_returns_empty_for_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(read_text_lossy(&temp_dir.path().join("absent.cpp")), "");
}
