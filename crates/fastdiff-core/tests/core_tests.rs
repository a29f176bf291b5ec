use fastdiff_core::{
    CompareConfig, CompareError, CompareStats, Difference, EntryStat, EntryType, Side,
};
use std::path::{Path, PathBuf};

#[test]
fn test_config_from_partial_json() {
    let config: CompareConfig =
        serde_json::from_str(r#"{"left_root": "/srv/a", "right_root": "/srv/b", "recursive": true}"#)
            .unwrap();

    assert_eq!(config.root(Side::Left), Path::new("/srv/a"));
    assert_eq!(config.root(Side::Right), Path::new("/srv/b"));
    assert!(config.recursive);
    assert!(!config.skip_folders);
    assert!(!config.names_only);
    assert!(config.dereference());
}

#[test]
fn test_config_builder_matches_new() {
    let built = CompareConfig::builder()
        .left_root("left")
        .right_root("right")
        .build()
        .unwrap();
    let simple = CompareConfig::new("left", "right");

    assert_eq!(built.left_root, simple.left_root);
    assert_eq!(built.right_root, simple.right_root);
    assert_eq!(built.recursive, simple.recursive);
    assert_eq!(built.no_dereference, simple.no_dereference);
}

#[test]
fn test_difference_lines() {
    let nested = Path::new("a").join("a").join("file-a-a-only1.txt");
    let cases = [
        (
            Difference::only_in("dir1", nested.clone()),
            format!("Only in dir1: {}", nested.display()),
        ),
        (
            Difference::FileType {
                left: EntryType::Link,
                right: EntryType::File,
                path: PathBuf::from("x"),
            },
            "different file type: link | file: x".to_string(),
        ),
        (
            Difference::FileSize {
                left: 10,
                right: 0,
                path: PathBuf::from("y"),
            },
            "different file size: 10 | 0: y".to_string(),
        ),
    ];

    for (diff, expected) in cases {
        assert_eq!(diff.to_string(), expected);
    }
}

#[test]
fn test_error_difference_carries_path() {
    let err = CompareError::io(
        "/root/dir2/file-link.txt",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );
    let diff = Difference::error(err.to_string(), "file-link.txt");

    let line = diff.to_string();
    assert!(line.starts_with("Error: "));
    assert!(line.ends_with(": file-link.txt"));
    assert_eq!(diff.path(), Path::new("file-link.txt"));
}

#[test]
fn test_stats_counts() {
    let mut stats = CompareStats::new();
    stats.record_dir();
    stats.record_dir();
    stats.record_compare();
    stats.record_difference(&Difference::FileSize {
        left: 1,
        right: 2,
        path: PathBuf::from("f"),
    });

    assert_eq!(stats.dirs_visited, 2);
    assert_eq!(stats.entries_compared, 1);
    assert_eq!(stats.differences, 1);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_entry_stat_of_directory_is_file_type() {
    let temp = tempfile::TempDir::new().unwrap();
    let stat = EntryStat::probe(temp.path(), false).unwrap();
    assert_eq!(stat.entry_type, EntryType::File);
    assert!(!stat.is_link());
}
