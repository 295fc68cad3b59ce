//! LocalFilesystem against a real temporary directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use mason_adapters::LocalFilesystem;
use mason_core::prelude::*;
use tempfile::TempDir;

/// Lay down a small header tree under a fresh tempdir.
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("Sources/Public/Sub")).unwrap();
    fs::create_dir_all(root.join("Sources/Private")).unwrap();
    fs::write(root.join("Sources/MyLib.h"), "#import \"Api.h\"\n").unwrap();
    fs::write(root.join("Sources/Public/Api.h"), "").unwrap();
    fs::write(root.join("Sources/Public/Extra.h"), "").unwrap();
    fs::write(root.join("Sources/Public/Sub/Deep.h"), "").unwrap();
    fs::write(root.join("Sources/Public/readme.md"), "").unwrap();
    fs::write(root.join("Sources/Private/Impl.h"), "").unwrap();
    dir
}

#[test]
fn single_star_matches_within_one_directory() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let matched: BTreeSet<PathBuf> = filesystem
        .glob(&dir.path().join("Sources/Public/*.h"))
        .into_iter()
        .collect();

    assert_eq!(
        matched,
        BTreeSet::from([
            dir.path().join("Sources/Public/Api.h"),
            dir.path().join("Sources/Public/Extra.h"),
        ])
    );
}

#[test]
fn recursive_wildcard_descends_into_subdirectories() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let matched = filesystem.glob(&dir.path().join("Sources/Public/**"));

    assert!(matched.contains(&dir.path().join("Sources/Public/Sub/Deep.h")));
    assert!(matched.contains(&dir.path().join("Sources/Public/readme.md")));
}

#[test]
fn question_mark_matches_one_character() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let matched = filesystem.glob(&dir.path().join("Sources/Public/Ap?.h"));

    assert_eq!(matched, vec![dir.path().join("Sources/Public/Api.h")]);
}

#[test]
fn wildcard_free_pattern_matches_the_exact_file() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let matched = filesystem.glob(&dir.path().join("Sources/MyLib.h"));

    assert_eq!(matched, vec![dir.path().join("Sources/MyLib.h")]);
}

#[test]
fn missing_subtree_contributes_nothing() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let matched = filesystem.glob(&dir.path().join("DoesNotExist/**"));

    assert!(matched.is_empty());
}

#[test]
fn classification_runs_against_the_real_filesystem() {
    let dir = project();
    let root = dir.path().to_path_buf();

    let declaration = HeaderDeclaration {
        umbrella_header: Some("Sources/MyLib.h".into()),
        public: Some(HeaderFileList::from_patterns(["Sources/Public/**"])),
        private: Some(HeaderFileList::from_patterns(["Sources/Private/**"])),
        project: Some(HeaderFileList::from_patterns(["Sources/**"])),
        ..Default::default()
    };

    let classifier = HeaderClassifier::new(Box::new(LocalFilesystem::new()));
    let classified = classifier
        .classify(&declaration, "MyLib", &PathResolver::new(&root))
        .unwrap();

    assert_eq!(
        classified.public,
        BTreeSet::from([root.join("Sources/Public/Api.h"), root.join("Sources/MyLib.h")])
    );
    assert_eq!(
        classified.private,
        BTreeSet::from([root.join("Sources/Private/Impl.h")])
    );
    // Everything not yet claimed, headers only.
    assert_eq!(
        classified.project,
        BTreeSet::from([
            root.join("Sources/Public/Extra.h"),
            root.join("Sources/Public/Sub/Deep.h"),
        ])
    );
}

#[test]
fn non_utf8_umbrella_is_fatal() {
    let dir = project();
    let umbrella = dir.path().join("Sources/Binary.h");
    fs::write(&umbrella, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

    let declaration = HeaderDeclaration {
        umbrella_header: Some("Sources/Binary.h".into()),
        public: Some(HeaderFileList::from_patterns(["Sources/Public/**"])),
        ..Default::default()
    };

    let classifier = HeaderClassifier::new(Box::new(LocalFilesystem::new()));
    let err = classifier
        .classify(&declaration, "MyLib", &PathResolver::new(dir.path()))
        .unwrap_err();

    assert!(matches!(err, MasonError::Application(_)));
}

#[test]
fn read_to_string_round_trips_file_content() {
    let dir = project();
    let filesystem = LocalFilesystem::new();

    let content = filesystem
        .read_to_string(&dir.path().join("Sources/MyLib.h"))
        .unwrap();

    assert_eq!(content, "#import \"Api.h\"\n");
}

#[test]
fn read_missing_file_is_not_found() {
    let filesystem = LocalFilesystem::new();
    let err = filesystem
        .read_to_string(Path::new("/definitely/not/here.h"))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
