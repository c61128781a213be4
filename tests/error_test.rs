//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use profile_lens::error::ProfileLensError;
use profile_lens::{scanner, session};
use profile_lens_common::{UploadWorkflow, ViewState};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないパスを指定した場合
#[test]
fn test_collect_nonexistent_path() {
    let result = scanner::collect_paths(&[PathBuf::from("/nonexistent/path/12345")]);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, ProfileLensError::PathNotFound(_)));
}

/// 空のフォルダは空のVec
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 画像以外しかないフォルダは取り込んでもUploadのまま
#[test]
fn test_non_images_are_dropped_by_intake() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();
    std::fs::write(dir.path().join("clip.mp4"), "x").unwrap();

    let files = scanner::scan_folder(dir.path()).unwrap();
    assert_eq!(files.len(), 3);

    let mut workflow = UploadWorkflow::new();
    let accepted = workflow.intake(files);
    assert!(accepted.is_empty());
    assert_eq!(workflow.view_state(), ViewState::Upload);
}

/// フォルダとファイルの混在は引数順
#[test]
fn test_collect_paths_keeps_argument_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let folder = dir.path().join("batch");
    std::fs::create_dir(&folder).unwrap();
    std::fs::write(folder.join("b.jpg"), "x").unwrap();
    std::fs::write(folder.join("a.jpg"), "x").unwrap();
    let single = dir.path().join("z.png");
    std::fs::write(&single, "x").unwrap();

    let files = scanner::collect_paths(&[single, folder]).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["z.png", "a.jpg", "b.jpg"]);
}

/// ProfileLensErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ProfileLensError::Config("テスト設定エラー".to_string()),
        ProfileLensError::PathNotFound("/path/to/folder".to_string()),
        ProfileLensError::NoImagesFound("フォルダ".to_string()),
        ProfileLensError::CliExecution("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ProfileLensError = io_err.into();

    assert!(matches!(err, ProfileLensError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ProfileLensError = json_err.into();

    assert!(matches!(err, ProfileLensError::JsonParse(_)));
}

/// common::Errorからの変換（透過的）
#[test]
fn test_workflow_error_transparent() {
    let common_err = profile_lens_common::Error::Rejected {
        status: 503,
        message: "server overloaded".to_string(),
    };
    let err: ProfileLensError = common_err.into();

    assert!(matches!(err, ProfileLensError::Workflow(_)));
    assert_eq!(format!("{}", err), "server overloaded");
}

/// ファイル単体の指定
#[test]
fn test_collect_single_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("only.jpeg");
    std::fs::write(&path, "x").unwrap();

    let files = scanner::collect_paths(&[path]).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].mime, "image/jpeg");
    assert!(Path::new(&files[0].path).ends_with("only.jpeg"));
}

/// 存在しないパスを含む取り込みは選択を変えず、その後も取り込める
#[test]
fn test_intake_paths_keeps_selection_after_missing_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    for i in 1..=3 {
        std::fs::write(dir.path().join(format!("photo{}.jpg", i)), "x").unwrap();
    }

    let mut workflow = UploadWorkflow::new();
    let counts = session::intake_paths(&mut workflow, &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(counts, (3, 3));

    let extra = dir.path().join("extra.png");
    std::fs::write(&extra, "x").unwrap();

    let err = session::intake_paths(
        &mut workflow,
        &[extra.clone(), PathBuf::from("/nonexistent/phtos")],
    )
    .unwrap_err();
    assert!(matches!(err, ProfileLensError::PathNotFound(_)));
    assert_eq!(workflow.count(), 3);
    assert_eq!(workflow.view_state(), ViewState::Preview);

    let counts = session::intake_paths(&mut workflow, &[extra]).unwrap();
    assert_eq!(counts, (1, 1));
    assert_eq!(workflow.count(), 4);
}
