mod mime;

pub use mime::{guess_mime, UNKNOWN_MIME};

use crate::error::{ProfileLensError, Result};
use profile_lens_common::ImageSource;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルファイル（ワークフローに渡すハンドル）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
}

impl LocalImage {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            mime: guess_mime(path).to_string(),
        }
    }
}

impl ImageSource for LocalImage {
    fn name(&self) -> &str {
        &self.file_name
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }
}

/// フォルダ直下のファイルを列挙（画像以外も含む。絞り込みはワークフロー側）
pub fn scan_folder(folder: &Path) -> Result<Vec<LocalImage>> {
    if !folder.exists() {
        return Err(ProfileLensError::PathNotFound(folder.display().to_string()));
    }

    let mut files: Vec<LocalImage> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| LocalImage::from_path(e.path()))
        .collect();

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// 引数のパス群を展開（フォルダはスキャン、ファイルはそのまま。引数順を保持）
pub fn collect_paths(paths: &[PathBuf]) -> Result<Vec<LocalImage>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path)?);
        } else if path.is_file() {
            files.push(LocalImage::from_path(path));
        } else {
            return Err(ProfileLensError::PathNotFound(path.display().to_string()));
        }
    }

    Ok(files)
}
