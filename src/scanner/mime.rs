use std::path::Path;

pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// 拡張子からMIMEタイプを推定（大文字小文字は区別しない）
pub fn guess_mime(path: &Path) -> &'static str {
    mime_guess::from_path(path).first_raw().unwrap_or(UNKNOWN_MIME)
}
