//! エラー型定義

use thiserror::Error;

/// 入力不足時にユーザーへ表示するメッセージ
pub const TOO_FEW_IMAGES_MESSAGE: &str = "请至少上传5张图片进行分析。";

/// エラーレスポンスに message が無い場合のメッセージ
pub const FALLBACK_FAILURE_MESSAGE: &str = "分析失败，请稍后重试。";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("too few images: {actual} selected, {required} required")]
    TooFewImages { required: usize, actual: usize },

    #[error("an analysis request is already in flight")]
    SubmissionInFlight,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("malformed report: {0}")]
    MalformedReport(String),

    #[error("{0}")]
    Transport(String),

    /// 送信前のローカルファイル準備に失敗（リクエスト未送信）
    #[error("local file error: {0}")]
    LocalFile(String),
}

impl Error {
    /// ユーザーに通知する文言
    pub fn user_message(&self) -> String {
        match self {
            Error::TooFewImages { .. } => TOO_FEW_IMAGES_MESSAGE.to_string(),
            Error::SubmissionInFlight => "分析进行中，请稍候。".to_string(),
            Error::Rejected { message, .. } => format!("发生错误: {}", message),
            Error::MalformedReport(_) => {
                format!("发生错误: {}", FALLBACK_FAILURE_MESSAGE)
            }
            Error::Transport(message) | Error::LocalFile(message) => {
                format!("发生错误: {}", message)
            }
        }
    }

    /// 送信前の検証で弾かれたか（リクエスト未送信）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::TooFewImages { .. } | Error::SubmissionInFlight)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_too_few() {
        let error = Error::TooFewImages { required: 5, actual: 4 };
        let display = format!("{}", error);
        assert!(display.contains("4 selected"));
        assert!(display.contains("5 required"));
    }

    #[test]
    fn test_user_message_too_few() {
        let error = Error::TooFewImages { required: 5, actual: 4 };
        assert_eq!(error.user_message(), TOO_FEW_IMAGES_MESSAGE);
        assert!(error.is_validation());
    }

    #[test]
    fn test_user_message_rejected_verbatim() {
        let error = Error::Rejected {
            status: 500,
            message: "server overloaded".to_string(),
        };
        assert_eq!(format!("{}", error), "server overloaded");
        assert!(error.user_message().contains("server overloaded"));
        assert!(!error.is_validation());
    }

    #[test]
    fn test_user_message_transport() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(error.user_message(), "发生错误: connection refused");
    }

    #[test]
    fn test_user_message_malformed_uses_fallback() {
        let error = Error::MalformedReport("missing field".to_string());
        assert!(error.user_message().contains(FALLBACK_FAILURE_MESSAGE));
    }

    #[test]
    fn test_local_file_error() {
        let error = Error::LocalFile("photo3.jpg: not found".to_string());
        assert_eq!(format!("{}", error), "local file error: photo3.jpg: not found");
        assert_eq!(error.user_message(), "发生错误: photo3.jpg: not found");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Transport("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Transport"));
        assert!(debug.contains("テスト"));
    }
}
