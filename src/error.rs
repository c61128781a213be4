use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileLensError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("パスが見つかりません: {0}")]
    PathNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error(transparent)]
    Workflow(#[from] profile_lens_common::Error),
}

pub type Result<T> = std::result::Result<T, ProfileLensError>;
