//! 解析レポートと選択ファイルの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ImageSource: 選択されたファイルのハンドル（名前 + MIMEタイプ）
//! - FileId: 選択ファイルの識別子（削除・プレビュー適用に使用）
//! - AnalysisReport: 解析エンドポイントの成功レスポンス
//! - ErrorBody: 解析エンドポイントのエラーレスポンス

use serde::{Deserialize, Serialize};

/// 選択されたファイルのハンドル
///
/// ブラウザでは `web_sys::File`、CLIではローカルパスをラップする。
pub trait ImageSource {
    fn name(&self) -> &str;
    fn mime_type(&self) -> &str;

    /// `image/` で始まるMIMEタイプのみ受け付ける
    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

/// 選択ファイルの識別子（同一ワークフロー内で再利用しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u64);

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 解析レポート
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub personality: Vec<String>,         // 性格特質
    pub hobbies: Vec<String>,             // 兴趣爱好
    pub pursuit_suggestions: Vec<String>, // 追求建议
    pub chat_topics: Vec<String>,         // 聊天话题
    pub dating_suggestions: Vec<String>,  // 约会建议
}

/// エラーレスポンス `{ message?: string }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
