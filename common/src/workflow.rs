//! アップロード・ワークフロー
//!
//! 選択ファイルの順序付きリストと、3つの画面状態
//! (Upload / Preview / Result) + ローディング表示を管理する。
//!
//! - 画面状態は保持せず、ファイル数とレポートの有無から導出する
//! - ファイルには FileId を振り、削除・サムネイル適用はIDで行う
//!   （描画時に埋め込んだインデックスがずれる問題と、
//!   削除後に遅れて届いたデコード結果の問題を避ける）
//! - 送信中は二重送信を拒否する

use crate::error::{Error, Result};
use crate::report::SHARE_PLACEHOLDER_MESSAGE;
use crate::types::{AnalysisReport, FileId, ImageSource};

/// 解析に必要な最小枚数
pub const MIN_IMAGES: usize = 5;

/// マルチパートのフィールド名（全ファイル共通）
pub const UPLOAD_FIELD_NAME: &str = "images";

/// 解析エンドポイント（既定値）
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/analyze";

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Upload,
    Preview,
    Result,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Upload => "upload",
            ViewState::Preview => "preview",
            ViewState::Result => "result",
        }
    }
}

/// プレビュー1枠（選択順）。thumbnail が None の間はプレースホルダ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSlot {
    pub id: FileId,
    pub name: String,
    pub thumbnail: Option<String>,
}

/// 送信内容: フィールド名と選択順のファイル
#[derive(Debug)]
pub struct Submission<'a, F> {
    pub field_name: &'a str,
    pub files: Vec<&'a F>,
}

#[derive(Debug, Clone)]
struct Entry<F> {
    id: FileId,
    file: F,
    thumbnail: Option<String>,
}

/// アップロード・ワークフロー本体
#[derive(Debug, Clone)]
pub struct UploadWorkflow<F> {
    entries: Vec<Entry<F>>,
    report: Option<AnalysisReport>,
    loading: bool,
    next_id: u64,
    min_images: usize,
    field_name: String,
}

impl<F> Default for UploadWorkflow<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            report: None,
            loading: false,
            next_id: 0,
            min_images: MIN_IMAGES,
            field_name: UPLOAD_FIELD_NAME.to_string(),
        }
    }
}

impl<F: ImageSource> UploadWorkflow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最小枚数を変更（CLI設定用）
    pub fn with_min_images(mut self, min_images: usize) -> Self {
        self.min_images = min_images;
        self
    }

    /// フィールド名を変更（CLI設定用）
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// ファイル取り込み（ファイル選択・ドロップ共通）
    ///
    /// MIMEタイプが `image/` で始まるものだけを選択順に追加し、
    /// 追加したファイルのIDを返す。それ以外は黙って捨てる。
    pub fn intake<I>(&mut self, files: I) -> Vec<FileId>
    where
        I: IntoIterator<Item = F>,
    {
        let mut accepted = Vec::new();
        for file in files {
            if !file.is_image() {
                continue;
            }
            let id = FileId(self.next_id);
            self.next_id += 1;
            self.entries.push(Entry {
                id,
                file,
                thumbnail: None,
            });
            accepted.push(id);
        }
        accepted
    }

    /// 指定位置のファイルを削除（範囲外は何もしない）
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index).file)
    }

    /// IDで削除（位置は呼び出し時点で解決する）
    pub fn remove_by_id(&mut self, id: FileId) -> Option<F> {
        let index = self.position(id)?;
        self.remove(index)
    }

    /// 現在の位置
    pub fn position(&self, id: FileId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn file(&self, id: FileId) -> Option<&F> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.file)
    }

    /// 選択順のファイル
    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|e| &e.file)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn min_images(&self) -> usize {
        self.min_images
    }

    /// 解析ボタンの有効/無効
    pub fn can_submit(&self) -> bool {
        !self.loading && self.entries.len() >= self.min_images
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 画面状態（導出値）
    pub fn view_state(&self) -> ViewState {
        if self.report.is_some() {
            ViewState::Result
        } else if self.entries.is_empty() {
            ViewState::Upload
        } else {
            ViewState::Preview
        }
    }

    /// プレビュー枠（選択順）
    pub fn preview_slots(&self) -> Vec<PreviewSlot> {
        self.entries
            .iter()
            .map(|e| PreviewSlot {
                id: e.id,
                name: e.file.name().to_string(),
                thumbnail: e.thumbnail.clone(),
            })
            .collect()
    }

    /// デコード済みサムネイルを適用
    ///
    /// 既に削除されたファイル宛ての結果は捨てて false を返す。
    pub fn attach_preview(&mut self, id: FileId, thumbnail: String) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.thumbnail = Some(thumbnail);
                true
            }
            None => false,
        }
    }

    /// 送信開始
    ///
    /// 枚数不足・送信中は状態を変えずにエラーを返す。
    /// 成功時はローディングを立て、送信するファイルを選択順で返す。
    pub fn begin_submission(&mut self) -> Result<Submission<'_, F>> {
        if self.loading {
            return Err(Error::SubmissionInFlight);
        }
        if self.entries.len() < self.min_images {
            return Err(Error::TooFewImages {
                required: self.min_images,
                actual: self.entries.len(),
            });
        }

        self.loading = true;
        Ok(Submission {
            field_name: &self.field_name,
            files: self.entries.iter().map(|e| &e.file).collect(),
        })
    }

    /// 送信終了（成功・失敗どちらでも必ず呼ぶ）
    ///
    /// ローディングは常に解除する。成功時のみレポートを保持し、
    /// 選択ファイルはリセットまで残す。失敗は呼び出し元へ返す。
    pub fn finish_submission(&mut self, outcome: Result<AnalysisReport>) -> Result<()> {
        self.loading = false;
        let report = outcome?;
        self.report = Some(report);
        Ok(())
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// 再分析: 選択ファイルとレポートを破棄して Upload へ戻る
    pub fn reset(&mut self) {
        self.entries.clear();
        self.report = None;
    }

    /// 共有（未実装）
    pub fn share_message(&self) -> &'static str {
        SHARE_PLACEHOLDER_MESSAGE
    }
}
