//! 解析セッション
//!
//! - 送信（ローディング表示は成功・失敗を問わず必ず消す）
//! - 結果表示後の操作選択（再分析 / 共有 / 終了）

use crate::client::AnalysisClient;
use crate::error::{ProfileLensError, Result};
use crate::scanner::{self, LocalImage};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use profile_lens_common::report::{REANALYZE_LABEL, SHARE_LABEL};
use profile_lens_common::UploadWorkflow;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// ローディング表示（drop時に必ず消える）
pub struct LoadingIndicator {
    bar: ProgressBar,
}

impl LoadingIndicator {
    pub fn start(visible: bool, count: usize) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
            bar.set_style(style);
        }
        bar.set_message(format!("{}枚を解析中...", count));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// ワークフローから1回送信する
///
/// 枚数不足・送信中はリクエストを出さずにエラーを返す。
/// それ以外は結果に関わらずローディングを解除してからワークフローへ反映する。
pub async fn submit(
    workflow: &mut UploadWorkflow<LocalImage>,
    client: &AnalysisClient,
    show_progress: bool,
) -> profile_lens_common::Result<()> {
    let submission = workflow.begin_submission()?;
    let count = submission.files.len();
    info!(count, endpoint = client.endpoint(), "submitting images for analysis");

    let outcome = {
        let _indicator = LoadingIndicator::start(show_progress, count);
        client.analyze(submission).await
    };

    if let Err(e) = &outcome {
        warn!(error = %e, "analysis failed");
    }
    workflow.finish_submission(outcome)
}

/// パス群を展開して取り込む
///
/// 見つからないパスが1つでもあれば何も追加しない。戻り値は (走査数, 追加数)。
pub fn intake_paths(
    workflow: &mut UploadWorkflow<LocalImage>,
    paths: &[PathBuf],
) -> Result<(usize, usize)> {
    let files = scanner::collect_paths(paths)?;
    let scanned = files.len();
    let accepted = workflow.intake(files).len();
    Ok((scanned, accepted))
}

/// 結果表示後のアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// 選択をクリアして最初から
    Reanalyze,
    /// 共有（未実装）
    Share,
    /// 終了
    Quit,
}

impl ResultAction {
    pub const ALL: [ResultAction; 3] = [ResultAction::Reanalyze, ResultAction::Share, ResultAction::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            ResultAction::Reanalyze => REANALYZE_LABEL,
            ResultAction::Share => SHARE_LABEL,
            ResultAction::Quit => "退出",
        }
    }
}

/// 操作選択プロンプト
pub fn prompt_result_action() -> Result<ResultAction> {
    let labels: Vec<&str> = ResultAction::ALL.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("操作を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| ProfileLensError::CliExecution(e.to_string()))?;

    Ok(ResultAction::ALL.get(index).copied().unwrap_or(ResultAction::Quit))
}

/// 再分析用のパス入力（空白区切り、空入力は終了）
pub fn prompt_paths() -> Result<Vec<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("画像フォルダ/ファイル（空で終了）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ProfileLensError::CliExecution(e.to_string()))?;

    Ok(parse_paths(&input))
}

fn parse_paths(input: &str) -> Vec<PathBuf> {
    input.split_whitespace().map(PathBuf::from).collect()
}
