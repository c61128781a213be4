//! ターミナル表示
//!
//! タグ系セクションは `[tag]` を横並び、提案系セクションは箇条書き。

use profile_lens_common::{AnalysisReport, ImageSource, SectionStyle, UploadWorkflow, ViewState};

/// レポート全体を文字列化
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    for section in report.sections() {
        out.push_str(&format!("■ {}\n", section.title));
        match section.style {
            SectionStyle::Tags => {
                let tags: Vec<String> = section.items.iter().map(|t| format!("[{}]", t)).collect();
                out.push_str(&format!("  {}\n", tags.join(" ")));
            }
            SectionStyle::List => {
                for item in section.items {
                    out.push_str(&format!("  • {}\n", item));
                }
            }
        }
        out.push('\n');
    }

    out
}

/// 選択状況（件数・解析可否）
pub fn status_line<F: ImageSource>(workflow: &UploadWorkflow<F>) -> String {
    match workflow.view_state() {
        ViewState::Upload => "画像が選択されていません".to_string(),
        ViewState::Preview => {
            let gate = if workflow.can_submit() {
                "解析できます".to_string()
            } else {
                format!("あと{}枚必要です", workflow.min_images().saturating_sub(workflow.count()))
            };
            format!("{}枚選択中（{}）", workflow.count(), gate)
        }
        ViewState::Result => format!("{}枚の解析結果", workflow.count()),
    }
}

/// 選択ファイル一覧（番号付き）
pub fn render_selection<F: ImageSource>(workflow: &UploadWorkflow<F>) -> String {
    workflow
        .files()
        .enumerate()
        .map(|(i, f)| format!("  {:>2}. {}\n", i + 1, f.name()))
        .collect()
}
