//! レポート表示セクション
//!
//! AnalysisReport の5項目を表示順・見出し・表示形式つきで並べる。
//! Web（Leptos）とCLI（ターミナル）の両方がこの定義から描画する。

use crate::types::AnalysisReport;

/// セクションの表示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    /// タグチップ
    Tags,
    /// 箇条書き
    List,
}

impl SectionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStyle::Tags => "tags",
            SectionStyle::List => "list",
        }
    }
}

/// レポートの1セクション
#[derive(Debug, Clone, Copy)]
pub struct ReportSection<'a> {
    pub key: &'static str,
    pub title: &'static str,
    pub style: SectionStyle,
    pub items: &'a [String],
}

/// セクション定義（キー, 見出し, 表示形式, 項目の取り出し）
#[derive(Clone, Copy)]
pub struct SectionLayout {
    pub key: &'static str,
    pub title: &'static str,
    pub style: SectionStyle,
    pub items: fn(&AnalysisReport) -> &[String],
}

pub const SECTION_LAYOUT: [SectionLayout; 5] = [
    SectionLayout {
        key: "personality",
        title: "性格特质",
        style: SectionStyle::Tags,
        items: personality,
    },
    SectionLayout {
        key: "hobbies",
        title: "兴趣爱好",
        style: SectionStyle::Tags,
        items: hobbies,
    },
    SectionLayout {
        key: "pursuit_suggestions",
        title: "追求建议",
        style: SectionStyle::List,
        items: pursuit_suggestions,
    },
    SectionLayout {
        key: "chat_topics",
        title: "聊天话题",
        style: SectionStyle::List,
        items: chat_topics,
    },
    SectionLayout {
        key: "dating_suggestions",
        title: "约会建议",
        style: SectionStyle::List,
        items: dating_suggestions,
    },
];

fn personality(report: &AnalysisReport) -> &[String] {
    &report.personality
}

fn hobbies(report: &AnalysisReport) -> &[String] {
    &report.hobbies
}

fn pursuit_suggestions(report: &AnalysisReport) -> &[String] {
    &report.pursuit_suggestions
}

fn chat_topics(report: &AnalysisReport) -> &[String] {
    &report.chat_topics
}

fn dating_suggestions(report: &AnalysisReport) -> &[String] {
    &report.dating_suggestions
}

/// 再分析ボタンのラベル
pub const REANALYZE_LABEL: &str = "重新分析";

/// 共有ボタンのラベル
pub const SHARE_LABEL: &str = "分享结果";

/// 共有機能（未実装）の案内
pub const SHARE_PLACEHOLDER_MESSAGE: &str = "分享功能正在开发中...";

impl AnalysisReport {
    /// 表示順に5セクションを返す
    pub fn sections(&self) -> [ReportSection<'_>; 5] {
        SECTION_LAYOUT.map(|layout| ReportSection {
            key: layout.key,
            title: layout.title,
            style: layout.style,
            items: (layout.items)(self),
        })
    }
}
