use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profile-lens")]
#[command(about = "写真をまとめて解析サービスへ送り、人物像レポートを表示するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析してレポートを表示
    Analyze {
        /// 画像フォルダまたは画像ファイル（複数可、指定順に追加）
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 解析エンドポイント（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// レポートをJSONで出力
        #[arg(long)]
        json: bool,

        /// 結果表示後に再分析/共有/終了を選択
        #[arg(short, long)]
        interactive: bool,

        /// スピナーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
