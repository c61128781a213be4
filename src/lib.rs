//! Profile Lens CLI
//!
//! 画像をまとめて解析サービスへ送信し、人物像レポートをターミナルに表示する。
//! ワークフロー本体は profile_lens_common にあり、Web版と共有している。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod scanner;
pub mod session;
