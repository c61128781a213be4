//! 解析エンドポイントへの送信
//!
//! 選択順のファイルを同じフィールド名でマルチパートに積み、1回だけPOSTする。
//! リトライ・タイムアウトは設けない。

use crate::error::Result;
use crate::scanner::LocalImage;
use profile_lens_common::{interpret_response, AnalysisReport, Error, Submission};
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 送信してレスポンスを解釈する
    ///
    /// 応答が無い場合（接続失敗など）は `Error::Transport`。
    /// ファイルの読込に失敗した場合は送信せず `Error::LocalFile`。
    pub async fn analyze(
        &self,
        submission: Submission<'_, LocalImage>,
    ) -> profile_lens_common::Result<AnalysisReport> {
        let form = build_form(&submission).await?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "analysis request failed");
                Error::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        debug!(status, body_len = body.len(), "analysis response received");

        interpret_response(status, &body)
    }
}

/// マルチパート本文を構築（1ファイル1パート、選択順）
async fn build_form(submission: &Submission<'_, LocalImage>) -> profile_lens_common::Result<Form> {
    let mut form = Form::new();

    for file in &submission.files {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| Error::LocalFile(format!("{}: {}", file.path.display(), e)))?;
        debug!(file = %file.file_name, size = bytes.len(), "adding part");

        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)
            .map_err(|e| Error::LocalFile(format!("{}: {}", file.file_name, e)))?;
        form = form.part(submission.field_name.to_string(), part);
    }

    Ok(form)
}
