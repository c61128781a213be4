//! 解析エンドポイントのレスポンス解釈
//!
//! HTTPステータスとボディ文字列だけを受け取るので、
//! fetch（WASM）と reqwest（CLI）の両方から同じ判定を使える。

use crate::error::{Error, Result, FALLBACK_FAILURE_MESSAGE};
use crate::types::{AnalysisReport, ErrorBody};

/// ステータスとボディから解析結果を判定
///
/// - 2xx: ボディを AnalysisReport としてパース
/// - それ以外: `{ message }` を取り出し、無ければ汎用メッセージ
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisReport> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| Error::MalformedReport(e.to_string()));
    }

    Err(Error::Rejected {
        status,
        message: rejection_message(body),
    })
}

/// エラーボディからメッセージを抽出（パース失敗・空文字はフォールバック）
pub fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "personality": ["温柔", "独立"],
        "hobbies": ["登山", "烘焙"],
        "pursuit_suggestions": ["保持真诚"],
        "chat_topics": ["最近看的电影"],
        "dating_suggestions": ["周末去看展"]
    }"#;

    #[test]
    fn test_success_parses_report() {
        let report = interpret_response(200, REPORT_JSON).expect("解析失敗");
        assert_eq!(report.personality, vec!["温柔", "独立"]);
        assert_eq!(report.hobbies, vec!["登山", "烘焙"]);
        assert_eq!(report.pursuit_suggestions, vec!["保持真诚"]);
        assert_eq!(report.chat_topics, vec!["最近看的电影"]);
        assert_eq!(report.dating_suggestions, vec!["周末去看展"]);
    }

    #[test]
    fn test_success_with_malformed_body() {
        let err = interpret_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedReport(_)));
    }

    #[test]
    fn test_server_error_with_message() {
        let err = interpret_response(500, r#"{"message":"server overloaded"}"#).unwrap_err();
        match err {
            Error::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "server overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_server_error_unparseable_body() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        match err {
            Error::Rejected { message, .. } => assert_eq!(message, FALLBACK_FAILURE_MESSAGE),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_server_error_without_message_field() {
        assert_eq!(rejection_message(r#"{"error":"x"}"#), FALLBACK_FAILURE_MESSAGE);
        assert_eq!(rejection_message(r#"{"message":""}"#), FALLBACK_FAILURE_MESSAGE);
        assert_eq!(rejection_message(r#"{"message":null}"#), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_client_error_status() {
        let err = interpret_response(413, r#"{"message":"payload too large"}"#).unwrap_err();
        assert!(err.user_message().contains("payload too large"));
    }
}
