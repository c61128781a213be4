//! 解析エンドポイント連携
//!
//! 選択順のファイルを FormData に積み、fetch で1回だけPOSTする。
//! レスポンスの判定は profile_lens_common::interpret_response に任せる。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};
use profile_lens_common::{
    interpret_response, AnalysisReport, Error, Submission, DEFAULT_ENDPOINT,
};
use crate::app::BrowserImage;

/// 解析エンドポイント（ビルド時に PROFILE_LENS_ENDPOINT で上書き可能）
pub const ENDPOINT: &str = match option_env!("PROFILE_LENS_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_ENDPOINT,
};

/// マルチパート本文を構築（1ファイル1パート、同じフィールド名）
pub fn build_form_data(submission: &Submission<'_, BrowserImage>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for image in &submission.files {
        form.append_with_blob_and_filename(submission.field_name, image.file(), &image.file_name)?;
    }
    Ok(form)
}

/// POSTしてステータスとボディ文字列を返す
///
/// fetch が reject した場合（ネットワーク断など）のみ Err。
async fn post_form(endpoint: &str, form: &FormData) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// 送信して解析結果を得る
pub async fn analyze(endpoint: &str, form: Result<FormData, JsValue>) -> profile_lens_common::Result<AnalysisReport> {
    let form = form.map_err(transport_error)?;
    let (status, body) = post_form(endpoint, &form).await.map_err(transport_error)?;
    interpret_response(status, &body)
}

/// JS側の例外を Transport エラーへ（開発者コンソールにも出す）
fn transport_error(value: JsValue) -> Error {
    let message = js_error_message(&value);
    gloo::console::error!("Analysis error:", value);
    Error::Transport(message)
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::app::wasm_tests::browser_file;
    use profile_lens_common::{UploadWorkflow, UPLOAD_FIELD_NAME};
    use wasm_bindgen_test::*;

    fn part_names(form: &FormData, field: &str) -> Vec<String> {
        form.get_all(field)
            .iter()
            .filter_map(|entry| entry.dyn_into::<web_sys::File>().ok())
            .map(|file| file.name())
            .collect()
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_data_one_part_per_file_in_order() {
        let mut workflow = UploadWorkflow::new();
        let names = ["5.jpg", "3.jpg", "1.png", "4.webp", "2.gif"];
        workflow.intake(names.iter().map(|n| {
            BrowserImage::new(browser_file(n, "image/jpeg"))
        }));

        let submission = workflow.begin_submission().expect("five images should submit");
        let form = build_form_data(&submission).expect("FormData construction failed");

        assert_eq!(part_names(&form, UPLOAD_FIELD_NAME), names.to_vec());
        assert!(part_names(&form, "image").is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_build_form_data_after_delete() {
        let mut workflow = UploadWorkflow::new();
        let ids = workflow.intake((1..=6).map(|i| {
            BrowserImage::new(browser_file(&format!("p{}.jpg", i), "image/jpeg"))
        }));
        workflow.remove_by_id(ids[2]);

        let submission = workflow.begin_submission().expect("five images should submit");
        let form = build_form_data(&submission).expect("FormData construction failed");

        assert_eq!(
            part_names(&form, UPLOAD_FIELD_NAME),
            vec!["p1.jpg", "p2.jpg", "p4.jpg", "p5.jpg", "p6.jpg"]
        );
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message_from_error() {
        let value: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(js_error_message(&value), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message_from_string() {
        let value = JsValue::from_str("network down");
        assert_eq!(js_error_message(&value), "network down");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_message_from_object() {
        let value: JsValue = js_sys::Object::new().into();
        let message = js_error_message(&value);
        assert!(!message.is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_transport_error_keeps_message() {
        let error = transport_error(js_sys::Error::new("Failed to fetch").into());
        assert!(matches!(error, Error::Transport(ref m) if m == "Failed to fetch"));
        assert_eq!(error.user_message(), "发生错误: Failed to fetch");
    }
}
