//! Gemini 画像編集API連携（fetch）
//!
//! リクエスト組み立てとレスポンス解析は film_grade_common::gemini を使用

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use film_grade_common::gemini::{build_edit_request_body, describe_http_error, edit_endpoint, parse_edit_response};
use film_grade_common::{EditClient, EditOutcome, EditRequest, Error, DEFAULT_API_BASE, DEFAULT_MODEL};

pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl EditClient for GeminiClient {
    async fn edit(&self, request: &EditRequest) -> film_grade_common::Result<EditOutcome> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Api("Gemini API key is not set.".to_string()));
        }

        let url = edit_endpoint(DEFAULT_API_BASE, &self.model, self.api_key.trim());
        let body = build_edit_request_body(request)?;

        let (status, text) = post_json(&url, &body)
            .await
            .map_err(|e| Error::Api(js_error_message(&e)))?;

        if !(200..300).contains(&status) {
            return Err(Error::Api(describe_http_error(status, &text)));
        }

        parse_edit_response(&text)
    }
}

/// JSONをPOSTして (ステータス, 本文) を返す
async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JsValue のエラーを表示用文字列に変換
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_error_message_string() {
        assert_eq!(js_error_message(&JsValue::from_str("Failed to fetch")), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn test_js_error_message_error_object() {
        let err: JsValue = js_sys::Error::new("network timeout").into();
        assert_eq!(js_error_message(&err), "network timeout");
    }

    #[wasm_bindgen_test]
    async fn test_missing_api_key() {
        let client = GeminiClient::new("  ");
        let request = EditRequest {
            image_base64: "QUJD".to_string(),
            mime_type: "image/png".to_string(),
            prompt: "p".to_string(),
        };
        let err = client.edit(&request).await.unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
