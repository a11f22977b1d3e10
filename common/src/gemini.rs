//! Gemini 画像編集APIのリクエスト/レスポンス型
//!
//! 送受信そのものは各フロントエンドが行い、ここではJSONの組み立てと解析のみ扱う。

use serde::{Deserialize, Serialize};
use crate::client::{EditOutcome, EditRequest};
use crate::error::Result;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    InlineData { inline_data: InlineData<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: [&'static str; 2],
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<ResponseInlineData>,
}

#[derive(Deserialize)]
struct ResponseInlineData {
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
    data: String,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// generateContent エンドポイントURL
pub fn edit_endpoint(api_base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        api_base.trim_end_matches('/'),
        model,
        api_key
    )
}

/// 画像編集リクエストのJSONボディを生成
pub fn build_edit_request_body(request: &EditRequest) -> Result<String> {
    let body = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: &request.mime_type,
                        data: &request.image_base64,
                    },
                },
                Part::Text { text: &request.prompt },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: ["IMAGE", "TEXT"],
        },
    };
    Ok(serde_json::to_string(&body)?)
}

/// レスポンスJSONを解析
///
/// 最初の画像パートを返す。画像がなければテキスト（またはブロック理由）を添えて `NoImage`。
pub fn parse_edit_response(body: &str) -> Result<EditOutcome> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    let parts = response
        .candidates
        .iter()
        .take(1)
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter());

    let mut texts = Vec::new();
    for part in parts {
        if let Some(inline) = &part.inline_data {
            return Ok(EditOutcome::Image {
                data: inline.data.clone(),
                mime_type: inline.mime_type.clone(),
            });
        }
        if let Some(text) = part.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            texts.push(text.to_string());
        }
    }

    let text = if !texts.is_empty() {
        Some(texts.join("\n"))
    } else if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        Some(format!("Blocked: {}", reason))
    } else {
        response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone())
            .filter(|r| r != "STOP")
            .map(|r| format!("Finish reason: {}", r))
    };

    Ok(EditOutcome::NoImage { text })
}

/// エラーレスポンスから `error.message` を取り出す
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
}

/// HTTPエラー時のメッセージを組み立てる
pub fn describe_http_error(status: u16, body: &str) -> String {
    match parse_error_message(body) {
        Some(message) => format!("API error {}: {}", status, message),
        None if body.trim().is_empty() => format!("API error: {}", status),
        None => format!("API error {}: {}", status, body.trim()),
    }
}
