//! Gemini 画像編集クライアント（reqwest）

use film_grade_common::gemini::{build_edit_request_body, describe_http_error, edit_endpoint, parse_edit_response};
use film_grade_common::{EditClient, EditOutcome, EditRequest, Error};
use crate::config::Config;

pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        Ok(Self::new(config.get_api_key()?, &config.api_base, &config.model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// URLにAPIキーが含まれるため、エラー表示からURLを除く
fn transport_error(e: reqwest::Error) -> Error {
    Error::Api(e.without_url().to_string())
}

impl EditClient for GeminiClient {
    async fn edit(&self, request: &EditRequest) -> film_grade_common::Result<EditOutcome> {
        let url = edit_endpoint(&self.api_base, &self.model, &self.api_key);
        let body = build_edit_request_body(request)?;

        log::debug!("POST {} model={} prompt={} chars", self.api_base, self.model, request.prompt.len());

        let response = self
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(Error::Api(describe_http_error(status.as_u16(), &text)));
        }

        log::debug!("response: {} bytes", text.len());
        parse_edit_response(&text)
    }
}
