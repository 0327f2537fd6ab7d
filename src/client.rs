//! Gemini API クライアント（reqwest）
//!
//! 1回の解析 = 1回のリクエスト。リトライ・タイムアウト設定・ストリーミングはなし

use log::{debug, error};
use reqwest::Client;
use snapchef_common::gemini::{
    api_error_message, generate_content_url, API_KEY_HEADER, GEMINI_API_BASE,
};
use snapchef_common::{
    build_analysis_request, parse_gemini_response, AnalysisResult, EncodedImage, Error,
    GeminiResponse,
};

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// 接続先を差し替える（テスト用のモックサーバなど）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 画像を解析
    ///
    /// # Errors
    /// * `MissingApiKey` - APIキーが空（リクエストは送らない）
    /// * `Network` - 接続失敗・タイムアウト
    /// * `Api` - 非2xxレスポンス
    /// * `EmptyResponse` / `Parse` / `MissingField` - レスポンスの中身が不正
    pub async fn analyze(&self, image: &EncodedImage) -> snapchef_common::Result<AnalysisResult> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let request = build_analysis_request(image);
        let url = generate_content_url(&self.base_url, &self.model);
        debug!(
            "POST {} (mime: {}, payload: {} bytes)",
            url,
            image.request_mime_type(),
            image.payload_len()
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("request failed: {}", e);
                Error::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(status.as_u16(), &body);
            error!("API error {}: {}", status, message);
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("invalid response body: {}", e)))?;
        debug!("{:?}", body);

        parse_gemini_response(&body)
    }
}
