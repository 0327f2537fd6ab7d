//! Gemini generateContent のリクエスト/レスポンス型
//!
//! 送信手段（reqwest / fetch）はCLIとWASMで異なるが、ペイロードはここで共通化する

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::image::EncodedImage;
use crate::prompts::{build_response_schema, ANALYSIS_PROMPT};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// APIキーを渡すヘッダ名
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// generateContent のURL
pub fn generate_content_url(base: &str, model: &str) -> String {
    format!("{}/models/{}:generateContent", base.trim_end_matches('/'), model)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

/// 解析リクエストを組み立てる
///
/// 画像（接頭辞を除いたペイロード）→ 指示文 の順で1つのcontentに入れる
pub fn build_analysis_request(image: &EncodedImage) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.request_mime_type().to_string(),
                        data: image.payload().to_string(),
                    },
                },
                Part::Text {
                    text: ANALYSIS_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: None,
            response_mime_type: "application/json".to_string(),
            response_schema: build_response_schema(),
        },
    }
}

/// Gemini APIレスポンス
///
/// ブロックされた場合などは candidates / parts / text が欠けるので全てdefault扱い
#[derive(Debug, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// 先頭候補のテキストpartを連結して返す。テキストが無ければ None
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// エラーレスポンス本文 {"error": {"code", "message", "status"}}
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// 非2xxレスポンス本文からエラーメッセージを取り出す
///
/// JSONでなければ本文そのもの、本文も空ならHTTPステータスの説明にする
pub fn api_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if !parsed.error.message.is_empty() {
            return parsed.error.message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with HTTP status {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // リクエスト シリアライズテスト
    // =============================================

    #[test]
    fn test_analysis_request_serialize() {
        let image = EncodedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=");
        let request = build_analysis_request(&image);
        let json = serde_json::to_value(&request).expect("シリアライズ失敗");

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[0]["inline_data"]["data"], "iVBORw0KGgo=");
        assert_eq!(parts[1]["text"], ANALYSIS_PROMPT);
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(json["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text { text: "Hello".to_string() };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_request_strips_prefix_and_defaults_mime() {
        let image = EncodedImage::from_data_url("/9j/4AAQ");
        let request = build_analysis_request(&image);
        let json = serde_json::to_value(&request).expect("シリアライズ失敗");
        let inline = &json["contents"][0]["parts"][0]["inline_data"];
        assert_eq!(inline["mime_type"], "image/jpeg");
        assert_eq!(inline["data"], "/9j/4AAQ");
    }

    #[test]
    fn test_generate_content_url() {
        assert_eq!(
            generate_content_url("http://127.0.0.1:1234/", "gemini-3-flash-preview"),
            "http://127.0.0.1:1234/models/gemini-3-flash-preview:generateContent"
        );
    }

    // =============================================
    // レスポンス デシリアライズテスト
    // =============================================

    #[test]
    fn test_response_text_single_part() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "{\"a\":1}"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
                .expect("デシリアライズ失敗");
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_with_empty_text_has_no_text() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": ""}]}, "finishReason": "STOP"}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_message_from_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(400, body), "API key not valid.");
    }

    #[test]
    fn test_api_error_message_fallbacks() {
        assert_eq!(api_error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(api_error_message(500, ""), "request failed with HTTP status 500");
    }
}
