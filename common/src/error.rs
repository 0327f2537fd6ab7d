//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse AI response: {0}")]
    Parse(String),

    /// レスポンスにテキストが含まれない（Parseとは区別する）
    #[error("No response from AI")]
    EmptyResponse,

    #[error("AI response is missing required field `{0}`")]
    MissingField(String),

    #[error("API key is not configured (set API_KEY)")]
    MissingApiKey,

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
