use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapChefError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。環境変数 API_KEY か `snapchef config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] snapchef_common::Error),
}

pub type Result<T> = std::result::Result<T, SnapChefError>;
