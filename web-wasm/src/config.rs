//! ビルド時設定
//!
//! ブラウザには環境変数がないため、APIキーはビルド時に埋め込む
//! （例: `API_KEY=... trunk build`）。未設定なら解析のたびに失敗する。

/// ビルド時の API_KEY
const BUILD_API_KEY: Option<&str> = option_env!("API_KEY");

/// 使用するAPIキー（未設定なら空文字）
pub fn api_key() -> &'static str {
    normalize_api_key(BUILD_API_KEY)
}

fn normalize_api_key(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim).unwrap_or("")
}
