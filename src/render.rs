//! 端末出力

use snapchef_common::{render_text, AnalysisResult};

/// 解析結果を表示用テキストにする
pub fn render_result(result: &AnalysisResult) -> String {
    format!("\n🍽  {}", render_text(result))
}

/// エラーバナー
pub fn error_banner(message: &str) -> String {
    format!("⚠ {}\n", message)
}
