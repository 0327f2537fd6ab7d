//! APIレスポンスパーサー
//!
//! スキーマ指定で返ってきたJSONテキストを AnalysisResult に変換する。
//! 出力の補修はしない。必須フィールドは型変換の前に再検証する。

use serde_json::Value;

use crate::error::{Error, Result};
use crate::gemini::GeminiResponse;
use crate::prompts::{MACROS_REQUIRED, RECIPE_REQUIRED, RESULT_REQUIRED};
use crate::types::AnalysisResult;

/// Geminiレスポンスから解析結果を取り出す
///
/// # Returns
/// * `Err(Error::EmptyResponse)` - テキストが含まれない
/// * その他は `parse_analysis_response` と同じ
pub fn parse_gemini_response(response: &GeminiResponse) -> Result<AnalysisResult> {
    let text = response.text().ok_or(Error::EmptyResponse)?;
    parse_analysis_response(&text)
}

/// レスポンステキストをパース
///
/// # Arguments
/// * `text` - モデルが返したJSONテキスト
///
/// # Returns
/// * `Ok(AnalysisResult)` - パースと必須フィールド検証に成功
/// * `Err(Error::EmptyResponse)` - テキストが空
/// * `Err(Error::Parse)` - JSONとして不正、または型が合わない
/// * `Err(Error::MissingField)` - 必須フィールドが欠けている
///
/// # Examples
/// ```
/// use snapchef_common::parse_analysis_response;
///
/// let err = parse_analysis_response("   ").unwrap_err();
/// assert!(matches!(err, snapchef_common::Error::EmptyResponse));
/// ```
pub fn parse_analysis_response(text: &str) -> Result<AnalysisResult> {
    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::Parse(format!("JSON parse error: {}", e)))?;

    validate_required(&value)?;

    serde_json::from_value(value).map_err(|e| Error::Parse(format!("unexpected shape: {}", e)))
}

/// 必須フィールドの存在チェック
///
/// null は欠落とみなす。エラーには "suggestedRecipe.macros" のようなパスを入れる
pub fn validate_required(value: &Value) -> Result<()> {
    let root = require_object(value, "")?;
    require_fields(root, "", RESULT_REQUIRED)?;

    let recipe = require_object(&root["suggestedRecipe"], "suggestedRecipe")?;
    require_fields(recipe, "suggestedRecipe", RECIPE_REQUIRED)?;

    let macros = require_object(&recipe["macros"], "suggestedRecipe.macros")?;
    require_fields(macros, "suggestedRecipe.macros", MACROS_REQUIRED)
}

fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a serde_json::Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        if path.is_empty() {
            Error::Parse("JSON object not found".into())
        } else {
            Error::Parse(format!("`{}` is not an object", path))
        }
    })
}

fn require_fields(
    map: &serde_json::Map<String, Value>,
    prefix: &str,
    fields: &[&str],
) -> Result<()> {
    for field in fields {
        match map.get(*field) {
            Some(v) if !v.is_null() => {}
            _ => {
                let path = if prefix.is_empty() {
                    field.to_string()
                } else {
                    format!("{}.{}", prefix, field)
                };
                return Err(Error::MissingField(path));
            }
        }
    }
    Ok(())
}
