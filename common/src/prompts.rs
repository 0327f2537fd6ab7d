//! プロンプトとレスポンススキーマ
//!
//! CLIとWeb(WASM)で共有される:
//! - ANALYSIS_PROMPT: 解析指示
//! - 必須フィールド定数（スキーマと再検証の両方で使う）
//! - build_response_schema: Geminiの responseSchema

use serde_json::{json, Value};

/// 解析指示（食材の特定・栄養推定・レシピ提案）
pub const ANALYSIS_PROMPT: &str = "Identify these ingredients, estimate the calories/protein, \
and suggest a creative recipe to cook with them. Return the result in a structured JSON format.";

/// AnalysisResult の必須フィールド
pub const RESULT_REQUIRED: &[&str] = &["identifiedIngredients", "nutritionalEstimate", "suggestedRecipe"];

/// Recipe の必須フィールド
pub const RECIPE_REQUIRED: &[&str] = &["title", "description", "ingredients", "instructions", "macros"];

/// NutritionInfo の必須フィールド
pub const MACROS_REQUIRED: &[&str] = &["calories", "protein", "fat", "carbs"];

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Gemini responseSchema を生成
///
/// 型名はGemini APIのOpenAPIサブセット表記（OBJECT / ARRAY / STRING）
pub fn build_response_schema() -> Value {
    let mut identified = string_array();
    identified["description"] = json!("List of ingredients identified in the image");

    json!({
        "type": "OBJECT",
        "properties": {
            "identifiedIngredients": identified,
            "nutritionalEstimate": {
                "type": "STRING",
                "description": "A summary of estimated calories and protein"
            },
            "suggestedRecipe": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "ingredients": string_array(),
                    "instructions": string_array(),
                    "macros": {
                        "type": "OBJECT",
                        "properties": {
                            "calories": { "type": "STRING" },
                            "protein": { "type": "STRING" },
                            "fat": { "type": "STRING" },
                            "carbs": { "type": "STRING" }
                        },
                        "required": MACROS_REQUIRED
                    }
                },
                "required": RECIPE_REQUIRED
            }
        },
        "required": RESULT_REQUIRED
    })
}
