//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - NutritionInfo: 栄養素の推定値（文字列のまま保持）
//! - Recipe: 提案レシピ
//! - AnalysisResult: AI解析の最終出力

use serde::{Deserialize, Serialize};

/// 栄養素の推定値
///
/// "~450 kcal" のような推定表記をそのまま受け取るため、数値ではなく文字列で持つ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
}

/// 提案レシピ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// 手順（順序に意味がある）
    pub instructions: Vec<String>,
    pub macros: NutritionInfo,
}

/// AI解析結果
///
/// `parser::parse_analysis_response` を通してのみ生成する。
/// 必須フィールドが欠けたレスポンスは部分的な結果にせずエラーにする。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub identified_ingredients: Vec<String>,
    pub nutritional_estimate: String,
    pub suggested_recipe: Recipe,
}
