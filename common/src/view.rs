//! 表示用モデル
//!
//! Web画面とCLI出力で同じ並び順・ラベルを使うための変換

use crate::types::{AnalysisResult, NutritionInfo, Recipe};

/// 栄養素タイル1枚分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTile<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// 栄養素タイル（カロリー, たんぱく質, 炭水化物, 脂質 の順）
pub fn macro_tiles(macros: &NutritionInfo) -> [MacroTile<'_>; 4] {
    [
        MacroTile { label: "Calories", value: &macros.calories },
        MacroTile { label: "Protein", value: &macros.protein },
        MacroTile { label: "Carbs", value: &macros.carbs },
        MacroTile { label: "Fat", value: &macros.fat },
    ]
}

/// 番号付き手順（1始まり、順序はそのまま）
pub fn numbered_steps(recipe: &Recipe) -> Vec<(usize, &str)> {
    recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| (i + 1, step.as_str()))
        .collect()
}

/// プレーンテキストに整形（CLI出力・印刷用）
pub fn render_text(result: &AnalysisResult) -> String {
    let recipe = &result.suggested_recipe;
    let mut out = String::new();

    out.push_str("Identified\n");
    out.push_str(&format!("  {}\n", result.identified_ingredients.join(" · ")));
    out.push_str(&format!("  {}\n\n", result.nutritional_estimate));

    out.push_str("Macros Estimate\n");
    for tile in macro_tiles(&recipe.macros) {
        out.push_str(&format!("  {:<9}{}\n", tile.label, tile.value));
    }

    out.push_str(&format!("\n{}\n", recipe.title));
    out.push_str(&format!("\"{}\"\n\n", recipe.description));

    out.push_str("Ingredients Needed\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  ✓ {}\n", ingredient));
    }

    out.push_str("\nPreparation Steps\n");
    for (n, step) in numbered_steps(recipe) {
        out.push_str(&format!("  {}. {}\n", n, step));
    }

    out
}
