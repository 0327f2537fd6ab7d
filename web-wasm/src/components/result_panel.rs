//! 解析結果パネル
//!
//! 左: 検出食材タグと栄養素タイル / 右: レシピ（材料・手順・印刷）

use leptos::prelude::*;
use snapchef_common::{macro_tiles, numbered_steps, AnalysisResult};

#[component]
pub fn ResultPanel(result: AnalysisResult) -> impl IntoView {
    let recipe = result.suggested_recipe;

    let tags = result
        .identified_ingredients
        .into_iter()
        .map(|item| view! { <span class="tag">{item}</span> })
        .collect_view();

    let tiles = macro_tiles(&recipe.macros)
        .into_iter()
        .map(|tile| {
            view! {
                <div class="macro-tile">
                    <div class="macro-value">{tile.value.to_string()}</div>
                    <div class="macro-label">{tile.label}</div>
                </div>
            }
        })
        .collect_view();

    let steps = numbered_steps(&recipe)
        .into_iter()
        .map(|(n, step)| {
            view! {
                <li class="step">
                    <span class="step-number">{n}</span>
                    <p>{step.to_string()}</p>
                </li>
            }
        })
        .collect_view();

    let ingredients = recipe
        .ingredients
        .into_iter()
        .map(|ingredient| view! { <li><span class="check">"✓"</span>{ingredient}</li> })
        .collect_view();

    view! {
        <div class="result-grid">
            <aside class="result-side">
                <div class="card">
                    <h3>"Identified"</h3>
                    <div class="tags">{tags}</div>
                    <p class="text-muted">{result.nutritional_estimate}</p>
                </div>

                <div class="card macros-card">
                    <h3>"Macros Estimate"</h3>
                    <div class="macro-grid">{tiles}</div>
                </div>
            </aside>

            <article class="card recipe">
                <h2>{recipe.title}</h2>
                <p class="recipe-description">{format!("\"{}\"", recipe.description)}</p>

                <h4>"Ingredients Needed"</h4>
                <ul class="ingredient-list">{ingredients}</ul>

                <h4>"Preparation Steps"</h4>
                <ol class="step-list">{steps}</ol>

                <button
                    class="btn btn-outline print-button"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.print();
                        }
                    }
                >
                    "🖨 Print Recipe"
                </button>
            </article>
        </div>
    }
}
