//! 解析ボタンコンポーネント

use leptos::prelude::*;
use snapchef_common::ViewState;

#[component]
pub fn AnalyzeButton<F>(
    state: ReadSignal<ViewState>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    // 画像があり結果がまだ無いときだけ表示
    let visible = Memo::new(move |_| state.with(|s| s.image().is_some() && s.result().is_none()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));

    view! {
        <Show when=move || visible.get()>
            <button
                class="btn btn-primary analyze-button"
                class:loading=move || is_loading.get()
                disabled=move || is_loading.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_loading.get() {
                    view! { <span class="spinner"></span>"Cooking up ideas..." }.into_any()
                } else {
                    view! { <span>"✨"</span>"Analyze Ingredients" }.into_any()
                }}
            </button>
        </Show>
    }
}
