//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use snapchef_common::{failure_message, EncodedImage, ViewState};
use crate::api::gemini::analyze_image;
use crate::components::{
    analyze_button::AnalyzeButton,
    error_banner::ErrorBanner,
    header::{Footer, Header},
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::config;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面状態は1つのenumで管理
    let (state, set_state) = signal(ViewState::default());

    // 画像選択ハンドラ
    let on_image_selected = move |image: EncodedImage| {
        set_state.update(|s| s.select_image(image));
    };

    // 画像クリアハンドラ
    let on_clear = move |_| {
        set_state.update(|s| s.clear_image());
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let mut ticket = None;
        set_state.update(|s| ticket = s.begin_analysis());
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let outcome = analyze_image(config::api_key(), &ticket.image)
                .await
                .map_err(|e| {
                    gloo::console::error!(format!("analysis failed: {:?}", e));
                    failure_message(&e)
                });
            set_state.update(|s| {
                if !s.finish_analysis(ticket, outcome) {
                    gloo::console::log!("discarded result for a replaced image");
                }
            });
        });
    };

    let result = Memo::new(move |_| state.with(|s| s.result().cloned()));

    view! {
        <div class="layout">
            <Header />

            <main class="container">
                <section class="intro">
                    <h2>"What's in your fridge?"</h2>
                    <p class="text-muted">
                        "Snap a photo of your ingredients or leftovers and let AI suggest your next favorite meal."
                    </p>
                </section>

                <section class="card upload-card">
                    <UploadArea
                        state=state
                        on_image_selected=on_image_selected
                        on_clear=on_clear
                    />
                    <AnalyzeButton state=state on_analyze=on_analyze />
                </section>

                <ErrorBanner state=state />

                {move || result.get().map(|result| view! { <ResultPanel result=result /> })}
            </main>

            <Footer />
        </div>
    }
}
