//! エラーバナーコンポーネント
//!
//! 再度「解析」を押すか別の画像を選ぶと消える

use leptos::prelude::*;
use snapchef_common::ViewState;

#[component]
pub fn ErrorBanner(state: ReadSignal<ViewState>) -> impl IntoView {
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));

    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-icon">"⚠"</span>
                <span>{message}</span>
            </div>
        })}
    }
}
