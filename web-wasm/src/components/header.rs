//! ヘッダー・フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <span class="brand-icon">"🍴"</span>
                    <h1>"SnapChef"</h1>
                </div>
                <nav class="nav">
                    <a href="#">"My Kitchen"</a>
                    <a href="#">"Recipes"</a>
                    <a href="#">"History"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p class="text-muted">
                {format!("© {} SnapChef AI. Turn your leftovers into masterpieces.", year)}
            </p>
        </footer>
    }
}
