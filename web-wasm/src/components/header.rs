//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Film Grade"</h1>
            <p class="text-muted">"Camera log correction + film emulation, powered by Gemini"</p>
        </header>
    }
}
