//! 元画像とグレーディング結果の並列表示

use leptos::prelude::*;
use film_grade_common::GradeController;

#[component]
pub fn ImageViewer(state: ReadSignal<GradeController>) -> impl IntoView {
    let original = move || state.with(|c| c.uploaded_image().map(|i| i.display_url().to_string()));
    let processed = move || state.with(|c| c.grade_result().map(|r| r.data_url().to_string()));
    let has_result = move || state.with(|c| c.grade_result().is_some());
    let is_loading = move || state.with(|c| c.is_loading());

    let phase_class = move || format!("image-viewer {}", state.with(|c| c.phase().as_str()));

    view! {
        <div class=phase_class>
            <figure class="image-pane">
                <figcaption>"Original"</figcaption>
                {move || match original() {
                    Some(url) => view! { <img src=url alt="Original" /> }.into_any(),
                    None => view! {
                        <div class="placeholder">"Upload an image to get started"</div>
                    }.into_any(),
                }}
            </figure>

            <figure class="image-pane">
                <figcaption>"Graded"</figcaption>
                <Show when=is_loading>
                    <div class="loading">
                        <div class="spinner" />
                        <p>"Applying grade..."</p>
                    </div>
                </Show>
                <Show when=move || !is_loading() && !has_result()>
                    <div class="placeholder">"The graded image will appear here"</div>
                </Show>
                {move || processed().map(|url| view! { <img src=url alt="Graded" /> })}
            </figure>
        </div>
    }
}
