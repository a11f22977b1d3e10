//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use film_grade_common::{EditClient, GradeController, UploadedImage};
use crate::api::gemini::GeminiClient;
use crate::components::{
    control_panel::ControlPanel,
    error_banner::ErrorBanner,
    header::Header,
    image_viewer::ImageViewer,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};

/// ビルド時に GEMINI_API_KEY が指定されていれば初期値にする
fn initial_api_key() -> String {
    option_env!("GEMINI_API_KEY").unwrap_or_default().to_string()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(initial_api_key());
    let state = RwSignal::new(GradeController::new());
    // コントローラ外のエラー（ファイル読込失敗など）
    let (upload_error, set_upload_error) = signal(None::<String>);

    let on_image_loaded = move |image: UploadedImage| {
        set_upload_error.set(None);
        state.update(|c| c.upload_image(image));
    };

    let on_upload_error = move |message: String| {
        log::warn!("{}", message);
        set_upload_error.set(Some(message));
    };

    let on_camera_change = move |id: String| {
        state.update(|c| {
            if let Err(e) = c.select_camera(&id) {
                log::warn!("{}", e);
            }
        });
    };

    let on_film_change = move |id: String| {
        state.update(|c| {
            if let Err(e) = c.select_film(&id) {
                log::warn!("{}", e);
            }
        });
    };

    // グレーディング開始
    let on_apply = move |_: ()| {
        let Some(Ok(ticket)) = state.try_update(|c| c.begin_grade()) else {
            return;
        };
        let client = GeminiClient::new(api_key.get_untracked());

        spawn_local(async move {
            let result = client.edit(ticket.request()).await;
            state.update(|c| {
                c.finish_grade(&ticket, result);
            });
        });
    };

    let on_new_image = move |_: ()| {
        set_upload_error.set(None);
        state.update(|c| c.reset());
    };

    let error_message = Signal::derive(move || {
        state
            .with(|c| c.error_message().map(str::to_string))
            .or_else(|| upload_error.get())
    });

    let has_image = move || state.with(|c| c.uploaded_image().is_some());

    view! {
        <div class="container">
            <Header />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <main class="layout">
                <aside class="sidebar">
                    <Show
                        when=has_image
                        fallback=move || view! {
                            <UploadArea on_image_loaded=on_image_loaded on_error=on_upload_error />
                        }
                    >
                        <ControlPanel
                            state=state.read_only()
                            on_camera_change=on_camera_change
                            on_film_change=on_film_change
                            on_apply=on_apply
                            on_new_image=on_new_image
                        />
                    </Show>
                </aside>

                <section class="content">
                    <ErrorBanner message=error_message />
                    <ImageViewer state=state.read_only() />
                </section>
            </main>
        </div>
    }
}
