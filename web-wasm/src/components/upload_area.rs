//! アップロードエリアコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, FileList};
use film_grade_common::UploadedImage;

#[component]
pub fn UploadArea<F, E>(
    on_image_loaded: F,
    on_error: E,
) -> impl IntoView
where
    F: Fn(UploadedImage) + 'static + Clone + Send + Sync,
    E: Fn(String) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // 1枚のみ受け付ける
    let handle_files = move |files: FileList| {
        if let Some(file) = files.get(0) {
            read_file(file, on_image_loaded.clone(), on_error.clone());
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |_| {
        if let Some(input) = input_ref.get() {
            if let Some(files) = input.files() {
                handle_files(files);
            }
            // 同じファイルを再選択しても change が発火するように
            input.set_value("");
        }
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="hidden-input"
            node_ref=input_ref
            on:change=on_change
        />
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop a photo, or click to choose"</p>
            <p class="text-muted">"JPEG, PNG or WebP"</p>
        </div>
    }
}

fn read_file<F, E>(file: File, on_image_loaded: F, on_error: E)
where
    F: Fn(UploadedImage) + 'static,
    E: Fn(String) + 'static,
{
    let file_name = file.name();
    if !file.type_().starts_with("image/") {
        on_error(format!("{} is not an image file.", file_name));
        return;
    }

    let blob = gloo::file::File::from(file);
    spawn_local(async move {
        match gloo::file::futures::read_as_data_url(&blob).await {
            Ok(data_url) => match UploadedImage::from_data_url(file_name, &data_url) {
                Ok(image) => on_image_loaded(image),
                Err(e) => on_error(e.to_string()),
            },
            Err(e) => {
                log::error!("FileReader failed for {}: {}", file_name, e);
                on_error(format!("Could not read {}: {}", file_name, e));
            }
        }
    });
}
