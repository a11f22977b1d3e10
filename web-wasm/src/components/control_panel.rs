//! プリセット選択パネル

use leptos::prelude::*;
use film_grade_common::{GradeController, CAMERA_PROFILES, FILM_LOOKS};

#[component]
pub fn ControlPanel<FC, FF, FA, FN>(
    state: ReadSignal<GradeController>,
    on_camera_change: FC,
    on_film_change: FF,
    on_apply: FA,
    on_new_image: FN,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone + Send + Sync,
    FF: Fn(String) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FN: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_loading = move || state.with(|c| c.is_loading());

    let camera_options = CAMERA_PROFILES
        .iter()
        .map(|profile| {
            let id = profile.id;
            view! {
                <option value=id selected=move || state.with(|c| c.selected_camera().id == id)>
                    {profile.name}
                </option>
            }
        })
        .collect_view();

    let film_options = FILM_LOOKS
        .iter()
        .map(|look| {
            let id = look.id;
            view! {
                <option value=id selected=move || state.with(|c| c.selected_film().id == id)>
                    {look.name}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="control-panel">
            <div class="form-group">
                <label for="camera-profile">"1. Camera Profile"</label>
                <select
                    id="camera-profile"
                    disabled=is_loading
                    on:change=move |ev| on_camera_change(event_target_value(&ev))
                >
                    {camera_options}
                </select>
                <p class="preset-hint">{move || state.with(|c| c.selected_camera().prompt)}</p>
            </div>

            <div class="form-group">
                <label for="film-look">"2. Film Look"</label>
                <select
                    id="film-look"
                    disabled=is_loading
                    on:change=move |ev| on_film_change(event_target_value(&ev))
                >
                    {film_options}
                </select>
                <p class="preset-hint">{move || state.with(|c| c.selected_film().prompt)}</p>
            </div>

            <div class="panel-actions">
                <button
                    class="btn btn-primary"
                    disabled=is_loading
                    on:click=move |_| on_apply(())
                >
                    {move || if is_loading() { "Grading..." } else { "Apply Grade" }}
                </button>

                <button
                    class="btn btn-secondary"
                    disabled=is_loading
                    on:click=move |_| on_new_image(())
                >
                    "New Image"
                </button>
            </div>
        </div>
    }
}
