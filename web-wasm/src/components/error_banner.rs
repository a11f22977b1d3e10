use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <strong>"Error: "</strong>
                    <span>{message}</span>
                </div>
            }
        })
    }
}
