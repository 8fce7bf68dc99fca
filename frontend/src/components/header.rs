//! Page header and the options panel with the session toggles.

use labdash::dashboard::{APP_SUBTITLE, APP_TITLE, SAVE_PROJECT_TOGGLE_LABEL, SLIDESHOW_TOGGLE_LABEL};
use labdash::UploadConfig;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">{APP_TITLE}</h1>
            <p class="app-subtitle">{APP_SUBTITLE}</p>
        </header>
    }
}

/// Checkbox switch; clicking the text label toggles it too.
#[component]
pub fn ToggleOption(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="toggle-wrapper">
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.call(event_target_checked(&ev))
                />
                <span class="slider"></span>
            </label>
            <span
                class="toggle-label"
                style="cursor: pointer;"
                on:click=move |_| on_change.call(!checked.get_untracked())
            >
                {label}
            </span>
        </div>
    }
}

#[component]
pub fn OptionsPanel(config: ReadSignal<UploadConfig>, set_config: WriteSignal<UploadConfig>) -> impl IntoView {
    view! {
        <div style="text-align: center;">
            <div class="options-panel">
                <ToggleOption
                    label=SLIDESHOW_TOGGLE_LABEL
                    checked=Signal::derive(move || config.get().generate_slideshow)
                    on_change=move |enabled: bool| {
                        set_config.update(|c| *c = c.with_generate_slideshow(enabled))
                    }
                />
                <ToggleOption
                    label=SAVE_PROJECT_TOGGLE_LABEL
                    checked=Signal::derive(move || config.get().save_project)
                    on_change=move |enabled: bool| {
                        set_config.update(|c| *c = c.with_save_project(enabled))
                    }
                />
            </div>
        </div>
    }
}
