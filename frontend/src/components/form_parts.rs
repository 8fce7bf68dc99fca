//! Pieces shared by the single-file and dual-file forms.

use labdash::{FieldSpec, FormController, SubmitAttempt, UploadConfig, Uploader};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::{read_data_file, BrowserUploader};

/// `change` handler of a file input bound to `slot`.
///
/// Clearing the input empties the slot. A new selection is read in the
/// background; only the most recent read is stored.
pub fn on_file_change(form: RwSignal<FormController>, slot: &'static str) -> impl Fn(Event) + 'static {
    move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            form.update(|f| {
                if let Err(e) = f.select_file(slot, None) {
                    log::error!("{}", e);
                }
            });
            return;
        };

        let token = match form.try_update(|f| f.begin_selection(slot)) {
            Some(Ok(token)) => token,
            Some(Err(e)) => {
                log::error!("{}", e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let data = match read_data_file(&file).await {
                Ok(data) => {
                    log::debug!("📄 {} selected for '{}' ({} bytes)", data.name, slot, data.size);
                    Some(data)
                }
                Err(e) => {
                    log::error!("❌ {}", e);
                    None
                }
            };
            form.update(|f| {
                if let Err(e) = f.complete_selection(slot, token, data) {
                    log::error!("{}", e);
                }
            });
        });
    }
}

/// Submit trigger: snapshot the toggles, validate, upload in the background.
pub fn submit_form(form: RwSignal<FormController>, config: ReadSignal<UploadConfig>) {
    let snapshot = config.get_untracked();
    let Some(Ok(SubmitAttempt::Started(payload))) = form.try_update(|f| f.begin_submit(snapshot)) else {
        return;
    };

    let endpoint = form.with_untracked(|f| f.endpoint());
    spawn_local(async move {
        let outcome = BrowserUploader::default().submit(endpoint, payload).await;
        form.update(|f| f.finish(outcome));
    });
}

/// Text inputs for the declared fields.
pub fn text_inputs(
    form: RwSignal<FormController>,
    fields: &'static [FieldSpec],
    class: &'static str,
) -> View {
    fields
        .iter()
        .map(|field| {
            let key = field.key;
            view! {
                <input
                    type="text"
                    class=class
                    placeholder={field.placeholder}
                    prop:value=move || form.with(|f| f.text(key).unwrap_or_default().to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Err(e) = f.set_text(key, event_target_value(&ev)) {
                            log::error!("{}", e);
                        }
                    })
                />
            }
        })
        .collect_view()
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <svg class="spinner" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.3"/>
            <path d="M12 2a10 10 0 0 1 10 10" stroke="currentColor" stroke-width="4" stroke-linecap="round"/>
        </svg>
    }
}

/// Disabled while the form is submitting or a file is loading; shows the
/// busy label while submitting.
#[component]
pub fn SubmitButton(
    form: RwSignal<FormController>,
    config: ReadSignal<UploadConfig>,
    button_class: &'static str,
) -> impl IntoView {
    let busy = move || form.with(|f| f.is_submitting());
    let disabled = move || form.with(|f| f.is_submitting() || f.is_selecting());

    view! {
        <button class=button_class disabled=disabled on:click=move |_| submit_form(form, config)>
            <Show when=busy fallback=|| view! { }>
                <Spinner/>
            </Show>
            " "
            {move || form.with(|f| f.submit_label())}
        </button>
    }
}

/// Last validation failure or request outcome of the form.
#[component]
pub fn FormNotice(form: RwSignal<FormController>) -> impl IntoView {
    move || {
        form.with(|f| f.notice().cloned()).map(|notice| {
            let class = if notice.is_error() {
                "form-notice error-message"
            } else {
                "form-notice success-message"
            };
            view! { <div class=class>{notice.text()}</div> }
        })
    }
}
