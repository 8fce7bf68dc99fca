//! Generic single-file experiment form.

use labdash::{FormController, FormSpec, UploadConfig};
use leptos::*;

use super::form_parts::{on_file_change, text_inputs, FormNotice, SubmitButton};

#[component]
pub fn ExperimentForm(spec: &'static FormSpec, config: ReadSignal<UploadConfig>) -> impl IntoView {
    let form = create_rw_signal(FormController::new(spec));

    let file_inputs = spec
        .slots
        .iter()
        .map(|slot| {
            view! {
                <div class="file-input-wrapper">
                    <label class="input-label">{slot.label}</label>
                    <input type="file" class="file-input" on:change={on_file_change(form, slot.name)}/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="section card-hover">
            <h2>{spec.title}</h2>
            {file_inputs}
            {text_inputs(form, spec.fields, "text-input")}
            <SubmitButton form=form config=config button_class="btn"/>
            <FormNotice form=form/>
        </div>
    }
}
