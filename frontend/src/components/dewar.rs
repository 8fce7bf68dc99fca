//! Dual-channel dewar form: cooling and warming files side by side.

use labdash::{FormController, FormSpec, UploadConfig};
use leptos::*;

use super::form_parts::{on_file_change, text_inputs, FormNotice, SubmitButton};

const BADGES: [&str; 2] = ["badge badge-blue", "badge badge-red"];

#[component]
pub fn DewarDualForm(spec: &'static FormSpec, config: ReadSignal<UploadConfig>) -> impl IntoView {
    let form = create_rw_signal(FormController::new(spec));

    let columns = spec
        .slots
        .iter()
        .zip(BADGES.iter().cycle())
        .map(|(slot, &badge)| {
            view! {
                <div class="upload-col">
                    <span class=badge>{slot.label}</span>
                    <input type="file" class="file-input" on:change={on_file_change(form, slot.name)}/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="section dewar-section card-hover">
            <div class="dewar-header">
                <h1>{spec.title}</h1>
                {spec.subtitle.map(|subtitle| view! { <p>{subtitle}</p> })}
            </div>
            <div class="dual-upload-grid">{columns}</div>
            {text_inputs(form, spec.fields, "text-input main-input")}
            <SubmitButton form=form config=config button_class="btn btn-large"/>
            <FormNotice form=form/>
        </div>
    }
}
