//! Dashboard body: every section of [`labdash::SECTIONS`] in page order.
//!
//! The collapsible group stays mounted while closed so its form keeps its
//! inputs; only the wrapper class changes.

use labdash::dashboard::group_toggle_label;
use labdash::{spec_for, FormKind, Section, SectionLayout, UploadConfig, SECTIONS};
use leptos::*;

use super::{DewarDualForm, ExperimentForm, Header, OptionsPanel};

#[component]
pub fn Dashboard() -> impl IntoView {
    let (config, set_config) = create_signal(UploadConfig::default());
    let (show_merged, set_show_merged) = create_signal(false);

    let sections = SECTIONS
        .iter()
        .map(|section| section_view(section, config, show_merged, set_show_merged))
        .collect_view();

    view! {
        <div class="App">
            <Header/>
            <OptionsPanel config=config set_config=set_config/>
            <main class="app-content">{sections}</main>
        </div>
    }
}

fn forms_view(section: &'static Section, config: ReadSignal<UploadConfig>) -> View {
    section
        .forms
        .iter()
        .map(|endpoint| {
            let spec = spec_for(*endpoint);
            match spec.kind() {
                FormKind::Dual => view! { <DewarDualForm spec=spec config=config/> }.into_view(),
                FormKind::Single => view! { <ExperimentForm spec=spec config=config/> }.into_view(),
            }
        })
        .collect_view()
}

fn section_view(
    section: &'static Section,
    config: ReadSignal<UploadConfig>,
    show_merged: ReadSignal<bool>,
    set_show_merged: WriteSignal<bool>,
) -> View {
    let forms = forms_view(section, config);

    match section.layout {
        SectionLayout::Featured => forms,
        SectionLayout::Collapsible => view! {
            <div class="toggle-container">
                <button class="menu-btn" on:click=move |_| set_show_merged.update(|open| *open = !*open)>
                    {move || group_toggle_label(show_merged.get())}
                </button>
                <div class="merged-section-wrapper" class:open=move || show_merged.get()>
                    <div class="merged-section">{forms}</div>
                </div>
            </div>
            <div class="divider"></div>
        }
        .into_view(),
        SectionLayout::Wide => view! { <div class="wide-section">{forms}</div> }.into_view(),
        SectionLayout::Grid => view! {
            <div class="divider"></div>
            {section.heading.map(|heading| view! { <h2 class="category-title">{heading}</h2> })}
            <div class="grid-section">{forms}</div>
        }
        .into_view(),
    }
}
