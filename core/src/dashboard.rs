//! Dashboard shell: session toggles, the collapsible group and every form.
//!
//! The shell owns the only [`UploadConfig`]. Forms never keep a reference to
//! it; [`DashboardShell::submit`] hands them a copy, so toggling later cannot
//! change a request that is already on its way.

use crate::catalog::FORMS;
use crate::client::Uploader;
use crate::config::UploadConfig;
use crate::endpoint::Endpoint;
use crate::error::ValidationResult;
use crate::form::FormController;
use crate::outcome::RequestOutcome;

pub const APP_TITLE: &str = "Lab Automation Dashboard";
pub const APP_SUBTITLE: &str = "OriginPro Data Plotting & Export Interface";
pub const SLIDESHOW_TOGGLE_LABEL: &str = "Create PowerPoint";
pub const SAVE_PROJECT_TOGGLE_LABEL: &str = "Save Origin Project";

const OPEN_GROUP_LABEL: &str = "Open Merged Data Option";
const CLOSE_GROUP_LABEL: &str = "Close Merged Data Option";

// =============================================================================
// Layout
// =============================================================================

/// How a section arranges its forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    /// The dual-file dewar form.
    Featured,
    /// Hidden until the user opens it.
    Collapsible,
    /// One form spanning the page.
    Wide,
    /// Forms side by side.
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Category heading shown above the section.
    pub heading: Option<&'static str>,
    pub layout: SectionLayout,
    pub forms: &'static [Endpoint],
}

/// Page layout, top to bottom.
pub static SECTIONS: &[Section] = &[
    Section {
        heading: None,
        layout: SectionLayout::Featured,
        forms: &[Endpoint::Dewar],
    },
    Section {
        heading: None,
        layout: SectionLayout::Collapsible,
        forms: &[Endpoint::DewarStrip],
    },
    Section {
        heading: None,
        layout: SectionLayout::Wide,
        forms: &[Endpoint::CurrentEffect],
    },
    Section {
        heading: Some("PPMS Measurements"),
        layout: SectionLayout::Grid,
        forms: &[
            Endpoint::Ppms,
            Endpoint::PpmsMagnetic,
            Endpoint::PpmsHeatCapacity,
        ],
    },
    Section {
        heading: None,
        layout: SectionLayout::Wide,
        forms: &[Endpoint::PpmsHeatCapacityCw],
    },
    Section {
        heading: Some("MPMS Measurements"),
        layout: SectionLayout::Grid,
        forms: &[Endpoint::Mpms, Endpoint::MpmsMagnetic],
    },
    Section {
        heading: None,
        layout: SectionLayout::Wide,
        forms: &[Endpoint::MpmsAc],
    },
];

// =============================================================================
// Shell
// =============================================================================

#[derive(Debug, Clone)]
pub struct DashboardShell {
    config: UploadConfig,
    optional_group_visible: bool,
    forms: Vec<FormController>,
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardShell {
    /// Fresh session: both toggles on, merged group closed, empty forms.
    pub fn new() -> Self {
        Self::with_config(UploadConfig::default())
    }

    pub fn with_config(config: UploadConfig) -> Self {
        Self {
            config,
            optional_group_visible: false,
            forms: FORMS.iter().copied().map(FormController::new).collect(),
        }
    }

    /// Copy of the current toggles.
    pub fn config(&self) -> UploadConfig {
        self.config
    }

    pub fn set_generate_slideshow(&mut self, enabled: bool) {
        self.config = self.config.with_generate_slideshow(enabled);
    }

    pub fn set_save_project(&mut self, enabled: bool) {
        self.config = self.config.with_save_project(enabled);
    }

    pub fn optional_group_visible(&self) -> bool {
        self.optional_group_visible
    }

    pub fn toggle_optional_group(&mut self) {
        self.optional_group_visible = !self.optional_group_visible;
    }

    /// Text of the button that opens or closes the merged group.
    pub fn optional_group_label(&self) -> &'static str {
        group_toggle_label(self.optional_group_visible)
    }

    pub fn forms(&self) -> &[FormController] {
        &self.forms
    }

    pub fn form(&self, endpoint: Endpoint) -> Option<&FormController> {
        self.forms.iter().find(|f| f.endpoint() == endpoint)
    }

    pub fn form_mut(&mut self, endpoint: Endpoint) -> Option<&mut FormController> {
        self.forms.iter_mut().find(|f| f.endpoint() == endpoint)
    }

    /// Submit one form with a snapshot of the current toggles.
    ///
    /// `Ok(None)` when that form already has a request in flight.
    pub async fn submit<U: Uploader>(
        &mut self,
        endpoint: Endpoint,
        uploader: &U,
    ) -> ValidationResult<Option<RequestOutcome>> {
        let config = self.config;
        match self.form_mut(endpoint) {
            Some(form) => form.submit(uploader, config).await,
            None => Ok(None),
        }
    }
}

/// Label of the merged-group button for a given visibility.
pub fn group_toggle_label(visible: bool) -> &'static str {
    if visible {
        CLOSE_GROUP_LABEL
    } else {
        OPEN_GROUP_LABEL
    }
}
