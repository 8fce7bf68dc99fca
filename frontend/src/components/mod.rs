//! UI Components for the lab dashboard.
//!
//! # Layout Components
//! - [`Header`] - Title and subtitle
//! - [`OptionsPanel`] - Session toggles ([`ToggleOption`] switches)
//! - [`Dashboard`] - Every section in page order
//!
//! # Forms
//! - [`DewarDualForm`] - Cooling and warming files
//! - [`ExperimentForm`] - One data file plus text fields
//! - `form_parts` - File/text inputs, submit button, notices

mod dashboard;
mod dewar;
mod experiment;
mod form_parts;
mod header;

pub use dashboard::*;
pub use dewar::*;
pub use experiment::*;
pub use form_parts::*;
pub use header::*;
