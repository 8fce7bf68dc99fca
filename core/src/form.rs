//! Per-form input state and the submit state machine.
//!
//! ```text
//!   edits ─┐
//!          ▼
//!       ┌──────┐  begin_submit (valid)  ┌────────────┐
//!       │ Idle │───────────────────────▶│ Submitting │
//!       └──────┘◀───────────────────────└────────────┘
//!          ▲        finish(outcome)          │
//!          └── begin_submit (invalid)        └── begin_submit → Busy
//! ```
//!
//! The same controller serves single-file and dual-file forms; the
//! [`FormSpec`] decides which slots exist.

use crate::catalog::FormSpec;
use crate::client::Uploader;
use crate::config::UploadConfig;
use crate::endpoint::Endpoint;
use crate::error::{FormError, FormResult, ValidationResult};
use crate::models::{DataFile, FileSlot, TextField};
use crate::outcome::RequestOutcome;
use crate::payload::{self, SubmissionPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Result of a submit trigger that passed validation or was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The form is now `Submitting`; send this payload.
    Started(SubmissionPayload),
    /// A request is in flight or a file is still loading; nothing happened.
    Busy,
}

/// Last message a form showed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation(String),
    Outcome(RequestOutcome),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        match self {
            Notice::Validation(_) => true,
            Notice::Outcome(outcome) => !outcome.is_success(),
        }
    }

    /// Text to display.
    pub fn text(&self) -> String {
        match self {
            Notice::Validation(msg) => msg.clone(),
            Notice::Outcome(outcome) => outcome.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    spec: &'static FormSpec,
    slots: Vec<FileSlot>,
    fields: Vec<TextField>,
    state: FormState,
    notice: Option<Notice>,
    selections: Vec<Selection>,
}

/// Latest selection issued for a slot whose file is read in the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Selection {
    latest: u64,
    pending: bool,
}

impl FormController {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            slots: spec
                .slots
                .iter()
                .map(|s| FileSlot::empty(s.name, s.label))
                .collect(),
            fields: spec
                .fields
                .iter()
                .map(|f| TextField::empty(f.key, f.placeholder))
                .collect(),
            state: FormState::Idle,
            notice: None,
            selections: vec![Selection::default(); spec.slots.len()],
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn endpoint(&self) -> Endpoint {
        self.spec.endpoint
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn slots(&self) -> &[FileSlot] {
        &self.slots
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while a slot waits for a background file read.
    pub fn is_selecting(&self) -> bool {
        self.selections.iter().any(|s| s.pending)
    }

    /// Button text for the current state.
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => self.spec.submit_label,
            FormState::Submitting => self.spec.busy_label,
        }
    }

    /// Current value of a text field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    fn slot_index(&self, slot: &str) -> FormResult<usize> {
        self.slots
            .iter()
            .position(|s| s.name == slot)
            .ok_or_else(|| FormError::UnknownSlot {
                endpoint: self.spec.endpoint.to_string(),
                slot: slot.to_string(),
            })
    }

    /// Put `file` into `slot`, replacing any previous selection.
    ///
    /// Any background read still pending for the slot is superseded.
    pub fn select_file(&mut self, slot: &str, file: Option<DataFile>) -> FormResult<()> {
        let index = self.slot_index(slot)?;
        let selection = &mut self.selections[index];
        selection.latest += 1;
        selection.pending = false;
        self.slots[index].file = file;
        Ok(())
    }

    /// Announce a selection whose content is still being read.
    ///
    /// Returns the token to hand to [`complete_selection`](Self::complete_selection).
    pub fn begin_selection(&mut self, slot: &str) -> FormResult<u64> {
        let index = self.slot_index(slot)?;
        let selection = &mut self.selections[index];
        selection.latest += 1;
        selection.pending = true;
        Ok(selection.latest)
    }

    /// Store the result of the read started under `token`.
    ///
    /// `None` means the read failed and leaves the slot empty. Returns
    /// `false` when a later selection superseded this one; the slot is then
    /// left untouched.
    pub fn complete_selection(
        &mut self,
        slot: &str,
        token: u64,
        file: Option<DataFile>,
    ) -> FormResult<bool> {
        let index = self.slot_index(slot)?;
        let selection = &mut self.selections[index];
        if selection.latest != token || !selection.pending {
            log::debug!("Dropping stale read for '{}' on /{}", slot, self.spec.endpoint);
            return Ok(false);
        }
        selection.pending = false;
        self.slots[index].file = file;
        Ok(true)
    }

    /// Overwrite a text field.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> FormResult<()> {
        let endpoint = self.spec.endpoint;
        let target = self
            .fields
            .iter_mut()
            .find(|f| f.key == key)
            .ok_or_else(|| FormError::UnknownField {
                endpoint: endpoint.to_string(),
                field: key.to_string(),
            })?;
        target.value = value.into();
        Ok(())
    }

    /// Handle a submit trigger.
    ///
    /// On validation failure the form stays `Idle` and keeps the message as
    /// its notice.
    pub fn begin_submit(&mut self, config: UploadConfig) -> ValidationResult<SubmitAttempt> {
        if self.is_submitting() {
            log::debug!("Ignoring submit on /{}: request in flight", self.endpoint());
            return Ok(SubmitAttempt::Busy);
        }
        if self.is_selecting() {
            log::debug!("Ignoring submit on /{}: file still loading", self.endpoint());
            return Ok(SubmitAttempt::Busy);
        }

        match payload::build(&self.slots, &self.fields, config) {
            Ok(payload) => {
                log::info!(
                    "📤 Uploading to /{} ({} parts)",
                    self.endpoint(),
                    payload.len()
                );
                self.state = FormState::Submitting;
                self.notice = None;
                Ok(SubmitAttempt::Started(payload))
            }
            Err(err) => {
                log::warn!("⚠️ /{}: {} (slot '{}')", self.endpoint(), err, err.slot());
                self.notice = Some(Notice::Validation(err.to_string()));
                Err(err)
            }
        }
    }

    /// Return to `Idle` with the outcome of the request. Inputs are kept.
    pub fn finish(&mut self, outcome: RequestOutcome) {
        match &outcome {
            RequestOutcome::Success(msg) => log::info!("✅ /{}: {}", self.endpoint(), msg),
            RequestOutcome::Failure(msg) => log::warn!("❌ /{}: {}", self.endpoint(), msg),
        }
        self.state = FormState::Idle;
        self.notice = Some(Notice::Outcome(outcome));
    }

    /// Validate, upload and finish in one go.
    ///
    /// `Ok(None)` when a request was already in flight.
    pub async fn submit<U: Uploader>(
        &mut self,
        uploader: &U,
        config: UploadConfig,
    ) -> ValidationResult<Option<RequestOutcome>> {
        let payload = match self.begin_submit(config)? {
            SubmitAttempt::Started(payload) => payload,
            SubmitAttempt::Busy => return Ok(None),
        };
        let outcome = uploader.submit(self.endpoint(), payload).await;
        self.finish(outcome.clone());
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEWAR, MPMS_AC, PPMS};
    use crate::client::test_support::RecordingUploader;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    fn data_file(name: &str) -> DataFile {
        let modified = Utc.with_ymd_and_hms(2024, 5, 14, 16, 2, 7).unwrap();
        DataFile::new(name, b"Time,Temperature (K),Resistance (Ohm)\n".to_vec(), modified)
    }

    fn ok() -> RequestOutcome {
        RequestOutcome::Success("Plotted".into())
    }

    #[test]
    fn test_new_form_mirrors_declaration() {
        let form = FormController::new(&MPMS_AC);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.slots().len(), 1);
        assert_eq!(form.fields().len(), 3);
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(form.submit_label(), "Plot Data");
    }

    #[test]
    fn test_edits_overwrite() {
        let mut form = FormController::new(&PPMS);
        form.set_text("pressure", "1.0").unwrap();
        form.set_text("pressure", "2.5").unwrap();
        assert_eq!(form.text("pressure"), Some("2.5"));

        form.select_file("datafile", Some(data_file("a.dat"))).unwrap();
        form.select_file("datafile", Some(data_file("b.dat"))).unwrap();
        assert_eq!(form.slots()[0].file.as_ref().unwrap().name, "b.dat");

        form.select_file("datafile", None).unwrap();
        assert!(!form.slots()[0].is_filled());
    }

    #[test]
    fn test_unknown_inputs_are_rejected() {
        let mut form = FormController::new(&PPMS);
        assert!(matches!(
            form.set_text("mass", "3"),
            Err(FormError::UnknownField { .. })
        ));
        assert!(matches!(
            form.select_file("cooling", None),
            Err(FormError::UnknownSlot { .. })
        ));
    }

    #[test]
    fn test_slower_earlier_read_does_not_replace_newer_file() {
        let mut form = FormController::new(&PPMS);
        let large = form.begin_selection("datafile").unwrap();
        let small = form.begin_selection("datafile").unwrap();

        assert!(form.complete_selection("datafile", small, Some(data_file("small.dat"))).unwrap());
        assert!(!form.complete_selection("datafile", large, Some(data_file("large.dat"))).unwrap());

        assert_eq!(form.slots()[0].file.as_ref().unwrap().name, "small.dat");
        assert!(!form.is_selecting());
    }

    #[test]
    fn test_clearing_input_discards_pending_read() {
        let mut form = FormController::new(&PPMS);
        let token = form.begin_selection("datafile").unwrap();
        form.select_file("datafile", None).unwrap();

        assert!(!form.complete_selection("datafile", token, Some(data_file("r.dat"))).unwrap());
        assert!(!form.slots()[0].is_filled());
        assert!(!form.is_selecting());
    }

    #[test]
    fn test_submit_waits_for_pending_read() {
        let mut form = FormController::new(&PPMS);
        let token = form.begin_selection("datafile").unwrap();
        assert!(form.is_selecting());

        assert_eq!(form.begin_submit(UploadConfig::default()).unwrap(), SubmitAttempt::Busy);
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.notice().is_none());

        form.complete_selection("datafile", token, Some(data_file("r.dat"))).unwrap();
        assert!(matches!(
            form.begin_submit(UploadConfig::default()).unwrap(),
            SubmitAttempt::Started(_)
        ));
    }

    #[test]
    fn test_failed_read_leaves_slot_empty() {
        let mut form = FormController::new(&PPMS);
        form.select_file("datafile", Some(data_file("old.dat"))).unwrap();
        let token = form.begin_selection("datafile").unwrap();

        assert!(form.complete_selection("datafile", token, None).unwrap());
        assert!(!form.slots()[0].is_filled());
        assert!(matches!(
            form.begin_selection("cooling"),
            Err(FormError::UnknownSlot { .. })
        ));
    }

    #[test]
    fn test_validation_failure_stays_idle_and_never_uploads() {
        let uploader = RecordingUploader::replying(ok());
        let mut form = FormController::new(&DEWAR);
        form.select_file("cooling", Some(data_file("cool.dat"))).unwrap();

        let result = block_on(form.submit(&uploader, UploadConfig::default()));

        assert_eq!(result.unwrap_err().slot(), "warming");
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(uploader.call_count(), 0);
        let notice = form.notice().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.text(), "Please select all required files.");
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut form = FormController::new(&PPMS);
        form.select_file("datafile", Some(data_file("r.dat"))).unwrap();

        let first = form.begin_submit(UploadConfig::default()).unwrap();
        assert!(matches!(first, SubmitAttempt::Started(_)));
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Processing...");

        let second = form.begin_submit(UploadConfig::default()).unwrap();
        assert_eq!(second, SubmitAttempt::Busy);

        form.finish(ok());
        assert_eq!(form.state(), FormState::Idle);
        assert!(matches!(
            form.begin_submit(UploadConfig::default()).unwrap(),
            SubmitAttempt::Started(_)
        ));
    }

    #[test]
    fn test_busy_form_does_not_upload_again() {
        let uploader = RecordingUploader::replying(ok());
        let mut form = FormController::new(&PPMS);
        form.select_file("datafile", Some(data_file("r.dat"))).unwrap();
        form.begin_submit(UploadConfig::default()).unwrap();

        let result = block_on(form.submit(&uploader, UploadConfig::default()));
        assert_eq!(result, Ok(None));
        assert_eq!(uploader.call_count(), 0);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_idle_and_keeps_inputs() {
        let uploader = RecordingUploader::replying(RequestOutcome::Failure("disk full".into()));
        let mut form = FormController::new(&PPMS);
        form.select_file("datafile", Some(data_file("r.dat"))).unwrap();
        form.set_text("pressure", "2.5").unwrap();

        let outcome = block_on(form.submit(&uploader, UploadConfig::default())).unwrap();

        assert_eq!(outcome, Some(RequestOutcome::Failure("disk full".into())));
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.text("pressure"), Some("2.5"));
        assert!(form.slots()[0].is_filled());
        assert_eq!(form.notice().unwrap().text(), "Error: disk full");
    }

    #[test]
    fn test_payload_captures_config_at_submit_time() {
        let mut form = FormController::new(&PPMS);
        form.select_file("datafile", Some(data_file("r.dat"))).unwrap();
        let mut config = UploadConfig::default();

        let SubmitAttempt::Started(payload) = form.begin_submit(config).unwrap() else {
            panic!("expected a started submission");
        };
        config = config.with_generate_slideshow(false).with_save_project(false);
        form.set_text("pressure", "9").unwrap();

        assert!(!config.generate_slideshow);
        assert_eq!(payload.text("createPPT"), Some("true"));
        assert_eq!(payload.text("saveProject"), Some("true"));
        assert_eq!(payload.text("pressure"), Some(""));
    }

    #[test]
    fn test_successful_submission_sends_one_payload() {
        let uploader = RecordingUploader::replying(ok());
        let mut form = FormController::new(&DEWAR);
        form.select_file("cooling", Some(data_file("cool.dat"))).unwrap();
        form.select_file("warming", Some(data_file("warm.dat"))).unwrap();
        form.set_text("pressure", "0.8").unwrap();

        block_on(form.submit(&uploader, UploadConfig::default())).unwrap();

        let calls = uploader.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (endpoint, payload) = &calls[0];
        assert_eq!(*endpoint, Endpoint::Dewar);
        assert_eq!(
            payload.part_names(),
            ["cooling", "warming", "pressure", "createPPT", "saveProject", "lastModified"]
        );
        assert_eq!(payload.text("lastModified"), Some("2024-05-14T16:02:07.000Z"));
        assert!(!form.notice().unwrap().is_error());
    }
}
