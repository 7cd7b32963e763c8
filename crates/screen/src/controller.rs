//! Screen controller state machine.
//!
//! States: `Loading` (context fetches outstanding) → `Ready` (fields
//! editable) → `Submitting` (one submission in flight) → `Ready` again.
//! No state is terminal from here; teardown is driven by whoever hosts the
//! screen. Dropping the `activate()` future abandons both context fetches,
//! so a torn-down screen cannot receive late writes.

use chrono::{DateTime, Utc};
use transferout_client::{
    load_patient, resolve_facility, submit_encounter, CancelToken, ClientError, Location,
    PatientContext, RestClient,
};
use transferout_core::{
    assemble_encounter, build_observations, EncounterConfig, EncounterPayload, FieldKey,
    FieldSnapshot, FieldValue,
};

/// Callback fired when the operator discards the screen.
pub type CloseSignal = Box<dyn Fn() + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("screen context is still loading")]
    NotReady,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Fields populated from resolved context; operator edits to these are
/// validation errors, which are logged and dropped rather than surfaced.
const READ_ONLY_FIELDS: [FieldKey; 3] = [FieldKey::TransferredFrom, FieldKey::Name, FieldKey::Mrn];

pub struct ScreenController {
    client: RestClient,
    config: EncounterConfig,
    patient_uuid: String,
    /// Captured once at activation and reused unchanged for every
    /// submission attempt during the screen's lifetime.
    encounter_instant: DateTime<Utc>,
    state: ScreenState,
    snapshot: FieldSnapshot,
    facility: Option<Location>,
    on_close: Option<CloseSignal>,
}

impl ScreenController {
    /// Create a screen for `patient_uuid`. The encounter instant is fixed
    /// here; call [`activate`](Self::activate) next to load context.
    pub fn new(client: RestClient, config: EncounterConfig, patient_uuid: impl Into<String>) -> Self {
        Self {
            client,
            config,
            patient_uuid: patient_uuid.into(),
            encounter_instant: Utc::now(),
            state: ScreenState::Loading,
            snapshot: FieldSnapshot::new(),
            facility: None,
            on_close: None,
        }
    }

    /// Register the close signal fired on [`discard`](Self::discard).
    pub fn with_close_signal(mut self, on_close: CloseSignal) -> Self {
        self.on_close = Some(on_close);
        self
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn encounter_instant(&self) -> DateTime<Utc> {
        self.encounter_instant
    }

    pub fn facility(&self) -> Option<&Location> {
        self.facility.as_ref()
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldValue> {
        self.snapshot.get(key)
    }

    pub fn snapshot(&self) -> &FieldSnapshot {
        &self.snapshot
    }

    pub fn patient_uuid(&self) -> &str {
        &self.patient_uuid
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// Run both context loads concurrently and freeze the results into the
    /// snapshot defaults. Each load runs exactly once per screen; failures
    /// are logged and leave the corresponding defaults empty, and the screen
    /// becomes `Ready` either way.
    pub async fn activate(&mut self) {
        let (facility, patient) = tokio::join!(
            resolve_facility(&self.client),
            load_patient(&self.client, &self.patient_uuid),
        );
        self.apply_context(facility, patient);
    }

    fn apply_context(
        &mut self,
        facility: Result<Option<Location>, ClientError>,
        patient: Result<PatientContext, ClientError>,
    ) {
        match facility {
            Ok(Some(location)) => {
                self.snapshot
                    .set(FieldKey::TransferredFrom, FieldValue::Text(location.display.clone()));
                self.facility = Some(location);
            }
            Ok(None) => {}
            Err(error) => tracing::error!(%error, "facility location fetch failed"),
        }

        match patient {
            Ok(context) => {
                if let Some(name) = context.display_name {
                    self.snapshot.set(FieldKey::Name, FieldValue::Text(name));
                }
                if let Some(mrn) = context.mrn {
                    self.snapshot.set(FieldKey::Mrn, FieldValue::Text(mrn));
                }
            }
            Err(error) => tracing::error!(%error, "patient context fetch failed"),
        }

        self.state = ScreenState::Ready;
    }

    /// Record an operator edit.
    ///
    /// Edits are accepted while context is still loading. Edits to the
    /// context-populated read-only fields are validation errors: they are
    /// logged and dropped without blocking anything else.
    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) {
        if READ_ONLY_FIELDS.contains(&key) {
            tracing::warn!(field = key.as_str(), "ignoring edit to read-only field");
            return;
        }
        self.snapshot.set(key, value);
    }

    /// Submit the current snapshot as one encounter, without a cancel control.
    pub async fn submit(&mut self) -> Result<(), ScreenError> {
        self.submit_with_cancel(CancelToken::never()).await
    }

    /// Submit the current snapshot as one encounter.
    ///
    /// Refused while context is loading or while another submission is in
    /// flight; the `Submitting` state is the double-submit guard. Success
    /// and failure both return the screen to `Ready`, and the screen stays
    /// open either way.
    pub async fn submit_with_cancel(&mut self, cancel: CancelToken) -> Result<(), ScreenError> {
        let payload = self.begin_submission()?;
        let result = submit_encounter(&self.client, &payload, cancel).await;
        self.finish_submission(&result);
        result.map_err(ScreenError::from)
    }

    /// Snapshot the fields and move to `Submitting`, or refuse.
    fn begin_submission(&mut self) -> Result<EncounterPayload, ScreenError> {
        match self.state {
            ScreenState::Loading => Err(ScreenError::NotReady),
            ScreenState::Submitting => Err(ScreenError::SubmissionInFlight),
            ScreenState::Ready => {
                self.state = ScreenState::Submitting;
                Ok(assemble_encounter(
                    &self.config,
                    self.encounter_instant,
                    self.facility.as_ref().map(|f| f.uuid.as_str()),
                    &self.patient_uuid,
                    build_observations(&self.snapshot),
                ))
            }
        }
    }

    fn finish_submission(&mut self, result: &Result<(), ClientError>) {
        if let Err(error) = result {
            tracing::error!(%error, "encounter submission failed");
        }
        self.state = ScreenState::Ready;
    }

    /// Fire the close signal. Only the operator's discard action calls this;
    /// a successful submission does not close the screen.
    pub fn discard(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn controller() -> ScreenController {
        let client = RestClient::new("http://emr.test/ws/rest/v1").unwrap();
        let config =
            EncounterConfig::with_default_providers("et-uuid".into(), "form-uuid".into()).unwrap();
        ScreenController::new(client, config, "PAT-1")
    }

    fn loaded_context() -> (Result<Option<Location>, ClientError>, Result<PatientContext, ClientError>)
    {
        (
            Ok(Some(Location {
                uuid: "LOC-1".into(),
                display: "Main Hospital".into(),
            })),
            Ok(PatientContext {
                display_name: Some("Jane Doe".into()),
                mrn: Some("12345".into()),
            }),
        )
    }

    #[test]
    fn starts_loading_and_becomes_ready() {
        let mut screen = controller();
        assert_eq!(screen.state(), ScreenState::Loading);

        let (facility, patient) = loaded_context();
        screen.apply_context(facility, patient);
        assert_eq!(screen.state(), ScreenState::Ready);
        assert_eq!(screen.facility().unwrap().uuid, "LOC-1");
        assert_eq!(
            screen.field(FieldKey::TransferredFrom),
            Some(&FieldValue::Text("Main Hospital".into()))
        );
        assert_eq!(
            screen.field(FieldKey::Name),
            Some(&FieldValue::Text("Jane Doe".into()))
        );
        assert_eq!(
            screen.field(FieldKey::Mrn),
            Some(&FieldValue::Text("12345".into()))
        );
    }

    #[test]
    fn context_failures_still_reach_ready_with_blank_defaults() {
        let mut screen = controller();
        screen.apply_context(
            Err(ClientError::InvalidBaseUrl("boom".into())),
            Err(ClientError::InvalidBaseUrl("boom".into())),
        );
        assert_eq!(screen.state(), ScreenState::Ready);
        assert!(screen.facility().is_none());
        assert!(screen.field(FieldKey::TransferredFrom).is_none());
        assert!(screen.field(FieldKey::Name).is_none());
    }

    #[test]
    fn zero_facility_matches_leaves_field_blank() {
        let mut screen = controller();
        let (_, patient) = loaded_context();
        screen.apply_context(Ok(None), patient);
        assert_eq!(screen.state(), ScreenState::Ready);
        assert!(screen.facility().is_none());
        assert!(screen.field(FieldKey::TransferredFrom).is_none());
    }

    #[test]
    fn edits_are_accepted_while_loading() {
        let mut screen = controller();
        screen.set_field(FieldKey::TransferredTo, FieldValue::Text("Clinic B".into()));
        assert_eq!(
            screen.field(FieldKey::TransferredTo),
            Some(&FieldValue::Text("Clinic B".into()))
        );
    }

    #[test]
    fn read_only_field_edits_are_dropped() {
        let mut screen = controller();
        let (facility, patient) = loaded_context();
        screen.apply_context(facility, patient);

        screen.set_field(FieldKey::Mrn, FieldValue::Text("tampered".into()));
        assert_eq!(
            screen.field(FieldKey::Mrn),
            Some(&FieldValue::Text("12345".into()))
        );
    }

    #[test]
    fn submit_is_refused_while_loading() {
        let mut screen = controller();
        assert!(matches!(
            screen.begin_submission(),
            Err(ScreenError::NotReady)
        ));
        assert_eq!(screen.state(), ScreenState::Loading);
    }

    #[test]
    fn second_submission_is_refused_until_the_first_settles() {
        let mut screen = controller();
        let (facility, patient) = loaded_context();
        screen.apply_context(facility, patient);

        let payload = screen.begin_submission().expect("first submission starts");
        assert_eq!(screen.state(), ScreenState::Submitting);
        assert!(matches!(
            screen.begin_submission(),
            Err(ScreenError::SubmissionInFlight)
        ));

        screen.finish_submission(&Ok(()));
        assert_eq!(screen.state(), ScreenState::Ready);
        assert!(screen.begin_submission().is_ok());
        drop(payload);
    }

    #[test]
    fn failed_submission_returns_to_ready() {
        let mut screen = controller();
        let (facility, patient) = loaded_context();
        screen.apply_context(facility, patient);

        screen.begin_submission().unwrap();
        screen.finish_submission(&Err(ClientError::Cancelled));
        assert_eq!(screen.state(), ScreenState::Ready);
    }

    #[test]
    fn payload_reuses_the_activation_instant_and_context() {
        let mut screen = controller();
        let (facility, patient) = loaded_context();
        screen.apply_context(facility, patient);
        screen.set_field(FieldKey::TransferredTo, FieldValue::Text("Clinic B".into()));

        let instant = screen.encounter_instant();
        let first = screen.begin_submission().unwrap();
        screen.finish_submission(&Ok(()));
        let second = screen.begin_submission().unwrap();

        assert_eq!(first.location, "LOC-1");
        assert_eq!(first.patient, "PAT-1");
        assert_eq!(
            first.encounter_datetime,
            instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        );
        assert_eq!(first.encounter_datetime, second.encounter_datetime);
    }

    #[test]
    fn discard_fires_the_close_signal() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);
        let screen = controller().with_close_signal(Box::new(move || {
            flag.store(true, Ordering::SeqCst);
        }));

        screen.discard();
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn close_signal_is_optional() {
        let screen = controller();
        screen.discard();
    }
}
