use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::component::gateway::{GatewayError, LeadsGateway};
use crate::component::notification::{Notification, NotificationKind, NotificationSlot};
use crate::domain::lead::{Lead, LeadField, NewLead};
use crate::export::{ExportError, LeadSheet};
use crate::forms::FormError;
use crate::forms::lead::LeadForm;

pub const SAVED_MESSAGE: &str = "Lead saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving lead. Please try again.";
pub const EXPORTED_MESSAGE: &str = "Leads exported successfully!";
pub const EXPORT_FAILED_MESSAGE: &str = "Error exporting leads. Please try again.";
pub const CLEARED_MESSAGE: &str = "All leads deleted";
pub const CLEAR_FAILED_MESSAGE: &str = "Error deleting leads. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("no submission is in flight")]
    NotSubmitting,

    #[error(transparent)]
    Validation(#[from] FormError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Lead entry form: draft, submission state, cached list and notification.
pub struct LeadFormComponent<G> {
    gateway: G,
    draft: LeadForm,
    invalid: Vec<LeadField>,
    state: FormState,
    leads: Vec<Lead>,
    notifications: NotificationSlot,
}

impl<G> LeadFormComponent<G>
where
    G: LeadsGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            draft: LeadForm::default(),
            invalid: Vec::new(),
            state: FormState::Editing,
            leads: Vec::new(),
            notifications: NotificationSlot::default(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn draft(&self) -> &LeadForm {
        &self.draft
    }

    /// Fields that failed the last submit attempt and have not been edited since.
    pub fn invalid_fields(&self) -> &[LeadField] {
        &self.invalid
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Cached snapshot from the last successful refresh.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Loads the list for the first time.
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    pub fn edit(&mut self, field: LeadField, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.invalid.retain(|&invalid| invalid != field);
        if matches!(self.state, FormState::Success | FormState::Failure) {
            self.state = FormState::Editing;
        }
    }

    /// Validates the draft and enters `Submitting`.
    ///
    /// An invalid draft leaves the state untouched.
    pub fn begin_submit(&mut self) -> Result<NewLead, SubmitError> {
        if self.state == FormState::Submitting {
            return Err(SubmitError::InFlight);
        }
        let new_lead = match NewLead::try_from(&self.draft) {
            Ok(new_lead) => new_lead,
            Err(err) => {
                self.invalid = self.draft.invalid_fields();
                return Err(err.into());
            }
        };
        self.invalid.clear();
        self.state = FormState::Submitting;
        Ok(new_lead)
    }

    /// Applies the answer to a submission started with [`Self::begin_submit`].
    ///
    /// Outside `Submitting` the outcome is dropped and the state is untouched.
    pub async fn finish_submit(
        &mut self,
        outcome: Result<Lead, GatewayError>,
        now: Instant,
    ) -> Result<Lead, SubmitError> {
        if self.state != FormState::Submitting {
            return Err(SubmitError::NotSubmitting);
        }
        match outcome {
            Ok(lead) => {
                self.state = FormState::Success;
                self.notifications
                    .show(NotificationKind::Success, SAVED_MESSAGE, now);
                self.draft = LeadForm::default();
                self.reload().await;
                Ok(lead)
            }
            Err(err) => {
                log::error!("Error saving lead: {err}");
                self.state = FormState::Failure;
                self.notifications
                    .show(NotificationKind::Error, SAVE_FAILED_MESSAGE, now);
                Err(err.into())
            }
        }
    }

    /// Sends the draft and waits for the store's answer.
    pub async fn submit(&mut self) -> Result<Lead, SubmitError> {
        let new_lead = self.begin_submit()?;
        let outcome = self.gateway.create_lead(&new_lead).await;
        self.finish_submit(outcome, Instant::now()).await
    }

    /// Replaces the cached list. On failure the previous list is kept.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        self.leads = self.gateway.list_leads().await?;
        Ok(())
    }

    /// [`Self::refresh`] for callers that carry on with the cached list.
    async fn reload(&mut self) {
        if let Err(err) = self.refresh().await {
            log::error!("Error fetching leads: {err}");
        }
    }

    /// Writes the cached list to `dir/leads.xlsx`.
    pub fn export_to(&mut self, dir: &Path, now: Instant) -> Result<PathBuf, ExportError> {
        match LeadSheet::from_leads(&self.leads).write_to_dir(dir) {
            Ok(path) => {
                self.notifications
                    .show(NotificationKind::Success, EXPORTED_MESSAGE, now);
                Ok(path)
            }
            Err(err) => {
                log::error!("Error exporting leads: {err}");
                self.notifications
                    .show(NotificationKind::Error, EXPORT_FAILED_MESSAGE, now);
                Err(err)
            }
        }
    }

    /// Deletes every lead through the gateway and reloads the list.
    pub async fn clear_all(&mut self, now: Instant) -> Result<(), GatewayError> {
        match self.gateway.clear_leads().await {
            Ok(()) => {
                self.notifications
                    .show(NotificationKind::Success, CLEARED_MESSAGE, now);
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                log::error!("Error deleting leads: {err}");
                self.notifications
                    .show(NotificationKind::Error, CLEAR_FAILED_MESSAGE, now);
                Err(err)
            }
        }
    }

    /// Drops an expired notification; a settled submission returns to `Editing`.
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.dismiss_expired(now) {
            self.settle();
        }
    }

    /// Timer callback for the notification identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.notifications.dismiss(id) {
            self.settle();
        }
    }

    fn settle(&mut self) {
        if matches!(self.state, FormState::Success | FormState::Failure) {
            self.state = FormState::Editing;
        }
    }
}
