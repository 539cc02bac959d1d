//! Draft editor for a single campaign.
//!
//! # Design
//! The form is in create mode when it holds no saved campaign and in edit mode
//! when it was hydrated from one with an `id`. Field setters never validate;
//! the only check is that every schedule row is complete, run on submit.
//!
//! Schedule edits rebuild the vector instead of mutating rows in place, so a
//! hydrated draft never shares rows with the list it was taken from.

use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::error::{ApiError, ValidationError};
use crate::notification::Notification;
use crate::service::CampaignApi;
use crate::types::{Campaign, CampaignType, DayOfWeek, Schedule};

/// Shown for any failed submission that is not a 400.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// One field of one schedule row, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleField {
    DayOfWeek(Option<DayOfWeek>),
    StartTime(Option<NaiveTime>),
    EndTime(Option<NaiveTime>),
}

impl ScheduleField {
    fn apply(&self, schedule: &Schedule) -> Schedule {
        let mut next = schedule.clone();
        match self {
            ScheduleField::DayOfWeek(day) => next.day_of_week = day.clone(),
            ScheduleField::StartTime(time) => next.start_time = *time,
            ScheduleField::EndTime(time) => next.end_time = *time,
        }
        next
    }
}

/// The in-progress, possibly incomplete campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub campaign_type: Option<CampaignType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedules: Vec<Schedule>,
}

impl Draft {
    fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            campaign_type: Some(campaign.campaign_type.clone()),
            start_date: Some(campaign.start_date),
            end_date: Some(campaign.end_date),
            schedules: campaign.schedules.clone(),
        }
    }

    /// The record to send. An unset type goes out as an empty string; unset
    /// dates cannot be encoded at all.
    fn to_campaign(&self, id: Option<i64>) -> Result<Campaign, ApiError> {
        let start_date = self
            .start_date
            .ok_or_else(|| ApiError::SerializationError("start date is not set".to_string()))?;
        let end_date = self
            .end_date
            .ok_or_else(|| ApiError::SerializationError("end date is not set".to_string()))?;
        Ok(Campaign {
            id,
            campaign_type: self
                .campaign_type
                .clone()
                .unwrap_or_else(|| CampaignType::from(String::new())),
            start_date,
            end_date,
            schedules: self.schedules.clone(),
        })
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The server accepted the campaign and returned this copy.
    Saved(Campaign),
    /// The draft failed validation; nothing was sent.
    Invalid(ValidationError),
    /// The call failed; the draft is kept for correction.
    Failed(ApiError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

#[derive(Debug, Clone)]
pub struct CampaignForm {
    mode: FormMode,
    draft: Draft,
    error: Option<String>,
    notification: Option<Notification>,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignForm {
    /// An empty form in create mode.
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            draft: Draft::default(),
            error: None,
            notification: None,
        }
    }

    /// A form hydrated from `campaign` (edit mode when it has an id).
    pub fn editing(campaign: &Campaign) -> Self {
        let mut form = Self::new();
        form.set_campaign(Some(campaign));
        form
    }

    /// Switch the campaign being edited. `None` returns to an empty
    /// create-mode draft.
    pub fn set_campaign(&mut self, campaign: Option<&Campaign>) {
        match campaign {
            Some(campaign) => {
                self.mode = match campaign.id {
                    Some(id) => FormMode::Edit { id },
                    None => FormMode::Create,
                };
                self.draft = Draft::from_campaign(campaign);
            }
            None => {
                self.mode = FormMode::Create;
                self.draft = Draft::default();
            }
        }
        self.error = None;
        self.notification = None;
        debug!(mode = ?self.mode, "form hydrated");
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.draft.schedules
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Campaign",
            FormMode::Edit { .. } => "Edit Campaign",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Campaign",
            FormMode::Edit { .. } => "Update Campaign",
        }
    }

    /// The latest validation or submission error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drop the notification once its auto-hide time has passed.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| !n.is_visible_at(now))
        {
            self.notification = None;
        }
    }

    pub fn set_type(&mut self, campaign_type: CampaignType) {
        self.draft.campaign_type = Some(campaign_type);
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.draft.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.draft.end_date = date;
    }

    /// Append an empty schedule row.
    pub fn add_schedule(&mut self) {
        let mut schedules = self.draft.schedules.clone();
        schedules.push(Schedule::default());
        self.draft.schedules = schedules;
    }

    /// Remove the row at `index`. Out-of-range indices are ignored.
    pub fn remove_schedule(&mut self, index: usize) -> bool {
        if index >= self.draft.schedules.len() {
            return false;
        }
        self.draft.schedules = self
            .draft
            .schedules
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, s)| s.clone())
            .collect();
        true
    }

    /// Replace one field of the row at `index`.
    ///
    /// # Panics
    /// If `index` does not name a rendered row.
    pub fn set_schedule_field(&mut self, index: usize, field: ScheduleField) {
        let len = self.draft.schedules.len();
        assert!(index < len, "schedule index {index} out of range for {len} rows");
        self.draft.schedules = self
            .draft
            .schedules
            .iter()
            .enumerate()
            .map(|(i, s)| if i == index { field.apply(s) } else { s.clone() })
            .collect();
    }

    /// Check that every schedule row has its day and both times.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        match self.draft.schedules.iter().position(|s| !s.is_complete()) {
            Some(index) => {
                let err = ValidationError::IncompleteSchedule { index };
                self.error = Some(err.to_string());
                Err(err)
            }
            None => {
                self.error = None;
                Ok(())
            }
        }
    }

    /// Validate, then create or update through `api`.
    ///
    /// `on_success` runs exactly once with the server's copy when the call
    /// succeeds. On failure the draft is left as it was.
    pub fn submit<A: CampaignApi + ?Sized>(
        &mut self,
        api: &A,
        on_success: impl FnOnce(&Campaign),
    ) -> SubmitOutcome {
        if let Err(err) = self.validate() {
            debug!(error = %err, "submit blocked by validation");
            return SubmitOutcome::Invalid(err);
        }

        let result = match self.mode {
            FormMode::Create => self
                .draft
                .to_campaign(None)
                .and_then(|campaign| api.create_campaign(&campaign)),
            FormMode::Edit { id } => self
                .draft
                .to_campaign(Some(id))
                .and_then(|campaign| api.update_campaign(id, &campaign)),
        };

        match result {
            Ok(saved) => {
                info!(id = ?saved.id, mode = ?self.mode, "campaign saved");
                self.error = None;
                on_success(&saved);
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                let message = match &err {
                    ApiError::BadRequest { message } => message.clone(),
                    _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
                };
                self.notification = Some(Notification::error(message.clone()));
                self.error = Some(message);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
