//! Wires the campaign list and the campaign form together.
//!
//! The page owns the only state the two share: which campaign, if any, is
//! selected for editing. Picking a row hydrates the form; a successful
//! submit clears the selection, which returns the form to create mode.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::form::{CampaignForm, SubmitOutcome};
use crate::list::CampaignList;
use crate::service::CampaignApi;
use crate::types::Campaign;

pub struct CampaignPage<A> {
    api: A,
    list: CampaignList,
    form: CampaignForm,
    selected: Option<Campaign>,
    refresh_error: Option<ApiError>,
}

impl<A: CampaignApi> CampaignPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: CampaignList::new(),
            form: CampaignForm::new(),
            selected: None,
            refresh_error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn list(&self) -> &CampaignList {
        &self.list
    }

    pub fn form(&self) -> &CampaignForm {
        &self.form
    }

    /// Draft editing goes through here; selection changes do not.
    pub fn form_mut(&mut self) -> &mut CampaignForm {
        &mut self.form
    }

    pub fn selected(&self) -> Option<&Campaign> {
        self.selected.as_ref()
    }

    /// Why the re-fetch after the last successful submit failed, if it did.
    /// Cleared by the next successful fetch.
    pub fn refresh_error(&self) -> Option<&ApiError> {
        self.refresh_error.as_ref()
    }

    /// Initial fetch when the page is first shown.
    pub fn mount(&mut self) -> Result<(), ApiError> {
        self.list.refresh(&self.api)?;
        self.refresh_error = None;
        Ok(())
    }

    /// Select the listed campaign with `id` for editing. Returns false when
    /// no such row is listed.
    pub fn edit(&mut self, id: i64) -> bool {
        let Some(campaign) = self.list.edit(id).cloned() else {
            return false;
        };
        debug!(id, "campaign selected for editing");
        self.form.set_campaign(Some(&campaign));
        self.selected = Some(campaign);
        true
    }

    /// Submit the form. On success the selection is cleared and the list
    /// re-fetched. The outcome describes the save only; a failed re-fetch is
    /// kept in `refresh_error` and the table stays as it was.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut succeeded = false;
        let outcome = self.form.submit(&self.api, |_| succeeded = true);
        if succeeded {
            self.clear_selection();
            match self.list.refresh(&self.api) {
                Ok(()) => self.refresh_error = None,
                Err(err) => {
                    warn!(error = %err, "list refresh after submit failed");
                    self.refresh_error = Some(err);
                }
            }
        }
        outcome
    }

    pub fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        self.list.delete(&self.api, id)?;
        self.refresh_error = None;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.form.set_campaign(None);
    }
}
