//! Read-only snapshot of all campaigns and its table projection.
//!
//! # Design
//! The snapshot is replaced wholesale by every successful fetch; rows are
//! never patched locally. Deleting re-fetches rather than removing the row,
//! so what is shown is always what the server last returned.

use tracing::debug;

use crate::error::ApiError;
use crate::service::CampaignApi;
use crate::types::{Campaign, DayOfWeek, Schedule, TIME_FORMAT};

/// Column headers of the campaign table.
pub const HEADERS: [&str; 5] = ["Type", "Start Date", "End Date", "Schedules", "Actions"];

const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// One table row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRow {
    pub id: Option<i64>,
    pub campaign_type: String,
    pub start_date: String,
    pub end_date: String,
    /// One `"<Day>: <start> - <end>"` line per schedule, in order.
    pub schedules: Vec<String>,
}

impl From<&Campaign> for CampaignRow {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            campaign_type: campaign.campaign_type.to_string(),
            start_date: campaign.start_date.format(DISPLAY_DATE_FORMAT).to_string(),
            end_date: campaign.end_date.format(DISPLAY_DATE_FORMAT).to_string(),
            schedules: campaign.schedules.iter().map(schedule_line).collect(),
        }
    }
}

fn schedule_line(schedule: &Schedule) -> String {
    let time = |t: Option<chrono::NaiveTime>| {
        t.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default()
    };
    let day = schedule
        .day_of_week
        .as_ref()
        .map(DayOfWeek::as_str)
        .unwrap_or_default();
    format!("{day}: {} - {}", time(schedule.start_time), time(schedule.end_time))
}

#[derive(Debug, Clone, Default)]
pub struct CampaignList {
    campaigns: Vec<Campaign>,
}

impl CampaignList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Fetch all campaigns and replace the snapshot. On failure the previous
    /// snapshot stays.
    pub fn refresh<A: CampaignApi + ?Sized>(&mut self, api: &A) -> Result<(), ApiError> {
        self.campaigns = api.list_campaigns()?;
        debug!(count = self.campaigns.len(), "campaign list refreshed");
        Ok(())
    }

    /// Delete `id`, then re-fetch once. A failed delete skips the re-fetch.
    pub fn delete<A: CampaignApi + ?Sized>(&mut self, api: &A, id: i64) -> Result<(), ApiError> {
        api.delete_campaign(id)?;
        debug!(id, "campaign deleted");
        self.refresh(api)
    }

    /// The row the user chose to edit. The list itself does not change.
    pub fn edit(&self, id: i64) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == Some(id))
    }

    pub fn rows(&self) -> Vec<CampaignRow> {
        self.campaigns.iter().map(CampaignRow::from).collect()
    }
}
