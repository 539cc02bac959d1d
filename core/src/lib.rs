//! Client core for the campaigns service.
//!
//! # Overview
//! Campaigns have a promotion type, a date range, and weekly schedules. This
//! crate holds everything a front end needs to list, create, edit, and delete
//! them, short of drawing widgets:
//! - `CampaignClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `Transport` performs the round-trip; `UreqTransport` is the blocking
//!   HTTP implementation.
//! - `CampaignService` pairs the two behind the `CampaignApi` trait.
//! - `CampaignForm`, `CampaignList`, and `CampaignPage` hold the presentation
//!   state and drive `CampaignApi` in response to user actions.
//!
//! # Design
//! - Everything runs on the caller's thread; a call blocks until the server
//!   answers. There is no retry, caching, or request de-duplication.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod notification;
pub mod page;
pub mod service;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::CampaignClient;
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError};
pub use form::{CampaignForm, FormMode, ScheduleField, SubmitOutcome};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list::{CampaignList, CampaignRow};
pub use notification::Notification;
pub use page::CampaignPage;
pub use service::{CampaignApi, CampaignService};
pub use transport::{Transport, UreqTransport};
pub use types::{Campaign, CampaignListResponse, CampaignType, DayOfWeek, ErrorBody, Schedule};
