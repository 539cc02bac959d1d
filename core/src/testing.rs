//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{NaiveDate, NaiveTime};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Campaign, CampaignListResponse, CampaignType, DayOfWeek, Schedule};

/// Replies with queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.replies.borrow_mut().push_back(Ok(response));
    }

    pub fn push_failure(&self, reason: &str) {
        self.replies.borrow_mut().push_back(Err(reason.to_string()));
    }

    pub fn push_list(&self, campaigns: &[Campaign]) {
        let body = CampaignListResponse {
            campaigns: campaigns.to_vec(),
        };
        self.push(HttpResponse::new(200, serde_json::to_string(&body).unwrap()));
    }

    pub fn push_campaign(&self, status: u16, campaign: &Campaign) {
        self.push(HttpResponse::new(status, serde_json::to_string(campaign).unwrap()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: HttpMethod) -> usize {
        self.requests.borrow().iter().filter(|r| r.method == method).count()
    }

    pub fn last_body(&self) -> serde_json::Value {
        let requests = self.requests.borrow();
        let body = requests
            .last()
            .and_then(|r| r.body.as_deref())
            .expect("last request has a body");
        serde_json::from_str(body).unwrap()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(ApiError::Transport(reason)),
            None => panic!("no scripted reply for {} {}", request.method, request.path),
        }
    }
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_campaign(id: Option<i64>) -> Campaign {
    Campaign {
        id,
        campaign_type: CampaignType::CostPerOrder,
        start_date: ymd(2024, 1, 15),
        end_date: ymd(2024, 2, 15),
        schedules: vec![Schedule::new(DayOfWeek::Wednesday, hm(8, 0), hm(11, 0))],
    }
}
