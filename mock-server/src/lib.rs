use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const DATE_RANGE_INVALID: &str = "Date range invalid";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedules: Vec<Schedule>,
}

/// Body of POST and PUT. An `id` in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

impl CampaignInput {
    fn validate(&self) -> Result<(), Rejection> {
        if self.end_date < self.start_date {
            return Err(Rejection::BadRequest(DATE_RANGE_INVALID.to_string()));
        }
        Ok(())
    }

    fn into_campaign(self, id: i64) -> Campaign {
        Campaign {
            id,
            campaign_type: self.campaign_type,
            start_date: self.start_date,
            end_date: self.end_date,
            schedules: self.schedules,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignList {
    pub campaigns: Vec<Campaign>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug)]
pub enum Rejection {
    BadRequest(String),
    NotFound,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Rejection::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
            }
            Rejection::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Campaigns keyed by id; ids start at 1 and are never reused.
#[derive(Debug)]
pub struct Store {
    next_id: i64,
    campaigns: BTreeMap<i64, Campaign>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            campaigns: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route("/campaigns/{id}", put(update_campaign).delete(delete_campaign))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_campaigns(State(db): State<Db>) -> Json<CampaignList> {
    let store = db.read().await;
    Json(CampaignList {
        campaigns: store.campaigns.values().cloned().collect(),
    })
}

async fn create_campaign(
    State(db): State<Db>,
    Json(input): Json<CampaignInput>,
) -> Result<(StatusCode, Json<Campaign>), Rejection> {
    input.validate()?;
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let campaign = input.into_campaign(id);
    store.campaigns.insert(id, campaign.clone());
    info!(id, "campaign created");
    Ok((StatusCode::CREATED, Json(campaign)))
}

async fn update_campaign(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<CampaignInput>,
) -> Result<Json<Campaign>, Rejection> {
    let mut store = db.write().await;
    let slot = store.campaigns.get_mut(&id).ok_or(Rejection::NotFound)?;
    input.validate()?;
    *slot = input.into_campaign(id);
    info!(id, "campaign updated");
    Ok(Json(slot.clone()))
}

async fn delete_campaign(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Rejection> {
    let mut store = db.write().await;
    store.campaigns.remove(&id).ok_or(Rejection::NotFound)?;
    info!(id, "campaign deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, end: &str) -> CampaignInput {
        serde_json::from_value(serde_json::json!({
            "type": "Cost per Order",
            "startDate": start,
            "endDate": end,
        }))
        .unwrap()
    }

    #[test]
    fn campaign_serializes_to_json() {
        let campaign = input("2024-01-01", "2024-01-31").into_campaign(4);
        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["type"], "Cost per Order");
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["schedules"], serde_json::json!([]));
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: CampaignInput = serde_json::from_str(
            r#"{"id":99,"type":"Cost per Click","startDate":"2024-01-01","endDate":"2024-01-02","schedules":[{"dayOfWeek":"Monday","startTime":"09:00","endTime":"17:00"}]}"#,
        )
        .unwrap();
        let campaign = input.into_campaign(1);
        assert_eq!(campaign.id, 1);
        assert_eq!(campaign.schedules[0].day_of_week, "Monday");
    }

    #[test]
    fn input_rejects_missing_type() {
        let result: Result<CampaignInput, _> =
            serde_json::from_str(r#"{"startDate":"2024-01-01","endDate":"2024-01-02"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn same_day_range_is_valid() {
        assert!(input("2024-01-01", "2024-01-01").validate().is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        match input("2024-02-01", "2024-01-01").validate() {
            Err(Rejection::BadRequest(message)) => assert_eq!(message, DATE_RANGE_INVALID),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn store_ids_start_at_one() {
        let store = Store::default();
        assert_eq!(store.next_id, 1);
        assert!(store.campaigns.is_empty());
    }
}
