//! Stateless HTTP request builder and response parser for the campaigns API.
//!
//! # Design
//! `CampaignClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Nothing here retries, caches, or de-duplicates.

use crate::error::{ApiError, DEFAULT_BAD_REQUEST_MESSAGE};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Campaign, CampaignListResponse, ErrorBody};

/// Synchronous, stateless client for the campaigns API.
#[derive(Debug, Clone)]
pub struct CampaignClient {
    base_url: String,
}

impl CampaignClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_campaigns(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/campaigns", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The body never carries an `id`; the server assigns one.
    pub fn build_create_campaign(&self, input: &Campaign) -> Result<HttpRequest, ApiError> {
        let body = Campaign {
            id: None,
            ..input.clone()
        };
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/campaigns", self.base_url),
            headers: json_headers(),
            body: Some(to_json(&body)?),
        })
    }

    pub fn build_update_campaign(&self, id: i64, input: &Campaign) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/campaigns/{id}", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_campaign(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/campaigns/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_campaigns(&self, response: HttpResponse) -> Result<Vec<Campaign>, ApiError> {
        check_status(&response, &[200])?;
        let list: CampaignListResponse = from_json(&response.body)?;
        Ok(list.campaigns)
    }

    pub fn parse_create_campaign(&self, response: HttpResponse) -> Result<Campaign, ApiError> {
        check_status(&response, &[200, 201])?;
        from_json(&response.body)
    }

    pub fn parse_update_campaign(&self, response: HttpResponse) -> Result<Campaign, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_delete_campaign(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(value: &Campaign) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    match response.status {
        400 => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|e| e.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_BAD_REQUEST_MESSAGE.to_string());
            Err(ApiError::BadRequest { message })
        }
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
