//! The four campaign operations as one call each.
//!
//! `CampaignApi` is the seam the form, list, and page depend on.
//! `CampaignService` implements it by pairing a `CampaignClient` with a
//! `Transport`: build, execute, parse. Errors are propagated unchanged.

use tracing::{debug, warn};

use crate::client::CampaignClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Campaign;

pub trait CampaignApi {
    fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError>;
    fn create_campaign(&self, campaign: &Campaign) -> Result<Campaign, ApiError>;
    fn update_campaign(&self, id: i64, campaign: &Campaign) -> Result<Campaign, ApiError>;
    fn delete_campaign(&self, id: i64) -> Result<(), ApiError>;
}

impl<A: CampaignApi + ?Sized> CampaignApi for &A {
    fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        (**self).list_campaigns()
    }

    fn create_campaign(&self, campaign: &Campaign) -> Result<Campaign, ApiError> {
        (**self).create_campaign(campaign)
    }

    fn update_campaign(&self, id: i64, campaign: &Campaign) -> Result<Campaign, ApiError> {
        (**self).update_campaign(id, campaign)
    }

    fn delete_campaign(&self, id: i64) -> Result<(), ApiError> {
        (**self).delete_campaign(id)
    }
}

#[derive(Debug, Clone)]
pub struct CampaignService<T> {
    client: CampaignClient,
    transport: T,
}

impl CampaignService<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(CampaignClient::new(&config.base_url), UreqTransport::new(config))
    }
}

impl<T: Transport> CampaignService<T> {
    pub fn new(client: CampaignClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CampaignClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn round_trip<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&CampaignClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");

        let result = self
            .transport
            .execute(request)
            .and_then(|response| {
                debug!(%method, %path, status = response.status, "received response");
                parse(&self.client, response)
            });
        if let Err(err) = &result {
            warn!(%method, %path, error = %err, "request failed");
        }
        result
    }
}

impl<T: Transport> CampaignApi for CampaignService<T> {
    fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        let request = self.client.build_list_campaigns();
        self.round_trip(request, CampaignClient::parse_list_campaigns)
    }

    fn create_campaign(&self, campaign: &Campaign) -> Result<Campaign, ApiError> {
        let request = self.client.build_create_campaign(campaign)?;
        self.round_trip(request, CampaignClient::parse_create_campaign)
    }

    fn update_campaign(&self, id: i64, campaign: &Campaign) -> Result<Campaign, ApiError> {
        let request = self.client.build_update_campaign(id, campaign)?;
        self.round_trip(request, CampaignClient::parse_update_campaign)
    }

    fn delete_campaign(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_campaign(id);
        self.round_trip(request, CampaignClient::parse_delete_campaign)
    }
}
