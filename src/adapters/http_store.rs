use crate::domain::model::Listing;
use crate::domain::ports::{ConfigProvider, ListingStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// `ListingStore` over a JSON collection endpoint:
///   GET {endpoint}                          -> all listings
///   GET {endpoint}?registration_code=<code> -> listings matching the code
///   GET {endpoint}/{id}                     -> one listing or 404
pub struct HttpListingStore {
    client: Client,
    endpoint: String,
}

impl HttpListingStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint())
    }
}

#[async_trait]
impl ListingStore for HttpListingStore {
    async fn fetch_visible_listings(&self) -> Result<Vec<Listing>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching listing snapshot");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let mut listings: Vec<Listing> = response.json().await?;
        // The port contract regardless of backend: visible entries only,
        // newest first.
        listings.retain(|l| l.visible);
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = listings.len(), "listing snapshot fetched");
        Ok(listings)
    }

    async fn find_by_registration_code(&self, code: &str) -> Result<Option<Listing>> {
        let url = Url::parse_with_params(&self.endpoint, &[("registration_code", code)])?;
        let response = self.client.get(url).send().await?.error_for_status()?;

        let matches: Vec<Listing> = response.json().await?;
        Ok(matches.into_iter().find(|l| l.registration_code == code))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Listing>> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let listing: Listing = response.error_for_status()?.json().await?;
        Ok(Some(listing))
    }
}
