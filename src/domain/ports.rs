use crate::domain::model::Listing;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage collaborator seam. Implementations must return only visible
/// listings from `fetch_visible_listings`, ordered by `created_at` descending.
/// `find_by_registration_code` is a keyed lookup, not a table scan.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn fetch_visible_listings(&self) -> Result<Vec<Listing>>;
    async fn find_by_registration_code(&self, code: &str) -> Result<Option<Listing>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Listing>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
}
