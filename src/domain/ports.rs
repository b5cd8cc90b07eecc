use crate::domain::model::{VenueDynamicData, VenueStaticData};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of per-venue data. Implementations own their transport, retries
/// and timeouts; the pricing core only sees the decoded values.
#[async_trait]
pub trait VenueDataProvider: Send + Sync {
    async fn fetch_static(&self, venue_slug: &str) -> Result<VenueStaticData>;
    async fn fetch_dynamic(&self, venue_slug: &str) -> Result<VenueDynamicData>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
