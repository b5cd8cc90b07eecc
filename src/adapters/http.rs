use crate::domain::model::{Coordinates, DistanceRange, VenueDynamicData, VenueStaticData};
use crate::domain::ports::{ConfigProvider, VenueDataProvider};
use crate::utils::error::{PricingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StaticPayload {
    venue_raw: StaticVenueRaw,
}

#[derive(Debug, Deserialize)]
struct StaticVenueRaw {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    /// `[longitude, latitude]`
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct DynamicPayload {
    venue_raw: DynamicVenueRaw,
}

#[derive(Debug, Deserialize)]
struct DynamicVenueRaw {
    delivery_specs: DeliverySpecs,
}

#[derive(Debug, Deserialize)]
struct DeliverySpecs {
    order_minimum_no_surcharge: f64,
    delivery_pricing: DeliveryPricing,
}

#[derive(Debug, Deserialize)]
struct DeliveryPricing {
    base_price: f64,
    distance_ranges: Vec<DistanceRange>,
}

/// Venue API client: `GET {base_url}/{slug}/static` and `/dynamic`.
#[derive(Debug, Clone)]
pub struct VenueApiClient {
    client: Client,
    base_url: String,
}

impl VenueApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.upstream_base_url()))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, venue_slug: &str, kind: &str) -> String {
        format!("{}/{}/{}", self.base_url, venue_slug, kind)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PricingError::upstream(format!(
                "External API returned error: {}",
                status
            )));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(PricingError::upstream(format!(
                "External API returned status {} but the body is empty",
                status.as_u16()
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            PricingError::upstream(format!("Error parsing JSON response from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl VenueDataProvider for VenueApiClient {
    async fn fetch_static(&self, venue_slug: &str) -> Result<VenueStaticData> {
        let payload: StaticPayload = self.get_json(&self.endpoint(venue_slug, "static")).await?;

        let coordinates = match payload.venue_raw.location.coordinates.as_slice() {
            [longitude, latitude, ..] => Coordinates::from_lon_lat(*longitude, *latitude)
                .map_err(|e| {
                    PricingError::upstream(format!(
                        "Invalid venue coordinates for {}: {}",
                        venue_slug, e
                    ))
                })?,
            _ => {
                return Err(PricingError::upstream(format!(
                    "Missing venue_raw.location.coordinates for {}",
                    venue_slug
                )))
            }
        };

        Ok(VenueStaticData { coordinates })
    }

    async fn fetch_dynamic(&self, venue_slug: &str) -> Result<VenueDynamicData> {
        let payload: DynamicPayload = self
            .get_json(&self.endpoint(venue_slug, "dynamic"))
            .await?;

        let specs = payload.venue_raw.delivery_specs;
        VenueDynamicData::new(
            specs.order_minimum_no_surcharge,
            specs.delivery_pricing.base_price,
            specs.delivery_pricing.distance_ranges,
        )
        .map_err(|e| {
            PricingError::upstream(format!(
                "Invalid delivery pricing for {}: {}",
                venue_slug, e
            ))
        })
    }
}
