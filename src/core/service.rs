use crate::core::calculator::DeliveryPriceCalculator;
use crate::domain::model::{DeliveryPriceRequest, DeliveryPriceResponse};
use crate::domain::ports::VenueDataProvider;
use crate::domain::venue::VenueRegistry;
use crate::utils::error::{ErrorCategory, Result};

/// Fetches venue data for a request and prices it.
pub struct DeliveryPriceService<P: VenueDataProvider> {
    provider: P,
    registry: VenueRegistry,
    calculator: DeliveryPriceCalculator,
}

impl<P: VenueDataProvider> DeliveryPriceService<P> {
    pub fn new(provider: P, registry: VenueRegistry) -> Self {
        Self {
            provider,
            registry,
            calculator: DeliveryPriceCalculator::new(),
        }
    }

    pub fn registry(&self) -> &VenueRegistry {
        &self.registry
    }

    /// Validates raw caller input and prices it.
    pub async fn quote_raw(
        &self,
        venue_slug: &str,
        cart_value: i64,
        user_lat: f64,
        user_lon: f64,
    ) -> Result<DeliveryPriceResponse> {
        let request =
            DeliveryPriceRequest::new(venue_slug, cart_value, user_lat, user_lon, &self.registry)?;
        self.quote(&request).await
    }

    pub async fn quote(&self, request: &DeliveryPriceRequest) -> Result<DeliveryPriceResponse> {
        let slug = request.venue_slug();
        tracing::debug!(venue = slug, "Fetching venue data");

        let fetched = tokio::try_join!(
            self.provider.fetch_static(slug),
            self.provider.fetch_dynamic(slug)
        );
        let (static_data, dynamic_data) = match fetched {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(venue = slug, "❌ Venue data fetch failed: {}", e);
                return Err(e);
            }
        };

        let result = self
            .calculator
            .calculate(request, &static_data, &dynamic_data);

        match &result {
            Ok(response) => tracing::info!(
                venue = slug,
                distance = response.delivery.distance,
                total = response.total_price,
                "✅ Delivery price calculated"
            ),
            Err(e) if e.category() == ErrorCategory::Business => {
                tracing::warn!(venue = slug, "Delivery rejected: {}", e)
            }
            Err(e) => tracing::error!(venue = slug, "❌ Pricing failed: {}", e),
        }

        result
    }
}
