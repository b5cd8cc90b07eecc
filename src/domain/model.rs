use crate::domain::venue::VenueRegistry;
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_at_least, validate_range};
use serde::{Deserialize, Serialize};

/// A validated point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_range("latitude", "Latitude", latitude, -90.0, 90.0)?;
        validate_range("longitude", "Longitude", longitude, -180.0, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// GeoJSON order, as the venue API sends it.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Result<Self> {
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A price request whose every field has already passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryPriceRequest {
    venue_slug: String,
    cart_value: u64,
    user_location: Coordinates,
}

impl DeliveryPriceRequest {
    pub fn new(
        venue_slug: impl Into<String>,
        cart_value: i64,
        user_lat: f64,
        user_lon: f64,
        registry: &VenueRegistry,
    ) -> Result<Self> {
        let venue_slug = venue_slug.into();

        if venue_slug.is_empty() {
            return Err(PricingError::validation(
                "venue_slug",
                "Venue slug must not be empty",
            ));
        }
        if !registry.contains(&venue_slug) {
            return Err(PricingError::validation(
                "venue_slug",
                format!("Invalid venue slug: {}", venue_slug),
            ));
        }

        validate_at_least("cart_value", "Cart value", cart_value, 0)?;
        validate_range("user_lat", "Latitude", user_lat, -90.0, 90.0)?;
        validate_range("user_lon", "Longitude", user_lon, -180.0, 180.0)?;

        Ok(Self {
            venue_slug,
            cart_value: cart_value.unsigned_abs(),
            user_location: Coordinates {
                latitude: user_lat,
                longitude: user_lon,
            },
        })
    }

    pub fn venue_slug(&self) -> &str {
        &self.venue_slug
    }

    pub fn cart_value(&self) -> u64 {
        self.cart_value
    }

    pub fn user_location(&self) -> Coordinates {
        self.user_location
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueStaticData {
    pub coordinates: Coordinates,
}

/// One entry of `delivery_pricing.distance_ranges` as the venue API sends it.
/// A `max` of 0 marks the range beyond which delivery is impossible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
    pub a: f64,
    pub b: f64,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundedTier {
    pub min: f64,
    pub max: f64,
    /// Flat add-on to the base price.
    pub a: f64,
    /// Multiplier applied per ten meters of distance.
    pub b: f64,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistanceTier {
    /// Deliverable for `min <= distance < max`.
    Bounded(BoundedTier),
    /// Anything at or beyond `min` cannot be delivered.
    Unreachable { min: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueDynamicData {
    pub order_minimum_no_surcharge: f64,
    pub base_price: f64,
    pub distance_ranges: Vec<DistanceTier>,
}

impl VenueDynamicData {
    /// Converts raw ranges into typed tiers, rejecting data that could only
    /// ever be priced incorrectly. Gaps between ranges are left for the tier
    /// resolver to report.
    pub fn new(
        order_minimum_no_surcharge: f64,
        base_price: f64,
        distance_ranges: Vec<DistanceRange>,
    ) -> Result<Self> {
        if !order_minimum_no_surcharge.is_finite() {
            return Err(PricingError::validation(
                "order_minimum_no_surcharge",
                "Value must be a finite number",
            ));
        }
        if !base_price.is_finite() {
            return Err(PricingError::validation(
                "base_price",
                "Value must be a finite number",
            ));
        }
        if distance_ranges.is_empty() {
            return Err(PricingError::validation(
                "distance_ranges",
                "At least one distance range is required",
            ));
        }

        let last = distance_ranges.len() - 1;
        let tiers = distance_ranges
            .into_iter()
            .enumerate()
            .map(|(index, range)| to_tier(index, index == last, range))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            order_minimum_no_surcharge,
            base_price,
            distance_ranges: tiers,
        })
    }
}

fn to_tier(index: usize, is_last: bool, range: DistanceRange) -> Result<DistanceTier> {
    let field = format!("distance_ranges[{}]", index);

    if !range.min.is_finite() || range.min < 0.0 || !range.max.is_finite() {
        return Err(PricingError::validation(
            field,
            "Range bounds must be finite and non-negative",
        ));
    }

    if range.max == 0.0 {
        if !is_last {
            return Err(PricingError::validation(
                field,
                "Only the final range may have max = 0",
            ));
        }
        return Ok(DistanceTier::Unreachable { min: range.min });
    }

    if range.max <= range.min {
        return Err(PricingError::validation(
            field,
            format!("max ({}) must be greater than min ({})", range.max, range.min),
        ));
    }
    if !range.a.is_finite() || !range.b.is_finite() {
        return Err(PricingError::validation(
            field,
            "Fee coefficients must be finite numbers",
        ));
    }

    Ok(DistanceTier::Bounded(BoundedTier {
        min: range.min,
        max: range.max,
        a: range.a,
        b: range.b,
        flag: range.flag,
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub fee: f64,
    pub distance: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPriceResponse {
    pub total_price: f64,
    pub small_order_surcharge: f64,
    pub cart_value: u64,
    pub delivery: Delivery,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::venue::{BERLIN, HELSINKI, STOCKHOLM};

    fn range(min: f64, max: f64, a: f64, b: f64) -> DistanceRange {
        DistanceRange {
            min,
            max,
            a,
            b,
            flag: None,
        }
    }

    fn field_of(err: PricingError) -> (String, String) {
        match err {
            PricingError::Validation { field, message } => (field, message),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let registry = VenueRegistry::default();
        let request = DeliveryPriceRequest::new(HELSINKI, 1000, 60.17094, 24.93087, &registry)
            .unwrap();

        assert_eq!(request.venue_slug(), HELSINKI);
        assert_eq!(request.cart_value(), 1000);
        assert_eq!(request.user_location().latitude(), 60.17094);
        assert_eq!(request.user_location().longitude(), 24.93087);
    }

    #[test]
    fn test_request_accepts_border_values() {
        let registry = VenueRegistry::default();
        assert!(DeliveryPriceRequest::new(STOCKHOLM, 0, 90.0, 180.0, &registry).is_ok());
        assert!(DeliveryPriceRequest::new(STOCKHOLM, 0, -90.0, -180.0, &registry).is_ok());
    }

    #[test]
    fn test_request_rejects_empty_slug() {
        let registry = VenueRegistry::default();
        let err = DeliveryPriceRequest::new("", 100, 52.52, 13.405, &registry).unwrap_err();
        let (field, message) = field_of(err);
        assert_eq!(field, "venue_slug");
        assert_eq!(message, "Venue slug must not be empty");
    }

    #[test]
    fn test_request_rejects_unknown_slug() {
        let registry = VenueRegistry::default();
        let err =
            DeliveryPriceRequest::new("invalidVenue", 100, 52.52, 13.405, &registry).unwrap_err();
        let (field, message) = field_of(err);
        assert_eq!(field, "venue_slug");
        assert_eq!(message, "Invalid venue slug: invalidVenue");
    }

    #[test]
    fn test_request_rejects_negative_cart_value() {
        let registry = VenueRegistry::default();
        let err = DeliveryPriceRequest::new(HELSINKI, -1, 52.52, 13.405, &registry).unwrap_err();
        let (field, message) = field_of(err);
        assert_eq!(field, "cart_value");
        assert_eq!(message, "Cart value must be equal or greater than 0");
    }

    #[test]
    fn test_request_rejects_out_of_range_latitude() {
        let registry = VenueRegistry::default();
        let err = DeliveryPriceRequest::new(BERLIN, 0, 90.1, 13.405, &registry).unwrap_err();
        let (field, message) = field_of(err);
        assert_eq!(field, "user_lat");
        assert_eq!(
            message,
            "Latitude must be greater than or equal to -90 and less than or equal to 90"
        );
    }

    #[test]
    fn test_request_rejects_out_of_range_longitude() {
        let registry = VenueRegistry::default();
        let err = DeliveryPriceRequest::new(STOCKHOLM, 0, 90.0, -180.005, &registry).unwrap_err();
        let (field, message) = field_of(err);
        assert_eq!(field, "user_lon");
        assert_eq!(
            message,
            "Longitude must be greater than or equal to -180 and less than or equal to 180"
        );
    }

    #[test]
    fn test_request_checks_slug_before_cart_value() {
        let registry = VenueRegistry::default();
        let err = DeliveryPriceRequest::new("nope", -5, 100.0, 200.0, &registry).unwrap_err();
        assert_eq!(field_of(err).0, "venue_slug");
    }

    #[test]
    fn test_request_rejects_nan_coordinates() {
        let registry = VenueRegistry::default();
        assert!(DeliveryPriceRequest::new(HELSINKI, 0, f64::NAN, 0.0, &registry).is_err());
        assert!(DeliveryPriceRequest::new(HELSINKI, 0, 0.0, f64::NAN, &registry).is_err());
    }

    #[test]
    fn test_coordinates_from_lon_lat_swaps_order() {
        let coords = Coordinates::from_lon_lat(24.928135, 60.170121).unwrap();
        assert_eq!(coords.latitude(), 60.170121);
        assert_eq!(coords.longitude(), 24.928135);
        assert!(Coordinates::from_lon_lat(24.9, 95.0).is_err());
    }

    #[test]
    fn test_dynamic_data_converts_sentinel() {
        let data = VenueDynamicData::new(
            1000.0,
            190.0,
            vec![range(0.0, 500.0, 0.0, 0.0), range(500.0, 0.0, 0.0, 0.0)],
        )
        .unwrap();

        assert_eq!(data.distance_ranges.len(), 2);
        assert!(matches!(data.distance_ranges[0], DistanceTier::Bounded(_)));
        assert_eq!(
            data.distance_ranges[1],
            DistanceTier::Unreachable { min: 500.0 }
        );
    }

    #[test]
    fn test_bounded_tier_keeps_upstream_flag() {
        let flagged = DistanceRange {
            flag: Some("rush_hour".to_string()),
            ..range(0.0, 500.0, 0.0, 0.0)
        };
        let data = VenueDynamicData::new(1000.0, 190.0, vec![flagged]).unwrap();

        match &data.distance_ranges[0] {
            DistanceTier::Bounded(tier) => assert_eq!(tier.flag.as_deref(), Some("rush_hour")),
            other => panic!("expected bounded tier, got {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_data_rejects_sentinel_before_end() {
        let err = VenueDynamicData::new(
            1000.0,
            190.0,
            vec![range(0.0, 0.0, 0.0, 0.0), range(0.0, 500.0, 0.0, 0.0)],
        )
        .unwrap_err();
        assert_eq!(field_of(err).0, "distance_ranges[0]");
    }

    #[test]
    fn test_dynamic_data_rejects_empty_and_inverted_ranges() {
        assert!(VenueDynamicData::new(1000.0, 190.0, vec![]).is_err());

        let err =
            VenueDynamicData::new(1000.0, 190.0, vec![range(500.0, 100.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(field_of(err).0, "distance_ranges[0]");
    }

    #[test]
    fn test_response_serializes_snake_case() {
        let response = DeliveryPriceResponse {
            total_price: 1190.0,
            small_order_surcharge: 0.0,
            cart_value: 1000,
            delivery: Delivery {
                fee: 190.0,
                distance: 177,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_price": 1190.0,
                "small_order_surcharge": 0.0,
                "cart_value": 1000,
                "delivery": {"fee": 190.0, "distance": 177}
            })
        );
    }
}
