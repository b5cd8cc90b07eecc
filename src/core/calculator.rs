use crate::core::{geo, pricing, tiers};
use crate::domain::model::{
    Delivery, DeliveryPriceRequest, DeliveryPriceResponse, VenueDynamicData, VenueStaticData,
};
use crate::utils::error::Result;

/// Pure pricing over already-fetched venue data. Holds no state, so one
/// instance can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryPriceCalculator;

impl DeliveryPriceCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        request: &DeliveryPriceRequest,
        static_data: &VenueStaticData,
        dynamic_data: &VenueDynamicData,
    ) -> Result<DeliveryPriceResponse> {
        let cart_value = request.cart_value();

        let surcharge =
            pricing::small_order_surcharge(dynamic_data.order_minimum_no_surcharge, cart_value);

        let distance = geo::distance_meters(static_data.coordinates, request.user_location());
        let matched = tiers::resolve_tier(distance, &dynamic_data.distance_ranges)?;

        let fee = pricing::delivery_fee(dynamic_data.base_price, matched.tier, distance);
        let total = pricing::total_price(cart_value, surcharge, fee);

        tracing::debug!(
            venue = request.venue_slug(),
            distance,
            tier = matched.index,
            flag = ?matched.tier.flag,
            fee,
            surcharge,
            total,
            "Calculated delivery price"
        );

        Ok(DeliveryPriceResponse {
            total_price: total,
            small_order_surcharge: surcharge,
            cart_value,
            delivery: Delivery { fee, distance },
        })
    }
}
