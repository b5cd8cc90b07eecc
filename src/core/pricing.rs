use crate::domain::model::BoundedTier;

/// `b` is charged per ten meters, matching the venue API's units.
pub const DISTANCE_UNIT_DIVISOR: f64 = 10.0;

pub fn delivery_fee(base_price: f64, tier: &BoundedTier, distance: u64) -> f64 {
    base_price + tier.a + tier.b * distance as f64 / DISTANCE_UNIT_DIVISOR
}

pub fn small_order_surcharge(order_minimum_no_surcharge: f64, cart_value: u64) -> f64 {
    let deficit = order_minimum_no_surcharge - cart_value as f64;
    if deficit > 0.0 {
        deficit
    } else {
        0.0
    }
}

pub fn total_price(cart_value: u64, small_order_surcharge: f64, delivery_fee: f64) -> f64 {
    cart_value as f64 + small_order_surcharge + delivery_fee
}
