use crate::domain::model::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in whole meters (haversine, spherical earth).
pub fn distance_meters(venue: Coordinates, user: Coordinates) -> u64 {
    let venue_lat = venue.latitude().to_radians();
    let user_lat = user.latitude().to_radians();

    let delta_lat = user_lat - venue_lat;
    let delta_lon = user.longitude().to_radians() - venue.longitude().to_radians();

    // rounding can push `a` just past 1.0 for antipodal points
    let a = ((delta_lat / 2.0).sin().powi(2)
        + venue_lat.cos() * user_lat.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_meters(EARTH_RADIUS_KM * c * 1000.0)
}

/// Ties go to the even meter.
pub fn round_meters(meters: f64) -> u64 {
    // haversine output is never negative; the clamp only absorbs -0.0
    meters.round_ties_even().max(0.0) as u64
}
