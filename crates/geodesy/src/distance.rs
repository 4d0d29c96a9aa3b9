use crate::latlon::LatLon;

/// Mean Earth radius (kilometers).
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two positions, in kilometers.
///
/// Haversine over the mean-radius sphere. Symmetric in its arguments and
/// exactly zero for identical coordinates. Total over its domain: no side
/// effects, no failure modes.
pub fn great_circle_km(a: LatLon, b: LatLon) -> f64 {
    let dlat = (b.lat_deg - a.lat_deg).to_radians();
    let dlon = (b.lon_deg - a.lon_deg).to_radians();

    let sin_half_dlat = (dlat * 0.5).sin();
    let sin_half_dlon = (dlon * 0.5).sin();
    let h = sin_half_dlat * sin_half_dlat
        + a.lat_rad().cos() * b.lat_rad().cos() * sin_half_dlon * sin_half_dlon;

    // atan2 form stays accurate for near-antipodal pairs where h approaches 1.
    let arc = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_MEAN_RADIUS_KM * arc
}

/// Rounds a distance for display (whole kilometers, half away from zero).
///
/// Every surface that shows a distance goes through this; the ledger itself
/// keeps full precision.
pub fn display_km(km: f64) -> u32 {
    km.round() as u32
}
