/// Geographic position in degrees on the mean-radius sphere.
///
/// Latitude is expected in [-90, 90], longitude in [-180, 180]; values come
/// from the reference dataset and are not re-validated here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl LatLon {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }
}
