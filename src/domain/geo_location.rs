#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation { latitude, longitude }
    }
}
