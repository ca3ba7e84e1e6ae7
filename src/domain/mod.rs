mod geo_location;
mod rest_area;

pub use geo_location::GeoLocation;
pub use rest_area::{RankedRestArea, RestArea};
