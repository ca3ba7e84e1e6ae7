mod request;
mod search;

pub use request::{InputError, SearchRequest};
pub use search::{DEFAULT_RADIUS_KM, list_all, search};
