// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod freshness;
pub mod proximity;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use filters::{filter_by_sport, matches_sport};
pub use freshness::{classify_fix, fix_age, FixFreshness};
pub use proximity::{find_nearby, validate_query, NearbyResult, SearchError};
