// Service exports
pub mod cache;
pub mod store;

pub use cache::{CacheKey, VenueCache};
pub use store::{StoreError, VenueStore};
