#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "persist")]
pub mod persist;

#[cfg(feature = "watchlist")]
pub mod watchlist;
