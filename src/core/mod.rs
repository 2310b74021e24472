//! Core business logic - framework-agnostic filtering, aggregation, caching and wishlist
//! operations. Filters and aggregation take plain data as arguments and never touch
//! global state; only the cache and the wishlist perform I/O.

/// Cuisine keyword matching against food pairings
pub mod cuisine;
/// Flavor-profile range filters and slider handle semantics
pub mod flavor;
/// Key-value persistence boundary
pub mod kv_store;
/// Menu aggregation, featured carousel and counts
pub mod menu;
/// Offline menu snapshot and connectivity-aware source selection
pub mod offline_cache;
/// Plain-text menu rendering
pub mod report;
/// Wishlist CRUD
pub mod wishlist;
