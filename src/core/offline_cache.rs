//! Offline menu cache - the last successfully fetched menu, kept for lost connectivity.
//!
//! The snapshot is written after every successful fetch and read back when the
//! device goes offline. It never expires on its own; staleness is only surfaced
//! through a relative age label ("Cached 2 days ago"). Storage failures are
//! logged and swallowed: the in-memory copy keeps the current session working
//! even if the snapshot will not survive a restart.

use crate::{
    core::kv_store::KeyValueStore,
    errors::Result,
    models::{MenuCollections, RestaurantMeta},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Storage key holding the JSON snapshot.
pub const OFFLINE_CACHE_KEY: &str = "offline_cache";
/// Storage key holding the snapshot timestamp, for age lookups without parsing the payload.
pub const CACHE_TIMESTAMP_KEY: &str = "cache_timestamp";

/// Message shown when offline with nothing cached.
pub const NO_CACHE_MESSAGE: &str = "No cached data available";

/// Persisted snapshot of a restaurant menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineMenuCache {
    /// The five beverage collections (serialized as top-level `wines`, `beers`, ...)
    #[serde(flatten)]
    pub collections: MenuCollections,
    /// Restaurant display name
    pub restaurant_name: String,
    /// Restaurant cuisine description
    #[serde(default)]
    pub restaurant_cuisine: Option<String>,
    /// Restaurant cover image URL
    #[serde(default)]
    pub restaurant_cover_image: Option<String>,
    /// When the snapshot was taken
    pub cached_at: DateTime<Utc>,
}

impl OfflineMenuCache {
    /// Restaurant metadata carried by the snapshot.
    #[must_use]
    pub fn restaurant(&self) -> RestaurantMeta {
        RestaurantMeta {
            name: self.restaurant_name.clone(),
            cuisine: self.restaurant_cuisine.clone(),
            cover_image: self.restaurant_cover_image.clone(),
        }
    }
}

/// A snapshot together with its age label.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMenu {
    /// The cached data
    pub snapshot: OfflineMenuCache,
    /// "Just now", "5 minutes ago", ...
    pub age: String,
}

/// Online/offline signal supplied by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Network reachable
    Online,
    /// Network lost
    Offline,
}

/// Lifecycle of the cache as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing was ever written (or the user cleared it)
    Empty,
    /// A snapshot exists and live data is reachable
    Populated,
    /// A snapshot exists and it is the only data available
    PopulatedAndStale,
}

/// Where the menu screen should read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// Fetch live data
    Live,
    /// Show the cached snapshot with an offline banner
    Cached {
        /// "Cached 2 days ago"
        label: String,
    },
    /// Offline and nothing cached
    Unavailable,
}

impl MenuSource {
    /// Banner text for the screen, `None` when live.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        match self {
            Self::Live => None,
            Self::Cached { label } => Some(label.as_str()),
            Self::Unavailable => Some(NO_CACHE_MESSAGE),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Relative age of a snapshot, largest unit first.
///
/// Timestamps in the future (clock changes) read as "Just now".
#[must_use]
pub fn format_cache_age(cached_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(cached_at);

    if elapsed >= Duration::days(1) {
        plural(elapsed.num_days(), "day")
    } else if elapsed >= Duration::hours(1) {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed >= Duration::minutes(1) {
        plural(elapsed.num_minutes(), "minute")
    } else {
        "Just now".to_string()
    }
}

/// Banner label built from an age string: "Cached 2 days ago", "Cached just now".
#[must_use]
pub fn cache_label(age: &str) -> String {
    if age == "Just now" {
        "Cached just now".to_string()
    } else {
        format!("Cached {age}")
    }
}

/// The offline cache service. Owns the in-memory snapshot and writes through `S`.
#[derive(Debug)]
pub struct OfflineCache<S: KeyValueStore> {
    store: S,
    snapshot: Option<OfflineMenuCache>,
    cached_at: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore> OfflineCache<S> {
    /// An empty cache over `store`, ignoring anything already persisted.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            snapshot: None,
            cached_at: None,
        }
    }

    /// Restores the persisted snapshot. Unreadable or corrupt data yields an empty cache.
    pub async fn load(store: S) -> Self {
        let snapshot = match store.get(OFFLINE_CACHE_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<OfflineMenuCache>(&json) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!("Discarding corrupt offline cache payload: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read offline cache: {}", e);
                None
            }
        };

        // The payload's own stamp wins; the timestamp key can lag behind a partial write
        let cached_at = match &snapshot {
            Some(s) => {
                match Self::read_timestamp(&store).await {
                    Some(stored) if stored != s.cached_at => warn!(
                        "Cache timestamp {} disagrees with payload cachedAt {}, using the payload",
                        stored, s.cached_at
                    ),
                    _ => {}
                }
                Some(s.cached_at)
            }
            None => None,
        };

        if let Some(s) = &snapshot {
            info!(
                "Restored offline cache for {:?} with {} items",
                s.restaurant_name,
                s.collections.len()
            );
        } else {
            debug!("No offline cache to restore");
        }

        Self {
            store,
            snapshot,
            cached_at,
        }
    }

    async fn read_timestamp(store: &S) -> Option<DateTime<Utc>> {
        match store.get(CACHE_TIMESTAMP_KEY).await {
            Ok(Some(raw)) => DateTime::parse_from_rfc3339(&raw)
                .map(|t| t.with_timezone(&Utc))
                .inspect_err(|e| warn!("Ignoring unparsable cache timestamp {:?}: {}", raw, e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                error!("Failed to read cache timestamp: {}", e);
                None
            }
        }
    }

    /// Replaces the snapshot with freshly fetched data, stamped now.
    pub async fn write(&mut self, collections: MenuCollections, restaurant: &RestaurantMeta) {
        self.write_at(collections, restaurant, Utc::now()).await;
    }

    /// Replaces the snapshot, stamped with `now`.
    pub async fn write_at(
        &mut self,
        collections: MenuCollections,
        restaurant: &RestaurantMeta,
        now: DateTime<Utc>,
    ) {
        let snapshot = OfflineMenuCache {
            collections,
            restaurant_name: restaurant.name.clone(),
            restaurant_cuisine: restaurant.cuisine.clone(),
            restaurant_cover_image: restaurant.cover_image.clone(),
            cached_at: now,
        };

        if let Err(e) = self.persist(&snapshot).await {
            error!(
                "Failed to persist offline cache, keeping it in memory only: {}",
                e
            );
        } else {
            info!(
                "Offline cache written for {:?} ({} items)",
                snapshot.restaurant_name,
                snapshot.collections.len()
            );
        }

        self.cached_at = Some(now);
        self.snapshot = Some(snapshot);
    }

    async fn persist(&self, snapshot: &OfflineMenuCache) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(OFFLINE_CACHE_KEY, &json).await?;
        self.store
            .set(CACHE_TIMESTAMP_KEY, &snapshot.cached_at.to_rfc3339())
            .await
    }

    /// The snapshot with its age as of now.
    #[must_use]
    pub fn read(&self) -> Option<CachedMenu> {
        self.read_at(Utc::now())
    }

    /// The snapshot with its age as of `now`.
    #[must_use]
    pub fn read_at(&self, now: DateTime<Utc>) -> Option<CachedMenu> {
        let snapshot = self.snapshot.clone()?;
        let age = self
            .cache_age_at(now)
            .unwrap_or_else(|| format_cache_age(snapshot.cached_at, now));
        Some(CachedMenu { snapshot, age })
    }

    /// Borrow the snapshot without computing an age.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&OfflineMenuCache> {
        self.snapshot.as_ref()
    }

    /// Age label as of now, `None` when empty.
    #[must_use]
    pub fn cache_age(&self) -> Option<String> {
        self.cache_age_at(Utc::now())
    }

    /// Age label as of `now`, `None` when empty.
    #[must_use]
    pub fn cache_age_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.cached_at.map(|t| format_cache_age(t, now))
    }

    /// Drops the snapshot and its timestamp, in memory and in storage.
    pub async fn clear(&mut self) {
        self.snapshot = None;
        self.cached_at = None;

        for key in [OFFLINE_CACHE_KEY, CACHE_TIMESTAMP_KEY] {
            if let Err(e) = self.store.remove(key).await {
                error!("Failed to remove {:?} from storage: {}", key, e);
            }
        }
        info!("Offline cache cleared");
    }

    /// Current lifecycle state given the connectivity signal.
    #[must_use]
    pub fn state(&self, connectivity: Connectivity) -> CacheState {
        match (&self.snapshot, connectivity) {
            (None, _) => CacheState::Empty,
            (Some(_), Connectivity::Online) => CacheState::Populated,
            (Some(_), Connectivity::Offline) => CacheState::PopulatedAndStale,
        }
    }

    /// Decides between live data, cached data and the no-cache message.
    #[must_use]
    pub fn menu_source(&self, connectivity: Connectivity) -> MenuSource {
        self.menu_source_at(connectivity, Utc::now())
    }

    /// [`OfflineCache::menu_source`] evaluated at `now`.
    #[must_use]
    pub fn menu_source_at(&self, connectivity: Connectivity, now: DateTime<Utc>) -> MenuSource {
        match self.state(connectivity) {
            CacheState::Empty if connectivity == Connectivity::Offline => MenuSource::Unavailable,
            CacheState::Empty | CacheState::Populated => MenuSource::Live,
            CacheState::PopulatedAndStale => self.cache_age_at(now).map_or(
                MenuSource::Unavailable,
                |age| MenuSource::Cached {
                    label: cache_label(&age),
                },
            ),
        }
    }
}
