use cellar_buddy::{
    config::{database, menu, settings},
    core::{
        flavor::FlavorRangeFilters,
        kv_store::SystemStateStore,
        menu::{CategoryFilter, browse_wines, build_menu_view},
        offline_cache::{Connectivity, MenuSource, OfflineCache},
        report::{format_item_line, format_menu_report},
    },
    errors::{Error, Result},
    models::BeverageItem,
};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Load settings (defaults when config.toml is absent)
    let settings_path = std::env::var("CELLAR_BUDDY_CONFIG")
        .unwrap_or_else(|_| settings::DEFAULT_SETTINGS_PATH.to_string());
    let app_settings = settings::load_settings_or_default(&settings_path)
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Open the local database
    let database_url = database::get_database_url(app_settings.database_url.as_deref());
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))?;

    // 5. Restore the offline snapshot
    let mut cache = OfflineCache::load(SystemStateStore::new(db)).await;

    let connectivity = if app_settings.offline {
        Connectivity::Offline
    } else {
        Connectivity::Online
    };

    // 6. "Fetch" the live menu when online and a seed file is configured
    let live = match (&app_settings.menu_path, connectivity) {
        (Some(path), Connectivity::Online) => {
            let seed = menu::load_menu_seed(path)?;
            cache.write(seed.collections.clone(), &seed.restaurant).await;
            Some(seed)
        }
        (None, Connectivity::Online) => {
            warn!("Online but no menu_path configured; nothing to fetch");
            None
        }
        (_, Connectivity::Offline) => None,
    };

    let category = CategoryFilter::from_id(&app_settings.browse.category).ok_or_else(|| {
        Error::Config {
            message: format!("Unknown category {:?}", app_settings.browse.category),
        }
    })?;

    let (restaurant, collections, source) = match live {
        Some(seed) => (seed.restaurant, seed.collections, MenuSource::Live),
        // Nothing fetched: the snapshot is all there is, exactly as when offline
        None => match (cache.menu_source(Connectivity::Offline), cache.read()) {
            (source @ MenuSource::Cached { .. }, Some(cached)) => (
                cached.snapshot.restaurant(),
                cached.snapshot.collections,
                source,
            ),
            (source, _) => {
                println!("{}", source.banner().unwrap_or_default());
                return Ok(());
            }
        },
    };

    // 7. Render the menu and the wine browser under the configured selections
    let view = build_menu_view(&collections, category);
    println!("{}", format_menu_report(&restaurant, &view, &source));

    let matcher = app_settings.cuisine_matcher();
    let wines = browse_wines(
        &collections.wines,
        &FlavorRangeFilters::default(),
        &app_settings.browse.cuisine,
        &matcher,
    );
    println!(
        "Wines pairing with {:?}: {}",
        app_settings.browse.cuisine,
        wines.len()
    );
    for wine in wines {
        println!("  • {}", format_item_line(&BeverageItem::Wine(wine.clone())));
    }

    Ok(())
}
