use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, CatalogConfig, StoreConfig},
    database,
    error::{AppError, Result},
    routes,
    store::{CatalogStore, MemoryStore, PgStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub catalog: Arc<CatalogConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, catalog: CatalogConfig) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
        }
    }
}

/// Opens the configured store. Called once before the listener binds; every
/// request shares the returned handle.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn CatalogStore>> {
    let store: Arc<dyn CatalogStore> = match config {
        StoreConfig::Postgres(db) => Arc::new(PgStore::new(database::create_pool(db).await?)),
        StoreConfig::Memory { seed_file } => {
            tracing::warn!("Using in-memory store; changes are lost on restart");
            match seed_file {
                Some(path) => Arc::new(MemoryStore::load(path).await?),
                None => Arc::new(MemoryStore::new()),
            }
        }
    };

    Ok(store)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store = connect_store(&config.store).await?;
    let state = AppState::new(store, config.catalog.clone());

    router(state, config)
}

pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::PATCH, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
