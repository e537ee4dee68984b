pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
