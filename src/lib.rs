pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seeders;
pub mod services;
pub mod utils;

pub use config::{AppState, Config};
pub use error::{CatalogError, CatalogResult};
