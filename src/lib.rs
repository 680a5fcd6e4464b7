pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{file::FileStore, http::StoreApiClient, memory::MemoryStore};
pub use app::shop::{CartSummary, Shop};
pub use config::Settings;
pub use core::{cart::CartStore, session::SessionStore};
pub use domain::model::{Cart, CatalogProduct, LineItem, Product};
pub use utils::error::{Result, StorefrontError};
