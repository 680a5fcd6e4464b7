pub mod cart;
pub mod session;

pub use crate::domain::model::{Cart, CatalogProduct, LineItem, Product};
pub use crate::domain::ports::{CatalogProvider, ConfigProvider, KeyValueStore};
pub use crate::utils::error::Result;
