use crate::domain::model::{AuthToken, CatalogProduct, Credentials, RegisteredUser, Registration};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 裝置上的鍵值儲存。讀取失敗由呼叫端決定是否吞掉，寫入與刪除失敗必須往上傳。
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
    fn delete(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn list_products(&self) -> Result<Vec<CatalogProduct>>;
    async fn get_product(&self, id: u64) -> Result<CatalogProduct>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken>;
    async fn register(&self, registration: &Registration) -> Result<RegisteredUser>;
}
