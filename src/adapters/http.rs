use crate::core::{CatalogProduct, CatalogProvider, ConfigProvider};
use crate::domain::model::{AuthToken, Credentials, RegisteredUser, Registration};
use crate::utils::error::{Result, StorefrontError};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// fakestoreapi 風格的商品目錄與帳號 API
#[derive(Debug, Clone)]
pub struct StoreApiClient {
    base_url: String,
    client: Client,
}

impl StoreApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_success(response: &Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(())
    }

    /// 讀取回應本文；空本文或 `null` 回傳 None
    async fn optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
        let body = response.text().await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(trimmed)?))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StoreApiClient {
    async fn list_products(&self) -> Result<Vec<CatalogProduct>> {
        let url = self.url("/products");
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        Self::ensure_success(&response)?;

        let products: Vec<CatalogProduct> = response.json().await?;
        tracing::debug!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: u64) -> Result<CatalogProduct> {
        let url = self.url(&format!("/products/{}", id));
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorefrontError::ProductNotFound { id });
        }
        Self::ensure_success(&response)?;

        // 不存在的 id 會得到 200 與空本文
        Self::optional_json(response)
            .await?
            .ok_or(StorefrontError::ProductNotFound { id })
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthToken> {
        let url = self.url("/auth/login");
        tracing::debug!("Signing in as '{}' via {}", credentials.username, url);

        let response = self.client.post(&url).json(credentials).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
            let message = response.text().await.unwrap_or_default();
            return Err(StorefrontError::AuthenticationFailed {
                message: if message.trim().is_empty() {
                    status.to_string()
                } else {
                    message.trim().to_string()
                },
            });
        }
        Self::ensure_success(&response)?;

        let body: Option<serde_json::Value> = Self::optional_json(response).await?;
        body.as_ref()
            .and_then(|v| v.get("token"))
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(|token| AuthToken {
                token: token.to_string(),
            })
            .ok_or_else(|| StorefrontError::AuthenticationFailed {
                message: "response did not contain a token".to_string(),
            })
    }

    async fn register(&self, registration: &Registration) -> Result<RegisteredUser> {
        let url = self.url("/users");
        tracing::debug!("Registering '{}' via {}", registration.username, url);

        let response = self.client.post(&url).json(registration).send().await?;
        tracing::debug!("API response status: {}", response.status());
        Self::ensure_success(&response)?;

        let body: Option<serde_json::Value> = Self::optional_json(response).await?;
        body.as_ref()
            .and_then(|v| v.get("id"))
            .and_then(|id| id.as_u64())
            .map(|id| RegisteredUser { id })
            .ok_or_else(|| StorefrontError::RegistrationFailed {
                message: "response did not contain a user id".to_string(),
            })
    }
}
