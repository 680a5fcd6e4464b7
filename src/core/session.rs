use crate::core::KeyValueStore;
use crate::utils::error::Result;

pub const TOKEN_KEY: &str = "userToken";

/// 登入 token 的持久化
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                None
            }
        }
    }

    pub async fn is_signed_in(&self) -> bool {
        self.token().await.is_some()
    }

    /// 只有勾選「記住我」才把 token 寫入裝置，否則清掉舊的 token
    pub async fn save(&self, token: &str, remember_me: bool) -> Result<()> {
        if remember_me {
            tracing::debug!("Persisting session token");
            self.storage.set(TOKEN_KEY, token).await
        } else {
            tracing::debug!("Session not remembered, dropping stored token");
            self.storage.delete(TOKEN_KEY).await
        }
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.storage.delete(TOKEN_KEY).await
    }
}
