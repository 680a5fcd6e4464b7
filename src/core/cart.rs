use crate::core::{Cart, KeyValueStore, LineItem, Product};
use crate::utils::error::{Result, StorefrontError};
use rust_decimal::Decimal;

/// 購物車在裝置儲存中的固定鍵
pub const CART_KEY: &str = "@cart";

/// 持久化購物車。
///
/// 每個操作都是一次獨立的「讀取 → 修改 → 整包寫回」，操作之間沒有鎖：
/// 兩個交錯的修改可能互相覆蓋，最後寫入者勝出。
pub struct CartStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 讀取目前的購物車。不存在、讀取失敗或內容損毀都視為空購物車。
    pub async fn load(&self) -> Cart {
        let payload = match self.storage.get(CART_KEY).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read cart from storage, using empty cart: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Cart>(&payload) {
            Ok(mut cart) => {
                let before = cart.len();
                cart.retain(|item| item.quantity > 0);
                if cart.len() != before {
                    tracing::warn!(
                        "Dropped {} stored cart item(s) with zero quantity",
                        before - cart.len()
                    );
                }
                cart
            }
            Err(e) => {
                tracing::warn!("Stored cart is corrupt, using empty cart: {}", e);
                Vec::new()
            }
        }
    }

    /// 加入商品。已存在時只加數量，不更新標題、價格或圖片。
    pub async fn add(&self, product: &Product) -> Result<()> {
        if product.price < Decimal::ZERO {
            return Err(StorefrontError::validation(
                "price",
                format!("Price of product {} cannot be negative", product.id),
            ));
        }

        let mut cart = self.load().await;

        match cart.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                tracing::debug!(
                    "Incremented product {} to quantity {}",
                    product.id,
                    existing.quantity
                );
            }
            None => {
                cart.push(LineItem::from_product(product));
                tracing::debug!("Added product {} to cart", product.id);
            }
        }

        self.save(&cart).await
    }

    /// 設定數量；`new_quantity <= 0` 等同移除。找不到該商品時原樣寫回，不回報錯誤。
    pub async fn set_quantity(&self, product_id: u64, new_quantity: i64) -> Result<()> {
        if new_quantity <= 0 {
            return self.remove(product_id).await;
        }

        let quantity = new_quantity.unsigned_abs();
        let mut cart = self.load().await;

        match cart.iter_mut().find(|item| item.id == product_id) {
            Some(item) => item.quantity = quantity,
            None => tracing::debug!("Product {} not in cart, quantity unchanged", product_id),
        }

        self.save(&cart).await
    }

    pub async fn remove(&self, product_id: u64) -> Result<()> {
        let mut cart = self.load().await;
        cart.retain(|item| item.id != product_id);
        self.save(&cart).await
    }

    pub async fn clear(&self) -> Result<()> {
        tracing::debug!("Clearing cart");
        self.storage.delete(CART_KEY).await
    }

    async fn save(&self, cart: &[LineItem]) -> Result<()> {
        let payload = serde_json::to_string(cart)?;
        tracing::debug!("Writing cart with {} line item(s)", cart.len());
        self.storage.set(CART_KEY, &payload).await
    }
}

/// 所有項目的 `price × quantity` 總和；任何一步溢位都回傳 None
pub fn total(cart: &[LineItem]) -> Option<Decimal> {
    cart.iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}

/// 商品件數總和，不是不同商品的數目
pub fn count(cart: &[LineItem]) -> u64 {
    cart.iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.quantity))
}
