use crate::core::cart::{self, CartStore};
use crate::core::session::SessionStore;
use crate::core::{Cart, CatalogProduct, CatalogProvider, KeyValueStore, LineItem, Product};
use crate::domain::model::{Credentials, RegisteredUser, Registration};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use rust_decimal::Decimal;

/// 購物車畫面需要的快照
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Cart,
    pub count: u64,
    /// None 表示金額超出可表示範圍
    pub total: Option<Decimal>,
}

impl CartSummary {
    pub fn from_cart(items: Cart) -> Self {
        Self {
            count: cart::count(&items),
            total: cart::total(&items),
            items,
        }
    }
}

/// 串起商品目錄、購物車與登入狀態的使用者動作
pub struct Shop<C: CatalogProvider, S: KeyValueStore + Clone> {
    catalog: C,
    cart: CartStore<S>,
    session: SessionStore<S>,
}

impl<C: CatalogProvider, S: KeyValueStore + Clone> Shop<C, S> {
    pub fn new(catalog: C, storage: S) -> Self {
        Self {
            catalog,
            cart: CartStore::new(storage.clone()),
            session: SessionStore::new(storage),
        }
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub async fn products(&self) -> Result<Vec<CatalogProduct>> {
        self.catalog.list_products().await
    }

    pub async fn product(&self, id: u64) -> Result<CatalogProduct> {
        self.catalog.get_product(id).await
    }

    pub async fn cart_summary(&self) -> CartSummary {
        CartSummary::from_cart(self.cart.load().await)
    }

    /// 從目錄取商品後加入購物車，再重新讀取拿到實際數量
    pub async fn add_to_cart(&self, product_id: u64) -> Result<LineItem> {
        let product = Product::from(self.catalog.get_product(product_id).await?);
        self.cart.add(&product).await?;
        tracing::info!("🛒 {} added to cart", product.title);

        let reloaded = self.cart.load().await;
        Ok(reloaded
            .into_iter()
            .find(|item| item.id == product_id)
            .unwrap_or_else(|| LineItem::from_product(&product)))
    }

    pub async fn sign_in(&self, credentials: &Credentials, remember_me: bool) -> Result<()> {
        credentials.validate()?;
        let token = self.catalog.login(credentials).await?;
        self.session.save(&token.token, remember_me).await?;
        tracing::info!("Signed in as {}", credentials.username);
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.session.sign_out().await?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser> {
        registration.validate()?;
        let user = self.catalog.register(registration).await?;
        tracing::info!("Registered user {} with id {}", registration.username, user.id);
        Ok(user)
    }
}
