use crate::utils::error::Result;
use crate::utils::validation::{
    require, validate_digits, validate_email, validate_length, Validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 購物車需要的商品欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// 購物車中的一列，`quantity` 永遠 >= 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u64,
}

impl LineItem {
    /// 加入當下複製商品資料，之後目錄價格變動不影響已加入的項目
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// `price × quantity`；超出 `Decimal` 範圍時回傳 None
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

pub type Cart = Vec<LineItem>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// 商品目錄 API 回傳的完整商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl From<&CatalogProduct> for Product {
    fn from(p: &CatalogProduct) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price: p.price,
            image: p.image.clone(),
        }
    }
}

impl From<CatalogProduct> for Product {
    fn from(p: CatalogProduct) -> Self {
        Self {
            id: p.id,
            title: p.title,
            price: p.price,
            image: p.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        require("username", &self.username, "Username is required")?;
        validate_length("username", "Username", &self.username, 3, 15)?;
        require("password", &self.password, "Password is required")?;
        validate_length("password", "Password", &self.password, 5, 15)?;
        Ok(())
    }
}

/// 註冊表單；`confirm_password` 只在本地比對，不送到 API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl Validate for Registration {
    fn validate(&self) -> Result<()> {
        require("username", &self.username, "Username is required")?;
        validate_length("username", "Username", &self.username, 3, 15)?;

        require("email", &self.email, "Email is required")?;
        validate_email("email", &self.email)?;

        require("phone", &self.phone, "Phone number is required")?;
        validate_length("phone", "Phone number", &self.phone, 5, 30)?;
        validate_digits("phone", &self.phone, "Phone number must contain only digits")?;

        require("password", &self.password, "Password is required")?;
        validate_length("password", "Password", &self.password, 5, 10)?;

        require(
            "confirm_password",
            &self.confirm_password,
            "Confirm Password is required",
        )?;
        if self.confirm_password != self.password {
            return Err(crate::utils::error::StorefrontError::validation(
                "confirm_password",
                "Passwords must match",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: u64,
}
