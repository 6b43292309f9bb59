//! Product catalog endpoints.

use crate::services::urlencode;
use crate::{ApiClient, ApiError};
use paw_commerce::catalog::{Product, ProductStatus};
use paw_commerce::ids::ProductId;
use paw_commerce::money::{Currency, Money};
use serde::Deserialize;

/// A product as the catalog API serves it.
///
/// Prices come over the wire as decimal majors; the currency rides along
/// per product so a mixed-currency catalog fails loudly at mapping time
/// instead of in cart math.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

impl ProductDto {
    /// Map into the domain product, defaulting to the store currency.
    pub fn into_product(self, store_currency: Currency) -> Product {
        let currency = self
            .currency
            .as_deref()
            .and_then(Currency::from_code)
            .unwrap_or(store_currency);
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            image: self.image,
            thumbnail: self.thumbnail,
            category: self.category,
            description: self.description,
            status: self.status.unwrap_or_default(),
        }
    }
}

/// Catalog service.
pub struct ProductService {
    client: ApiClient,
    currency: Currency,
}

impl ProductService {
    pub fn new(client: ApiClient, currency: Currency) -> Self {
        Self { client, currency }
    }

    /// List the full catalog.
    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_list("/products".to_string())
    }

    /// List products in a category.
    pub fn by_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        self.fetch_list(format!("/products?category={}", urlencode(category)))
    }

    /// Full-text product search.
    pub fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.fetch_list(format!("/products/search?q={}", urlencode(query)))
    }

    /// Fetch one product by id.
    pub fn get(&self, id: &ProductId) -> Result<Product, ApiError> {
        let dto: ProductDto = self
            .client
            .get(format!("/products/{}", id))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(dto.into_product(self.currency))
    }

    fn fetch_list(&self, path: String) -> Result<Vec<Product>, ApiError> {
        let dtos: Vec<ProductDto> = self
            .client
            .get(path)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(dtos
            .into_iter()
            .map(|dto| dto.into_product(self.currency))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_maps_price_to_minor_units() {
        let dto: ProductDto = serde_json::from_str(
            r#"{
                "id": "prod-7",
                "name": "Salmon Kibble 2kg",
                "price": 899.0,
                "category": "dog-food",
                "thumbnail": "https://cdn.pawmart.test/kibble-thumb.jpg"
            }"#,
        )
        .unwrap();

        let product = dto.into_product(Currency::INR);
        assert_eq!(product.price, Money::new(89900, Currency::INR));
        assert_eq!(product.status, ProductStatus::Active);
        assert!(product.is_available());
    }

    #[test]
    fn test_dto_respects_wire_currency_and_status() {
        let dto: ProductDto = serde_json::from_str(
            r#"{
                "id": "prod-8",
                "name": "Travel Crate",
                "price": 49.99,
                "currency": "USD",
                "category": "travel",
                "status": "out_of_stock"
            }"#,
        )
        .unwrap();

        let product = dto.into_product(Currency::INR);
        assert_eq!(product.price, Money::new(4999, Currency::USD));
        assert!(!product.is_available());
    }
}
