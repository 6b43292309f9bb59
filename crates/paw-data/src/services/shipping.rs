//! Shipping method endpoints.

use crate::{ApiClient, ApiError};
use paw_commerce::ids::ShippingMethodId;
use paw_commerce::money::{Currency, Money};
use paw_commerce::shipping::ShippingMethod;
use serde::Deserialize;

/// A shipping method as the API serves it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub carrier: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub min_delivery_days: Option<i32>,
    #[serde(default)]
    pub max_delivery_days: Option<i32>,
}

impl ShippingMethodDto {
    pub fn into_method(self, currency: Currency) -> ShippingMethod {
        ShippingMethod {
            id: ShippingMethodId::new(self.id),
            name: self.name,
            carrier: self.carrier,
            price: Money::from_decimal(self.price, currency),
            min_delivery_days: self.min_delivery_days,
            max_delivery_days: self.max_delivery_days,
        }
    }
}

/// Shipping options service.
pub struct ShippingService {
    client: ApiClient,
    currency: Currency,
}

impl ShippingService {
    pub fn new(client: ApiClient, currency: Currency) -> Self {
        Self { client, currency }
    }

    /// List the shipping methods available at checkout.
    pub fn list_methods(&self) -> Result<Vec<ShippingMethod>, ApiError> {
        let dtos: Vec<ShippingMethodDto> = self
            .client
            .get("/shipping/methods")
            .send()?
            .error_for_status()?
            .json()?;
        Ok(dtos
            .into_iter()
            .map(|dto| dto.into_method(self.currency))
            .collect())
    }
}
