//! Shipping method types.

use crate::ids::ShippingMethodId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method option offered by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Unique identifier.
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Carrier name.
    pub carrier: Option<String>,
    /// Shipping price.
    pub price: Money,
    /// Minimum delivery days.
    pub min_delivery_days: Option<i32>,
    /// Maximum delivery days.
    pub max_delivery_days: Option<i32>,
}

impl ShippingMethod {
    /// Get a delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(min), Some(max)) if min == max => Some(format!("{} days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} days", min, max)),
            (Some(min), None) => Some(format!("{}+ days", min)),
            (None, Some(max)) => Some(format!("Up to {} days", max)),
            (None, None) => None,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

/// The shipping method the user selected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingSelection {
    /// Selected method ID.
    pub method_id: ShippingMethodId,
    /// Method name (denormalized for display).
    pub method_name: String,
    /// Rate charged.
    pub rate: Money,
}

impl ShippingSelection {
    /// Create from a shipping method.
    pub fn from_method(method: &ShippingMethod) -> Self {
        Self {
            method_id: method.id.clone(),
            method_name: method.name.clone(),
            rate: method.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn method(price_minor: i64) -> ShippingMethod {
        ShippingMethod {
            id: ShippingMethodId::new("ship-1"),
            name: "Standard".to_string(),
            carrier: Some("Delhivery".to_string()),
            price: Money::new(price_minor, Currency::INR),
            min_delivery_days: Some(3),
            max_delivery_days: Some(5),
        }
    }

    #[test]
    fn test_delivery_estimate() {
        assert_eq!(method(5000).delivery_estimate(), Some("3-5 days".to_string()));
    }

    #[test]
    fn test_free_shipping() {
        assert!(method(0).is_free());
        assert!(!method(5000).is_free());
    }

    #[test]
    fn test_selection_from_method() {
        let m = method(5000);
        let sel = ShippingSelection::from_method(&m);
        assert_eq!(sel.method_name, "Standard");
        assert_eq!(sel.rate.amount_minor, 5000);
    }
}
