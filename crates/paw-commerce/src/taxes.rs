//! Tax and charge aggregates.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Charges applied on top of the cart subtotal.
///
/// Recomputed whenever the shipping method or cart contents change; the
/// checkout summary and order persistence read the same instance so their
/// numbers always agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Taxes {
    /// Shipping charges for the selected method.
    pub shipping_charges: Money,
    /// Other taxes (GST etc.).
    pub other_tax: Money,
    /// Platform service charge.
    pub service_charge: Money,
}

impl Taxes {
    /// All-zero charges in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            shipping_charges: Money::zero(currency),
            other_tax: Money::zero(currency),
            service_charge: Money::zero(currency),
        }
    }

    /// Sum of all charges.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.shipping_charges
            .try_add(&self.other_tax)
            .and_then(|t| t.try_add(&self.service_charge))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxes_total() {
        let taxes = Taxes {
            shipping_charges: Money::new(5000, Currency::INR),
            other_tax: Money::new(1800, Currency::INR),
            service_charge: Money::new(500, Currency::INR),
        };
        assert_eq!(taxes.total().unwrap().amount_minor, 7300);
    }

    #[test]
    fn test_taxes_zero() {
        let taxes = Taxes::zero(Currency::INR);
        assert!(taxes.total().unwrap().is_zero());
    }

    #[test]
    fn test_taxes_mixed_currency_rejected() {
        let taxes = Taxes {
            shipping_charges: Money::new(5000, Currency::INR),
            other_tax: Money::new(100, Currency::USD),
            service_charge: Money::zero(Currency::INR),
        };
        assert!(taxes.total().is_err());
    }
}
