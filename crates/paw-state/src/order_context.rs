//! Order context: tax and shipping aggregation for checkout.
//!
//! Holds the selected shipping method's cost and the computed taxes so the
//! checkout summary and order submission read the same numbers. No
//! validation beyond type; the selection UI is trusted to supply sane
//! values.

use crate::error::StateError;
use paw_commerce::error::CommerceError;
use paw_commerce::money::{Currency, Money};
use paw_commerce::shipping::ShippingSelection;
use paw_commerce::taxes::Taxes;
use serde::{Deserialize, Serialize};

/// Checkout summary totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping_charges: Money,
    pub other_tax: Money,
    pub service_charge: Money,
    pub grand_total: Money,
}

/// Aggregates shipping cost and taxes for the order in progress.
#[derive(Debug, Clone)]
pub struct OrderContext {
    taxes: Taxes,
    shipping: Option<ShippingSelection>,
}

impl OrderContext {
    /// Create a context with zero charges.
    pub fn new(currency: Currency) -> Self {
        Self {
            taxes: Taxes::zero(currency),
            shipping: None,
        }
    }

    /// Replace the full tax aggregate.
    pub fn set_taxes(&mut self, taxes: Taxes) {
        self.taxes = taxes;
    }

    /// Set the shipping cost from the selected method.
    ///
    /// Also updates the shipping portion of the taxes so both readers agree.
    pub fn set_shipping_cost(&mut self, selection: ShippingSelection) {
        self.taxes.shipping_charges = selection.rate;
        self.shipping = Some(selection);
    }

    /// Current tax aggregate.
    pub fn taxes(&self) -> &Taxes {
        &self.taxes
    }

    /// Currently selected shipping method.
    pub fn shipping(&self) -> Option<&ShippingSelection> {
        self.shipping.as_ref()
    }

    /// Compute the summary for the given cart subtotal.
    pub fn summary(&self, subtotal: Money) -> Result<OrderSummary, StateError> {
        let charges = self.taxes.total()?;
        let grand_total = subtotal
            .try_add(&charges)
            .ok_or(CommerceError::Overflow)?;
        Ok(OrderSummary {
            subtotal,
            shipping_charges: self.taxes.shipping_charges,
            other_tax: self.taxes.other_tax,
            service_charge: self.taxes.service_charge,
            grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paw_commerce::ids::ShippingMethodId;

    fn selection(rate_minor: i64) -> ShippingSelection {
        ShippingSelection {
            method_id: ShippingMethodId::new("ship-1"),
            method_name: "Express".to_string(),
            rate: Money::new(rate_minor, Currency::INR),
        }
    }

    #[test]
    fn test_summary_with_shipping() {
        let mut ctx = OrderContext::new(Currency::INR);
        ctx.set_shipping_cost(selection(9900));

        let summary = ctx.summary(Money::new(100000, Currency::INR)).unwrap();
        assert_eq!(summary.shipping_charges.amount_minor, 9900);
        assert_eq!(summary.grand_total.amount_minor, 109900);
    }

    #[test]
    fn test_set_taxes_then_shipping_agree() {
        let mut ctx = OrderContext::new(Currency::INR);
        ctx.set_taxes(Taxes {
            shipping_charges: Money::zero(Currency::INR),
            other_tax: Money::new(1800, Currency::INR),
            service_charge: Money::new(500, Currency::INR),
        });
        ctx.set_shipping_cost(selection(5000));

        // The taxes read by persistence carry the same shipping figure the
        // summary shows.
        assert_eq!(ctx.taxes().shipping_charges.amount_minor, 5000);

        let summary = ctx.summary(Money::new(10000, Currency::INR)).unwrap();
        assert_eq!(summary.grand_total.amount_minor, 10000 + 5000 + 1800 + 500);
    }

    #[test]
    fn test_reselection_replaces_cost() {
        let mut ctx = OrderContext::new(Currency::INR);
        ctx.set_shipping_cost(selection(5000));
        ctx.set_shipping_cost(selection(0));
        assert!(ctx.taxes().shipping_charges.is_zero());
    }
}
