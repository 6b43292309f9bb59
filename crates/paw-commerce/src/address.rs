//! Address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A delivery or billing address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    /// Recipient name.
    pub recipient: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Address line 1.
    pub line1: String,
    /// Address line 2 (apartment, landmark).
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Country.
    pub country: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        recipient: impl Into<String>,
        line1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            recipient: recipient.into(),
            phone: None,
            line1: line1.into(),
            line2: None,
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            country: country.into(),
        }
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.clone()];
        if let Some(ref line2) = self.line2 {
            parts.push(line2.clone());
        }
        parts.push(self.city.clone());
        parts.push(self.state.clone());
        parts.push(self.pincode.clone());
        parts.join(", ")
    }

    /// Check that the required fields are filled in.
    ///
    /// Used for the client-side validation pass before submission.
    pub fn is_complete(&self) -> bool {
        !self.recipient.is_empty()
            && !self.line1.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.pincode.is_empty()
            && !self.country.is_empty()
    }
}
