//! Saved address endpoints.

use crate::{ApiClient, ApiError};
use paw_commerce::address::Address;
use paw_commerce::ids::{AddressId, UserId};

/// Address book service.
pub struct AddressService {
    client: ApiClient,
}

impl AddressService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List a user's saved addresses.
    pub fn list(&self, user: &UserId) -> Result<Vec<Address>, ApiError> {
        self.client
            .get(format!("/users/{}/addresses", user))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Save a new address; the server assigns the id.
    pub fn create(&self, user: &UserId, address: &Address) -> Result<Address, ApiError> {
        self.client
            .post(format!("/users/{}/addresses", user))
            .json(address)?
            .send()?
            .error_for_status()?
            .json()
    }

    /// Update a saved address.
    pub fn update(&self, user: &UserId, address: &Address) -> Result<Address, ApiError> {
        let id = address
            .id
            .as_ref()
            .ok_or_else(|| ApiError::RequestError("address has no id".to_string()))?;
        self.client
            .put(format!("/users/{}/addresses/{}", user, id))
            .json(address)?
            .send()?
            .error_for_status()?
            .json()
    }

    /// Delete a saved address.
    pub fn delete(&self, user: &UserId, id: &AddressId) -> Result<(), ApiError> {
        self.client
            .delete(format!("/users/{}/addresses/{}", user, id))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_requires_saved_id() {
        let service = AddressService::new(ApiClient::new("https://api.pawmart.test"));
        let unsaved = Address::new("Asha", "12 Lake Rd", "Pune", "MH", "411001", "IN");

        let result = service.update(&UserId::new("user-1"), &unsaved);
        assert!(matches!(result, Err(ApiError::RequestError(_))));
    }
}
