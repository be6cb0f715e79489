//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::errors::ProductsServiceError;

/// Writable Product Data
///
/// The full set of client-controlled fields, used for both inserts and
/// full-replace updates. The identifier and modification timestamp are
/// always assigned server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub product_name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub company_id: Option<i32>,
    pub store_id: Option<i32>,
}

impl ProductData {
    /// Check the shape-level invariants required before any write.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidData`] when the product name is
    /// empty or the price is not strictly positive.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.product_name.is_empty() || self.price <= Decimal::ZERO {
            return Err(ProductsServiceError::InvalidData);
        }

        Ok(())
    }
}
