//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub product_name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub company_id: Option<i32>,
    pub store_id: Option<i32>,
    pub modified_date: Option<Timestamp>,
}

impl ProductRecord {
    /// `modified_date` as RFC 3339 UTC with microseconds, the same text
    /// `get_products_as_json()` produces.
    #[must_use]
    pub fn modified_date_text(&self) -> Option<String> {
        self.modified_date.map(|timestamp| format!("{timestamp:.6}"))
    }
}
