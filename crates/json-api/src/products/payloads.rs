//! Product Payloads

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::ProductData;

use crate::products::errors::ProductsApiError;

/// Product write payload
///
/// Shared by create and update. Keys are PascalCase, with camelCase accepted
/// as well. `Id` and `ModifiedDate` are assigned by the server, so any
/// client-supplied values are ignored along with unknown keys.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ProductRequest {
    /// Display name, required and non-empty
    #[serde(alias = "productName")]
    pub product_name: Option<String>,

    /// Free-form description
    #[serde(alias = "description")]
    pub description: Option<String>,

    /// Unit price, required and greater than zero
    #[salvo(schema(value_type = Option<f64>))]
    #[serde(alias = "price")]
    pub price: Option<Decimal>,

    /// Owning company
    #[serde(alias = "companyId")]
    pub company_id: Option<i32>,

    /// Owning store
    #[serde(alias = "storeId")]
    pub store_id: Option<i32>,
}

impl TryFrom<ProductRequest> for ProductData {
    type Error = ProductsApiError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let (Some(product_name), Some(price)) = (request.product_name, request.price) else {
            return Err(ProductsApiError::invalid_data());
        };

        let data = ProductData {
            product_name,
            description: request.description,
            price,
            company_id: request.company_id,
            store_id: request.store_id,
        };

        data.validate()?;

        Ok(data)
    }
}
