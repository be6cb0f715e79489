//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::{ProductId, ProductRecord};

use crate::{extensions::*, products::errors::ProductsApiError, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i32,

    pub product_name: String,

    pub description: Option<String>,

    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub company_id: Option<i32>,

    pub store_id: Option<i32>,

    /// When the product was last updated (RFC 3339 UTC, microseconds), absent
    /// until the first update
    pub modified_date: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        let modified_date = product.modified_date_text();

        ProductResponse {
            id: product.id.into_i32(),
            product_name: product.product_name,
            description: product.description,
            price: product.price,
            company_id: product.company_id,
            store_id: product.store_id,
            modified_date,
        }
    }
}

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ProductsApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i32(id.into_inner()))
        .await?;

    Ok(Json(product.into()))
}
