//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;

use catalog_app::domain::products::{data::ProductData, records::ProductId};

use crate::{
    extensions::*,
    products::{errors::ProductsApiError, payloads::ProductRequest},
    state::State,
};

/// Update Product Handler
///
/// Replaces every writable field. The path identifier always wins.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<String, ProductsApiError> {
    let id = ProductId::from_i32(id.into_inner());
    let data = ProductData::try_from(json.into_inner())?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.products.update_product(id, data).await?;

    info!(product_id = %id, "product updated");

    Ok(format!("Product {id} updated successfully."))
}
