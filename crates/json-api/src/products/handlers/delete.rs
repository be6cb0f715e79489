//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use catalog_app::domain::products::records::ProductId;

use crate::{extensions::*, products::errors::ProductsApiError, state::State};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i32>,
    depot: &mut Depot,
) -> Result<String, ProductsApiError> {
    let id = ProductId::from_i32(id.into_inner());

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.products.delete_product(id).await?;

    info!(product_id = %id, "product deleted");

    Ok(format!("Product {id} deleted successfully."))
}
