//! Product Index Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};

use crate::{extensions::*, products::errors::ProductsApiError, state::State};

/// Product Index Handler
///
/// Returns every product as a JSON array, serialized by the database.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "JSON array of products"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), ProductsApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products_json().await?;

    res.render(Text::Json(products));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{products::errors::INTERNAL_ERROR_MESSAGE, test_helpers::products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_database_json_verbatim() -> TestResult {
        let json = r#"[{"Id":1,"ProductName":"Widget","Price":9.99}]"#;

        let mut products = MockProductsService::new();

        products
            .expect_list_products_json()
            .once()
            .return_once(move || Ok(json.to_string()));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            content_type.starts_with("application/json"),
            "unexpected content type {content_type}"
        );
        assert_eq!(res.take_string().await?, json);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_store_returns_empty_array() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products_json()
            .once()
            .return_once(|| Ok("[]".to_string()));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, Value::Array(Vec::new()));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500_without_detail() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products_json().once().return_once(|| {
            Err(ProductsServiceError::Sql(
                catalog_app::database::SqlxError::PoolTimedOut,
            ))
        });

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(res.take_string().await?, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }
}
