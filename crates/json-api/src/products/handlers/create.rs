//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use catalog_app::domain::products::data::ProductData;

use crate::{
    extensions::*,
    products::{errors::ProductsApiError, payloads::ProductRequest},
    state::State,
};

/// Create Product Handler
///
/// Validates the payload before touching the database.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("api_key" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<String, ProductsApiError> {
    let data = ProductData::try_from(json.into_inner())?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state.app.products.create_product(data).await?;

    info!(product_id = %id, "product created");

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(format!("Product {id} created successfully."))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::{
        products::errors::{INTERNAL_ERROR_MESSAGE, INVALID_DATA_MESSAGE},
        test_helpers::products_service,
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let expected = ProductData {
            product_name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: Decimal::new(999, 2),
            company_id: Some(1),
            store_id: Some(2),
        };

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |data| *data == expected)
            .return_once(|_| Ok(ProductId::from_i32(17)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "ProductName": "Widget",
                "Description": "A widget",
                "Price": 9.99,
                "CompanyId": 1,
                "StoreId": 2
            }))
            .send(&make_service(products))
            .await;

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location.as_deref(), Some("/products/17"));
        assert_eq!(res.take_string().await?, "Product 17 created successfully.");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_ignores_client_id() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Ok(ProductId::from_i32(3)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "Id": 999, "ProductName": "Widget", "Price": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(res.take_string().await?, "Product 3 created successfully.");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_data_returns_400_without_calling_service() -> TestResult
    {
        for payload in [
            json!({ "ProductName": "", "Price": 5 }),
            json!({ "ProductName": "Widget", "Price": 0 }),
            json!({ "ProductName": "Widget", "Price": -1 }),
            json!({ "Price": 5 }),
            json!({ "ProductName": "Widget" }),
        ] {
            let mut products = MockProductsService::new();

            products.expect_create_product().never();

            let mut res = TestClient::post("http://example.com/products")
                .json(&payload)
                .send(&make_service(products))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "payload {payload} should be rejected"
            );
            assert_eq!(res.take_string().await?, INVALID_DATA_MESSAGE);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .raw_json("{ not json")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_check_violation_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "ProductName": "Widget", "Price": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_storage_failure_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Sql(
                catalog_app::database::SqlxError::PoolTimedOut,
            ))
        });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "ProductName": "Widget", "Price": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(res.take_string().await?, INTERNAL_ERROR_MESSAGE);

        Ok(())
    }
}
