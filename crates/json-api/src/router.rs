//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    auth::{self, middleware::API_KEY_HEADER},
    healthcheck,
    observability::{metrics_handler, request_logging},
    products,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Routes that require an API key.
pub(crate) fn products_router() -> Router {
    Router::with_path("products")
        .hoop(auth::middleware::handler)
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

/// Complete application router, including the unauthenticated operational
/// routes and the generated OpenAPI document.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(products_router());

    let doc = OpenApi::new("Product Catalog API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        )
        .merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

pub(crate) fn app_service(state: Arc<State>) -> Service {
    Service::new(app_router(state))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::{
        http::header::LOCATION,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, data::ProductData, records::ProductId,
    };

    use crate::test_helpers::{TEST_API_KEY, state_with_products};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        app_service(state_with_products(products))
    }

    #[tokio::test]
    async fn test_healthcheck_is_not_gated() -> TestResult {
        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(MockProductsService::new()))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "status": "ok" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_openapi_document_lists_product_routes() -> TestResult {
        let mut res = TestClient::get(format!("http://example.com{OPENAPI_PATH}"))
            .send(&make_service(MockProductsService::new()))
            .await;

        let doc: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            doc["paths"]["/products"].is_object(),
            "expected /products in {doc}"
        );
        assert!(
            doc["paths"]["/products/{id}"].is_object(),
            "expected /products/{{id}} in {doc}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_products_require_api_key() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products_json().never();
        products.expect_create_product().never();

        let service = make_service(products);

        let list = TestClient::get("http://example.com/products")
            .send(&service)
            .await;

        let create = TestClient::post("http://example.com/products")
            .json(&json!({ "ProductName": "Widget", "Price": 1 }))
            .send(&service)
            .await;

        assert_eq!(list.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(create.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_update_list_delete_scenario() -> TestResult {
        let created = ProductData {
            product_name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            price: Decimal::new(999, 2),
            company_id: Some(1),
            store_id: Some(1),
        };

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |data| *data == created)
            .return_once(|_| Ok(ProductId::from_i32(1)));

        let mut update_calls = 0;

        products
            .expect_update_product()
            .times(2)
            .withf(|id, data| {
                id.into_i32() == 1
                    && data.product_name == "Widget XL"
                    && data.price == Decimal::new(1499, 2)
            })
            .returning(move |id, _| {
                update_calls += 1;

                if update_calls == 1 {
                    Ok(())
                } else {
                    Err(ProductsServiceError::NotFound(id))
                }
            });

        products
            .expect_list_products_json()
            .once()
            .return_once(|| {
                Ok(json!([{
                    "Id": 1,
                    "ProductName": "Widget XL",
                    "Description": "A larger widget",
                    "Price": 14.99,
                    "CompanyId": 1,
                    "StoreId": 1,
                    "ModifiedDate": "2026-01-02T03:04:05.123456Z"
                }])
                .to_string())
            });

        products
            .expect_delete_product()
            .once()
            .withf(|id| id.into_i32() == 1)
            .return_once(|_| Ok(()));

        let service = make_service(products);

        let update_body = json!({
            "ProductName": "Widget XL",
            "Description": "A larger widget",
            "Price": 14.99,
            "CompanyId": 1,
            "StoreId": 1
        });

        let mut res = TestClient::post("http://example.com/products")
            .add_header(API_KEY_HEADER, TEST_API_KEY, true)
            .json(&json!({
                "ProductName": "Widget",
                "Description": "A widget",
                "Price": 9.99,
                "CompanyId": 1,
                "StoreId": 1
            }))
            .send(&service)
            .await;

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location.as_deref(), Some("/products/1"));
        assert_eq!(res.take_string().await?, "Product 1 created successfully.");

        let mut res = TestClient::put("http://example.com/products/1")
            .add_header(API_KEY_HEADER, TEST_API_KEY, true)
            .json(&update_body)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "Product 1 updated successfully.");

        let mut res = TestClient::get("http://example.com/products")
            .add_header(API_KEY_HEADER, TEST_API_KEY, true)
            .send(&service)
            .await;

        let listed: Value = res.take_json().await?;
        let widget = listed
            .as_array()
            .and_then(|products| products.iter().find(|product| product["Id"] == 1))
            .ok_or("expected product 1 in the listing")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(widget["ProductName"], "Widget XL");
        assert_eq!(widget["Price"].as_f64(), Some(14.99));

        let mut res = TestClient::delete("http://example.com/products/1")
            .add_header(API_KEY_HEADER, TEST_API_KEY, true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "Product 1 deleted successfully.");

        let mut res = TestClient::put("http://example.com/products/1")
            .add_header(API_KEY_HEADER, TEST_API_KEY, true)
            .json(&update_body)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await?, "Product with ID 1 not found.");

        Ok(())
    }
}
