//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::{auth::ApiKey, state::State};

pub(crate) const TEST_API_KEY: &str = "test-api-key";

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::shared(
        AppContext::new(Arc::new(products)),
        ApiKey::new(TEST_API_KEY),
    )
}

/// Serve `route` with injected state and no API key gate.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn make_record(id: i32) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i32(id),
        product_name: "Widget".to_string(),
        description: Some("A widget".to_string()),
        price: Decimal::new(999, 2),
        company_id: Some(1),
        store_id: Some(2),
        modified_date: None,
    }
}
