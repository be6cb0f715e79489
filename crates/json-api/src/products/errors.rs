//! Product Errors

use salvo::{
    http::{StatusCode, StatusError},
    oapi::{Components, EndpointOutRegister, Operation, Response as OapiResponse},
    prelude::Response,
    writing::{Scribe, Text},
};
use thiserror::Error;
use tracing::{error, warn};

use catalog_app::domain::products::{ProductsServiceError, records::ProductId};

pub(crate) const INVALID_DATA_MESSAGE: &str =
    "Invalid product data. ProductName is required and Price must be greater than zero.";

pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// A failed products request, rendered as a plain-text message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub(crate) struct ProductsApiError {
    status: StatusCode,
    message: String,
}

impl ProductsApiError {
    pub(crate) fn invalid_data() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_DATA_MESSAGE.to_string(),
        }
    }

    pub(crate) fn not_found(product: ProductId) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Product with ID {product} not found."),
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<ProductsServiceError> for ProductsApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::InvalidData => Self::invalid_data(),
            ProductsServiceError::NotFound(product) => {
                warn!(product_id = %product, "product not found");

                Self::not_found(product)
            }
            ProductsServiceError::Sql(source) => {
                error!("product storage failure: {source}");

                Self::internal()
            }
        }
    }
}

/// Depot and header failures arrive as `StatusError`s; server-side ones get the generic text.
impl From<StatusError> for ProductsApiError {
    fn from(error: StatusError) -> Self {
        if error.code.is_server_error() {
            return Self::internal();
        }

        Self {
            status: error.code,
            message: error.brief,
        }
    }
}

impl Scribe for ProductsApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Text::Plain(self.message));
    }
}

impl EndpointOutRegister for ProductsApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Invalid product data"),
            (StatusCode::UNAUTHORIZED, "Missing or invalid API key"),
            (StatusCode::NOT_FOUND, "Product not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation
                .responses
                .insert(status.as_str(), OapiResponse::new(description));
        }
    }
}
