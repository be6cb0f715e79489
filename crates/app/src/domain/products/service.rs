//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info, instrument};

use crate::{
    database::Db,
    domain::products::{
        data::ProductData,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products_json(&self) -> Result<String, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let json = self.repository.products_json(&mut tx).await?;

        tx.commit().await?;

        debug!(bytes = json.len(), "listed products");

        Ok(json)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        record.ok_or(ProductsServiceError::NotFound(product))
    }

    #[instrument(skip_all)]
    async fn create_product(&self, data: ProductData) -> Result<ProductId, ProductsServiceError> {
        data.validate()?;

        let mut tx = self.db.begin().await?;

        let product = self.repository.insert_product(&mut tx, &data).await?;

        tx.commit().await?;

        info!(product_id = %product, "created product");

        Ok(product)
    }

    #[instrument(skip_all, fields(product_id = %product))]
    async fn update_product(
        &self,
        product: ProductId,
        data: ProductData,
    ) -> Result<(), ProductsServiceError> {
        data.validate()?;

        let mut tx = self.db.begin().await?;

        if !self.repository.product_exists(&mut tx, product).await? {
            return Err(ProductsServiceError::NotFound(product));
        }

        let rows_affected = self
            .repository
            .update_product(&mut tx, product, &data, Timestamp::now())
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound(product));
        }

        tx.commit().await?;

        info!(product_id = %product, "updated product");

        Ok(())
    }

    #[instrument(skip_all, fields(product_id = %product))]
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        if !self.repository.product_exists(&mut tx, product).await? {
            return Err(ProductsServiceError::NotFound(product));
        }

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound(product));
        }

        tx.commit().await?;

        info!(product_id = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product as a JSON array, `[]` when there are none.
    async fn list_products_json(&self) -> Result<String, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product and returns the identifier the store assigned to it.
    async fn create_product(&self, data: ProductData) -> Result<ProductId, ProductsServiceError>;

    /// Replaces every writable field of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        data: ProductData,
    ) -> Result<(), ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
