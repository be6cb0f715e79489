//! Products Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::products::{
    data::ProductData,
    records::{ProductId, ProductRecord},
};

const GET_PRODUCTS_AS_JSON_SQL: &str = include_str!("sql/get_products_as_json.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const COUNT_PRODUCT_SQL: &str = include_str!("sql/count_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// JSON returned when the products table is empty.
pub(crate) const EMPTY_PRODUCTS_JSON: &str = "[]";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// The whole catalog, serialized by the database.
    pub(crate) async fn products_json(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<String, sqlx::Error> {
        let json: Option<Option<String>> = query_scalar(GET_PRODUCTS_AS_JSON_SQL)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(json
            .flatten()
            .unwrap_or_else(|| EMPTY_PRODUCTS_JSON.to_string()))
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i32())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        data: &ProductData,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i32 = query_scalar(INSERT_PRODUCT_SQL)
            .bind(&data.product_name)
            .bind(data.description.as_deref())
            .bind(data.price)
            .bind(data.company_id)
            .bind(data.store_id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(ProductId::from_i32(id))
    }

    pub(crate) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_PRODUCT_SQL)
            .bind(product.into_i32())
            .fetch_one(&mut **tx)
            .await?;

        Ok(count > 0)
    }

    /// Replace every writable column and stamp the modification time.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        data: &ProductData,
        modified_date: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.into_i32())
            .bind(&data.product_name)
            .bind(data.description.as_deref())
            .bind(data.price)
            .bind(data.company_id)
            .bind(data.store_id)
            .bind(SqlxTimestamp::from(modified_date))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i32())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i32(row.try_get("id")?),
            product_name: row.try_get("product_name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            company_id: row.try_get("company_id")?,
            store_id: row.try_get("store_id")?,
            modified_date: row
                .try_get::<Option<SqlxTimestamp>, _>("modified_date")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
