//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - List with optional purchased filter
//! - CRUD by integer id
//! - Aggregate counts for the status endpoint
//!
//! ## List Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORDER BY purchased ASC, created_at DESC, id DESC                      │
//! │                                                                         │
//! │  ┌────┬──────────┬───────────┬─────────────────────────┐               │
//! │  │ id │ name     │ purchased │ created_at              │               │
//! │  ├────┼──────────┼───────────┼─────────────────────────┤               │
//! │  │  7 │ Tea      │ false     │ 2024-05-02 09:00:00.120 │ ← still to buy│
//! │  │  3 │ Eggs     │ false     │ 2024-05-01 18:30:00.000 │               │
//! │  │  6 │ Apples   │ true      │ 2024-05-02 08:00:00.500 │ ← in the cart │
//! │  │  2 │ Bread    │ true      │ 2024-05-01 18:29:59.900 │               │
//! │  └────┴──────────┴───────────┴─────────────────────────┘               │
//! │                                                                         │
//! │  id DESC breaks ties between rows created in the same millisecond.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{QueryBuilder, Sqlite, SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use shoplist_core::{NewProduct, Product, ProductInput, ProductStats};

const GET_PRODUCT: &str = r#"
    SELECT id, name, purchased, notes, created_at, updated_at
    FROM products
    WHERE id = ?1
"#;

const LIST_PRODUCTS: &str = r#"
    SELECT id, name, purchased, notes, created_at, updated_at
    FROM products
    ORDER BY purchased ASC, created_at DESC, id DESC
"#;

const LIST_PRODUCTS_BY_STATUS: &str = r#"
    SELECT id, name, purchased, notes, created_at, updated_at
    FROM products
    WHERE purchased = ?1
    ORDER BY purchased ASC, created_at DESC, id DESC
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let to_buy = repo.list(Some(false)).await?;
/// let product = repo.get_by_id(3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists products, unpurchased first, newest first within each group.
    ///
    /// ## Arguments
    /// * `purchased` - `Some(flag)` keeps only rows with that flag
    pub async fn list(&self, purchased: Option<bool>) -> DbResult<Vec<Product>> {
        list_products(&self.pool, purchased).await
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(GET_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product and returns the stored row.
    ///
    /// `id`, `created_at` and `updated_at` come from the column defaults.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, purchased, notes)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, purchased, notes, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.purchased)
        .bind(&product.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// Only fields that are `Some` in `input` are written; `updated_at` is
    /// always refreshed.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<()> {
        debug!(id, ?input, "Updating product");

        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE products SET ");
        {
            let mut fields = query.separated(", ");
            if let Some(name) = &input.name {
                fields.push("name = ").push_bind_unseparated(name.clone());
            }
            if let Some(purchased) = input.purchased {
                fields.push("purchased = ").push_bind_unseparated(purchased);
            }
            if let Some(notes) = &input.notes {
                fields.push("notes = ").push_bind_unseparated(notes.clone());
            }
            fields.push("updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')");
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Permanently deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Total, purchased and not-purchased counts in one round trip.
    pub async fn stats(&self) -> DbResult<ProductStats> {
        let (total, purchased): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(purchased), 0) FROM products")
                .fetch_one(&self.pool)
                .await?;

        Ok(ProductStats::new(total, purchased))
    }
}

/// Shared list query, usable on the pool or on a connection already held
/// by a sync batch.
pub(crate) async fn list_products<'e, E>(
    executor: E,
    purchased: Option<bool>,
) -> DbResult<Vec<Product>>
where
    E: SqliteExecutor<'e>,
{
    let products = match purchased {
        Some(flag) => {
            sqlx::query_as::<_, Product>(LIST_PRODUCTS_BY_STATUS)
                .bind(flag)
                .fetch_all(executor)
                .await?
        }
        None => {
            sqlx::query_as::<_, Product>(LIST_PRODUCTS)
                .fetch_all(executor)
                .await?
        }
    };

    debug!(count = products.len(), ?purchased, "Listed products");
    Ok(products)
}

// =============================================================================
// Unit Tests
// =============================================================================
