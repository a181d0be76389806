//! # Demo Data
//!
//! A fresh install starts with a handful of products so a newly paired
//! phone has something to show.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// `(name, purchased, notes)` rows inserted into an empty table.
pub const DEMO_PRODUCTS: &[(&str, bool, &str)] = &[
    ("Молоко", false, "Взять 2 пакета"),
    ("Хлеб", true, "Черный, бородинский"),
    ("Яйца", false, "10 штук, категория С0"),
    ("Кофе", false, "Молотый, Arabica"),
    ("Сахар", false, "1 кг, коричневый"),
];

/// Inserts [`DEMO_PRODUCTS`] if the products table is empty.
///
/// ## Returns
/// Number of rows inserted (0 when the table already had data).
pub async fn seed_demo_products(pool: &SqlitePool) -> DbResult<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        debug!(existing, "Products table not empty, skipping demo data");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for &(name, purchased, notes) in DEMO_PRODUCTS {
        sqlx::query("INSERT INTO products (name, purchased, notes) VALUES (?1, ?2, ?3)")
            .bind(name)
            .bind(purchased)
            .bind(notes)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    info!(count = DEMO_PRODUCTS.len(), "Added demo products");
    Ok(DEMO_PRODUCTS.len() as u64)
}
