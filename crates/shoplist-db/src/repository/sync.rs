//! # Sync Repository
//!
//! Applies a batch of offline changes from a client and returns the list as
//! the server now sees it.
//!
//! ## Batch Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Best-Effort, Last Write Wins                         │
//! │                                                                         │
//! │  POST /api/sync { changes: [c1, c2, c3] }                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acquire ONE pooled connection for the whole batch                     │
//! │       │                                                                 │
//! │       ├── c1 create "Tea"     → INSERT      ✓ applied: ["create"]      │
//! │       ├── c2 { action: ??? }  → decode fails ✗ logged, skipped         │
//! │       └── c3 delete id=9999   → DELETE (0 rows) ✓ applied: [.., "delete"]│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT every product (list ordering) on the same connection           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  connection returns to the pool when the guard drops                   │
//! │                                                                         │
//! │  NO transaction: earlier changes stay applied if a later one fails.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Change records bypass product validation: names are stored as sent.

use serde_json::Value;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::DbResult;
use crate::repository::product::list_products;
use shoplist_core::{ChangeRecord, Product};

/// Result of one sync batch.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Every product after the batch, in list order.
    pub products: Vec<Product>,

    /// The `action` of each change whose statement ran without error, in
    /// input order.
    pub applied: Vec<&'static str>,
}

/// Repository for sync batches.
#[derive(Debug, Clone)]
pub struct SyncRepository {
    pool: SqlitePool,
}

impl SyncRepository {
    /// Creates a new SyncRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SyncRepository { pool }
    }

    /// Applies `changes` in order, skipping the ones that fail.
    ///
    /// ## Arguments
    /// * `changes` - Raw change records as received; each is decoded on its own
    ///
    /// ## Returns
    /// * `Ok(SyncOutcome)` - Even when some or all changes were skipped
    /// * `Err(DbError)` - No connection could be acquired, or the final read failed
    pub async fn apply_changes(&self, changes: Vec<Value>) -> DbResult<SyncOutcome> {
        let received = changes.len();
        let mut conn = self.pool.acquire().await?;
        let mut applied = Vec::with_capacity(received);

        for (index, raw) in changes.into_iter().enumerate() {
            let change = match ChangeRecord::from_value(raw) {
                Ok(change) => change,
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed sync change");
                    continue;
                }
            };

            match apply_change(&mut conn, &change).await {
                Ok(rows) => {
                    debug!(index, action = change.action(), rows, "Applied sync change");
                    applied.push(change.action());
                }
                Err(e) => {
                    warn!(index, action = change.action(), error = %e, "Failed to apply sync change");
                }
            }
        }

        let products = list_products(&mut *conn, None).await?;

        info!(
            received,
            applied = applied.len(),
            products = products.len(),
            "Sync batch processed"
        );

        Ok(SyncOutcome { products, applied })
    }
}

/// Runs the statement for one change and returns the affected row count.
///
/// Zero affected rows (update or delete of an unknown id) is not an error.
async fn apply_change(conn: &mut SqliteConnection, change: &ChangeRecord) -> sqlx::Result<u64> {
    let result = match change {
        ChangeRecord::Create {
            name,
            purchased,
            notes,
        } => {
            sqlx::query("INSERT INTO products (name, purchased, notes) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(purchased)
                .bind(notes)
                .execute(&mut *conn)
                .await?
        }
        ChangeRecord::Update {
            id,
            name,
            purchased,
            notes,
        } => {
            sqlx::query("UPDATE products SET name = ?1, purchased = ?2, notes = ?3 WHERE id = ?4")
                .bind(name)
                .bind(purchased)
                .bind(notes)
                .bind(id)
                .execute(&mut *conn)
                .await?
        }
        ChangeRecord::Delete { id } => {
            sqlx::query("DELETE FROM products WHERE id = ?1")
                .bind(id)
                .execute(&mut *conn)
                .await?
        }
    };

    Ok(result.rows_affected())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use serde_json::json;
    use shoplist_core::NewProduct;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_delete_does_not_abort_batch() {
        let db = db().await;

        let outcome = db
            .sync()
            .apply_changes(vec![
                json!({ "action": "create", "name": "Tea" }),
                json!({ "action": "delete", "id": 9999 }),
            ])
            .await
            .unwrap();

        assert!(outcome.applied.contains(&"create"));
        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].name, "Tea");
        assert!(!outcome.products[0].purchased);
        assert_eq!(outcome.products[0].notes, "");
    }

    #[tokio::test]
    async fn test_malformed_changes_are_skipped() {
        let db = db().await;

        let outcome = db
            .sync()
            .apply_changes(vec![
                json!({ "action": "create" }),
                json!({ "action": "explode", "id": 1 }),
                json!("not even an object"),
                json!({ "action": "create", "name": "Sugar", "purchased": true }),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.applied, vec!["create"]);
        assert_eq!(outcome.products.len(), 1);
        assert!(outcome.products[0].purchased);
    }

    #[tokio::test]
    async fn test_changes_apply_in_order() {
        let db = db().await;
        let milk = db
            .products()
            .insert(&NewProduct {
                name: "Milk".to_string(),
                purchased: false,
                notes: "Two cartons".to_string(),
            })
            .await
            .unwrap();

        let outcome = db
            .sync()
            .apply_changes(vec![
                json!({ "action": "update", "id": milk.id, "name": "Oat milk", "purchased": true }),
                json!({ "action": "delete", "id": milk.id }),
                json!({ "action": "create", "name": "Bread" }),
            ])
            .await
            .unwrap();

        assert_eq!(outcome.applied, vec!["update", "delete", "create"]);
        let names: Vec<&str> = outcome.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bread"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields_and_is_idempotent() {
        let db = db().await;
        let coffee = db
            .products()
            .insert(&NewProduct {
                name: "Coffee".to_string(),
                purchased: true,
                notes: "Arabica".to_string(),
            })
            .await
            .unwrap();

        let change = json!({ "action": "update", "id": coffee.id, "name": "Decaf" });

        db.sync().apply_changes(vec![change.clone()]).await.unwrap();
        let once = db.products().get_by_id(coffee.id).await.unwrap().unwrap();

        db.sync().apply_changes(vec![change]).await.unwrap();
        let twice = db.products().get_by_id(coffee.id).await.unwrap().unwrap();

        // Omitted purchased/notes fall back to false/empty rather than keeping old values.
        assert_eq!(once.name, "Decaf");
        assert!(!once.purchased);
        assert_eq!(once.notes, "");
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_integer_flags_and_string_ids_are_applied() {
        let db = db().await;

        let created = db
            .sync()
            .apply_changes(vec![json!({ "action": "create", "name": "Tea", "purchased": 1 })])
            .await
            .unwrap();
        assert_eq!(created.applied, vec!["create"]);
        assert!(created.products[0].purchased);
        let id = created.products[0].id;

        let updated = db
            .sync()
            .apply_changes(vec![
                json!({ "action": "update", "id": id, "name": "Green tea", "purchased": 0 }),
            ])
            .await
            .unwrap();
        assert_eq!(updated.applied, vec!["update"]);
        assert_eq!(updated.products[0].name, "Green tea");
        assert!(!updated.products[0].purchased);

        let deleted = db
            .sync()
            .apply_changes(vec![json!({ "action": "delete", "id": id.to_string() })])
            .await
            .unwrap();
        assert_eq!(deleted.applied, vec!["delete"]);
        assert!(deleted.products.is_empty());
    }

    #[tokio::test]
    async fn test_sync_create_bypasses_validation() {
        let db = db().await;
        let long_name = "x".repeat(150);

        let outcome = db
            .sync()
            .apply_changes(vec![json!({ "action": "create", "name": long_name })])
            .await
            .unwrap();

        assert_eq!(outcome.applied, vec!["create"]);
        assert_eq!(outcome.products[0].name.chars().count(), 150);
    }

    #[tokio::test]
    async fn test_empty_batch_returns_current_list() {
        let db = db().await;
        db.products()
            .insert(&NewProduct {
                name: "Eggs".to_string(),
                purchased: false,
                notes: String::new(),
            })
            .await
            .unwrap();

        let outcome = db.sync().apply_changes(Vec::new()).await.unwrap();

        assert!(outcome.applied.is_empty());
        assert_eq!(outcome.products.len(), 1);
    }
}
