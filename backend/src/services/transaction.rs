//! Transaction ledger service for purchase and sale records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::TransactionType;
use shared::validation::{validate_amounts_for_type, validate_money, validate_quantity};

/// Transaction service for the append-only purchase/sale ledger
#[derive(Clone)]
pub struct TransactionService {
    db: PgPool,
}

/// Ledger entry record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub transaction_date: NaiveDate,
    pub transaction_type: String,
    pub quantity: i32,
    pub unit_cost: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub party_name: Option<String>,
    pub transport_other_cost: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Ledger entry joined with its product's identifying fields for display
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TransactionWithProduct {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub transaction: TransactionRecord,
    pub phone_model: String,
    pub part_type: String,
    pub variant: String,
}

/// Input for recording a transaction
#[derive(Debug, Deserialize)]
pub struct RecordTransactionInput {
    pub product_id: Uuid,
    pub transaction_date: Option<NaiveDate>,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub unit_cost: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub party_name: Option<String>,
    pub transport_other_cost: Option<Decimal>,
}

impl TransactionService {
    /// Create a new TransactionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a transaction. For purchases the referenced product's
    /// `last_purchase_cost` is updated in the same database transaction as
    /// the insert, so a reader never sees one without the other.
    pub async fn record(&self, input: RecordTransactionInput) -> AppResult<TransactionRecord> {
        if let Err(message) = validate_quantity(input.quantity) {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: message.to_string(),
            });
        }

        if let Err(message) =
            validate_amounts_for_type(input.transaction_type, input.unit_cost, input.unit_price)
        {
            let field = match input.transaction_type {
                TransactionType::Purchase => "unit_cost",
                TransactionType::Sale => "unit_price",
            };
            return Err(AppError::Validation {
                field: field.to_string(),
                message: message.to_string(),
            });
        }

        let transport_other_cost = input.transport_other_cost.unwrap_or(Decimal::ZERO);
        if let Err(message) = validate_money(transport_other_cost) {
            return Err(AppError::Validation {
                field: "transport_other_cost".to_string(),
                message: message.to_string(),
            });
        }

        // Validate the referenced product exists
        let product_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
        )
        .bind(input.product_id)
        .fetch_one(&self.db)
        .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let transaction_date = input
            .transaction_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let mut tx = self.db.begin().await?;

        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            INSERT INTO transactions (product_id, transaction_date, transaction_type, quantity,
                                      unit_cost, unit_price, party_name, transport_other_cost)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, product_id, transaction_date, transaction_type, quantity,
                      unit_cost, unit_price, party_name, transport_other_cost, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(transaction_date)
        .bind(input.transaction_type.as_str())
        .bind(input.quantity)
        .bind(input.unit_cost)
        .bind(input.unit_price)
        .bind(&input.party_name)
        .bind(transport_other_cost)
        .fetch_one(&mut *tx)
        .await?;

        // Purchases propagate their unit cost onto the product. Deletion
        // never reverses this: the cost history is append-only.
        if input.transaction_type == TransactionType::Purchase {
            sqlx::query(
                "UPDATE products SET last_purchase_cost = $1, updated_at = NOW() WHERE id = $2",
            )
            .bind(input.unit_cost)
            .bind(input.product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(record)
    }

    /// List every transaction, most recent activity first, with the
    /// product's identifying snapshot attached
    pub async fn list(&self) -> AppResult<Vec<TransactionWithProduct>> {
        let transactions = sqlx::query_as::<_, TransactionWithProduct>(
            r#"
            SELECT t.id, t.product_id, t.transaction_date, t.transaction_type, t.quantity,
                   t.unit_cost, t.unit_price, t.party_name, t.transport_other_cost, t.created_at,
                   p.phone_model, p.part_type, p.variant
            FROM transactions t
            JOIN products p ON p.id = t.product_id
            ORDER BY t.transaction_date DESC, t.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(transactions)
    }

    /// Get a transaction by id
    pub async fn get(&self, transaction_id: Uuid) -> AppResult<TransactionRecord> {
        let transaction = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT id, product_id, transaction_date, transaction_type, quantity,
                   unit_cost, unit_price, party_name, transport_other_cost, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction".to_string()))?;

        Ok(transaction)
    }

    /// Delete a transaction. The referenced product's recorded cost is left
    /// untouched.
    pub async fn delete(&self, transaction_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(transaction_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        Ok(())
    }
}
