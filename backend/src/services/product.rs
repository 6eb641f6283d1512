//! Product registry service for the parts catalogue

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{current_stock, StockStatus};
use shared::validation::{validate_money, validate_threshold};

/// Product service for managing the parts catalogue
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Catalogued part record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub phone_model: String,
    pub part_type: String,
    pub variant: String,
    pub last_purchase_cost: Decimal,
    pub suggested_sell_price: Decimal,
    pub low_stock_threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product augmented with its derived stock fields
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithStock {
    #[serde(flatten)]
    pub product: Product,
    pub current_stock: i64,
    pub status: StockStatus,
}

/// Row for the stock aggregation query. Stock is recomputed from the
/// ledger on every read, never materialized.
#[derive(Debug, FromRow)]
struct ProductStockRow {
    #[sqlx(flatten)]
    product: Product,
    purchased: i64,
    sold: i64,
}

impl From<ProductStockRow> for ProductWithStock {
    fn from(row: ProductStockRow) -> Self {
        let stock = current_stock(row.purchased, row.sold);
        let status = StockStatus::for_stock(stock, row.product.low_stock_threshold);
        ProductWithStock {
            product: row.product,
            current_stock: stock,
            status,
        }
    }
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub phone_model: String,
    pub part_type: String,
    #[serde(default)]
    pub variant: String,
    pub last_purchase_cost: Decimal,
    pub suggested_sell_price: Decimal,
    pub low_stock_threshold: Option<i32>,
}

/// Input for updating a product; absent fields keep their stored values
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub phone_model: Option<String>,
    pub part_type: Option<String>,
    pub variant: Option<String>,
    pub last_purchase_cost: Option<Decimal>,
    pub suggested_sell_price: Option<Decimal>,
    pub low_stock_threshold: Option<i32>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product
    pub async fn create(&self, input: CreateProductInput) -> AppResult<Product> {
        if let Err(message) = validate_money(input.last_purchase_cost) {
            return Err(AppError::Validation {
                field: "last_purchase_cost".to_string(),
                message: message.to_string(),
            });
        }
        if let Err(message) = validate_money(input.suggested_sell_price) {
            return Err(AppError::Validation {
                field: "suggested_sell_price".to_string(),
                message: message.to_string(),
            });
        }

        let low_stock_threshold = input.low_stock_threshold.unwrap_or(3);
        if let Err(message) = validate_threshold(low_stock_threshold) {
            return Err(AppError::Validation {
                field: "low_stock_threshold".to_string(),
                message: message.to_string(),
            });
        }

        // The (phone model, part type, variant) triple must be unique
        let duplicate = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE phone_model = $1 AND part_type = $2 AND variant = $3)"
        )
        .bind(&input.phone_model)
        .bind(&input.part_type)
        .bind(&input.variant)
        .fetch_one(&self.db)
        .await?;

        if duplicate {
            return Err(AppError::DuplicateEntry(
                "part (phone model, part type, variant)".to_string(),
            ));
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (phone_model, part_type, variant, last_purchase_cost,
                                  suggested_sell_price, low_stock_threshold)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, phone_model, part_type, variant, last_purchase_cost,
                      suggested_sell_price, low_stock_threshold, created_at, updated_at
            "#,
        )
        .bind(&input.phone_model)
        .bind(&input.part_type)
        .bind(&input.variant)
        .bind(input.last_purchase_cost)
        .bind(input.suggested_sell_price)
        .bind(low_stock_threshold)
        .fetch_one(&self.db)
        .await
        .map_err(map_unique_violation)?;

        Ok(product)
    }

    /// List every product with derived stock and status
    pub async fn list(&self) -> AppResult<Vec<ProductWithStock>> {
        let rows = sqlx::query_as::<_, ProductStockRow>(
            r#"
            SELECT p.id, p.phone_model, p.part_type, p.variant, p.last_purchase_cost,
                   p.suggested_sell_price, p.low_stock_threshold, p.created_at, p.updated_at,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'purchase' THEN t.quantity ELSE 0 END), 0) AS purchased,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'sale' THEN t.quantity ELSE 0 END), 0) AS sold
            FROM products p
            LEFT JOIN transactions t ON t.product_id = p.id
            GROUP BY p.id
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ProductWithStock::from).collect())
    }

    /// Get one product with derived stock and status
    pub async fn get(&self, product_id: Uuid) -> AppResult<ProductWithStock> {
        let row = sqlx::query_as::<_, ProductStockRow>(
            r#"
            SELECT p.id, p.phone_model, p.part_type, p.variant, p.last_purchase_cost,
                   p.suggested_sell_price, p.low_stock_threshold, p.created_at, p.updated_at,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'purchase' THEN t.quantity ELSE 0 END), 0) AS purchased,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'sale' THEN t.quantity ELSE 0 END), 0) AS sold
            FROM products p
            LEFT JOIN transactions t ON t.product_id = p.id
            WHERE p.id = $1
            GROUP BY p.id
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(row.into())
    }

    /// Apply a partial update; absent fields keep their stored values
    pub async fn update(&self, product_id: Uuid, input: UpdateProductInput) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, phone_model, part_type, variant, last_purchase_cost,
                   suggested_sell_price, low_stock_threshold, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let phone_model = input.phone_model.unwrap_or(existing.phone_model);
        let part_type = input.part_type.unwrap_or(existing.part_type);
        let variant = input.variant.unwrap_or(existing.variant);
        let last_purchase_cost = input.last_purchase_cost.unwrap_or(existing.last_purchase_cost);
        let suggested_sell_price = input
            .suggested_sell_price
            .unwrap_or(existing.suggested_sell_price);
        let low_stock_threshold = input
            .low_stock_threshold
            .unwrap_or(existing.low_stock_threshold);

        if let Err(message) = validate_money(last_purchase_cost) {
            return Err(AppError::Validation {
                field: "last_purchase_cost".to_string(),
                message: message.to_string(),
            });
        }
        if let Err(message) = validate_money(suggested_sell_price) {
            return Err(AppError::Validation {
                field: "suggested_sell_price".to_string(),
                message: message.to_string(),
            });
        }
        if let Err(message) = validate_threshold(low_stock_threshold) {
            return Err(AppError::Validation {
                field: "low_stock_threshold".to_string(),
                message: message.to_string(),
            });
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET phone_model = $1, part_type = $2, variant = $3, last_purchase_cost = $4,
                suggested_sell_price = $5, low_stock_threshold = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING id, phone_model, part_type, variant, last_purchase_cost,
                      suggested_sell_price, low_stock_threshold, created_at, updated_at
            "#,
        )
        .bind(&phone_model)
        .bind(&part_type)
        .bind(&variant)
        .bind(last_purchase_cost)
        .bind(suggested_sell_price)
        .bind(low_stock_threshold)
        .bind(product_id)
        .fetch_one(&self.db)
        .await
        .map_err(map_unique_violation)?;

        Ok(product)
    }

    /// Delete a product; refused while any transaction references it
    pub async fn delete(&self, product_id: Uuid) -> AppResult<()> {
        let referenced = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM transactions WHERE product_id = $1)",
        )
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        if referenced {
            return Err(AppError::Conflict {
                resource: "Product".to_string(),
                message: "Cannot delete a product with recorded transactions".to_string(),
            });
        }

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// List only the products at or below their low-stock threshold
    pub async fn list_low_stock(&self) -> AppResult<Vec<ProductWithStock>> {
        let rows = sqlx::query_as::<_, ProductStockRow>(
            r#"
            SELECT p.id, p.phone_model, p.part_type, p.variant, p.last_purchase_cost,
                   p.suggested_sell_price, p.low_stock_threshold, p.created_at, p.updated_at,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'purchase' THEN t.quantity ELSE 0 END), 0) AS purchased,
                   COALESCE(SUM(CASE WHEN t.transaction_type = 'sale' THEN t.quantity ELSE 0 END), 0) AS sold
            FROM products p
            LEFT JOIN transactions t ON t.product_id = p.id
            GROUP BY p.id
            HAVING COALESCE(SUM(CASE WHEN t.transaction_type = 'purchase' THEN t.quantity ELSE 0 END), 0)
                 - COALESCE(SUM(CASE WHEN t.transaction_type = 'sale' THEN t.quantity ELSE 0 END), 0)
                 <= p.low_stock_threshold
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ProductWithStock::from).collect())
    }
}

/// Map a unique-index violation on the part triple to a conflict
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateEntry("part (phone model, part type, variant)".to_string());
        }
    }
    AppError::DatabaseError(err)
}
