//! Financial summary service over the transaction ledger

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::FinancialSummary;

/// Summary service computing aggregate financials on demand
#[derive(Clone)]
pub struct SummaryService {
    db: PgPool,
}

impl SummaryService {
    /// Create a new SummaryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute revenue, COGS, and the profit lines across the full ledger.
    /// Every sum defaults to zero when no matching rows exist.
    pub async fn financial_summary(&self) -> AppResult<FinancialSummary> {
        let total_revenue = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(COALESCE(unit_price, 0) * quantity), 0)
            FROM transactions
            WHERE transaction_type = 'sale'
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        // COGS values each sale at the product's currently recorded purchase
        // cost, not the cost in effect when the sale happened.
        let total_cogs = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(p.last_purchase_cost * t.quantity), 0)
            FROM transactions t
            JOIN products p ON p.id = t.product_id
            WHERE t.transaction_type = 'sale'
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        let total_transport_other_costs = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(transport_other_cost), 0)
            FROM transactions
            WHERE transaction_type = 'purchase'
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        Ok(FinancialSummary::from_totals(
            total_revenue,
            total_cogs,
            total_transport_other_costs,
        ))
    }
}
