//! HTTP handler for the financial summary endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::FinancialSummary;
use crate::services::SummaryService;
use crate::AppState;

/// Compute the financial summary over the full transaction ledger
pub async fn get_financial_summary(
    State(state): State<AppState>,
) -> AppResult<Json<FinancialSummary>> {
    let service = SummaryService::new(state.db);
    let summary = service.financial_summary().await?;
    Ok(Json(summary))
}
