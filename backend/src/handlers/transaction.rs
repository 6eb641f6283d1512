//! HTTP handlers for the transaction ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::transaction::{
    RecordTransactionInput, TransactionRecord, TransactionService, TransactionWithProduct,
};
use crate::AppState;

/// Record a purchase or sale transaction
pub async fn record_transaction(
    State(state): State<AppState>,
    Json(input): Json<RecordTransactionInput>,
) -> AppResult<(StatusCode, Json<TransactionRecord>)> {
    let service = TransactionService::new(state.db);
    let transaction = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// List all transactions, most recent activity first
pub async fn list_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TransactionWithProduct>>> {
    let service = TransactionService::new(state.db);
    let transactions = service.list().await?;
    Ok(Json(transactions))
}

/// Get a transaction by id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<TransactionRecord>> {
    let service = TransactionService::new(state.db);
    let transaction = service.get(transaction_id).await?;
    Ok(Json(transaction))
}

/// Delete a transaction
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = TransactionService::new(state.db);
    service.delete(transaction_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
