use crate::error::HandlerError;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use expense_repo::transaction_repo::{NewTransaction, TransactionRepo};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;

#[derive(Serialize)]
struct AddedTransaction {
    message: &'static str,
    id: i32,
}

#[derive(Serialize)]
struct DeletedTransaction {
    message: &'static str,
}

#[post("/addTransaction")]
pub async fn add_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    new_transaction: web::Json<NewTransaction>,
    root_span: Option<RootSpan>,
) -> Result<impl Responder, HandlerError> {
    let transaction = transaction_repo
        .add_transaction(new_transaction.into_inner())
        .await?;
    if let Some(root_span) = root_span {
        root_span.record("transaction_id", transaction.id);
    }
    info!(transaction_id = transaction.id, "Added transaction");

    Ok(HttpResponse::Ok().json(AddedTransaction {
        message: "Transaction added successfully",
        id: transaction.id,
    }))
}

#[get("/transactions")]
pub async fn get_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
) -> Result<impl Responder, HandlerError> {
    let transactions: Vec<NewTransaction> = transaction_repo
        .list_transactions()
        .await?
        .into_iter()
        .map(NewTransaction::from)
        .collect();
    Ok(HttpResponse::Ok().json(transactions))
}

#[delete("/deleteTransaction/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i32>,
    root_span: Option<RootSpan>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    if let Some(root_span) = root_span {
        root_span.record("transaction_id", transaction_id);
    }

    transaction_repo.delete_transaction(transaction_id).await?;
    Ok(HttpResponse::Ok().json(DeletedTransaction {
        message: "Transaction deleted successfully",
    }))
}
