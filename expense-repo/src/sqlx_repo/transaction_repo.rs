use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    CurrencyCode, NewTransaction, Transaction, TransactionRepo, TransactionRepoError,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{query_as, query_scalar};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i32,
    content: String,
    currency: String,
    amount: f64,
    #[sqlx(rename = "type")]
    kind: String,
    date: NaiveDate,
    category: String,
    tags: String,
    notes: String,
}

impl TryFrom<TransactionEntry> for Transaction {
    type Error = TransactionRepoError;

    fn try_from(value: TransactionEntry) -> Result<Self, Self::Error> {
        let currency = CurrencyCode::try_from(value.currency)
            .with_context(|| format!("Transaction {} has an invalid currency", value.id))?;
        Ok(Transaction {
            id: value.id,
            content: value.content,
            currency,
            amount: value.amount,
            kind: value.kind,
            date: value.date,
            category: value.category,
            tags: value.tags,
            notes: value.notes,
        })
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self, new_transaction))]
    async fn add_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let id: i32 = query_scalar(
            "INSERT INTO transactions(content, currency, amount, type, date, category, tags, notes) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(&new_transaction.content)
        .bind(new_transaction.currency.as_str())
        .bind(new_transaction.amount)
        .bind(&new_transaction.kind)
        .bind(new_transaction.date)
        .bind(&new_transaction.category)
        .bind(&new_transaction.tags)
        .bind(&new_transaction.notes)
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert transaction")?;

        Ok(new_transaction.to_transaction(id))
    }

    #[instrument(skip(self))]
    async fn list_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as(
            "SELECT id, content, currency, amount, type, date, category, tags, notes FROM transactions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to get transactions")?;

        transaction_entries
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: TransactionEntry = query_as(
            "DELETE FROM transactions WHERE id = $1 RETURNING id, content, currency, amount, type, date, category, tags, notes",
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to delete transaction {}", transaction_id))?
        .ok_or(TransactionNotFound(transaction_id))?;

        transaction_entry.try_into()
    }
}
