use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{NewTransaction, Transaction, TransactionRepo, TransactionRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    transactions: BTreeMap<i32, Transaction>,
    next_id: i32,
}

pub struct MemTransactionRepo {
    state: RwLock<State>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        let state = State {
            transactions: BTreeMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn add_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let transaction = new_transaction.to_transaction(id);
        write_guard.transactions.insert(id, transaction.clone());

        Ok(transaction)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.transactions.values().cloned().collect())
    }

    async fn delete_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transactions
            .remove(&transaction_id)
            .ok_or(TransactionNotFound(transaction_id))
    }
}
