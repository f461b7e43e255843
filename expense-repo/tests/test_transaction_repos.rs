mod transaction_utils;
mod utils;

use crate::transaction_utils::{generate_new_transaction, generate_new_transaction_with_category};
use expense_repo::transaction_repo::{NewTransaction, Transaction, TransactionRepoError};
use rstest::rstest;
use utils::RepoType;

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_add_and_list_transactions(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    let new_transaction = generate_new_transaction();
    let transaction = transaction_repo
        .add_transaction(new_transaction.clone())
        .await
        .unwrap();
    assert_eq!(new_transaction, NewTransaction::from(transaction.clone()));

    let transactions = transaction_repo.list_transactions().await.unwrap();
    let stored_transaction = transactions
        .iter()
        .find(|t| t.id == transaction.id)
        .expect("added transaction should be listed");
    assert_eq!(stored_transaction.content, new_transaction.content);
    assert_eq!(stored_transaction.currency, new_transaction.currency);
    assert_eq!(stored_transaction.amount, new_transaction.amount);
    assert_eq!(stored_transaction.kind, new_transaction.kind);
    assert_eq!(stored_transaction.date, new_transaction.date);
    assert_eq!(stored_transaction.category, new_transaction.category);
    assert_eq!(stored_transaction.tags, new_transaction.tags);
    assert_eq!(stored_transaction.notes, new_transaction.notes);

    transaction_repo
        .delete_transaction(transaction.id)
        .await
        .unwrap();
}

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_list_in_insertion_order(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    let mut inserted: Vec<Transaction> = Vec::new();
    for category in ["food", "rent", "travel"] {
        let transaction = transaction_repo
            .add_transaction(generate_new_transaction_with_category(category))
            .await
            .unwrap();
        inserted.push(transaction);
    }

    let listed: Vec<Transaction> = transaction_repo
        .list_transactions()
        .await
        .unwrap()
        .into_iter()
        .filter(|t| inserted.iter().any(|i| i.id == t.id))
        .collect();
    assert_eq!(inserted, listed);

    for transaction in inserted {
        transaction_repo
            .delete_transaction(transaction.id)
            .await
            .unwrap();
    }
}

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_amount_precision(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    for amount in [1234.5678901234567, 1e-30, 1e29, -0.1] {
        let mut new_transaction = generate_new_transaction();
        new_transaction.amount = amount;

        let transaction = transaction_repo
            .add_transaction(new_transaction)
            .await
            .unwrap();
        let stored_transaction = transaction_repo
            .list_transactions()
            .await
            .unwrap()
            .into_iter()
            .find(|t| t.id == transaction.id)
            .expect("added transaction should be listed");
        assert_eq!(amount, stored_transaction.amount);

        transaction_repo
            .delete_transaction(transaction.id)
            .await
            .unwrap();
    }
}

#[actix_rt::test]
async fn test_list_transactions_empty() {
    let transaction_repo = expense_repo::mem_repo::create_repo();

    let transactions = transaction_repo.list_transactions().await.unwrap();
    assert!(transactions.is_empty());
}

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_delete_transaction(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    let kept = transaction_repo
        .add_transaction(generate_new_transaction())
        .await
        .unwrap();
    let transaction = transaction_repo
        .add_transaction(generate_new_transaction())
        .await
        .unwrap();
    let count_before = transaction_repo.list_transactions().await.unwrap().len();
    let exclusive = repo_type == RepoType::Mem;

    let deleted = transaction_repo
        .delete_transaction(transaction.id)
        .await
        .unwrap();
    assert_eq!(transaction, deleted);

    let transactions = transaction_repo.list_transactions().await.unwrap();
    if exclusive {
        // other tests share the database in the SQLx case
        assert_eq!(count_before - 1, transactions.len());
    }
    assert!(transactions.iter().all(|t| t.id != transaction.id));
    assert!(transactions.iter().any(|t| t.id == kept.id));

    transaction_repo.delete_transaction(kept.id).await.unwrap();
}

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_delete_invalid_transaction(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    let transaction = transaction_repo
        .add_transaction(generate_new_transaction())
        .await
        .unwrap();
    let delete_result = transaction_repo.delete_transaction(-1).await;
    assert!(matches!(
        delete_result,
        Err(TransactionRepoError::TransactionNotFound(-1))
    ));

    let after = transaction_repo.list_transactions().await.unwrap();
    assert!(after.contains(&transaction));

    transaction_repo
        .delete_transaction(transaction.id)
        .await
        .unwrap();
}

#[rstest]
#[ignore = "needs config_test.toml pointing at a scratch database"]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_delete_twice(#[case] repo_type: RepoType) {
    let transaction_repo = utils::build_repo(repo_type).await;

    let transaction = transaction_repo
        .add_transaction(generate_new_transaction())
        .await
        .unwrap();
    transaction_repo
        .delete_transaction(transaction.id)
        .await
        .unwrap();

    let result = transaction_repo.delete_transaction(transaction.id).await;
    assert!(matches!(
        result,
        Err(TransactionRepoError::TransactionNotFound(id)) if id == transaction.id
    ));
}
