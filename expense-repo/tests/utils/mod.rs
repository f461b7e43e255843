use expense_repo::transaction_repo::TransactionRepo;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Builds the repo under test. The SQLx repo needs a `config_test.toml` pointing at a scratch
/// database; its cases are ignored by default and run with `cargo test -- --ignored`.
pub async fn build_repo(repo_type: RepoType) -> Arc<dyn TransactionRepo> {
    match repo_type {
        RepoType::SQLx => {
            let config = fs::read_to_string("config_test.toml")
                .expect("config_test.toml with a database_url is needed for SQLx tests");
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            expense_repo::sqlx_repo::create_repo(&config.database_url, 1, Duration::from_secs(5))
                .await
                .unwrap()
        }
        RepoType::Mem => expense_repo::mem_repo::create_repo(),
    }
}
