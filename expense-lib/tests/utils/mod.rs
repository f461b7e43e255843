use std::sync::Arc;

use rstest::*;
use serde_json::{json, Value};
use tracing::info;
use tracing::Level;

use expense_repo::transaction_repo::TransactionRepo;

macro_rules! build_app {
    ($state:expr) => {{
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func($state));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! add_transaction {
    (&$service:ident, $new_transaction:expr) => {{
        let request = TestRequest::post()
            .uri("/addTransaction")
            .set_json(&$new_transaction)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when adding transaction",
            response.status()
        );
        let body: serde_json::Value = test::read_body_json(response).await;
        body["id"].as_i64().expect("id in response") as i32
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn TransactionRepo> {
    expense_repo::mem_repo::create_repo()
}

pub fn lunch() -> Value {
    json!({
        "content": "Lunch",
        "currency": "EUR",
        "amount": 12.5,
        "type": "expense",
        "date": "2024-03-01",
        "category": "food",
        "tags": "work",
        "notes": "",
    })
}

pub fn salary() -> Value {
    json!({
        "content": "Salary",
        "currency": "USD",
        "amount": 3000.0,
        "type": "income",
        "date": "2024-03-25",
        "category": "salary",
        "tags": "",
        "notes": "March",
    })
}
