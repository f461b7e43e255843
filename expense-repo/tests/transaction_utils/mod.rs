use chrono::NaiveDate;
use expense_repo::transaction_repo::{CurrencyCode, NewTransaction};
use fake::faker::chrono::en::Date;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

const CURRENCIES: [&str; 4] = ["USD", "EUR", "VND", "JPY"];
const KINDS: [&str; 2] = ["income", "expense"];

pub fn generate_new_transaction() -> NewTransaction {
    let currency = CURRENCIES[(0..CURRENCIES.len()).fake::<usize>()];
    let kind = KINDS[(0..KINDS.len()).fake::<usize>()];
    let tags: Vec<String> = (0..3).map(|_| Word().fake()).collect();

    NewTransaction::new(
        Sentence(1..5).fake(),
        CurrencyCode::try_from(currency).unwrap(),
        (-1_000_000..1_000_000).fake::<i64>() as f64 / 100.0,
        kind.to_owned(),
        Date().fake::<NaiveDate>(),
        Word().fake(),
        tags.join(","),
        Sentence(0..8).fake(),
    )
}

pub fn generate_new_transaction_with_category(category: &str) -> NewTransaction {
    let mut new_transaction = generate_new_transaction();
    new_transaction.category = category.to_owned();
    new_transaction
}
