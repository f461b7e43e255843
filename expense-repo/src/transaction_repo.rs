use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn add_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Returns every stored transaction in insertion order.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid currency code {0:?}, expected three uppercase letters")]
pub struct InvalidCurrencyCode(pub String);

/// ISO-4217 shaped currency code, e.g. `USD`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let code = value.trim().to_ascii_uppercase();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(CurrencyCode(code))
        } else {
            Err(InvalidCurrencyCode(value))
        }
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CurrencyCode::try_from(value.to_owned())
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i32,
    pub content: String,
    pub currency: CurrencyCode,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "transaction_date::deserialize")]
    pub date: NaiveDate,
    pub category: String,
    pub tags: String,
    pub notes: String,
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.id.partial_cmp(&other.id)
    }
}

/// The write payload of a transaction. Listing also exposes transactions in this shape, without
/// their ids.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NewTransaction {
    pub content: String,
    pub currency: CurrencyCode,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "transaction_date::deserialize")]
    pub date: NaiveDate,
    pub category: String,
    pub tags: String,
    pub notes: String,
}

impl NewTransaction {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        content: String,
        currency: CurrencyCode,
        amount: f64,
        kind: String,
        date: NaiveDate,
        category: String,
        tags: String,
        notes: String,
    ) -> NewTransaction {
        NewTransaction {
            content,
            currency,
            amount,
            kind,
            date,
            category,
            tags,
            notes,
        }
    }

    pub fn to_transaction(self, id: i32) -> Transaction {
        Transaction {
            id,
            content: self.content,
            currency: self.currency,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category: self.category,
            tags: self.tags,
            notes: self.notes,
        }
    }
}

impl From<Transaction> for NewTransaction {
    fn from(value: Transaction) -> Self {
        NewTransaction {
            content: value.content,
            currency: value.currency,
            amount: value.amount,
            kind: value.kind,
            date: value.date,
            category: value.category,
            tags: value.tags,
            notes: value.notes,
        }
    }
}

/// Calendar dates on the wire. Timestamps are accepted as well and keep only their date.
mod transaction_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| {
            de::Error::custom(format!("Invalid date {:?}, expected YYYY-MM-DD", value))
        })
    }

    pub fn parse(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
            .or_else(|| {
                ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                    .into_iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                    .map(|timestamp| timestamp.date())
            })
    }
}
