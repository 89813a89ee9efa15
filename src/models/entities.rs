use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::enum_types::{ConversationKind, TransactionKind, TransactionStatus};

/// Account holder. `balance` is a base-currency decimal amount, never a
/// binary float.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub balance: Decimal,
}

/// A money movement owned by one user. `kind` is fixed at creation and
/// never changes afterwards.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub recipient_account: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: i32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub recipient_account: Option<String>,
    pub description: Option<String>,
    pub status: TransactionStatus,
}

/// Transfer recipient saved by a user. Duplicate (user, account) pairs are
/// allowed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub account: String,
    pub bank: Option<String>,
    pub is_frequent: bool,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub user_id: i32,
    pub name: String,
    pub account: String,
    pub bank: Option<String>,
    pub is_frequent: bool,
}

/// One assistant exchange. The response is generated synchronously when the
/// record is created, so it is never absent.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ConversationKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewConversation {
    pub user_id: i32,
    pub message: String,
    pub response: String,
    pub kind: ConversationKind,
}
