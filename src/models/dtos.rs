use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::enum_types::{ConversationKind, TransactionKind, TransactionStatus};

/// Insert shapes for the POST endpoints. Ids and timestamps are assigned by
/// the storage layer; the DTOs simply have no such fields, so any the client
/// sends are dropped at deserialization.

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    #[serde(default)]
    pub balance: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub recipient_account: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub user_id: i32,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "account must not be empty"))]
    pub account: String,
    pub bank: Option<String>,
    #[serde(default)]
    pub is_frequent: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub user_id: i32,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: ConversationKind,
}

fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("amount must be positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request_with_amount(amount: Decimal) -> CreateTransactionRequest {
        CreateTransactionRequest {
            user_id: 1,
            kind: TransactionKind::Send,
            amount,
            recipient: None,
            recipient_account: None,
            description: None,
            status: TransactionStatus::default(),
        }
    }

    #[test]
    fn positive_amount_passes() {
        assert!(request_with_amount(dec!(0.01)).validate().is_ok());
    }

    #[test]
    fn zero_amount_rejected() {
        assert!(request_with_amount(dec!(0)).validate().is_err());
    }

    #[test]
    fn negative_amount_rejected() {
        assert!(request_with_amount(dec!(-30)).validate().is_err());
    }

    #[test]
    fn status_defaults_to_completed() {
        let req: CreateTransactionRequest = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "type": "send",
            "amount": "30000"
        }))
        .unwrap();
        assert_eq!(req.status, TransactionStatus::Completed);
    }

    #[test]
    fn conversation_kind_defaults_to_chat() {
        let req: CreateConversationRequest = serde_json::from_value(serde_json::json!({
            "userId": 1,
            "message": "잔액 알려줘"
        }))
        .unwrap();
        assert_eq!(req.kind, ConversationKind::Chat);
    }
}
