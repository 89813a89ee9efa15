use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{AppState, CreateTransactionRequest, NewTransaction, Transaction,
    TransactionKind};

pub struct TransactionService;

impl TransactionService {
    /// Record a transaction for its owning user. A `send` additionally
    /// debits the owner's balance through the storage layer's atomic
    /// read-modify-write, so two concurrent sends cannot compute from the
    /// same stale balance. The owner is checked before anything is written:
    /// either the record and the debit both happen, or neither does.
    pub fn record(
        state: &AppState,
        req: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        if state.store.user(req.user_id)?.is_none() {
            return Err(ApiError::NotFound(format!("User {} not found", req.user_id)));
        }

        let transaction = state.store.create_transaction(NewTransaction {
            user_id: req.user_id,
            kind: req.kind,
            amount: req.amount,
            recipient: req.recipient,
            recipient_account: req.recipient_account,
            description: req.description,
            status: req.status,
        })?;

        // Only a send moves the balance; receive/deposit do not credit and
        // payment does not debit. See DESIGN.md before changing this.
        if transaction.kind == TransactionKind::Send {
            match state.store.debit_balance(transaction.user_id, transaction.amount)? {
                Some(user) => info!(
                    user_id = user.id,
                    transaction_id = transaction.id,
                    "balance debited, new balance {}",
                    user.balance
                ),
                // Unreachable while deletion is unimplemented; the owner was
                // checked above and entities are never removed.
                None => warn!(
                    user_id = transaction.user_id,
                    transaction_id = transaction.id,
                    "owner vanished before debit"
                ),
            }
        }

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewUser, TransactionStatus};
    use rust_decimal_macros::dec;

    fn seeded_state(balance: rust_decimal::Decimal) -> AppState {
        let state = AppState::in_memory();
        state
            .store
            .create_user(NewUser {
                name: "김순자".to_string(),
                email: "kim.soonja@example.com".to_string(),
                phone: None,
                bank_account: None,
                balance,
            })
            .unwrap();
        state
    }

    fn request(kind: TransactionKind, amount: rust_decimal::Decimal) -> CreateTransactionRequest {
        CreateTransactionRequest {
            user_id: 1,
            kind,
            amount,
            recipient: Some("손자 김민수".to_string()),
            recipient_account: Some("****5678".to_string()),
            description: None,
            status: TransactionStatus::Completed,
        }
    }

    #[test]
    fn send_debits_exactly() {
        let state = seeded_state(dec!(100));
        TransactionService::record(&state, request(TransactionKind::Send, dec!(30))).unwrap();
        let user = state.store.user(1).unwrap().unwrap();
        assert_eq!(user.balance, dec!(70));
        assert_eq!(user.balance.to_string(), "70");
    }

    #[test]
    fn receive_and_payment_leave_balance_untouched() {
        let state = seeded_state(dec!(100));
        TransactionService::record(&state, request(TransactionKind::Receive, dec!(30))).unwrap();
        TransactionService::record(&state, request(TransactionKind::Payment, dec!(30))).unwrap();
        TransactionService::record(&state, request(TransactionKind::Deposit, dec!(30))).unwrap();
        let user = state.store.user(1).unwrap().unwrap();
        assert_eq!(user.balance, dec!(100));
    }

    #[test]
    fn unknown_owner_writes_nothing() {
        let state = AppState::in_memory();
        let err = TransactionService::record(&state, request(TransactionKind::Send, dec!(30)))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(state.store.transactions_for_user(1).unwrap().is_empty());
    }

    #[test]
    fn overdraft_is_not_rejected() {
        // No negative-balance check anywhere; callers own that decision.
        let state = seeded_state(dec!(10));
        TransactionService::record(&state, request(TransactionKind::Send, dec!(30))).unwrap();
        let user = state.store.user(1).unwrap().unwrap();
        assert_eq!(user.balance, dec!(-20));
    }
}
