use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::models::{
    Contact, Conversation, NewContact, NewConversation, NewTransaction, NewUser, Transaction,
    TransactionKind, TransactionStatus, User,
};
use crate::storage::Storage;

#[derive(Default)]
struct Inner {
    users: BTreeMap<i32, User>,
    transactions: BTreeMap<i32, Transaction>,
    contacts: BTreeMap<i32, Contact>,
    conversations: BTreeMap<i32, Conversation>,
    next_user_id: i32,
    next_transaction_id: i32,
    next_contact_id: i32,
    next_conversation_id: i32,
}

/// In-memory entity maps with serial id counters, all behind one mutex so
/// every operation, including the balance read-modify-write, is serializable.
/// Ids start at 1 and are never reused.
pub struct MemStorage {
    inner: Mutex<Inner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_user_id: 1,
                next_transaction_id: 1,
                next_contact_id: 1,
                next_conversation_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// The demo account the client expects: one elderly user, her two
    /// frequent contacts, and a few days of transaction history.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        {
            let mut inner = store
                .inner
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let now = Utc::now();

            inner.users.insert(
                1,
                User {
                    id: 1,
                    name: "김순자".to_string(),
                    email: "kim.soonja@example.com".to_string(),
                    phone: Some("010-1234-5678".to_string()),
                    bank_account: Some("KB국민은행 ****1234".to_string()),
                    balance: Decimal::from(2_847_500),
                    created_at: now,
                },
            );
            inner.next_user_id = 2;

            let contacts = [
                Contact {
                    id: 1,
                    user_id: 1,
                    name: "손자 김민수".to_string(),
                    account: "****5678".to_string(),
                    bank: Some("신한은행".to_string()),
                    is_frequent: true,
                },
                Contact {
                    id: 2,
                    user_id: 1,
                    name: "딸 김영희".to_string(),
                    account: "****9012".to_string(),
                    bank: Some("하나은행".to_string()),
                    is_frequent: true,
                },
            ];
            for contact in contacts {
                inner.contacts.insert(contact.id, contact);
            }
            inner.next_contact_id = 3;

            let transactions = [
                Transaction {
                    id: 1,
                    user_id: 1,
                    kind: TransactionKind::Send,
                    amount: Decimal::from(100_000),
                    recipient: Some("손자 김민수".to_string()),
                    recipient_account: Some("****5678".to_string()),
                    description: Some("용돈입니다".to_string()),
                    status: TransactionStatus::Completed,
                    created_at: now,
                },
                Transaction {
                    id: 2,
                    user_id: 1,
                    kind: TransactionKind::Receive,
                    amount: Decimal::from(1_240_000),
                    recipient: Some("국민연금공단".to_string()),
                    recipient_account: None,
                    description: Some("연금지급".to_string()),
                    status: TransactionStatus::Completed,
                    created_at: now - Duration::days(1),
                },
                Transaction {
                    id: 3,
                    user_id: 1,
                    kind: TransactionKind::Payment,
                    amount: Decimal::from(8_500),
                    recipient: Some("스타벅스 강남점".to_string()),
                    recipient_account: None,
                    description: Some("카드결제".to_string()),
                    status: TransactionStatus::Completed,
                    created_at: now,
                },
            ];
            for transaction in transactions {
                inner.transactions.insert(transaction.id, transaction);
            }
            inner.next_transaction_id = 4;
        }
        store
    }

    fn locked(&self) -> Result<MutexGuard<'_, Inner>, ApiError> {
        self.inner
            .lock()
            .map_err(|_| ApiError::Internal("storage lock poisoned".to_string()))
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn user(&self, id: i32) -> Result<Option<User>, ApiError> {
        Ok(self.locked()?.users.get(&id).cloned())
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .locked()?
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    fn create_user(&self, new_user: NewUser) -> Result<User, ApiError> {
        let mut inner = self.locked()?;
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            bank_account: new_user.bank_account,
            balance: new_user.balance,
            created_at: Utc::now(),
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    fn update_user_balance(
        &self,
        user_id: i32,
        new_balance: Decimal,
    ) -> Result<Option<User>, ApiError> {
        let mut inner = self.locked()?;
        Ok(inner.users.get_mut(&user_id).map(|user| {
            user.balance = new_balance;
            user.clone()
        }))
    }

    fn debit_balance(&self, user_id: i32, amount: Decimal) -> Result<Option<User>, ApiError> {
        let mut inner = self.locked()?;
        Ok(inner.users.get_mut(&user_id).map(|user| {
            user.balance -= amount;
            user.clone()
        }))
    }

    fn transactions_for_user(&self, user_id: i32) -> Result<Vec<Transaction>, ApiError> {
        let inner = self.locked()?;
        let mut rows: Vec<Transaction> = inner
            .transactions
            .values()
            .filter(|transaction| transaction.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep insertion (id) order.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn transaction(&self, id: i32) -> Result<Option<Transaction>, ApiError> {
        Ok(self.locked()?.transactions.get(&id).cloned())
    }

    fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let mut inner = self.locked()?;
        let id = inner.next_transaction_id;
        inner.next_transaction_id += 1;
        let transaction = Transaction {
            id,
            user_id: new_transaction.user_id,
            kind: new_transaction.kind,
            amount: new_transaction.amount,
            recipient: new_transaction.recipient,
            recipient_account: new_transaction.recipient_account,
            description: new_transaction.description,
            status: new_transaction.status,
            created_at: Utc::now(),
        };
        inner.transactions.insert(id, transaction.clone());
        Ok(transaction)
    }

    fn contacts_for_user(&self, user_id: i32) -> Result<Vec<Contact>, ApiError> {
        Ok(self
            .locked()?
            .contacts
            .values()
            .filter(|contact| contact.user_id == user_id)
            .cloned()
            .collect())
    }

    fn frequent_contacts_for_user(&self, user_id: i32) -> Result<Vec<Contact>, ApiError> {
        Ok(self
            .locked()?
            .contacts
            .values()
            .filter(|contact| contact.user_id == user_id && contact.is_frequent)
            .cloned()
            .collect())
    }

    fn create_contact(&self, new_contact: NewContact) -> Result<Contact, ApiError> {
        let mut inner = self.locked()?;
        let id = inner.next_contact_id;
        inner.next_contact_id += 1;
        let contact = Contact {
            id,
            user_id: new_contact.user_id,
            name: new_contact.name,
            account: new_contact.account,
            bank: new_contact.bank,
            is_frequent: new_contact.is_frequent,
        };
        inner.contacts.insert(id, contact.clone());
        Ok(contact)
    }

    fn conversations_for_user(&self, user_id: i32) -> Result<Vec<Conversation>, ApiError> {
        let inner = self.locked()?;
        let mut rows: Vec<Conversation> = inner
            .conversations
            .values()
            .filter(|conversation| conversation.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn create_conversation(
        &self,
        new_conversation: NewConversation,
    ) -> Result<Conversation, ApiError> {
        let mut inner = self.locked()?;
        let id = inner.next_conversation_id;
        inner.next_conversation_id += 1;
        let conversation = Conversation {
            id,
            user_id: new_conversation.user_id,
            message: new_conversation.message,
            response: new_conversation.response,
            kind: new_conversation.kind,
            created_at: Utc::now(),
        };
        inner.conversations.insert(id, conversation.clone());
        Ok(conversation)
    }
}
