//! Storage layer. Provides:
//! - the [`Storage`] trait handlers and services program against
//! - [`MemStorage`], in-memory entity maps with serial id counters

mod memory;

pub use memory::MemStorage;

use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::models::{
    Contact, Conversation, NewContact, NewConversation, NewTransaction, NewUser, Transaction,
    User,
};

/// Repository interface over the four entity collections. All operations are
/// synchronous; a durable backend would keep the same seam and make the
/// implementations block on its own I/O.
pub trait Storage: Send + Sync {
    fn user(&self, id: i32) -> Result<Option<User>, ApiError>;

    /// Linear scan, first match by equality.
    fn user_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    fn create_user(&self, new_user: NewUser) -> Result<User, ApiError>;

    /// Blind replace of the balance field. No negative-balance check; callers
    /// are responsible for correctness. `Ok(None)` when the user is missing.
    fn update_user_balance(
        &self,
        user_id: i32,
        new_balance: Decimal,
    ) -> Result<Option<User>, ApiError>;

    /// Atomic read-modify-write: `balance -= amount` under the storage lock,
    /// so concurrent debits against the same user serialize instead of
    /// clobbering each other. `Ok(None)` when the user is missing.
    fn debit_balance(&self, user_id: i32, amount: Decimal) -> Result<Option<User>, ApiError>;

    /// All transactions owned by `user_id`, most recent first. Equal
    /// timestamps keep insertion order.
    fn transactions_for_user(&self, user_id: i32) -> Result<Vec<Transaction>, ApiError>;

    fn transaction(&self, id: i32) -> Result<Option<Transaction>, ApiError>;

    fn create_transaction(&self, new_transaction: NewTransaction)
        -> Result<Transaction, ApiError>;

    /// Contacts owned by `user_id`, insertion order.
    fn contacts_for_user(&self, user_id: i32) -> Result<Vec<Contact>, ApiError>;

    fn frequent_contacts_for_user(&self, user_id: i32) -> Result<Vec<Contact>, ApiError>;

    fn create_contact(&self, new_contact: NewContact) -> Result<Contact, ApiError>;

    /// Conversations owned by `user_id`, most recent first.
    fn conversations_for_user(&self, user_id: i32) -> Result<Vec<Conversation>, ApiError>;

    fn create_conversation(
        &self,
        new_conversation: NewConversation,
    ) -> Result<Conversation, ApiError>;
}
