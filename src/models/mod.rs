pub mod app_state;
pub mod dtos;
pub mod entities;
pub mod enum_types;

pub use app_state::AppState;
pub use dtos::{CreateContactRequest, CreateConversationRequest, CreateTransactionRequest,
    CreateUserRequest};
pub use entities::{Contact, Conversation, NewContact, NewConversation, NewTransaction, NewUser,
    Transaction, User};
pub use enum_types::{ConversationKind, TransactionKind, TransactionStatus};
