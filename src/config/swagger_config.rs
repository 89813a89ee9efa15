use crate::handlers::{
    create_contact::__path_create_contact, create_conversation::__path_create_conversation,
    create_transaction::__path_create_transaction, create_user::__path_create_user,
    frequent_contacts::__path_frequent_contacts, get_user::__path_get_user,
    health::__path_health_check, user_contacts::__path_user_contacts,
    user_conversations::__path_user_conversations, user_transactions::__path_user_transactions,
};
use crate::handlers::health::HealthStatus;
use crate::models::{
    Contact, Conversation, CreateContactRequest, CreateConversationRequest,
    CreateTransactionRequest, CreateUserRequest, Transaction, User,
};
use crate::models::enum_types::{ConversationKind, TransactionKind, TransactionStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check, get_user, create_user, user_transactions, create_transaction,
        user_contacts, frequent_contacts, create_contact, user_conversations,
        create_conversation
    ),
    components(schemas(
        User, Transaction, Contact, Conversation,
        CreateUserRequest, CreateTransactionRequest, CreateContactRequest,
        CreateConversationRequest,
        TransactionKind, TransactionStatus, ConversationKind,
        HealthStatus
    )),
    tags(
        (name = "Users", description = "Account holder profile endpoints"),
        (name = "Transactions", description = "Money movement endpoints"),
        (name = "Contacts", description = "Saved transfer recipients"),
        (name = "Assistant", description = "Keyword-matched banking assistant"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
