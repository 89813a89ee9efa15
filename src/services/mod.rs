pub mod assistant_service;
pub mod transaction_service;

pub use assistant_service::AssistantService;
pub use transaction_service::TransactionService;
