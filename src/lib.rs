// Library entry point for Silverbank
// This exposes modules for testing while keeping main.rs as the binary entry point

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ApiError;
pub use models::AppState;
