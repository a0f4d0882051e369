// Repository module structure
pub mod errors;
mod accounts;
mod otp;
mod sessions;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use accounts::{AccountRepositoryTrait, InMemoryAccountRepository};
pub use otp::{InMemoryOtpRepository, OtpRepositoryTrait};
pub use sessions::{InMemorySessionRepository, SessionRepositoryTrait};
