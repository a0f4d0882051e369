pub mod assessment;
pub mod auth;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use assessment::{create_assessment, get_health_tips, get_reference};
pub use auth::{auth_info, login, logout, register, request_otp};
pub use health::health_check;
