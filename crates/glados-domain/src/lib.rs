// Domain layer - Pure business logic
// No dependencies on infrastructure or application layers

pub mod check_in;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use check_in::{AccountError, AccountResult, AccountStatus, Outcome};
pub use shared::DomainError;
