mod retry;
mod timeouts;

pub use retry::RetryConfig;
pub use timeouts::TimeoutConfig;
