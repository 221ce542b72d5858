pub mod client;

pub use client::{default_header_template, CheckinExecutor, CHECKIN_PAYLOAD_TOKEN, USER_AGENT};
