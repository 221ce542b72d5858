pub mod check_in_runner;

pub use check_in_runner::{CheckInRunner, RunReport, RunSummary};
