mod domain_service;
mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use domain_service::{
    classify, parse_points_change, truncate_days, REPEAT_MARKER, SUCCESS_MARKER,
};
pub use value_objects::{AccountError, AccountResult, AccountStatus, Outcome};
