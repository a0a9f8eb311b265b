pub mod actuator;
pub mod channel;
pub mod cli;
pub mod config;
pub mod data_structure;
pub mod error;
pub mod trajectory;

use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_micros() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros())
        .unwrap_or_default()
}
