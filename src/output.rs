//! Reporting of bump results: timestamped progress lines or JSONL records

pub mod human;
pub mod jsonl;

pub use human::{HumanFormatter, write_summary};
pub use jsonl::JsonlFormatter;
