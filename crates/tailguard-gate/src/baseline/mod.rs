//! Baseline store reader.

pub mod store;

pub use store::{load_baseline, select_entry, BaselineSource};
