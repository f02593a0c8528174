//! Result reporting
//!
//! Text and JSON reports for the timed comparison, plus the per-batch
//! diagnostic reporter that serializes worker output through a shared lock.

pub mod json;
pub mod reporter;
pub mod text;
