//! # tabalign
//!
//! Reconciles two tab-separated datasets ("control" and "test") that describe
//! the same logical entities but may differ in row order, row count, and some
//! field values, producing a row-aligned side-by-side comparison suitable for
//! pasting into a spreadsheet. Rows pair when they agree on every caller-chosen
//! must-match column and differ in at most a bounded number of the remaining
//! columns, tightest matches first.

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod output;
pub mod partition;
pub mod record;
pub mod render;

pub use engine::{align_for_comparison, Comparison, MatchFields, MatchStats, Pair};
pub use error::{Result, TabalignError};
pub use record::{field_identifier, Dataset, Record};
