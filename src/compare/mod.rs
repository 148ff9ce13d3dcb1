//! Card comparison.

pub mod comparison;

pub use comparison::{CardComparison, ComparedStat, StatRow, Verdict};
