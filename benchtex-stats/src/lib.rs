#![warn(missing_docs)]
//! BenchTex Statistic Records
//!
//! Data model for statistics that have already been computed for a benchmark table:
//! - [`Value`] - a single numeric or textual result
//! - [`StatValue`] - the aggregate kinds (sum, min, max, ...) of one statistic
//! - [`StatisticRecord`] - ordered statistic name to [`StatValue`] mapping for one column
//! - [`ColumnStatistics`] - the fixed set of result-category statistics of a column
//!
//! Nothing in this crate computes statistics. Records are built by the caller and only
//! read by the report generator, which relies on their iteration order being stable.

mod record;
mod value;

pub use record::{ColumnStatistics, StatisticRecord};
pub use value::{StatValue, Value};

/// Separator between category words and the subcategory in a statistic name
pub const NAME_SEPARATOR: char = '_';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_splits_category_from_subcategory() {
        let mut parts: Vec<&str> = "correct_unconfirmed_true".split(NAME_SEPARATOR).collect();
        let subcategory = parts.pop();
        assert_eq!(parts, ["correct", "unconfirmed"]);
        assert_eq!(subcategory, Some("true"));
    }
}
