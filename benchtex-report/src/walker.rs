//! Statistic Record Walker
//!
//! Decomposes the [`StatisticRecord`] of one column into [`Leaf`]s, one per present
//! statistic kind plus one `unit` leaf per statistic when the column has a unit.
//!
//! A statistic name like `correct_unconfirmed_true` is split on `_`: all words but
//! the last form the category (`CorrectUnconfirmed`), the last word is the
//! subcategory (`True`). A name without `_` has an empty subcategory.

use crate::collision::{Collision, CollisionLevel, resolve_collisions};
use crate::column::{Column, FormatTarget};
use crate::naming::{cap_first_letter, sanitize};
use benchtex_stats::{NAME_SEPARATOR, StatValue, StatisticRecord};

/// Kind name of the extra leaf carrying the column unit
pub const UNIT_KIND: &str = "unit";

/// One value ready to become a command
///
/// `category` and `subcategory` are sanitized fragments; `kind` is the raw kind name
/// (`min`, `sum`, [`UNIT_KIND`], ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Category fragment
    pub category: String,
    /// Subcategory fragment
    pub subcategory: String,
    /// Kind name
    pub kind: &'static str,
    /// Rendered value
    pub value: String,
}

/// Split a statistic name into sanitized (category, subcategory) fragments
pub fn split_statistic_name(name: &str) -> (String, String) {
    let mut parts: Vec<&str> = name.split(NAME_SEPARATOR).collect();
    if parts.len() < 2 {
        parts.push("");
    }
    let subcategory = parts.pop().unwrap_or_default();
    let category: String = parts.iter().map(|p| cap_first_letter(p)).collect();
    (sanitize(&category), sanitize(subcategory))
}

/// Walk a record, rendering values as CSV cells
///
/// Returns the leaves lazily, plus any collisions between statistic names that
/// sanitize to the same fragments.
pub fn walk_statistics<'a>(
    column: &'a Column,
    record: &'a StatisticRecord,
) -> (Vec<Collision>, impl Iterator<Item = Leaf> + 'a) {
    walk_statistics_as(column, record, FormatTarget::Csv)
}

/// [`walk_statistics`] with an explicit rendering target
pub fn walk_statistics_as<'a>(
    column: &'a Column,
    record: &'a StatisticRecord,
    target: FormatTarget,
) -> (Vec<Collision>, impl Iterator<Item = Leaf> + 'a) {
    let present: Vec<&StatValue> = record.iter().filter_map(|(_, value)| value).collect();
    let candidates: Vec<Vec<String>> = record
        .iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| {
            let (category, subcategory) = split_statistic_name(name);
            vec![category, subcategory]
        })
        .collect();

    let resolved = resolve_collisions(CollisionLevel::Statistic, &candidates);
    let collisions = resolved.iter().filter_map(|r| r.collision.clone()).collect();

    let leaves = present
        .into_iter()
        .zip(resolved)
        .flat_map(move |(stat, resolved)| {
            let [category, subcategory]: [String; 2] = resolved
                .key
                .try_into()
                .unwrap_or_else(|_| [String::new(), String::new()]);

            let unit_leaf = column.unit().map(|unit| Leaf {
                category: category.clone(),
                subcategory: subcategory.clone(),
                kind: UNIT_KIND,
                value: unit.to_string(),
            });

            stat.present()
                .map(move |(kind, value)| Leaf {
                    category: category.clone(),
                    subcategory: subcategory.clone(),
                    kind,
                    value: column.format_value(value, target),
                })
                .chain(unit_leaf)
        });

    (collisions, leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtex_stats::{ColumnStatistics, Value};

    fn leaves(column: &Column, record: &StatisticRecord) -> Vec<Leaf> {
        let (collisions, leaves) = walk_statistics(column, record);
        assert!(collisions.is_empty());
        leaves.collect()
    }

    fn leaf(category: &str, subcategory: &str, kind: &'static str, value: &str) -> Leaf {
        Leaf {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_split_statistic_name() {
        assert_eq!(
            split_statistic_name("correct_true"),
            ("Correct".to_string(), "True".to_string())
        );
        assert_eq!(
            split_statistic_name("correct_unconfirmed_false"),
            ("CorrectUnconfirmed".to_string(), "False".to_string())
        );
        assert_eq!(
            split_statistic_name("total"),
            ("Total".to_string(), String::new())
        );
        assert_eq!(split_statistic_name(""), (String::new(), String::new()));
    }

    #[test]
    fn test_empty_record_yields_nothing() {
        let column = Column::new("cputime").with_unit("s");
        assert!(leaves(&column, &StatisticRecord::default()).is_empty());
    }

    #[test]
    fn test_absent_statistic_skipped() {
        let column = Column::new("cputime").with_unit("s");
        let record = StatisticRecord::new().with("total", None);
        assert!(leaves(&column, &record).is_empty());
    }

    #[test]
    fn test_kinds_in_order_then_unit() {
        let column = Column::new("cputime").with_unit("s");
        let record = StatisticRecord::new().with(
            "correct_true",
            StatValue::from_sum(10.5).with_min(0.5).with_max(4.0),
        );

        assert_eq!(
            leaves(&column, &record),
            vec![
                leaf("Correct", "True", "sum", "10.5"),
                leaf("Correct", "True", "min", "0.5"),
                leaf("Correct", "True", "max", "4"),
                leaf("Correct", "True", "unit", "s"),
            ]
        );
    }

    #[test]
    fn test_zero_emitted_absent_skipped() {
        let column = Column::new("status");
        let record = StatisticRecord::new().with(
            "wrong",
            StatValue {
                sum: Some(Value::Number(0.0)),
                min: None,
                ..Default::default()
            },
        );

        assert_eq!(leaves(&column, &record), vec![leaf("Wrong", "", "sum", "0")]);
    }

    #[test]
    fn test_unit_emitted_once_per_statistic() {
        let column = Column::new("memory").with_unit("MB");
        let record = ColumnStatistics {
            total: Some(StatValue::from_sum(3.0).with_avg(1.0)),
            correct: Some(StatValue::from_sum(2.0)),
            ..Default::default()
        }
        .to_record();

        let all = leaves(&column, &record);
        let units: Vec<_> = all.iter().filter(|l| l.kind == UNIT_KIND).collect();
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|l| l.value == "MB"));
        assert_eq!(units[0].category, "Total");
        assert_eq!(units[1].category, "Correct");
    }

    #[test]
    fn test_unit_text_is_verbatim() {
        let column = Column::new("cputime").with_unit("2 s/run");
        let record = StatisticRecord::new().with("total", StatValue::from_sum(1.0));
        let all = leaves(&column, &record);
        assert_eq!(all.last().map(|l| l.value.as_str()), Some("2 s/run"));
    }

    #[test]
    fn test_values_use_column_format() {
        let column = Column::new("cputime").with_significant_digits(2);
        let record = StatisticRecord::new().with("total", StatValue::from_sum(3.14159));
        assert_eq!(leaves(&column, &record), vec![leaf("Total", "", "sum", "3.1")]);
    }

    #[test]
    fn test_human_target() {
        let column = Column::new("cputime").with_unit("s");
        let record = StatisticRecord::new().with("total", StatValue::from_sum(2.0));
        let (_, human) = walk_statistics_as(&column, &record, FormatTarget::Human);
        let values: Vec<_> = human.map(|l| l.value).collect();
        assert_eq!(values, vec!["2 s", "s"]);
    }

    #[test]
    fn test_colliding_statistic_names_disambiguated() {
        let column = Column::new("count");
        let record = StatisticRecord::new()
            .with("a_b", StatValue::from_sum(1.0))
            .with("a__b", StatValue::from_sum(2.0));

        let (collisions, leaves) = walk_statistics(&column, &record);
        let leaves: Vec<_> = leaves.collect();
        assert_eq!(collisions.len(), 2);
        assert_eq!(leaves[0].subcategory, "BI");
        assert_eq!(leaves[1].subcategory, "BII");
    }
}
