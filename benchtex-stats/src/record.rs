//! Statistic Records
//!
//! A [`StatisticRecord`] is an ordered list of named statistics for one column.
//! The order is part of the contract: it decides the order in which generated
//! output appears, so it is kept exactly as built or as read from the input.

use crate::value::StatValue;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered statistic name to [`StatValue`] mapping
///
/// A name may encode a category via `_`-separated words (e.g. `correct_true`).
/// An entry whose value is `None` is kept so that round-trips preserve it, but
/// consumers treat it as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticRecord {
    entries: Vec<(String, Option<StatValue>)>,
}

impl StatisticRecord {
    /// Empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`StatisticRecord::push`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Option<StatValue>>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a statistic at the end of the record
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Option<StatValue>>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Statistics in record order, absent ones included
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&StatValue>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Look up a statistic by name
    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Number of entries, absent ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the record has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Option<StatValue>)> for StatisticRecord {
    fn from_iter<I: IntoIterator<Item = (String, Option<StatValue>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for StatisticRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatisticRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = StatisticRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from statistic name to statistic value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = StatisticRecord {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                // Visiting entries one by one keeps document order
                while let Some((name, value)) = access.next_entry::<String, Option<StatValue>>()? {
                    record.entries.push((name, value));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Result-category statistics of one column
///
/// Each field counts or aggregates the runs of one result category. Fields convert
/// into a [`StatisticRecord`] in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStatistics {
    /// Score of all runs
    pub score: Option<StatValue>,
    /// All runs
    pub total: Option<StatValue>,
    /// Runs with a correct result
    pub correct: Option<StatValue>,
    /// Correct runs expecting `true`
    pub correct_true: Option<StatValue>,
    /// Correct runs expecting `false`
    pub correct_false: Option<StatValue>,
    /// Correct runs whose result could not be confirmed
    pub correct_unconfirmed: Option<StatValue>,
    /// Unconfirmed correct runs expecting `true`
    pub correct_unconfirmed_true: Option<StatValue>,
    /// Unconfirmed correct runs expecting `false`
    pub correct_unconfirmed_false: Option<StatValue>,
    /// Runs with a wrong result
    pub wrong: Option<StatValue>,
    /// Wrong runs reporting `true`
    pub wrong_true: Option<StatValue>,
    /// Wrong runs reporting `false`
    pub wrong_false: Option<StatValue>,
}

impl ColumnStatistics {
    /// Field names in record order
    pub const FIELDS: [&'static str; 11] = [
        "score",
        "total",
        "correct",
        "correct_true",
        "correct_false",
        "correct_unconfirmed",
        "correct_unconfirmed_true",
        "correct_unconfirmed_false",
        "wrong",
        "wrong_true",
        "wrong_false",
    ];

    fn values(&self) -> [&Option<StatValue>; 11] {
        [
            &self.score,
            &self.total,
            &self.correct,
            &self.correct_true,
            &self.correct_false,
            &self.correct_unconfirmed,
            &self.correct_unconfirmed_true,
            &self.correct_unconfirmed_false,
            &self.wrong,
            &self.wrong_true,
            &self.wrong_false,
        ]
    }

    /// Ordered record view of these statistics
    pub fn to_record(&self) -> StatisticRecord {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl From<&ColumnStatistics> for StatisticRecord {
    fn from(stats: &ColumnStatistics) -> Self {
        stats.to_record()
    }
}

impl From<ColumnStatistics> for StatisticRecord {
    fn from(stats: ColumnStatistics) -> Self {
        stats.to_record()
    }
}
