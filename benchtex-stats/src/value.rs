//! Statistic Values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single result value: either a number or pre-rendered text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value
    Number(f64),
    /// Textual value, used verbatim
    Text(String),
}

impl Value {
    /// Numeric content, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Aggregates of one statistic
///
/// Every kind is optional. An absent kind (`None`) is skipped by consumers, while a
/// present zero is a real result and must be kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatValue {
    /// Sum over all runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<Value>,
    /// Smallest value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    /// Largest value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    /// Arithmetic mean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg: Option<Value>,
    /// Median value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<Value>,
    /// Standard deviation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdev: Option<Value>,
}

impl StatValue {
    /// Kind names in iteration order
    pub const KINDS: [&'static str; 6] = ["sum", "min", "max", "avg", "median", "stdev"];

    /// Statistic with only a sum, the common case for counting statistics
    pub fn from_sum(sum: impl Into<Value>) -> Self {
        Self {
            sum: Some(sum.into()),
            ..Default::default()
        }
    }

    /// Set the smallest value
    pub fn with_min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the largest value
    pub fn with_max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the mean
    pub fn with_avg(mut self, avg: impl Into<Value>) -> Self {
        self.avg = Some(avg.into());
        self
    }

    /// Set the median
    pub fn with_median(mut self, median: impl Into<Value>) -> Self {
        self.median = Some(median.into());
        self
    }

    /// Set the standard deviation
    pub fn with_stdev(mut self, stdev: impl Into<Value>) -> Self {
        self.stdev = Some(stdev.into());
        self
    }

    /// All kinds paired with their value, in [`StatValue::KINDS`] order
    pub fn kinds(&self) -> [(&'static str, Option<&Value>); 6] {
        [
            ("sum", self.sum.as_ref()),
            ("min", self.min.as_ref()),
            ("max", self.max.as_ref()),
            ("avg", self.avg.as_ref()),
            ("median", self.median.as_ref()),
            ("stdev", self.stdev.as_ref()),
        ]
    }

    /// Present kinds only, in [`StatValue::KINDS`] order
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.kinds()
            .into_iter()
            .filter_map(|(kind, value)| value.map(|v| (kind, v)))
    }

    /// True when no kind carries a value
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_order_matches_constant() {
        let stat = StatValue::default();
        let names: Vec<_> = stat.kinds().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, StatValue::KINDS);
    }

    #[test]
    fn test_zero_is_present() {
        let stat = StatValue::from_sum(0.0);
        let present: Vec<_> = stat.present().collect();
        assert_eq!(present, vec![("sum", &Value::Number(0.0))]);
        assert!(!stat.is_empty());
    }

    #[test]
    fn test_builder_fills_kinds() {
        let stat = StatValue::from_sum(10.0)
            .with_min(1.0)
            .with_max(4.0)
            .with_avg(2.5)
            .with_median(2.0)
            .with_stdev("n/a");
        let kinds: Vec<_> = stat.present().map(|(k, _)| k).collect();
        assert_eq!(kinds, StatValue::KINDS);
        assert_eq!(stat.stdev, Some(Value::Text("n/a".to_string())));
    }

    #[test]
    fn test_empty() {
        assert!(StatValue::default().is_empty());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(0.0).to_string(), "0");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::from("12s").to_string(), "12s");
    }

    #[test]
    fn test_deserialize_untagged() {
        let stat: StatValue = serde_json::from_str(r#"{"sum": 3, "min": "low", "max": null}"#)
            .expect("valid stat value");
        assert_eq!(stat.sum, Some(Value::Number(3.0)));
        assert_eq!(stat.min, Some(Value::Text("low".to_string())));
        assert_eq!(stat.max, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_kind() {
        let result: Result<StatValue, _> = serde_json::from_str(r#"{"total": 3}"#);
        assert!(result.is_err());
    }
}
