//! Table Columns
//!
//! A [`RunSet`] is one benchmark executed with one tool configuration. Its
//! [`Column`]s describe the measured quantities and know how to render their values.

use benchtex_stats::Value;
use serde::{Deserialize, Serialize};

/// Rendering target for [`Column::format_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTarget {
    /// Bare value without markup or unit, as it would appear in a CSV cell
    Csv,
    /// Value followed by the column unit, for terminal display
    Human,
}

/// One measured quantity of a run set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column title
    pub title: String,
    /// User-defined title, preferred over `title` when non-empty
    #[serde(default)]
    pub display_title: Option<String>,
    /// Unit of the column values (e.g. `s`, `MB`)
    #[serde(default)]
    pub unit: Option<String>,
    /// Significant digits numbers are rounded to; `None` keeps full precision
    #[serde(default)]
    pub significant_digits: Option<usize>,
}

impl Column {
    /// Column with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the user-defined title
    pub fn with_display_title(mut self, display_title: impl Into<String>) -> Self {
        self.display_title = Some(display_title.into());
        self
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Round numbers to `digits` significant digits
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = Some(digits);
        self
    }

    /// Title shown to users: the display title if set, the plain title otherwise
    pub fn name(&self) -> &str {
        match self.display_title.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.title,
        }
    }

    /// Declared unit, if non-empty
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }

    /// Render a value of this column for the given target
    ///
    /// Text values are returned verbatim for every target.
    pub fn format_value(&self, value: &Value, target: FormatTarget) -> String {
        let rendered = match value {
            Value::Number(n) => format_number(*n, self.significant_digits),
            Value::Text(text) => return text.clone(),
        };
        match (target, self.unit()) {
            (FormatTarget::Human, Some(unit)) => format!("{} {}", rendered, unit),
            _ => rendered,
        }
    }
}

/// Format a number, rounded to `digits` significant digits when given
fn format_number(value: f64, digits: Option<usize>) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let Some(digits) = digits.filter(|d| *d > 0) else {
        return value.to_string();
    };

    // Magnitude after rounding, so 9.996 at 3 digits counts as 10.0
    let scientific = format!("{:.*e}", digits - 1, value);
    let magnitude = scientific
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
        .unwrap_or_else(|| value.abs().log10().floor() as i32);
    let decimals = digits as i32 - 1 - magnitude;
    if decimals >= 0 {
        format!("{:.*}", decimals as usize, value)
    } else {
        scientific
            .parse::<f64>()
            .map(|rounded| rounded.to_string())
            .unwrap_or(scientific)
    }
}

/// One benchmark run against one tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSet {
    /// Name of the benchmark definition
    pub benchmark_name: String,
    /// Human-readable name of the tool configuration
    pub display_name: String,
    /// Columns, in table order
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl RunSet {
    /// Run set without columns
    pub fn new(benchmark_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            benchmark_name: benchmark_name.into(),
            display_name: display_name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}
