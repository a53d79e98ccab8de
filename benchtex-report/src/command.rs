//! Result Commands
//!
//! Each value becomes one invocation of a fixed control sequence whose first six
//! arguments concatenate to the name of a new macro and whose seventh is its body:
//!
//! ```text
//! \StoreBenchExecResult{Bench}{Tool}{Cputime}{Correct}{True}{Sum}{12.5}%
//! ```
//!
//! [`TEX_HEADER`] provides the default definition of that control sequence and is
//! written once at the top of the document.

use crate::naming::sanitize;
use crate::walker::Leaf;
use serde::Serialize;
use std::fmt;

/// Name of the control sequence every command invokes
pub const CONTROL_SEQUENCE: &str = "StoreBenchExecResult";

/// Preamble defining [`CONTROL_SEQUENCE`]
///
/// Uses `\providecommand`, so a document can install its own definition before
/// including the generated file.
pub const TEX_HEADER: &str = r"% The following definition defines a command for each value.
% The command name is the concatenation of the first six arguments.
% To override this definition, define \StoreBenchExecResult with \newcommand before including this file.
% Arguments: benchmark name, runset name, column title, column category, column subcategory, statistic, value
\providecommand\StoreBenchExecResult[7]{\expandafter\newcommand\csname#1#2#3#4#5#6\endcsname{#7}}%
";

/// Fragments shared by all commands of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPrefix {
    /// Benchmark name fragment
    pub benchmark_name: String,
    /// Run-set name fragment
    pub runset_name: String,
    /// Column title fragment; empty until [`CommandPrefix::for_column`]
    pub column_title: String,
}

impl CommandPrefix {
    /// Prefix for a run set; fragments must already be sanitized and disambiguated
    pub fn new(benchmark_name: impl Into<String>, runset_name: impl Into<String>) -> Self {
        Self {
            benchmark_name: benchmark_name.into(),
            runset_name: runset_name.into(),
            column_title: String::new(),
        }
    }

    /// Copy of this prefix for one column
    pub fn for_column(&self, column_title: impl Into<String>) -> Self {
        Self {
            column_title: column_title.into(),
            ..self.clone()
        }
    }
}

/// One fully resolved result macro
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TexCommand {
    /// Benchmark name fragment
    pub benchmark_name: String,
    /// Run-set name fragment
    pub runset_name: String,
    /// Column title fragment
    pub column_title: String,
    /// Statistic category fragment
    pub column_category: String,
    /// Statistic subcategory fragment
    pub column_subcategory: String,
    /// Sanitized kind name
    pub stat_type: String,
    /// Rendered value; may be empty
    pub value: String,
}

impl TexCommand {
    /// Build the command for one leaf of a column
    pub fn from_leaf(prefix: &CommandPrefix, leaf: Leaf) -> Self {
        Self {
            benchmark_name: prefix.benchmark_name.clone(),
            runset_name: prefix.runset_name.clone(),
            column_title: prefix.column_title.clone(),
            column_category: leaf.category,
            column_subcategory: leaf.subcategory,
            stat_type: sanitize(leaf.kind),
            value: leaf.value,
        }
    }

    /// The six name fragments, in argument order
    pub fn fragments(&self) -> [&str; 6] {
        [
            self.benchmark_name.as_str(),
            self.runset_name.as_str(),
            self.column_title.as_str(),
            self.column_category.as_str(),
            self.column_subcategory.as_str(),
            self.stat_type.as_str(),
        ]
    }

    /// Control sequence this command defines, e.g. `\BenchToolCputimeCorrectTrueSum`
    pub fn macro_name(&self) -> String {
        let mut name = String::from("\\");
        for fragment in self.fragments() {
            name.push_str(fragment);
        }
        name
    }

    /// Invocation followed by a comment marker and newline
    ///
    /// The `%` keeps TeX from turning the line end into a space.
    pub fn to_tex_line(&self) -> String {
        format!("{}%\n", self)
    }
}

impl fmt::Display for TexCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", CONTROL_SEQUENCE)?;
        for fragment in self.fragments() {
            write!(f, "{{{}}}", fragment)?;
        }
        write!(f, "{{{}}}", self.value)
    }
}
