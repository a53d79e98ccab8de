//! Name Collision Resolution
//!
//! Generated macro names must be unique, but benchmark, run-set and column names
//! often are not once sanitized. Every member of a duplicated group gets a Roman
//! numeral suffix on its last fragment, in input order: the first occurrence gets
//! `I`, the second `II`, and so on. Keys that occur once are left alone.
//!
//! Documents may hard-code the generated names, so this ordering is part of the
//! output format.

use crate::naming::to_roman;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Where a collision was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionLevel {
    /// Benchmark name + run-set name across all run sets
    RunSet,
    /// Column title within one run set
    Column,
    /// Statistic category + subcategory within one column
    Statistic,
}

impl fmt::Display for CollisionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollisionLevel::RunSet => "benchmark name + run set name",
            CollisionLevel::Column => "column name",
            CollisionLevel::Statistic => "statistic name",
        })
    }
}

/// Diagnostic for one disambiguated item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// Level the duplicate was found at
    pub level: CollisionLevel,
    /// Concatenated fragments of the colliding key
    pub key: String,
    /// Suffix appended to the last fragment
    pub suffix: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicated {} \"{}\", adding suffix {}",
            self.level, self.key, self.suffix
        )
    }
}

/// Resolved key of one item, with the collision that changed it (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Key fragments, suffixed when the key was duplicated
    pub key: Vec<String>,
    /// Diagnostic for a suffixed key
    pub collision: Option<Collision>,
}

/// Occurrence counting for one resolution pass
///
/// Lives only as long as one [`resolve_collisions`] call.
struct NameCounter<'a> {
    totals: HashMap<&'a [String], usize>,
    used: HashMap<&'a [String], u32>,
    taken: HashSet<Vec<String>>,
}

impl<'a> NameCounter<'a> {
    fn new(candidates: &'a [Vec<String>]) -> Self {
        let mut totals: HashMap<&[String], usize> = HashMap::new();
        for key in candidates {
            *totals.entry(key.as_slice()).or_default() += 1;
        }
        Self {
            totals,
            used: HashMap::new(),
            taken: candidates.iter().cloned().collect(),
        }
    }

    fn is_duplicated(&self, key: &[String]) -> bool {
        self.totals.get(key).copied().unwrap_or(0) > 1
    }

    /// Next free suffix for `key`, counting from `I`
    ///
    /// A suffixed key that equals any candidate key or an earlier suffixed key
    /// is skipped.
    fn next_suffixed(&mut self, key: &'a [String]) -> (Vec<String>, String) {
        let counter = self.used.entry(key).or_default();
        loop {
            *counter += 1;
            let suffix = to_roman(*counter);
            let suffixed = with_suffix(key, &suffix);
            if self.taken.insert(suffixed.clone()) {
                return (suffixed, suffix);
            }
        }
    }
}

fn with_suffix(key: &[String], suffix: &str) -> Vec<String> {
    let mut suffixed = key.to_vec();
    match suffixed.last_mut() {
        Some(last) => last.push_str(suffix),
        None => suffixed.push(suffix.to_string()),
    }
    suffixed
}

/// Make a sequence of candidate keys pairwise distinct
///
/// Output is in input order, one [`Resolved`] per candidate. Every item of a
/// duplicated group carries a [`Collision`].
pub fn resolve_collisions(level: CollisionLevel, candidates: &[Vec<String>]) -> Vec<Resolved> {
    let mut counter = NameCounter::new(candidates);

    candidates
        .iter()
        .map(|key| {
            if !counter.is_duplicated(key) {
                return Resolved {
                    key: key.clone(),
                    collision: None,
                };
            }
            let (suffixed, suffix) = counter.next_suffixed(key);
            Resolved {
                key: suffixed,
                collision: Some(Collision {
                    level,
                    key: key.concat(),
                    suffix,
                }),
            }
        })
        .collect()
}
