//! Identifier Sanitizing
//!
//! Turns free-text labels into fragments that are valid inside a TeX control
//! sequence name: ASCII letters only, every word capitalized, no separators.
//!
//! Labels made only of the digits `1`-`9` are first spelled as Roman numerals, so
//! that e.g. a run set called `2` still contributes a visible fragment (`II`).
//! A `0` anywhere disables this, and such a label sanitizes like any other text.

/// Roman numeral table, largest first, subtractive forms included
const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Spell a positive integer as an upper-case Roman numeral
///
/// Values above 3999 repeat `M` as often as needed. Zero yields an empty string.
pub fn to_roman(mut number: u32) -> String {
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while number >= value {
            out.push_str(numeral);
            number -= value;
        }
    }
    out
}

/// Upper-case the first character of `word`, leaving the rest untouched
pub fn cap_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Value of a label consisting only of the digits 1-9
fn numeric_label(label: &str) -> Option<u32> {
    if label.is_empty() || !label.bytes().all(|b| (b'1'..=b'9').contains(&b)) {
        return None;
    }
    label.parse().ok()
}

/// Sanitize a label into a letters-only identifier fragment
///
/// Every character outside `a-z`/`A-Z` separates words and is dropped. The result
/// may be empty.
///
/// ```
/// use benchtex_report::sanitize;
///
/// assert_eq!(sanitize("cpu time (s)"), "CpuTimeS");
/// assert_eq!(sanitize("7"), "VII");
/// assert_eq!(sanitize("0"), "");
/// ```
pub fn sanitize(label: &str) -> String {
    let spelled;
    let label = match numeric_label(label) {
        Some(number) => {
            spelled = to_roman(number);
            spelled.as_str()
        }
        None => label,
    };

    label
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(cap_first_letter)
        .collect()
}
