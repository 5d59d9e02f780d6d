use regex::Regex;
use std::collections::HashSet;

/// Reduces free text to a set of lowercase ASCII alphanumeric tokens.
///
/// Every character outside `[a-z0-9]` (after lowercasing) acts as a
/// separator, so `"Cell-Biology 2021!"` yields `{cell, biology, 2021}`.
/// Duplicates collapse; empty or whitespace-only input yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let re = Regex::new(r"[a-z0-9]+").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
