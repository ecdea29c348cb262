//! `%{fact}` interpolation for hierarchy and datadir templates.
//!
//! A placeholder is `%{` followed by one or more of `[A-Za-z0-9_:]` and a
//! closing `}`. A leading `::` (top-scope qualifier) is dropped before the
//! fact lookup. Placeholders whose fact is unknown, and anything that does
//! not match the grammar, are copied to the output unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::facts::FactSource;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\{([A-Za-z0-9_:]+)\}").expect("placeholder regex must compile")
});

/// Replaces every resolvable `%{name}` in `template` with its fact value.
///
/// Single pass: substituted values are not scanned again.
pub fn interpolate(template: &str, facts: &impl FactSource) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            let name = name.strip_prefix("::").unwrap_or(name);
            match facts.fact(name) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
