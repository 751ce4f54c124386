//! Population lookup and formatting.

use crate::config::{PopulationFormat, PopulationStyle, TemplateConfig};
use crate::error::TemplateError;
use crate::model::TripleSet;
use crate::vocab::{lexical_form, POPULATION};

/// Reads the population of the entity described by `triples`.
///
/// Predicates in [`POPULATION`] are tried in priority order and the first
/// triple carrying the winning predicate is used. Group separators (`,`,
/// `_`, spaces) and an all-zero fraction (`.0`) are accepted.
///
/// # Errors
///
/// [`TemplateError::MissingFact`] if no population predicate is present,
/// [`TemplateError::MalformedLiteral`] if its literal is not a whole number.
pub fn population(triples: &TripleSet) -> Result<u64, TemplateError> {
    let (predicate, object) =
        triples
            .first_object(POPULATION)
            .ok_or(TemplateError::MissingFact {
                predicate: POPULATION[0],
            })?;
    let literal = lexical_form(object);
    parse_count(&literal).ok_or_else(|| TemplateError::MalformedLiteral {
        predicate: predicate.to_string(),
        literal,
    })
}

/// Formats the population with the default options.
///
/// Same as [`format_population_with`] and [`TemplateConfig::default`]:
/// plain digits, `unknown` when the fact is missing.
#[must_use]
pub fn format_population(triples: &TripleSet) -> String {
    format_population_with(triples, &TemplateConfig::default())
}

/// Formats the population for display.
///
/// A missing fact yields `config.placeholder`; a malformed literal is shown
/// as written. The result is plain text, not HTML.
#[must_use]
pub fn format_population_with(triples: &TripleSet, config: &TemplateConfig) -> String {
    match population(triples) {
        Ok(count) => format_count(count, &config.population),
        Err(TemplateError::MalformedLiteral { literal, .. }) => literal,
        Err(_) => config.placeholder.clone(),
    }
}

/// Writes `count` according to `format`.
#[must_use]
pub fn format_count(count: u64, format: &PopulationFormat) -> String {
    let digits = count.to_string();
    match format.style {
        PopulationStyle::Plain => digits,
        PopulationStyle::Grouped => group_digits(&digits, &format.separator),
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

fn parse_count(literal: &str) -> Option<u64> {
    let cleaned: String = literal
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    let whole = match cleaned.split_once('.') {
        Some((whole, fraction)) if !fraction.is_empty() && fraction.chars().all(|c| c == '0') => {
            whole
        }
        Some(_) => return None,
        None => cleaned.as_str(),
    };
    let whole = whole.strip_prefix('+').unwrap_or(whole);
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    whole.parse().ok()
}
