//! Predicate vocabulary and term helpers.
//!
//! Predicates are matched on their local name so that the DBpedia ontology
//! (`http://dbpedia.org/ontology/`), the older infobox namespace
//! (`http://dbpedia.org/property/`) and bare names all resolve alike.

/// Population predicates, highest priority first.
pub const POPULATION: &[&str] = &[
    "populationTotal",
    "population",
    "populationUrban",
    "populationMetro",
];

/// Country the place belongs to.
pub const COUNTRY: &[&str] = &["country"];

/// Total area in square kilometres.
pub const AREA: &[&str] = &["areaTotal", "area"];

/// Elevation above sea level in metres.
pub const ELEVATION: &[&str] = &["elevation"];

/// Time zone.
pub const TIME_ZONE: &[&str] = &["timeZone", "timezone"];

/// Postal code.
pub const POSTAL_CODE: &[&str] = &["postalCode"];

/// Extracts the local name from an IRI.
///
/// Strips N-Triples angle brackets, then takes everything after the last
/// `#` or `/`. A bare name is returned unchanged.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let iri = strip_brackets(iri);
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

/// Returns `true` if the term looks like an IRI rather than a literal.
#[must_use]
pub fn is_iri(term: &str) -> bool {
    let term = term.trim();
    if term.starts_with('"') {
        return false;
    }
    if term.starts_with('<') && term.ends_with('>') {
        return true;
    }
    term.contains("://") && !term.contains(char::is_whitespace)
}

/// The lexical form of a literal term.
///
/// `"3200000"^^<http://www.w3.org/2001/XMLSchema#integer>` and
/// `"Leipzig"@de` yield `3200000` and `Leipzig`; bare terms are returned
/// trimmed. Backslash escapes inside quotes are resolved.
#[must_use]
pub fn lexical_form(term: &str) -> String {
    let term = term.trim();
    let Some(rest) = term.strip_prefix('"') else {
        return term.to_string();
    };
    let Some(end) = rest.rfind('"') else {
        return rest.to_string();
    };
    unescape(&rest[..end])
}

/// Human-readable label for an object term.
///
/// Resources show their local name with underscores as spaces
/// (`http://dbpedia.org/resource/United_States` → `United States`);
/// literals show their lexical form.
#[must_use]
pub fn resource_label(term: &str) -> String {
    if is_iri(term) {
        local_name(term).replace('_', " ")
    } else {
        lexical_form(term)
    }
}

/// Removes N-Triples angle brackets around an IRI, if present.
#[must_use]
pub fn strip_brackets(iri: &str) -> &str {
    let iri = iri.trim();
    iri.strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(iri)
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
