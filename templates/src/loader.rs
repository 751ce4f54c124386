//! Loads a [`TripleSet`] from N-Triples.
//!
//! IRIs keep their full text, blank nodes become `_:id`, and literals are
//! written back in N-Triples syntax so templates still see the datatype
//! or language tag.

use std::fs;
use std::path::{Path, PathBuf};

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::nt;
use thiserror::Error;

use crate::model::{Triple, TripleSet};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Failure to load triples.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The text is not valid N-Triples.
    #[error("invalid N-Triples: {0}")]
    Parse(String),
}

/// Parses N-Triples text.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] on the first syntax error.
pub fn load_ntriples_str(source: &str) -> Result<TripleSet, LoadError> {
    let mut set = TripleSet::new();
    nt::parse_str(source)
        .for_each_triple(|t| {
            set.push(Triple::new(term_text(t.s()), term_text(t.p()), term_text(t.o())));
        })
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    tracing::debug!(triples = set.len(), "parsed N-Triples");
    Ok(set)
}

/// Reads and parses an N-Triples file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if its content is invalid.
pub fn load_ntriples(path: &Path) -> Result<TripleSet, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read N-Triples file");
    load_ntriples_str(&source)
}

fn term_text<T: Term>(term: T) -> String {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| iri.as_str().to_string())
            .unwrap_or_default(),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| format!("_:{}", id.as_str()))
            .unwrap_or_default(),
        TermKind::Literal => literal_text(&term),
        _ => String::new(),
    }
}

fn literal_text<T: Term>(term: &T) -> String {
    let lex = term
        .lexical_form()
        .map(|l| escape_literal(&l))
        .unwrap_or_default();
    if let Some(tag) = term.language_tag() {
        return format!("\"{lex}\"@{}", tag.as_str());
    }
    match term.datatype() {
        Some(dt) if dt.as_str() != XSD_STRING => format!("\"{lex}\"^^<{}>", dt.as_str()),
        _ => format!("\"{lex}\""),
    }
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::lexical_form;

    const LEIPZIG: &str = r#"
<http://dbpedia.org/resource/Leipzig> <http://dbpedia.org/ontology/populationTotal> "597493"^^<http://www.w3.org/2001/XMLSchema#nonNegativeInteger> .
<http://dbpedia.org/resource/Leipzig> <http://www.w3.org/2000/01/rdf-schema#label> "Leipzig"@de .
<http://dbpedia.org/resource/Leipzig> <http://dbpedia.org/ontology/country> <http://dbpedia.org/resource/Germany> .
_:b0 <http://dbpedia.org/ontology/motto> "say \"hi\"" .
"#;

    #[test]
    fn parses_iris_literals_and_blank_nodes() {
        let set = load_ntriples_str(LEIPZIG).unwrap();
        assert_eq!(set.len(), 4);
        let triples: Vec<&Triple> = set.iter().collect();
        assert_eq!(triples[0].subject, "http://dbpedia.org/resource/Leipzig");
        assert_eq!(
            triples[0].object,
            "\"597493\"^^<http://www.w3.org/2001/XMLSchema#nonNegativeInteger>"
        );
        assert_eq!(triples[1].object, "\"Leipzig\"@de");
        assert_eq!(triples[2].object, "http://dbpedia.org/resource/Germany");
        assert!(triples[3].subject.starts_with("_:"));
        assert_eq!(lexical_form(&triples[3].object), "say \"hi\"");
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = load_ntriples_str("<http://a> <http://b> .\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_ntriples(Path::new("/definitely/not/here.nt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err}");
    }
}
