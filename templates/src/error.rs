//! Errors raised while extracting facts from a triple set.

use thiserror::Error;

/// The triples do not supply what a template needs.
///
/// Fact errors never escape rendering; each one maps to a display policy
/// (see [`crate::population::format_population_with`]). Entity errors come
/// from [`TripleSet::entity`](crate::TripleSet::entity), before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No triple carries any of the expected predicates.
    #[error("no `{predicate}` fact in triple set")]
    MissingFact {
        /// Highest-priority predicate that was looked for.
        predicate: &'static str,
    },
    /// The fact exists but its literal is not in the expected form.
    #[error("malformed `{predicate}` literal: {literal:?}")]
    MalformedLiteral {
        /// Predicate the literal was found under.
        predicate: String,
        /// Lexical form of the offending literal.
        literal: String,
    },
    /// No triple is about the requested subject.
    #[error("no triples about {subject}")]
    UnknownSubject {
        /// Subject IRI that was asked for.
        subject: String,
    },
    /// The triples describe several entities and none was chosen.
    #[error("several subjects, choose one of: {}", subjects.join(", "))]
    AmbiguousEntity {
        /// Distinct subjects in first-seen order.
        subjects: Vec<String>,
    },
}
