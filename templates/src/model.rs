//! Data model types for the place templates.
//!
//! A [`TripleSet`] is the ordered list of facts the navigator retrieved for
//! one entity. Templates borrow it and return a [`RenderedFragment`]; they
//! never mutate their input.

use std::fmt;

use crate::error::TemplateError;
use crate::vocab::{local_name, strip_brackets};

/// A single `(subject, predicate, object)` fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI (or `_:id` for a blank node).
    pub subject: String,
    /// Predicate IRI or bare local name (e.g. `populationTotal`).
    pub predicate: String,
    /// Object IRI or literal. Literals may be bare or in N-Triples syntax.
    pub object: String,
}

impl Triple {
    /// Creates a triple from its three components.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Returns `true` if the predicate's local name is one of `names`.
    #[must_use]
    pub fn has_predicate(&self, names: &[&str]) -> bool {
        let local = local_name(&self.predicate);
        names.iter().any(|n| *n == local)
    }
}

impl<S, P, O> From<(S, P, O)> for Triple
where
    S: Into<String>,
    P: Into<String>,
    O: Into<String>,
{
    fn from((s, p, o): (S, P, O)) -> Self {
        Triple::new(s, p, o)
    }
}

/// The ordered facts describing one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleSet {
    triples: Vec<Triple>,
}

impl TripleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a triple, keeping insertion order.
    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if the set holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates the triples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Objects of every triple whose predicate's local name is in `names`,
    /// in insertion order.
    pub fn objects<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.has_predicate(names))
            .map(|t| t.object.as_str())
    }

    /// The first object found for `names`, trying each name in order.
    ///
    /// Unlike [`objects`](Self::objects), earlier names take priority over
    /// earlier triples. Returns the matched name together with the object.
    #[must_use]
    pub fn first_object<'a>(&'a self, names: &[&'a str]) -> Option<(&'a str, &'a str)> {
        names.iter().find_map(|name| {
            self.triples
                .iter()
                .find(|t| local_name(&t.predicate) == *name)
                .map(|t| (*name, t.object.as_str()))
        })
    }

    /// Distinct subjects in first-seen order.
    #[must_use]
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for t in &self.triples {
            if !seen.contains(&t.subject.as_str()) {
                seen.push(&t.subject);
            }
        }
        seen
    }

    /// The triples about `subject`, order preserved.
    ///
    /// `subject` may be written with N-Triples angle brackets.
    #[must_use]
    pub fn for_subject(&self, subject: &str) -> TripleSet {
        let subject = strip_brackets(subject);
        self.triples
            .iter()
            .filter(|t| t.subject == subject)
            .cloned()
            .collect()
    }

    /// The triples describing a single entity.
    ///
    /// With `Some(subject)` this is [`for_subject`](Self::for_subject). With
    /// `None` the set must already be about at most one subject; facts from
    /// different entities are never mixed.
    ///
    /// # Errors
    ///
    /// [`TemplateError::UnknownSubject`] if no triple is about `subject`,
    /// [`TemplateError::AmbiguousEntity`] if no subject was given and the
    /// set describes several.
    pub fn entity(&self, subject: Option<&str>) -> Result<TripleSet, TemplateError> {
        match subject {
            Some(subject) => {
                let subset = self.for_subject(subject);
                if subset.is_empty() {
                    return Err(TemplateError::UnknownSubject {
                        subject: strip_brackets(subject).to_string(),
                    });
                }
                Ok(subset)
            }
            None => {
                let subjects = self.subjects();
                if subjects.len() > 1 {
                    return Err(TemplateError::AmbiguousEntity {
                        subjects: subjects.into_iter().map(str::to_string).collect(),
                    });
                }
                Ok(self.clone())
            }
        }
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl<T: Into<Triple>> From<Vec<T>> for TripleSet {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().map(Into::into).collect()
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

/// An HTML fragment meant for embedding in a larger page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment(String);

impl RenderedFragment {
    /// Wraps already-rendered HTML.
    #[must_use]
    pub fn new(html: String) -> Self {
        Self(html)
    }

    /// The fragment's HTML.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning its HTML.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for RenderedFragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
