//! Emits a rendered table, bare or wrapped in a page, to a file or stdout.

use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};

use crate::html::render_page;
use crate::model::{RenderedFragment, TripleSet};
use crate::vocab::resource_label;

/// How the fragment is laid out in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// The `<table>` alone, for embedding.
    Fragment,
    /// A standalone HTML document with the given title.
    Page {
        /// Page and heading title.
        title: String,
    },
}

impl Layout {
    /// A page titled after the entity the triples describe.
    #[must_use]
    pub fn page_for(triples: &TripleSet) -> Self {
        Layout::Page {
            title: page_title(triples),
        }
    }
}

/// Title for an entity page: the label of its first subject, or `City`.
#[must_use]
pub fn page_title(triples: &TripleSet) -> String {
    triples
        .subjects()
        .first()
        .map(|s| resource_label(s))
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| "City".to_string())
}

/// The text to emit for `fragment` under `layout`.
#[must_use]
pub fn document(fragment: &RenderedFragment, layout: &Layout) -> String {
    match layout {
        Layout::Fragment => format!("{fragment}\n"),
        Layout::Page { title } => render_page(title, fragment),
    }
}

/// Writes `fragment` to `target`, or to stdout when `target` is `None`.
///
/// Parent directories of `target` are created as needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or if
/// stdout is closed.
pub fn emit(fragment: &RenderedFragment, layout: &Layout, target: Option<&Path>) -> Result<()> {
    let content = document(fragment, layout);
    match target {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
            }
            fs::write(path, &content)
                .with_context(|| format!("Cannot write rendered table: {}", path.display()))?;
            tracing::debug!(
                path = %path.display(),
                bytes = content.len(),
                ?layout,
                "emitted table"
            );
        }
        None => {
            io::stdout()
                .lock()
                .write_all(content.as_bytes())
                .context("Cannot write rendered table to stdout")?;
        }
    }
    Ok(())
}
