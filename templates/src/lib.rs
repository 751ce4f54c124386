//! DBpedia navigator place templates.
//!
//! Turns the triples the navigator retrieved for an entity into the HTML
//! fact table shown next to its article. Rendering is a pure function of
//! the triples and the template's options: no I/O, no shared state.
//!
//! # Entry Point
//!
//! ```
//! use navigator_templates::{render, TripleSet};
//!
//! let triples = TripleSet::from(vec![("CityX", "populationTotal", "3200000")]);
//! assert_eq!(
//!     render(&triples).as_str(),
//!     "<table><tr><td colspan=\"2\">City Information</td></tr>\
//!      <tr><td>total population</td><td>3200000</td></tr></table>"
//! );
//! ```
//!
//! # Composition
//!
//! A [`CityTemplate`] owns a [`PopulatedPlaceRenderer`] for the rows every
//! populated place shares (country, area, elevation, ...) and splices them
//! into its own table after the population row, or before it when
//! configured with [`Placement::Before`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod city;
pub mod config;
pub mod error;
pub mod html;
pub mod loader;
pub mod model;
pub mod place;
pub mod population;
pub mod vocab;
pub mod writer;

pub use city::CityTemplate;
pub use config::{Placement, PopulationFormat, PopulationStyle, TemplateConfig};
pub use error::TemplateError;
pub use loader::{load_ntriples, load_ntriples_str, LoadError};
pub use model::{RenderedFragment, Triple, TripleSet};
pub use place::{NoSharedFields, PopulatedPlaceRenderer, SharedPlaceFields};
pub use population::{format_population, format_population_with, population};

/// Renders the city table with the standard shared rows and default options.
#[must_use]
pub fn render(triples: &TripleSet) -> RenderedFragment {
    CityTemplate::new().render(triples)
}
