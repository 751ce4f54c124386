//! Template for cities.

use crate::config::{Placement, TemplateConfig};
use crate::html::{push_data_row, push_header_row};
use crate::model::{RenderedFragment, TripleSet};
use crate::place::{PopulatedPlaceRenderer, SharedPlaceFields};
use crate::population::format_population_with;

/// Renders the "City Information" table for a city.
///
/// The table always carries the heading and the total population row, in
/// that order. Rows from the composed [`PopulatedPlaceRenderer`] go after
/// the population row, or before it with [`Placement::Before`].
#[derive(Debug, Clone, Default)]
pub struct CityTemplate<P = SharedPlaceFields> {
    place: P,
    config: TemplateConfig,
}

impl CityTemplate<SharedPlaceFields> {
    /// A template with the standard shared rows and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PopulatedPlaceRenderer> CityTemplate<P> {
    /// A template composing `place` for the shared populated-place rows.
    pub fn with_place(place: P, config: TemplateConfig) -> Self {
        Self { place, config }
    }

    /// Replaces the options.
    #[must_use]
    pub fn config(mut self, config: TemplateConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders the table for `triples`.
    ///
    /// Never fails: a missing population shows the configured placeholder.
    #[must_use]
    pub fn render(&self, triples: &TripleSet) -> RenderedFragment {
        let shared = self.place.render_rows(triples);
        let population = format_population_with(triples, &self.config);

        let mut content = String::new();
        content.push_str("<table>");
        push_header_row(&mut content, "City Information");
        if self.config.placement == Placement::Before {
            content.push_str(&shared);
        }
        push_data_row(&mut content, "total population", &population);
        if self.config.placement == Placement::After {
            content.push_str(&shared);
        }
        content.push_str("</table>");

        RenderedFragment::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::NoSharedFields;

    const EXPECTED: &str = "<table><tr><td colspan=\"2\">City Information</td></tr><tr><td>total population</td><td>3200000</td></tr></table>";

    #[test]
    fn city_x() {
        let set = TripleSet::from(vec![("CityX", "populationTotal", "3200000")]);
        assert_eq!(CityTemplate::new().render(&set), EXPECTED);
    }

    #[test]
    fn no_shared_fields_matches_bare_table() {
        let set = TripleSet::from(vec![
            ("CityX", "populationTotal", "3200000"),
            ("CityX", "country", "http://dbpedia.org/resource/Nowhere"),
        ]);
        let template = CityTemplate::with_place(NoSharedFields, TemplateConfig::default());
        assert_eq!(template.render(&set), EXPECTED);
    }

    #[test]
    fn placement_before_puts_shared_rows_first() {
        let set = TripleSet::from(vec![
            ("CityX", "populationTotal", "3200000"),
            ("CityX", "elevation", "40"),
        ]);
        let config = TemplateConfig {
            placement: Placement::Before,
            ..TemplateConfig::default()
        };
        let html = CityTemplate::new().config(config).render(&set).into_string();
        let elevation = html.find("elevation").unwrap();
        let population = html.find("total population").unwrap();
        assert!(elevation < population, "{html}");
    }

    #[test]
    fn placeholder_is_escaped() {
        let config = TemplateConfig {
            placeholder: "<none>".to_string(),
            ..TemplateConfig::default()
        };
        let html = CityTemplate::new().config(config).render(&TripleSet::new());
        assert!(html.as_str().contains("<td>&lt;none&gt;</td>"), "{html}");
    }
}
