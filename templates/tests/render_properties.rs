//! Property-based tests for the city table.
//!
//! Uses proptest to check that the table contract holds for arbitrary
//! triple sets, not just the hand-written examples.

use navigator_templates::vocab::{local_name, POPULATION};
use navigator_templates::{render, Triple, TripleSet};
use proptest::prelude::*;

const CITY: &str = "http://dbpedia.org/resource/CityX";
const HEADER: &str = "<tr><td colspan=\"2\">City Information</td></tr>";

/// Predicates other than the population ones, which are placed explicitly.
fn predicate() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("http://dbpedia.org/ontology/country".to_string()),
        Just("http://dbpedia.org/ontology/areaTotal".to_string()),
        Just("elevation".to_string()),
        Just("timeZone".to_string()),
        Just("postalCode".to_string()),
        Just("http://www.w3.org/2000/01/rdf-schema#label".to_string()),
        "[a-zA-Z]{1,12}",
    ]
    .prop_filter("population predicates are placed explicitly", |p| {
        !POPULATION.contains(&local_name(p))
    })
}

fn object() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,24}",
        "[0-9]{1,9}",
        "\"[a-z <>&]{0,12}\"@en",
        Just("http://dbpedia.org/resource/Somewhere_Else".to_string()),
        Just("<table>".to_string()),
    ]
}

fn noise() -> impl Strategy<Value = Vec<Triple>> {
    prop::collection::vec(
        (predicate(), object()).prop_map(|(p, o)| Triple::new(CITY, p, o)),
        0..12,
    )
}

/// Noise plus one `populationTotal` fact at an arbitrary position.
fn with_population() -> impl Strategy<Value = (TripleSet, u64)> {
    (noise(), 0u64..10_000_000_000, any::<prop::sample::Index>()).prop_map(
        |(mut triples, count, at)| {
            let at = at.index(triples.len() + 1);
            triples.insert(at, Triple::new(CITY, "populationTotal", count.to_string()));
            (triples.into_iter().collect(), count)
        },
    )
}

proptest! {
    /// The population row carries the formatted count inside the table.
    #[test]
    fn prop_population_row_inside_table((set, count) in with_population()) {
        let html = render(&set).into_string();
        let row = format!("<tr><td>total population</td><td>{count}</td></tr>");
        let open = html.find("<table>");
        let found = html.find(&row);
        let close = html.find("</table>");
        prop_assert!(open.is_some() && found.is_some() && close.is_some(), "{}", html);
        prop_assert!(open < found && found < close, "{}", html);
    }

    /// Exactly one table, opened first and closed last.
    #[test]
    fn prop_single_table((set, _) in with_population(), extra in noise()) {
        for set in [set, extra.into_iter().collect::<TripleSet>()] {
            let html = render(&set).into_string();
            prop_assert_eq!(html.matches("<table>").count(), 1, "{}", html);
            prop_assert_eq!(html.matches("</table>").count(), 1, "{}", html);
            prop_assert!(html.starts_with("<table>") && html.ends_with("</table>"), "{}", html);
        }
    }

    /// Rendering the same triples twice yields the same bytes.
    #[test]
    fn prop_render_is_deterministic((set, _) in with_population(), extra in noise()) {
        prop_assert_eq!(render(&set), render(&set));
        let extra: TripleSet = extra.into_iter().collect();
        prop_assert_eq!(render(&extra), render(&extra));
    }

    /// Without a population fact the table still renders, header first.
    #[test]
    fn prop_population_less_keeps_header(triples in noise()) {
        let set: TripleSet = triples.into_iter().collect();
        let html = render(&set).into_string();
        prop_assert!(html.starts_with(&format!("<table>{HEADER}")), "{}", html);
        prop_assert!(
            html.contains("<tr><td>total population</td><td>unknown</td></tr>"),
            "{}",
            html
        );
    }
}
