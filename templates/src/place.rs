//! Rows shared by every populated place (cities, towns, villages).

use crate::html::push_data_row;
use crate::model::TripleSet;
use crate::vocab::{resource_label, AREA, COUNTRY, ELEVATION, POSTAL_CODE, TIME_ZONE};

/// Renders the table rows common to all populated places.
///
/// Specialised templates such as [`CityTemplate`](crate::CityTemplate)
/// compose an implementation of this trait and splice its rows into their
/// own table. Implementations must be pure: same triples, same rows.
pub trait PopulatedPlaceRenderer: Send + Sync {
    /// Returns zero or more `<tr>` rows for facts found in `triples`.
    fn render_rows(&self, triples: &TripleSet) -> String;
}

/// A row drawn from the first object of any of `predicates`.
#[derive(Debug, Clone, Copy)]
struct Field {
    label: &'static str,
    predicates: &'static [&'static str],
    unit: &'static str,
}

const FIELDS: &[Field] = &[
    Field {
        label: "country",
        predicates: COUNTRY,
        unit: "",
    },
    Field {
        label: "area",
        predicates: AREA,
        unit: " km²",
    },
    Field {
        label: "elevation",
        predicates: ELEVATION,
        unit: " m",
    },
    Field {
        label: "time zone",
        predicates: TIME_ZONE,
        unit: "",
    },
    Field {
        label: "postal code",
        predicates: POSTAL_CODE,
        unit: "",
    },
];

/// Country, area, elevation, time zone and postal code, each only when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedPlaceFields;

impl PopulatedPlaceRenderer for SharedPlaceFields {
    fn render_rows(&self, triples: &TripleSet) -> String {
        let mut html = String::new();
        for field in FIELDS {
            if let Some((_, object)) = triples.first_object(field.predicates) {
                let value = format!("{}{}", resource_label(object), field.unit);
                push_data_row(&mut html, field.label, &value);
            }
        }
        html
    }
}

/// Contributes no rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSharedFields;

impl PopulatedPlaceRenderer for NoSharedFields {
    fn render_rows(&self, _triples: &TripleSet) -> String {
        String::new()
    }
}
