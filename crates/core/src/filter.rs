//! Car filter criteria and predicate composition.
//!
//! A [`CarFilter`] holds independently optional criteria. [`compose`] turns
//! it into the list of [`CarPredicate`]s that must all hold for a car to
//! match. The list always starts with [`CarPredicate::NotDeleted`]; absent
//! criteria contribute nothing. Rendering predicates into SQL is the
//! repository layer's job.

use rust_decimal::Decimal;

use crate::types::DbId;
use crate::vehicle::{CarColor, EngineType, Transmission};

/// Optional criteria accepted by the filtered car listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFilter {
    pub category_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub transmission: Option<Transmission>,
    pub engine_type: Option<EngineType>,
    pub colors: Option<Vec<CarColor>>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_mileage: Option<Decimal>,
    pub max_mileage: Option<Decimal>,
    pub keyword: Option<String>,
}

/// A single primitive condition on a car row.
#[derive(Debug, Clone, PartialEq)]
pub enum CarPredicate {
    NotDeleted,
    InCategory(DbId),
    FromSupplier(DbId),
    TransmissionIs(Transmission),
    EngineTypeIs(EngineType),
    /// Inclusive on both ends.
    PriceBetween(Decimal, Decimal),
    /// Inclusive on both ends. Cars without a recorded mileage never match.
    MileageBetween(Decimal, Decimal),
    /// The car has at least one of these colors.
    HasAnyColor(Vec<CarColor>),
    /// Case-insensitive substring of name or description.
    NameOrDescriptionContains(String),
}

/// Build the conjunction of predicates for `filter`.
///
/// Range criteria only apply when both bounds are given; a lone `min_price`
/// or `max_price` is ignored. An empty color list and a blank keyword are
/// treated as absent.
pub fn compose(filter: &CarFilter) -> Vec<CarPredicate> {
    let mut predicates = vec![CarPredicate::NotDeleted];

    if let Some(category_id) = filter.category_id {
        predicates.push(CarPredicate::InCategory(category_id));
    }

    if let Some(supplier_id) = filter.supplier_id {
        predicates.push(CarPredicate::FromSupplier(supplier_id));
    }

    if let Some(transmission) = filter.transmission {
        predicates.push(CarPredicate::TransmissionIs(transmission));
    }

    if let Some(engine_type) = filter.engine_type {
        predicates.push(CarPredicate::EngineTypeIs(engine_type));
    }

    if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
        predicates.push(CarPredicate::PriceBetween(min, max));
    }

    if let (Some(min), Some(max)) = (filter.min_mileage, filter.max_mileage) {
        predicates.push(CarPredicate::MileageBetween(min, max));
    }

    if let Some(ref colors) = filter.colors {
        if !colors.is_empty() {
            predicates.push(CarPredicate::HasAnyColor(colors.clone()));
        }
    }

    if let Some(ref keyword) = filter.keyword {
        let keyword = keyword.trim();
        if !keyword.is_empty() {
            predicates.push(CarPredicate::NameOrDescriptionContains(keyword.to_string()));
        }
    }

    predicates
}

/// Parse a comma-separated list of color codes (`"RED,BLUE"`).
///
/// Blank entries are skipped, so `""` parses to an empty list.
pub fn parse_color_list(raw: &str) -> Result<Vec<CarColor>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CarColor::from_str_value)
        .collect()
}

/// Build an `ILIKE` pattern matching `keyword` as a literal substring.
///
/// `%`, `_` and `\` in the keyword are escaped with `\`, the default escape
/// character for PostgreSQL `LIKE`.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
