//! Pure helpers for turning stored car rows into their external shape.

use crate::error::CoreError;
use crate::types::DbId;
use crate::vehicle::{CarColor, EngineType, Transmission};

/// Label shown in place of a related entity's name once it is soft-deleted.
pub const DELETED_REFERENCE_LABEL: &str = "None";

/// Resolve the display name of a car's category or supplier.
///
/// `name` and `deleted` come from a left join, so both are `None` when the
/// referenced row does not exist at all. That cannot happen while the foreign
/// key holds and is reported as an integrity fault rather than papered over.
pub fn reference_label(
    entity: &'static str,
    car_id: DbId,
    name: Option<String>,
    deleted: Option<bool>,
) -> Result<String, CoreError> {
    match (name, deleted) {
        (Some(_), Some(true)) => Ok(DELETED_REFERENCE_LABEL.to_string()),
        (Some(name), Some(false)) => Ok(name),
        _ => Err(CoreError::Internal(format!(
            "Car {car_id} references a missing {entity}"
        ))),
    }
}

/// Parallel lists of color display names and hex codes, in stored order.
pub fn color_display_lists(colors: &[CarColor]) -> (Vec<String>, Vec<String>) {
    colors
        .iter()
        .map(|c| {
            let display = c.display();
            (display.name.to_string(), display.hex_code.to_string())
        })
        .unzip()
}

/// Decode stored color codes, treating unknown codes as an integrity fault.
pub fn decode_colors(car_id: DbId, stored: &[String]) -> Result<Vec<CarColor>, CoreError> {
    stored
        .iter()
        .map(|s| CarColor::from_str_value(s).map_err(|e| integrity(car_id, e)))
        .collect()
}

pub fn decode_transmission(car_id: DbId, stored: &str) -> Result<Transmission, CoreError> {
    Transmission::from_str_value(stored).map_err(|e| integrity(car_id, e))
}

pub fn decode_engine_type(car_id: DbId, stored: &str) -> Result<EngineType, CoreError> {
    EngineType::from_str_value(stored).map_err(|e| integrity(car_id, e))
}

fn integrity(car_id: DbId, msg: String) -> CoreError {
    CoreError::Internal(format!("Car {car_id} holds an unreadable value: {msg}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn live_reference_shows_its_name() {
        let label = reference_label("category", 1, Some("Sedan".into()), Some(false)).unwrap();
        assert_eq!(label, "Sedan");
    }

    #[test]
    fn deleted_reference_shows_fallback() {
        let label = reference_label("supplier", 1, Some("Acme".into()), Some(true)).unwrap();
        assert_eq!(label, DELETED_REFERENCE_LABEL);
    }

    #[test]
    fn missing_reference_is_an_integrity_fault() {
        assert_matches!(
            reference_label("category", 9, None, None),
            Err(CoreError::Internal(msg)) if msg.contains("Car 9")
        );
    }

    #[test]
    fn color_lists_preserve_order() {
        let (names, codes) = color_display_lists(&[CarColor::White, CarColor::Red]);
        assert_eq!(names, vec!["White", "Red"]);
        assert_eq!(codes, vec!["#ffffff", "#fc0303"]);
    }

    #[test]
    fn unknown_stored_values_fail_decoding() {
        assert_matches!(
            decode_colors(4, &["RED".to_string(), "MAUVE".to_string()]),
            Err(CoreError::Internal(_))
        );
        assert_matches!(decode_transmission(4, "CVT"), Err(CoreError::Internal(_)));
        assert_eq!(decode_engine_type(4, "ELECTRIC").unwrap(), EngineType::Electric);
    }
}
