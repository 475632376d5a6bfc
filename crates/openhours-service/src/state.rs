//! Decoding of stored field state.

use openhours_rules::model::OpeningHoursData;

use crate::error::ServiceResult;

/// ## Summary
/// Decodes a stored opening hours value.
///
/// Missing, blank, `null`, `{}` and `[]` values mean "not set" and yield
/// `None`. Anything else must have the stored shape; ranges are not
/// validated here.
///
/// ## Errors
/// Returns an error if the value is not valid stored JSON.
pub fn decode_state(raw: Option<&str>) -> ServiceResult<Option<OpeningHoursData>> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };

    if matches!(raw, "" | "null" | "{}" | "[]") {
        return Ok(None);
    }

    Ok(Some(OpeningHoursData::from_json(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use openhours_core::types::Weekday;

    #[test]
    fn empty_values_are_unset() {
        for raw in [None, Some(""), Some("  "), Some("null"), Some("{}"), Some("[]")] {
            assert!(decode_state(raw).unwrap().is_none(), "{raw:?}");
        }
    }

    #[test]
    fn decodes_stored_shape() {
        let data = decode_state(Some(r#"{"sunday": ["10:00-14:00"]}"#))
            .unwrap()
            .unwrap();
        assert_eq!(data.weekly.day(Weekday::Sunday), ["10:00-14:00".to_string()]);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            decode_state(Some("opening soon")),
            Err(ServiceError::RulesError(_))
        ));
    }
}
