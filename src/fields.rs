//! This module implements time field extraction from host property bags.

use crate::{
    host::{TimePropertySource, ToIntegerOrInfinity},
    iso::TimeRecord,
    TemporalError, TemporalResult,
};
use alloc::format;

/// The property names read by [`to_time_record`], in the exact order they
/// are read.
///
/// The order is alphabetical by property name rather than by unit magnitude.
/// Property reads can run arbitrary side-effecting host code, so the read
/// order is externally observable and must stay fixed.
pub const TIME_RECORD_PROPERTIES: [&str; 6] = [
    "hour",
    "microsecond",
    "millisecond",
    "minute",
    "nanosecond",
    "second",
];

/// Extracts a [`TimeRecord`] from a host property bag.
///
/// Every property in [`TIME_RECORD_PROPERTIES`] is mandatory; the first
/// absent one fails with a `TypeError` naming the property, and no property
/// after it is read. Each present value is coerced through the provided
/// collaborator, whose failures propagate unchanged.
pub fn to_time_record<S, C>(source: &S, coercion: &C) -> TemporalResult<TimeRecord>
where
    S: TimePropertySource,
    C: ToIntegerOrInfinity<S::Value>,
{
    let mut record = TimeRecord::default();
    for property in TIME_RECORD_PROPERTIES {
        let Some(value) = source.get(property)? else {
            return Err(TemporalError::r#type().with_message(format!(
                "Required time property '{property}' is missing or undefined."
            )));
        };
        let number = coercion.to_integer_or_infinity(value)?;
        match property {
            "hour" => record.hour = number,
            "microsecond" => record.microsecond = number,
            "millisecond" => record.millisecond = number,
            "minute" => record.minute = number,
            "nanosecond" => record.nanosecond = number,
            "second" => record.second = number,
            _ => return Err(TemporalError::assert()),
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{to_time_record, TIME_RECORD_PROPERTIES};
    use crate::{
        error::ErrorKind,
        host::{TimePropertySource, ToIntegerOrInfinity},
        TemporalError, TemporalResult,
    };
    use alloc::{collections::BTreeMap, string::String, vec::Vec};
    use core::cell::RefCell;

    /// A property bag that records the order its properties are read in.
    struct RecordingSource {
        values: BTreeMap<&'static str, f64>,
        accessed: RefCell<Vec<String>>,
    }

    impl RecordingSource {
        fn with_values(values: &[(&'static str, f64)]) -> Self {
            Self {
                values: values.iter().copied().collect(),
                accessed: RefCell::new(Vec::new()),
            }
        }

        fn accessed(&self) -> Vec<String> {
            self.accessed.borrow().clone()
        }
    }

    impl TimePropertySource for RecordingSource {
        type Value = f64;

        fn get(&self, property: &str) -> TemporalResult<Option<f64>> {
            self.accessed.borrow_mut().push(String::from(property));
            Ok(self.values.get(property).copied())
        }
    }

    /// A coercion collaborator that fails on a sentinel value.
    struct FailingCoercion;

    impl ToIntegerOrInfinity<f64> for FailingCoercion {
        fn to_integer_or_infinity(&self, value: f64) -> TemporalResult<f64> {
            if value.is_nan() {
                return Err(TemporalError::r#type().with_message("value is not coercible."));
            }
            ().to_integer_or_infinity(value)
        }
    }

    const ALL_PROPERTIES: [(&str, f64); 6] = [
        ("hour", 13.0),
        ("minute", 37.0),
        ("second", 2.0),
        ("millisecond", 10.0),
        ("microsecond", 20.0),
        ("nanosecond", 30.0),
    ];

    #[test]
    fn extracts_all_fields_in_alphabetical_order() {
        let source = RecordingSource::with_values(&ALL_PROPERTIES);
        let record = to_time_record(&source, &()).unwrap();

        assert_eq!(record.hour, 13.0);
        assert_eq!(record.minute, 37.0);
        assert_eq!(record.second, 2.0);
        assert_eq!(record.millisecond, 10.0);
        assert_eq!(record.microsecond, 20.0);
        assert_eq!(record.nanosecond, 30.0);
        assert_eq!(source.accessed(), TIME_RECORD_PROPERTIES);
    }

    #[test]
    fn missing_hour_stops_before_any_other_read() {
        let mut values = ALL_PROPERTIES.to_vec();
        values.retain(|(name, _)| *name != "hour");
        let source = RecordingSource::with_values(&values);

        let err = to_time_record(&source, &()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.message().contains("hour"));
        // "hour" is first in enumeration order, so nothing else was read.
        assert_eq!(source.accessed(), ["hour"]);
    }

    #[test]
    fn missing_minute_stops_mid_enumeration() {
        let mut values = ALL_PROPERTIES.to_vec();
        values.retain(|(name, _)| *name != "minute");
        let source = RecordingSource::with_values(&values);

        let err = to_time_record(&source, &()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.message().contains("minute"));
        assert_eq!(
            source.accessed(),
            ["hour", "microsecond", "millisecond", "minute"]
        );
    }

    #[test]
    fn coercion_failure_propagates_and_stops_enumeration() {
        let mut values = ALL_PROPERTIES.to_vec();
        for (name, value) in &mut values {
            if *name == "millisecond" {
                *value = f64::NAN;
            }
        }
        let source = RecordingSource::with_values(&values);

        let err = to_time_record(&source, &FailingCoercion).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.message(), "value is not coercible.");
        assert_eq!(source.accessed(), ["hour", "microsecond", "millisecond"]);
    }

    #[test]
    fn source_failure_propagates() {
        struct PoisonedSource;
        impl TimePropertySource for PoisonedSource {
            type Value = f64;

            fn get(&self, property: &str) -> TemporalResult<Option<f64>> {
                if property == "minute" {
                    return Err(TemporalError::general("host getter failed."));
                }
                Ok(Some(0.0))
            }
        }

        let err = to_time_record(&PoisonedSource, &()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
    }
}
