//! Trait definitions for collaborators supplied by the host environment.
//!
//! The time core never owns a calendar, coerces a host value, or walks a
//! host object graph itself; each of those concerns comes in through one of
//! the narrow traits below. Hosts with no object model of their own can use
//! the `()` implementations.

use crate::{iso::IsoTime, TemporalResult};
use core_maths::*;

/// A host collaborator that can produce the default calendar.
///
/// The calendar handle is opaque to this crate: it is stored on constructed
/// time values and handed back through accessors, never inspected or
/// mutated.
pub trait CalendarProvider {
    /// The host's calendar handle type.
    type Calendar;

    /// Returns the calendar used when construction does not supply one.
    fn default_calendar(&self) -> Self::Calendar;
}

/// A capability for reading named properties off an arbitrary host object.
///
/// A `get` may run arbitrary host logic with observable side effects, and
/// may itself fail; such failures propagate out of any operation built on
/// this trait as-is. `None` marks an absent (or undefined) property.
pub trait TimePropertySource {
    /// The host's raw property value type.
    type Value;

    /// Reads the property named `property`, if present.
    fn get(&self, property: &str) -> TemporalResult<Option<Self::Value>>;
}

/// A host collaborator coercing a raw property value to a mathematical
/// integer or an infinity.
///
/// Equivalent to the `ToIntegerOrInfinity` abstract operation; coercion
/// failures (e.g. a non-coercible host value) propagate unchanged.
pub trait ToIntegerOrInfinity<V> {
    fn to_integer_or_infinity(&self, value: V) -> TemporalResult<f64>;
}

/// A hook standing in for the host object model's "new target": it decides
/// which concrete value gets built from validated time fields.
///
/// The time core validates and resolves the calendar, then delegates
/// instantiation to this trait without interpreting it further.
pub trait TimeConstructionTarget<C> {
    /// The concrete value this target instantiates.
    type Output;

    fn construct(&self, time: IsoTime, calendar: C) -> Self::Output;
}

// Implement empty providers

impl CalendarProvider for () {
    type Calendar = ();

    fn default_calendar(&self) -> Self::Calendar {}
}

impl ToIntegerOrInfinity<f64> for () {
    fn to_integer_or_infinity(&self, value: f64) -> TemporalResult<f64> {
        // NaN and both zeros coerce to +0; infinities pass through; finite
        // values truncate toward zero.
        if value.is_nan() || value == 0.0 {
            return Ok(0.0);
        }
        if value.is_infinite() {
            return Ok(value);
        }
        Ok(value.trunc())
    }
}
