//! The `temporal_time` crate implements the time-of-day value core of
//! ECMAScript's Temporal built-ins in Rust.
//!
//! The crate covers the `Temporal.PlainTime` abstract operations that make
//! up a wall-clock time: validating and constraining raw field values,
//! regulating them under an overflow policy, balancing overflowed arithmetic
//! back into canonical ranges plus a day carry, constructing immutable time
//! values bound to a host calendar, and extracting time fields from a host
//! property bag in a fixed, observable order.
//!
//! ```rust
//! use temporal_time::{ArithmeticOverflow, TimeRecord};
//!
//! // Out-of-range fields are constrained independently per field.
//! let record = TimeRecord::new(30.0, -5.0, 999.0, 2000.0, 5.0, 5.0);
//! let time = record.regulate(ArithmeticOverflow::Constrain).unwrap();
//! assert_eq!(time.hour, 23);
//! assert_eq!(time.minute, 0);
//! assert_eq!(time.second, 59);
//! assert_eq!(time.millisecond, 999);
//!
//! // Under "reject" the same fields are a RangeError.
//! let record = TimeRecord::new(30.0, -5.0, 999.0, 2000.0, 5.0, 5.0);
//! assert!(record.regulate(ArithmeticOverflow::Reject).is_err());
//! ```
//!
//! Dates, durations, parsing, formatting, and the calendar system itself are
//! out of scope; calendars are opaque handles supplied by the host through
//! the [`host::CalendarProvider`] trait.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,

    // Narrowing casts below are all preceded by a range check or rem_euclid.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;
extern crate core;

pub mod error;
pub mod fields;
pub mod host;
pub mod iso;
pub mod options;
pub mod time;

#[doc(inline)]
pub use error::TemporalError;

/// The `Temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use fields::to_time_record;
pub use iso::{BalancedTime, IsoTime, TimeRecord};
pub use options::ArithmeticOverflow;
pub use time::{create_plain_time, PlainTime};

#[doc(hidden)]
#[macro_export]
macro_rules! temporal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err(TemporalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err(TemporalError::assert());
        }
    };
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
