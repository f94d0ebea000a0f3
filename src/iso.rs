//! This module implements the internal ISO time field slots.
//!
//! Two representations of a time of day live here:
//!
//! A [`TimeRecord`] holds raw, possibly out-of-range fields as they arrive
//! from host code or intermediate arithmetic. Each field is a mathematical
//! integer or an infinity.
//!
//! An [`IsoTime`] represents the canonical `[[ISOHour]]`, `[[ISOMinute]]`,
//! `[[ISOSecond]]`, `[[ISOMillisecond]]`, `[[ISOMicrosecond]]`, and
//! `[[ISONanosecond]]` internal slots, with every field in its valid range.

use crate::{options::ArithmeticOverflow, temporal_assert, TemporalError, TemporalResult};
use core_maths::*;
use num_traits::{AsPrimitive, FromPrimitive};

/// A raw time-of-day record prior to validation, constraining, or balancing.
///
/// Every field must be a mathematical integer or `+∞`/`-∞`; producing
/// anything else (a fractional value or `NaN`) is a bug in the caller. The
/// fields may otherwise hold any value, including negative and out-of-range
/// ones.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TimeRecord {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub millisecond: f64,
    pub microsecond: f64,
    pub nanosecond: f64,
}

impl TimeRecord {
    /// Creates a new `TimeRecord` from raw field values.
    pub fn new(
        hour: f64,
        minute: f64,
        second: f64,
        millisecond: f64,
        microsecond: f64,
        nanosecond: f64,
    ) -> Self {
        let record = Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        };
        debug_assert!(record.is_integral_or_infinity());
        record
    }

    /// Returns whether every field is a mathematical integer or an infinity.
    pub(crate) fn is_integral_or_infinity(&self) -> bool {
        self.fields()
            .iter()
            .all(|f| !f.is_nan() && (f.is_infinite() || f.trunc() == *f))
    }

    pub(crate) fn is_non_negative(&self) -> bool {
        self.fields().iter().all(|f| *f >= 0.0)
    }

    fn fields(&self) -> [f64; 6] {
        [
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.microsecond,
            self.nanosecond,
        ]
    }

    /// Returns whether this record is a valid time.
    ///
    /// See [`is_valid_time`] for the exact predicate and its precondition.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_time(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.microsecond,
            self.nanosecond,
        )
    }

    /// Constrains every field of this record into its valid range.
    ///
    /// See [`constrain_time`].
    #[inline]
    #[must_use]
    pub fn constrain(&self) -> IsoTime {
        constrain_time(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.microsecond,
            self.nanosecond,
        )
    }

    /// Regulates this record into an `IsoTime` per the provided overflow
    /// policy.
    ///
    /// `Constrain` clamps each field independently and cannot fail;
    /// `Reject` returns a `RangeError` if any field is out of range and
    /// otherwise passes the fields through unchanged.
    pub fn regulate(self, overflow: ArithmeticOverflow) -> TemporalResult<IsoTime> {
        match overflow {
            ArithmeticOverflow::Constrain => Ok(self.constrain()),
            ArithmeticOverflow::Reject => {
                if !self.is_valid() {
                    return Err(
                        TemporalError::range().with_message("time fields are not a valid time.")
                    );
                }
                temporal_assert!(
                    self.is_non_negative(),
                    "Reject regulation requires non-negative fields: {:?}",
                    self
                );
                Ok(IsoTime::new_unchecked(
                    u8::from_f64(self.hour).ok_or_else(|| TemporalError::assert())?,
                    u8::from_f64(self.minute).ok_or_else(|| TemporalError::assert())?,
                    u8::from_f64(self.second).ok_or_else(|| TemporalError::assert())?,
                    u16::from_f64(self.millisecond).ok_or_else(|| TemporalError::assert())?,
                    u16::from_f64(self.microsecond).ok_or_else(|| TemporalError::assert())?,
                    u16::from_f64(self.nanosecond).ok_or_else(|| TemporalError::assert())?,
                ))
            }
        }
    }
}

/// An `IsoTime` record that contains a canonical time of day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

/// The result of balancing overflowed time fields: a canonical time of day
/// plus the signed number of whole days absorbed by the carry.
///
/// Recombining `days` with a date value is the caller's concern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BalancedTime {
    pub days: i64,
    pub time: IsoTime,
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Checks if the time is a valid `IsoTime`
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if !(0..=23).contains(&self.hour) {
            return false;
        }

        let min_sec = 0..=59;
        if !min_sec.contains(&self.minute) || !min_sec.contains(&self.second) {
            return false;
        }

        let sub_second = 0..=999;
        sub_second.contains(&self.millisecond)
            && sub_second.contains(&self.microsecond)
            && sub_second.contains(&self.nanosecond)
    }

    /// Balances possibly-overflowed time fields into a canonical `IsoTime`
    /// with a signed `day` carry.
    ///
    /// Every carry step uses floor division, so each output field other than
    /// `days` is always within its canonical non-negative range even for
    /// negative inputs, and `days` absorbs the overall sign. The total
    /// nanosecond count of the output equals that of the input.
    pub fn balance(
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
        microsecond: i64,
        nanosecond: i64,
    ) -> BalancedTime {
        // 1. Set microsecond to microsecond + floor(nanosecond / 1000).
        // 2. Set nanosecond to nanosecond modulo 1000.
        let (quotient, nanosecond) = div_mod(nanosecond, 1000);
        let microsecond = microsecond + quotient;

        // 3. Set millisecond to millisecond + floor(microsecond / 1000).
        // 4. Set microsecond to microsecond modulo 1000.
        let (quotient, microsecond) = div_mod(microsecond, 1000);
        let millisecond = millisecond + quotient;

        // 5. Set second to second + floor(millisecond / 1000).
        // 6. Set millisecond to millisecond modulo 1000.
        let (quotient, millisecond) = div_mod(millisecond, 1000);
        let second = second + quotient;

        // 7. Set minute to minute + floor(second / 60).
        // 8. Set second to second modulo 60.
        let (quotient, second) = div_mod(second, 60);
        let minute = minute + quotient;

        // 9. Set hour to hour + floor(minute / 60).
        // 10. Set minute to minute modulo 60.
        let (quotient, minute) = div_mod(minute, 60);
        let hour = hour + quotient;

        // 11. Let days be floor(hour / 24).
        // 12. Set hour to hour modulo 24.
        let (days, hour) = div_mod(hour, 24);

        // The remainders above are all rem_euclid of a positive divisor and
        // therefore within 0..divisor.
        let time = Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            millisecond as u16,
            microsecond as u16,
            nanosecond as u16,
        );

        BalancedTime { days, time }
    }
}

// ==== `IsoTime` specific utilities ====

/// Returns whether the provided raw fields are a valid time.
///
/// The check is against each field's upper bound only; callers must supply
/// non-negative fields. This mirrors the `IsValidTime` operation, which
/// receives its inputs from coercions that already exclude negative finite
/// values.
#[inline]
pub fn is_valid_time(
    hour: f64,
    minute: f64,
    second: f64,
    millisecond: f64,
    microsecond: f64,
    nanosecond: f64,
) -> bool {
    if hour > 23.0 {
        return false;
    }

    if minute > 59.0 || second > 59.0 {
        return false;
    }

    millisecond <= 999.0 && microsecond <= 999.0 && nanosecond <= 999.0
}

/// Constrains each raw field independently into its valid range.
///
/// There is no carry between fields; an overflowing `minute` saturates at 59
/// rather than bumping `hour`. Infinities saturate at the range bounds.
#[inline]
pub fn constrain_time(
    hour: f64,
    minute: f64,
    second: f64,
    millisecond: f64,
    microsecond: f64,
    nanosecond: f64,
) -> IsoTime {
    let hour: u8 = hour.clamp(0.0, 23.0).as_();
    let minute: u8 = minute.clamp(0.0, 59.0).as_();
    let second: u8 = second.clamp(0.0, 59.0).as_();
    let millisecond: u16 = millisecond.clamp(0.0, 999.0).as_();
    let microsecond: u16 = microsecond.clamp(0.0, 999.0).as_();
    let nanosecond: u16 = nanosecond.clamp(0.0, 999.0).as_();
    IsoTime::new_unchecked(hour, minute, second, millisecond, microsecond, nanosecond)
}

#[inline]
fn div_mod(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend.div_euclid(divisor), dividend.rem_euclid(divisor))
}
