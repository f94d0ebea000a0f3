//! This module implements `PlainTime` and its construction logic.

use crate::{
    host::{CalendarProvider, TimeConstructionTarget},
    iso::{is_valid_time, IsoTime},
    TemporalError, TemporalResult,
};

/// An immutable wall-clock time bound to a host calendar handle.
///
/// A `PlainTime` can only be produced through [`create_plain_time`] or the
/// constructors below, so its fields are always a valid time. The calendar
/// handle is opaque to this crate and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainTime<C> {
    pub(crate) iso: IsoTime,
    calendar: C,
}

impl<C> PlainTime<C> {
    /// Creates a new `PlainTime` from validated parts.
    #[inline]
    #[must_use]
    pub(crate) fn new_unchecked(iso: IsoTime, calendar: C) -> Self {
        Self { iso, calendar }
    }

    /// Creates a new `PlainTime`, rejecting any field that is not in a
    /// valid range.
    ///
    /// When `calendar` is `None` the provider's default calendar is used.
    pub fn try_new<P>(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
        calendar: Option<C>,
        provider: &P,
    ) -> TemporalResult<Self>
    where
        P: CalendarProvider<Calendar = C>,
    {
        create_plain_time(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
            calendar,
            provider,
            &(),
        )
    }

    /// Returns the internal `hour` field.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    /// Returns the internal `minute` field.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    /// Returns the internal `second` field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the internal `millisecond` field.
    #[inline]
    #[must_use]
    pub const fn millisecond(&self) -> u16 {
        self.iso.millisecond
    }

    /// Returns the internal `microsecond` field.
    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u16 {
        self.iso.microsecond
    }

    /// Returns the internal `nanosecond` field.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u16 {
        self.iso.nanosecond
    }

    /// Returns a reference to the calendar handle this time is bound to.
    #[inline]
    pub const fn calendar(&self) -> &C {
        &self.calendar
    }
}

// The default construction target builds a `PlainTime` directly.
impl<C> TimeConstructionTarget<C> for () {
    type Output = PlainTime<C>;

    fn construct(&self, time: IsoTime, calendar: C) -> Self::Output {
        PlainTime::new_unchecked(time, calendar)
    }
}

/// Creates a host time value from raw fields, equivalent to the
/// `CreateTemporalTime` operation.
///
/// The fields are validated first; invalid fields are a `RangeError` and no
/// value is constructed. On success the calendar is resolved
/// (provided-or-default) and instantiation is delegated to `target`, which
/// stands in for the host's "new target" and may build any host subtype.
#[allow(clippy::too_many_arguments)]
pub fn create_plain_time<P, T>(
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    microsecond: u16,
    nanosecond: u16,
    calendar: Option<P::Calendar>,
    provider: &P,
    target: &T,
) -> TemporalResult<T::Output>
where
    P: CalendarProvider,
    T: TimeConstructionTarget<P::Calendar>,
{
    if !is_valid_time(
        hour.into(),
        minute.into(),
        second.into(),
        millisecond.into(),
        microsecond.into(),
        nanosecond.into(),
    ) {
        return Err(TemporalError::range().with_message("time fields are not a valid time."));
    }

    let calendar = calendar.unwrap_or_else(|| provider.default_calendar());
    Ok(target.construct(
        IsoTime::new_unchecked(hour, minute, second, millisecond, microsecond, nanosecond),
        calendar,
    ))
}
