//! Lift native values into chrono values, and resolve them back.
//!
//! Every function here is pure. The lift direction (`to_*`) only fails where a
//! native value breaks a precondition:
//!
//! - [`to_local_date_time`] / [`to_local_date`] need an
//!   [`MomentKind::Unspecified`] moment;
//! - [`to_local_time`] needs a span in `[0, 24h)`;
//! - [`to_zoned_date_time`] needs a zone one of the databases recognizes.
//!
//! The resolve direction (`resolve_*`) floors sub-tick precision and fails
//! only when a chrono value lies outside what the native types can hold.
//! Anything produced by a `to_*` function resolves back to the value it came
//! from. [`resolve_zoned_date_time`] never fails: a zoned value is always
//! within the range of a stored record.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc,
};

use crate::calendar::{UtcOffset, ZonedDateTime};
use crate::error::{ConvertError, Result};
use crate::native::{
    bounded_instant_ticks, delta_to_ticks, naive_to_ticks, ticks_to_delta, ticks_to_naive,
    MomentKind, NativeInstant, NativeLocalMoment, NativeOffsetMoment, TimeSpan, NANOS_PER_TICK,
    TICKS_PER_DAY, TICKS_PER_SECOND,
};
use crate::record::ZonedRecord;
use crate::zone::{ZoneProvider, ZoneResolver};

// ── Lift ────────────────────────────────────────────────────────────────────

pub fn to_instant(value: NativeInstant) -> DateTime<Utc> {
    ticks_to_naive(value.ticks()).and_utc()
}

/// # Errors
///
/// Returns [`ConvertError::InvalidState`] unless the moment is tagged
/// [`MomentKind::Unspecified`].
pub fn to_local_date_time(value: NativeLocalMoment) -> Result<NaiveDateTime> {
    if value.kind() != MomentKind::Unspecified {
        return Err(ConvertError::InvalidState(format!(
            "local conversion needs an unspecified moment, got {:?}",
            value.kind()
        )));
    }
    Ok(ticks_to_naive(value.ticks()))
}

/// The date part of [`to_local_date_time`], with the same failure.
pub fn to_local_date(value: NativeLocalMoment) -> Result<NaiveDate> {
    to_local_date_time(value).map(|dt| dt.date())
}

/// # Errors
///
/// Returns [`ConvertError::InvalidState`] if the span is negative or at least
/// one day long.
pub fn to_local_time(value: TimeSpan) -> Result<NaiveTime> {
    if value.is_negative() || value >= TimeSpan::ONE_DAY {
        return Err(ConvertError::InvalidState(format!(
            "time of day must lie in [0, 24h), got {} ticks",
            value.ticks()
        )));
    }

    let ticks = value.ticks();
    let seconds = (ticks / TICKS_PER_SECOND) as u32;
    let nanos = ((ticks % TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).ok_or_else(|| {
        ConvertError::InvalidState(format!("{ticks} ticks is not a valid time of day"))
    })
}

pub fn to_duration(value: TimeSpan) -> TimeDelta {
    ticks_to_delta(value.ticks())
}

pub fn to_offset(value: TimeSpan) -> UtcOffset {
    UtcOffset::from_delta(ticks_to_delta(value.ticks()))
}

pub fn to_offset_date_time(value: NativeOffsetMoment) -> DateTime<FixedOffset> {
    let offset = value.fixed_offset();
    let utc = ticks_to_naive(value.local_ticks())
        - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Decode a zoned record using the default databases and options.
///
/// See [`ZoneResolver::to_zoned_date_time`].
pub fn to_zoned_date_time(record: &ZonedRecord) -> Result<ZonedDateTime> {
    ZoneResolver::new().to_zoned_date_time(record)
}

impl<P: ZoneProvider, F: ZoneProvider> ZoneResolver<P, F> {
    /// Build a zoned value from the record's instant and its resolved zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedData`] if the zone is unrecognized.
    pub fn to_zoned_date_time(&self, record: &ZonedRecord) -> Result<ZonedDateTime> {
        let instant = to_offset_date_time(record.offset_date_time).with_timezone(&Utc);
        let zone = self.resolve_zone(&record.zone)?;
        ZonedDateTime::new(instant, zone)
    }

    /// Decode a generic JSON object into a zoned value.
    pub fn zoned_from_json(&self, value: &serde_json::Value) -> Result<ZonedDateTime> {
        self.to_zoned_date_time(&ZonedRecord::from_json(value)?)
    }
}

// ── Resolve ─────────────────────────────────────────────────────────────────

/// # Errors
///
/// Returns [`ConvertError::InvalidState`] outside the native tick range.
pub fn resolve_instant(value: DateTime<Utc>) -> Result<NativeInstant> {
    naive_to_ticks(value.naive_utc()).map(NativeInstant::from_ticks)
}

/// The moment comes back tagged [`MomentKind::Unspecified`].
pub fn resolve_local_date_time(value: NaiveDateTime) -> Result<NativeLocalMoment> {
    naive_to_ticks(value).map(NativeLocalMoment::unspecified)
}

/// Midnight at the start of `value`, tagged [`MomentKind::Unspecified`].
pub fn resolve_local_date(value: NaiveDate) -> Result<NativeLocalMoment> {
    resolve_local_date_time(value.and_time(NaiveTime::default()))
}

/// A leap second folds into the last tick of the day.
pub fn resolve_local_time(value: NaiveTime) -> TimeSpan {
    let seconds = i64::from(value.num_seconds_from_midnight());
    let nanos = i64::from(value.nanosecond().min(999_999_999));
    let ticks = seconds * TICKS_PER_SECOND + nanos / NANOS_PER_TICK;
    debug_assert!((0..TICKS_PER_DAY).contains(&ticks));
    TimeSpan::from_ticks(ticks)
}

pub fn resolve_duration(value: TimeDelta) -> Result<TimeSpan> {
    delta_to_ticks(value).map(TimeSpan::from_ticks)
}

pub fn resolve_offset(value: UtcOffset) -> Result<TimeSpan> {
    resolve_duration(value.as_delta())
}

/// # Errors
///
/// Returns [`ConvertError::InvalidState`] if the offset is not a whole number
/// of minutes within ±14 hours, or if the wall clock or UTC reading falls
/// outside years 0001–9999.
pub fn resolve_offset_date_time(value: DateTime<FixedOffset>) -> Result<NativeOffsetMoment> {
    let local_ticks = naive_to_ticks(value.naive_local())?;
    let offset = TimeSpan::from_seconds(i64::from(value.offset().local_minus_utc()));
    NativeOffsetMoment::new(local_ticks, offset)
}

/// Re-serialize a zoned value: its local offset moment plus the zone
/// identifier, verbatim.
///
/// The zone's offset is truncated toward zero to whole minutes, so local mean
/// time offsets such as -04:56:02 are written as -04:56. An offset beyond
/// ±14 hours, or one that would push the wall clock outside years 0001–9999,
/// is written as +00:00. The moment always denotes the zoned instant.
pub fn resolve_zoned_date_time(value: &ZonedDateTime) -> ZonedRecord {
    let utc_ticks = bounded_instant_ticks(value.instant());
    let offset_seconds = value.offset().local_minus_utc();
    ZonedRecord {
        offset_date_time: NativeOffsetMoment::from_utc_truncating(utc_ticks, offset_seconds),
        zone: value.zone().id().to_owned(),
    }
}
