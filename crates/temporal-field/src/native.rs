//! Native, tick-based date/time values.
//!
//! These are the host-side representations that the converter lifts into
//! `chrono` values and resolves back from. Every value is a signed 64-bit
//! count of 100-nanosecond ticks:
//!
//! - timestamps count ticks since 1970-01-01T00:00:00 on their own clock
//!   (UTC for [`NativeInstant`], the wall clock for [`NativeLocalMoment`] and
//!   [`NativeOffsetMoment`]);
//! - [`TimeSpan`] is a plain signed tick count.
//!
//! The representable range is therefore roughly ±29 000 years around 1970,
//! which is narrower than chrono's. Conversions from chrono check it.
//! [`NativeOffsetMoment`] is narrower still: both its wall clock and its UTC
//! reading stay within years 0001–9999, so its RFC 3339 text always has a
//! four-digit year.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, Utc};

use crate::error::{ConvertError, Result};

pub const NANOS_PER_TICK: i64 = 100;
pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Largest offset a [`NativeOffsetMoment`] accepts, in either direction.
pub const MAX_OFFSET_TICKS: i64 = 14 * TICKS_PER_HOUR;

/// 0001-01-01T00:00:00, the earliest reading of a [`NativeOffsetMoment`].
pub const MIN_MOMENT_TICKS: i64 = -62_135_596_800 * TICKS_PER_SECOND;

/// The last tick of 9999-12-31, the latest reading of a [`NativeOffsetMoment`].
pub const MAX_MOMENT_TICKS: i64 = 253_402_300_800 * TICKS_PER_SECOND - 1;

const fn scale(value: i64, ticks_per_unit: i64) -> i64 {
    match value.checked_mul(ticks_per_unit) {
        Some(ticks) => ticks,
        None => panic!("value overflows the tick range"),
    }
}

// ── TimeSpan ────────────────────────────────────────────────────────────────

/// A signed span of time, in ticks.
///
/// Used both as a time-of-day (`0 ≤ span < 24h`) and as a general elapsed
/// duration or UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeSpan {
    ticks: i64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { ticks: 0 };
    pub const ONE_DAY: TimeSpan = TimeSpan {
        ticks: TICKS_PER_DAY,
    };

    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// # Panics
    ///
    /// Panics if the result overflows the tick range.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::from_ticks(scale(seconds, TICKS_PER_SECOND))
    }

    /// # Panics
    ///
    /// Panics if the result overflows the tick range.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self::from_ticks(scale(minutes, TICKS_PER_MINUTE))
    }

    /// # Panics
    ///
    /// Panics if the result overflows the tick range.
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_ticks(scale(hours, TICKS_PER_HOUR))
    }

    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    pub const fn is_negative(self) -> bool {
        self.ticks < 0
    }
}

// ── NativeInstant ───────────────────────────────────────────────────────────

/// An absolute UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeInstant {
    ticks: i64,
}

impl NativeInstant {
    pub const UNIX_EPOCH: NativeInstant = NativeInstant { ticks: 0 };

    /// Ticks since the Unix epoch, UTC.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// # Panics
    ///
    /// Panics if the result overflows the tick range.
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self::from_ticks(scale(seconds, TICKS_PER_SECOND))
    }

    pub const fn ticks(self) -> i64 {
        self.ticks
    }
}

// ── NativeLocalMoment ───────────────────────────────────────────────────────

/// Which clock a [`NativeLocalMoment`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MomentKind {
    /// A wall-clock reading with no zone or offset attached.
    #[default]
    Unspecified,
    /// The reading is known to be UTC.
    Utc,
    /// The reading is in the host's local time zone.
    Local,
}

/// A calendar date and time of day with no zone or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeLocalMoment {
    ticks: i64,
    kind: MomentKind,
}

impl NativeLocalMoment {
    pub const fn new(ticks: i64, kind: MomentKind) -> Self {
        Self { ticks, kind }
    }

    /// A wall-clock reading tagged [`MomentKind::Unspecified`].
    pub const fn unspecified(ticks: i64) -> Self {
        Self::new(ticks, MomentKind::Unspecified)
    }

    /// Wall-clock ticks since 1970-01-01T00:00:00.
    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    pub const fn kind(self) -> MomentKind {
        self.kind
    }
}

// ── NativeOffsetMoment ──────────────────────────────────────────────────────

/// A calendar date and time of day at a fixed UTC offset.
///
/// The offset is always a whole number of minutes within ±14 hours, and both
/// the wall clock and the UTC reading fall within years 0001–9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeOffsetMoment {
    local_ticks: i64,
    offset: FixedOffset,
}

impl NativeOffsetMoment {
    /// Build a moment from wall-clock ticks and the offset of that wall clock
    /// from UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidState`] if `offset` is not a whole
    /// number of minutes or lies outside ±14 hours, or if the wall clock or
    /// the UTC reading falls outside years 0001–9999.
    pub fn new(local_ticks: i64, offset: TimeSpan) -> Result<Self> {
        let ticks = offset.ticks();
        if ticks % TICKS_PER_MINUTE != 0 {
            return Err(ConvertError::InvalidState(format!(
                "offset of {ticks} ticks is not a whole number of minutes"
            )));
        }
        if ticks.unsigned_abs() > MAX_OFFSET_TICKS.unsigned_abs() {
            return Err(ConvertError::InvalidState(format!(
                "offset of {ticks} ticks is outside ±14 hours"
            )));
        }
        check_moment_range(local_ticks, "wall clock")?;
        check_moment_range(local_ticks - ticks, "UTC reading")?;

        let seconds = (ticks / TICKS_PER_SECOND) as i32;
        let offset = FixedOffset::east_opt(seconds).ok_or_else(|| {
            ConvertError::InvalidState(format!("offset of {seconds}s is not representable"))
        })?;

        Ok(Self {
            local_ticks,
            offset,
        })
    }

    /// Wall-clock ticks since 1970-01-01T00:00:00.
    pub const fn local_ticks(self) -> i64 {
        self.local_ticks
    }

    pub fn offset(self) -> TimeSpan {
        TimeSpan::from_seconds(i64::from(self.offset.local_minus_utc()))
    }

    /// UTC ticks since the Unix epoch.
    pub fn utc_ticks(self) -> i64 {
        self.local_ticks - self.offset().ticks()
    }

    /// The moment at `utc_ticks` seen at `offset_seconds`, truncated toward
    /// zero to whole minutes. Falls back to a zero offset when the truncated
    /// offset is beyond ±14 hours or would move the wall clock out of range.
    ///
    /// `utc_ticks` must lie within [`MIN_MOMENT_TICKS`]..=[`MAX_MOMENT_TICKS`].
    pub(crate) fn from_utc_truncating(utc_ticks: i64, offset_seconds: i32) -> Self {
        debug_assert!((MIN_MOMENT_TICKS..=MAX_MOMENT_TICKS).contains(&utc_ticks));
        let offset = TimeSpan::from_minutes(i64::from(offset_seconds / 60));
        Self::new(utc_ticks + offset.ticks(), offset)
            .or_else(|_| Self::new(utc_ticks, TimeSpan::ZERO))
            .unwrap_or(Self {
                local_ticks: utc_ticks,
                offset: Utc.fix(),
            })
    }

    pub(crate) fn fixed_offset(self) -> FixedOffset {
        self.offset
    }
}

// ── Tick arithmetic ─────────────────────────────────────────────────────────

/// Check a moment's reading against years 0001–9999.
pub(crate) fn check_moment_range(ticks: i64, reading: &str) -> Result<i64> {
    if (MIN_MOMENT_TICKS..=MAX_MOMENT_TICKS).contains(&ticks) {
        Ok(ticks)
    } else {
        Err(ConvertError::InvalidState(format!(
            "{reading} of {ticks} ticks is outside years 0001-9999"
        )))
    }
}

/// UTC ticks of an instant already known to lie within years 0001–9999,
/// flooring sub-tick precision. A leap second folds into the tick before the
/// next second.
pub(crate) fn bounded_instant_ticks(instant: DateTime<Utc>) -> i64 {
    let nanos = i64::from(instant.timestamp_subsec_nanos().min(999_999_999));
    instant.timestamp() * TICKS_PER_SECOND + nanos / NANOS_PER_TICK
}

/// Widen a tick count to a chrono delta. Never overflows: the tick range is a
/// small fraction of `TimeDelta`'s.
pub(crate) fn ticks_to_delta(ticks: i64) -> TimeDelta {
    let seconds = ticks.div_euclid(TICKS_PER_SECOND);
    let sub_ticks = ticks.rem_euclid(TICKS_PER_SECOND);
    TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(sub_ticks * NANOS_PER_TICK)
}

/// Narrow a chrono delta to ticks, flooring sub-tick precision.
pub(crate) fn delta_to_ticks(delta: TimeDelta) -> Result<i64> {
    let nanos = i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos());
    i64::try_from(nanos.div_euclid(i128::from(NANOS_PER_TICK))).map_err(|_| {
        ConvertError::InvalidState(format!("{delta} is outside the native tick range"))
    })
}

/// Wall-clock ticks to a naive date-time. `NaiveDateTime::default()` is the
/// Unix epoch.
pub(crate) fn ticks_to_naive(ticks: i64) -> NaiveDateTime {
    NaiveDateTime::default() + ticks_to_delta(ticks)
}

pub(crate) fn naive_to_ticks(value: NaiveDateTime) -> Result<i64> {
    delta_to_ticks(value - NaiveDateTime::default()).map_err(|_| {
        ConvertError::InvalidState(format!("{value} is outside the native tick range"))
    })
}
