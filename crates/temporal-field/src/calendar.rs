//! Calendar-side values that chrono does not model directly.
//!
//! Instants, local values, durations and offset date-times map onto chrono's
//! own types. Two things need a wrapper:
//!
//! - [`UtcOffset`]: chrono's `FixedOffset` is limited to whole seconds under
//!   24 hours, but any signed span is a valid offset here.
//! - [`ZonedDateTime`]: the zone keeps the identifier it was requested with,
//!   which may be a host-platform alias rather than the IANA name of its rules.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::native::{check_moment_range, naive_to_ticks};

// ── UtcOffset ───────────────────────────────────────────────────────────────

/// A signed offset from UTC of arbitrary magnitude and precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(TimeDelta);

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset(TimeDelta::zero());

    pub const fn from_delta(delta: TimeDelta) -> Self {
        Self(delta)
    }

    pub fn from_fixed(offset: FixedOffset) -> Self {
        Self(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
    }

    pub const fn as_delta(&self) -> TimeDelta {
        self.0
    }

    /// The equivalent `FixedOffset`, if the offset is a whole number of
    /// seconds strictly within ±24 hours.
    pub fn to_fixed(&self) -> Option<FixedOffset> {
        if self.0.subsec_nanos() != 0 {
            return None;
        }
        let seconds = i32::try_from(self.0.num_seconds()).ok()?;
        FixedOffset::east_opt(seconds)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fixed() {
            Some(fixed) => write!(f, "{fixed}"),
            None => write!(f, "{}", self.0),
        }
    }
}

// ── Zone ────────────────────────────────────────────────────────────────────

/// A named time zone: the identifier as requested plus the rules it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    id: String,
    tz: Tz,
}

impl Zone {
    pub fn new(id: impl Into<String>, tz: Tz) -> Self {
        Self { id: id.into(), tz }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

// ── ZonedDateTime ───────────────────────────────────────────────────────────

/// An instant observed in a named time zone.
///
/// The local fields and offset are derived from the zone's rules on demand.
/// The instant lies within years 0001–9999 UTC, the range a stored record can
/// express.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    instant: DateTime<Utc>,
    zone: Zone,
}

impl ZonedDateTime {
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidState`](crate::ConvertError::InvalidState)
    /// if the instant falls outside years 0001–9999 UTC.
    pub fn new(instant: DateTime<Utc>, zone: Zone) -> Result<Self> {
        check_moment_range(naive_to_ticks(instant.naive_utc())?, "instant")?;
        Ok(Self { instant, zone })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The instant in the zone's local time.
    pub fn local(&self) -> DateTime<Tz> {
        self.instant.with_timezone(&self.zone.tz)
    }

    /// The offset the zone observes at this instant.
    pub fn offset(&self) -> FixedOffset {
        self.offset_date_time().timezone()
    }

    pub fn offset_date_time(&self) -> DateTime<FixedOffset> {
        self.local().fixed_offset()
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.offset_date_time().to_rfc3339(), self.zone)
    }
}
