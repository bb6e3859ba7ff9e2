//! Time-zone databases and identifier resolution.
//!
//! A zone identifier is looked up in two ordered databases:
//!
//! 1. the primary [`TzdbProvider`], which knows IANA names (`"Europe/Paris"`,
//!    `"UTC"`) through `chrono-tz`;
//! 2. the fallback [`HostZoneProvider`], which knows the host platform's own
//!    zone names (`"Romance Standard Time"`) and maps them onto IANA rules.
//!
//! Whether a fallback hit actually resolves the zone is governed by
//! [`FallbackPolicy`]. The default, [`FallbackPolicy::Discard`], consults the
//! fallback but still reports the identifier as unrecognized.

use std::str::FromStr;

use chrono_tz::Tz;
use log::{debug, warn};

use crate::calendar::Zone;
use crate::error::{ConvertError, Result};

/// A read-only registry of zone identifiers.
pub trait ZoneProvider: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// The zone registered under `id`, if any.
    fn get_zone_or_none(&self, id: &str) -> Option<Zone>;
}

impl<P: ZoneProvider + ?Sized> ZoneProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get_zone_or_none(&self, id: &str) -> Option<Zone> {
        (**self).get_zone_or_none(id)
    }
}

// ── TzdbProvider ────────────────────────────────────────────────────────────

/// The IANA time zone database compiled into `chrono-tz`.
///
/// Lookups are case-sensitive, like the database itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdbProvider;

impl ZoneProvider for TzdbProvider {
    fn name(&self) -> &str {
        "tzdb"
    }

    fn get_zone_or_none(&self, id: &str) -> Option<Zone> {
        Tz::from_str(id).ok().map(|tz| Zone::new(id, tz))
    }
}

// ── HostZoneProvider ────────────────────────────────────────────────────────

/// Host-platform zone names and the IANA zone each one follows.
///
/// Taken from the CLDR `windowsZones` mapping, default territory.
static HOST_ZONES: &[(&str, Tz)] = &[
    ("Dateline Standard Time", Tz::Etc__GMTPlus12),
    ("Hawaiian Standard Time", Tz::Pacific__Honolulu),
    ("Alaskan Standard Time", Tz::America__Anchorage),
    ("Pacific Standard Time", Tz::America__Los_Angeles),
    ("US Mountain Standard Time", Tz::America__Phoenix),
    ("Mountain Standard Time", Tz::America__Denver),
    ("Central Standard Time", Tz::America__Chicago),
    ("Eastern Standard Time", Tz::America__New_York),
    ("Atlantic Standard Time", Tz::America__Halifax),
    ("Newfoundland Standard Time", Tz::America__St_Johns),
    ("E. South America Standard Time", Tz::America__Sao_Paulo),
    ("Argentina Standard Time", Tz::America__Argentina__Buenos_Aires),
    ("UTC", Tz::Etc__UTC),
    ("GMT Standard Time", Tz::Europe__London),
    ("Greenwich Standard Time", Tz::Atlantic__Reykjavik),
    ("W. Europe Standard Time", Tz::Europe__Berlin),
    ("Central Europe Standard Time", Tz::Europe__Budapest),
    ("Romance Standard Time", Tz::Europe__Paris),
    ("Central European Standard Time", Tz::Europe__Warsaw),
    ("GTB Standard Time", Tz::Europe__Bucharest),
    ("FLE Standard Time", Tz::Europe__Kyiv),
    ("E. Europe Standard Time", Tz::Europe__Chisinau),
    ("Turkey Standard Time", Tz::Europe__Istanbul),
    ("Israel Standard Time", Tz::Asia__Jerusalem),
    ("Egypt Standard Time", Tz::Africa__Cairo),
    ("South Africa Standard Time", Tz::Africa__Johannesburg),
    ("Russian Standard Time", Tz::Europe__Moscow),
    ("Arabian Standard Time", Tz::Asia__Dubai),
    ("India Standard Time", Tz::Asia__Kolkata),
    ("SE Asia Standard Time", Tz::Asia__Bangkok),
    ("Singapore Standard Time", Tz::Asia__Singapore),
    ("China Standard Time", Tz::Asia__Shanghai),
    ("Tokyo Standard Time", Tz::Asia__Tokyo),
    ("Korea Standard Time", Tz::Asia__Seoul),
    ("AUS Eastern Standard Time", Tz::Australia__Sydney),
    ("New Zealand Standard Time", Tz::Pacific__Auckland),
];

/// The host platform's zone names.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostZoneProvider;

impl HostZoneProvider {
    /// Every identifier this provider recognizes.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        HOST_ZONES.iter().map(|(id, _)| *id)
    }
}

impl ZoneProvider for HostZoneProvider {
    fn name(&self) -> &str {
        "host"
    }

    fn get_zone_or_none(&self, id: &str) -> Option<Zone> {
        HOST_ZONES
            .iter()
            .find(|(host_id, _)| *host_id == id)
            .map(|(_, tz)| Zone::new(id, *tz))
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// What to do with a zone found only in the fallback database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Consult the fallback and log a hit, but treat the identifier as
    /// unrecognized.
    #[default]
    Discard,
    /// Resolve the zone from the fallback database.
    Accept,
}

/// Options for [`ZoneResolver::with_options`].
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    pub fallback: FallbackPolicy,
}

// ── ZoneResolver ────────────────────────────────────────────────────────────

/// Resolves zone identifiers against a primary and a fallback database.
#[derive(Debug, Clone, Default)]
pub struct ZoneResolver<P = TzdbProvider, F = HostZoneProvider> {
    primary: P,
    fallback: F,
    options: ResolverOptions,
}

impl ZoneResolver {
    /// The IANA database backed by the host database, with default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ZoneProvider, F: ZoneProvider> ZoneResolver<P, F> {
    pub fn with_providers(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Look `id` up in the primary database, then the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedData`] if the identifier is not
    /// resolved. Under [`FallbackPolicy::Discard`] that includes identifiers
    /// only the fallback database knows.
    pub fn resolve_zone(&self, id: &str) -> Result<Zone> {
        if let Some(zone) = self.primary.get_zone_or_none(id) {
            return Ok(zone);
        }
        debug!("zone '{id}' not found in {} database", self.primary.name());

        match (self.fallback.get_zone_or_none(id), self.options.fallback) {
            (Some(zone), FallbackPolicy::Accept) => Ok(zone),
            (Some(zone), FallbackPolicy::Discard) => {
                warn!(
                    "zone '{id}' found in {} database as {}, ignored by fallback policy",
                    self.fallback.name(),
                    zone.tz().name()
                );
                Err(unrecognized(id))
            }
            (None, _) => {
                debug!("zone '{id}' not found in {} database", self.fallback.name());
                Err(unrecognized(id))
            }
        }
    }
}

fn unrecognized(id: &str) -> ConvertError {
    ConvertError::MalformedData(format!("Unrecognized Time Zone '{id}'"))
}
