//! The two-field wire shape of a zoned date-time.
//!
//! ```json
//! { "OffsetDateTime": "2024-01-01T00:00:00+00:00", "Zone": "UTC" }
//! ```
//!
//! `OffsetDateTime` is an RFC 3339 string; `Zone` is the zone identifier as
//! stored. Decoding the record only checks its shape. Resolving the zone is
//! [`ZoneResolver::to_zoned_date_time`](crate::zone::ZoneResolver)'s job.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::calendar::ZonedDateTime;
use crate::convert::{resolve_offset_date_time, resolve_zoned_date_time, to_offset_date_time};
use crate::error::{ConvertError, Result};
use crate::native::NativeOffsetMoment;

/// A zoned date-time as stored: the local offset moment plus the zone id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonedRecord {
    #[serde(rename = "OffsetDateTime")]
    pub offset_date_time: NativeOffsetMoment,
    #[serde(rename = "Zone")]
    pub zone: String,
}

impl ZonedRecord {
    /// Decode a record from a generic JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedData`] if `value` is not an object, a
    /// field is missing, or a field has the wrong type or format.
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ConvertError::MalformedData(format!(
                "zoned record must be an object, got {value}"
            )));
        }
        ZonedRecord::deserialize(value)
            .map_err(|e| ConvertError::MalformedData(format!("zoned record: {e}")))
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "OffsetDateTime": self.offset_date_time.to_string(),
            "Zone": self.zone,
        })
    }
}

/// Encode a zoned value as a generic JSON object.
pub fn zoned_to_json(value: &ZonedDateTime) -> Value {
    resolve_zoned_date_time(value).to_json()
}

// ── Offset moment text form ─────────────────────────────────────────────────

impl fmt::Display for NativeOffsetMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = to_offset_date_time(*self).to_rfc3339_opts(SecondsFormat::AutoSi, false);
        f.write_str(&text)
    }
}

impl FromStr for NativeOffsetMoment {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|e| ConvertError::MalformedData(format!("'{s}': {e}")))?;
        resolve_offset_date_time(parsed)
    }
}

impl Serialize for NativeOffsetMoment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NativeOffsetMoment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
