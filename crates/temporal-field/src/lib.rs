//! # temporal-field
//!
//! Lossless conversion between tick-based native date/time values and the
//! `chrono` / `chrono-tz` calendar types, plus the two-field record format
//! used to store a zoned date-time.
//!
//! Conversions come in two families:
//!
//! - **lift** (`to_*`): native value → calendar value, checking the
//!   native value's preconditions;
//! - **resolve** (`resolve_*`): calendar value → native value.
//!
//! ## Modules
//!
//! - [`native`] — Tick-based instants, local moments, offset moments and spans
//! - [`calendar`] — `UtcOffset`, `Zone` and `ZonedDateTime`
//! - [`convert`] — The lift and resolve functions
//! - [`zone`] — Zone databases and the primary/fallback resolver
//! - [`record`] — The `{ OffsetDateTime, Zone }` record and its JSON form
//! - [`error`] — Error types

pub mod calendar;
pub mod convert;
pub mod error;
pub mod native;
pub mod record;
pub mod zone;

pub use calendar::{UtcOffset, Zone, ZonedDateTime};
pub use convert::{
    resolve_duration, resolve_instant, resolve_local_date, resolve_local_date_time,
    resolve_local_time, resolve_offset, resolve_offset_date_time, resolve_zoned_date_time,
    to_duration, to_instant, to_local_date, to_local_date_time, to_local_time, to_offset,
    to_offset_date_time, to_zoned_date_time,
};
pub use error::{ConvertError, Result};
pub use native::{MomentKind, NativeInstant, NativeLocalMoment, NativeOffsetMoment, TimeSpan};
pub use record::{zoned_to_json, ZonedRecord};
pub use zone::{
    FallbackPolicy, HostZoneProvider, ResolverOptions, TzdbProvider, ZoneProvider, ZoneResolver,
};
