//! Round-trip properties of the lift/resolve pairs.

use proptest::prelude::*;
use temporal_field::native::{
    MAX_MOMENT_TICKS, MIN_MOMENT_TICKS, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};
use temporal_field::{
    resolve_duration, resolve_instant, resolve_local_date, resolve_local_date_time,
    resolve_local_time, resolve_offset, resolve_offset_date_time, resolve_zoned_date_time,
    to_duration, to_instant, to_local_date, to_local_date_time, to_local_time, to_offset,
    to_offset_date_time, to_zoned_date_time, zoned_to_json, ConvertError, FallbackPolicy,
    HostZoneProvider, MomentKind, NativeInstant, NativeLocalMoment, NativeOffsetMoment,
    ResolverOptions, TimeSpan, ZoneResolver, ZonedRecord,
};

/// Wall-clock readings that stay within years 0001–9999 at any offset.
const MOMENT_TICKS: std::ops::RangeInclusive<i64> =
    MIN_MOMENT_TICKS + 14 * TICKS_PER_HOUR..=MAX_MOMENT_TICKS - 14 * TICKS_PER_HOUR;

/// 0001-01-02 .. 1900-01-01, when most zones kept local mean time.
const LMT_TICKS: std::ops::Range<i64> =
    MIN_MOMENT_TICKS + TICKS_PER_DAY..-2_208_988_800 * TICKS_PER_SECOND;

const ZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/St_Johns",
    "Europe/London",
    "Europe/Paris",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Australia/Lord_Howe",
    "Pacific/Chatham",
    "Asia/Manila",
];

fn offset_moment(ticks: i64, offset_minutes: i64) -> NativeOffsetMoment {
    NativeOffsetMoment::new(ticks, TimeSpan::from_minutes(offset_minutes)).unwrap()
}

proptest! {
    #[test]
    fn instant_round_trips(ticks in any::<i64>()) {
        let native = NativeInstant::from_ticks(ticks);
        prop_assert_eq!(resolve_instant(to_instant(native)).unwrap(), native);
    }

    #[test]
    fn unspecified_local_moment_round_trips(ticks in any::<i64>()) {
        let native = NativeLocalMoment::unspecified(ticks);
        let local = to_local_date_time(native).unwrap();
        prop_assert_eq!(resolve_local_date_time(local).unwrap(), native);
    }

    #[test]
    fn tagged_local_moment_is_rejected(
        ticks in any::<i64>(),
        kind in prop_oneof![Just(MomentKind::Utc), Just(MomentKind::Local)],
    ) {
        let native = NativeLocalMoment::new(ticks, kind);
        prop_assert!(matches!(to_local_date_time(native), Err(ConvertError::InvalidState(_))));
        prop_assert!(matches!(to_local_date(native), Err(ConvertError::InvalidState(_))));
    }

    #[test]
    fn local_date_is_midnight_of_moment(ticks in i64::MIN / 2..i64::MAX / 2) {
        let date = to_local_date(NativeLocalMoment::unspecified(ticks)).unwrap();
        let midnight = resolve_local_date(date).unwrap();
        prop_assert_eq!(midnight.ticks(), ticks.div_euclid(TICKS_PER_DAY) * TICKS_PER_DAY);
    }

    #[test]
    fn time_of_day_round_trips(ticks in 0..TICKS_PER_DAY) {
        let span = TimeSpan::from_ticks(ticks);
        prop_assert_eq!(resolve_local_time(to_local_time(span).unwrap()), span);
    }

    #[test]
    fn time_of_day_out_of_range_is_rejected(
        ticks in prop_oneof![i64::MIN..0, TICKS_PER_DAY..=i64::MAX],
    ) {
        let result = to_local_time(TimeSpan::from_ticks(ticks));
        prop_assert!(matches!(result, Err(ConvertError::InvalidState(_))));
    }

    #[test]
    fn duration_round_trips(ticks in any::<i64>()) {
        let span = TimeSpan::from_ticks(ticks);
        prop_assert_eq!(resolve_duration(to_duration(span)).unwrap(), span);
    }

    #[test]
    fn offset_round_trips(ticks in any::<i64>()) {
        let span = TimeSpan::from_ticks(ticks);
        prop_assert_eq!(resolve_offset(to_offset(span)).unwrap(), span);
    }

    #[test]
    fn offset_moment_round_trips(ticks in MOMENT_TICKS, minutes in -840i64..=840) {
        let native = offset_moment(ticks, minutes);
        prop_assert_eq!(resolve_offset_date_time(to_offset_date_time(native)).unwrap(), native);
    }

    #[test]
    fn offset_moment_text_round_trips(ticks in MOMENT_TICKS, minutes in -840i64..=840) {
        let native = offset_moment(ticks, minutes);
        prop_assert_eq!(native.to_string().parse::<NativeOffsetMoment>().unwrap(), native);
    }

    #[test]
    fn zoned_record_round_trips(
        ticks in MOMENT_TICKS,
        minutes in -840i64..=840,
        zone in proptest::sample::select(ZONES),
    ) {
        let record = ZonedRecord {
            offset_date_time: offset_moment(ticks, minutes),
            zone: zone.to_string(),
        };
        let back = resolve_zoned_date_time(&to_zoned_date_time(&record).unwrap());
        prop_assert_eq!(&back.zone, &record.zone);
        prop_assert_eq!(
            to_offset_date_time(back.offset_date_time),
            to_offset_date_time(record.offset_date_time)
        );
    }

    #[test]
    fn zoned_json_round_trips(
        ticks in MOMENT_TICKS,
        zone in proptest::sample::select(ZONES),
    ) {
        let resolver = ZoneResolver::new();
        let record = ZonedRecord {
            offset_date_time: offset_moment(ticks - ticks % TICKS_PER_MINUTE, 0),
            zone: zone.to_string(),
        };
        let zoned = resolver.zoned_from_json(&record.to_json()).unwrap();
        let again = resolver.zoned_from_json(&zoned_to_json(&zoned)).unwrap();
        prop_assert_eq!(again, zoned);
    }

    #[test]
    fn lmt_zoned_record_keeps_instant(
        ticks in LMT_TICKS,
        zone in proptest::sample::select(ZONES),
    ) {
        let record = ZonedRecord {
            offset_date_time: offset_moment(ticks, 0),
            zone: zone.to_string(),
        };
        let zoned = to_zoned_date_time(&record).unwrap();
        let back = resolve_zoned_date_time(&zoned);
        prop_assert_eq!(back.offset_date_time.utc_ticks(), ticks);
        prop_assert_eq!(back.offset_date_time.offset().ticks() % TICKS_PER_MINUTE, 0);
        let text = zoned_to_json(&zoned)["OffsetDateTime"].as_str().unwrap().to_owned();
        prop_assert_eq!(text.parse::<NativeOffsetMoment>().unwrap(), back.offset_date_time);
    }
}

#[test]
fn utc_new_year_record_matches_native_instant() {
    let value = serde_json::json!({
        "OffsetDateTime": "2024-01-01T00:00:00+00:00",
        "Zone": "UTC",
    });
    let zoned = ZoneResolver::new().zoned_from_json(&value).unwrap();
    assert_eq!(
        resolve_instant(zoned.instant()).unwrap(),
        NativeInstant::from_unix_seconds(1_704_067_200)
    );
}

#[test]
fn unknown_zone_is_malformed() {
    let value = serde_json::json!({
        "OffsetDateTime": "2024-01-01T00:00:00+00:00",
        "Zone": "Not/AZone",
    });
    let err = ZoneResolver::new().zoned_from_json(&value).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedData(_)), "got: {err}");
}

#[test]
fn host_zone_depends_on_fallback_policy() {
    let value = serde_json::json!({
        "OffsetDateTime": "2024-01-01T00:00:00+00:00",
        "Zone": "India Standard Time",
    });

    let discarding = ZoneResolver::new();
    assert!(matches!(
        discarding.zoned_from_json(&value),
        Err(ConvertError::MalformedData(_))
    ));

    let accepting = ZoneResolver::new().with_options(ResolverOptions {
        fallback: FallbackPolicy::Accept,
    });
    let zoned = accepting.zoned_from_json(&value).unwrap();
    assert_eq!(zoned.offset_date_time().to_rfc3339(), "2024-01-01T05:30:00+05:30");
    assert_eq!(zoned.zone().id(), "India Standard Time");
}

#[test]
fn every_host_zone_resolves_when_accepted() {
    let resolver = ZoneResolver::new().with_options(ResolverOptions {
        fallback: FallbackPolicy::Accept,
    });
    for id in HostZoneProvider::ids() {
        assert_eq!(resolver.resolve_zone(id).unwrap().id(), id);
    }
}
