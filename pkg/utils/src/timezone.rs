//! UTC compatibility of guest timezone names.
//!
//! A timezone is UTC compatible when its offset is zero and it never observes
//! daylight saving time. The tz database only answers "what is the offset at
//! instant t", so the decision is made by walking the evaluation window and
//! checking the offset at every step.

use chrono::DateTime;
use chrono::TimeZone;
use chrono_tz::{OffsetComponents, Tz};
use tracing::debug;

/// Names that always mean UTC but are not IANA identifiers.
/// Windows reports these as the display name of its GMT zones.
const FIXED_UTC_ALIASES: &[&str] = &[
    "GMT Standard Time",
    "Greenwich Standard Time",
    "Coordinated Universal Time",
];

/// Start of the evaluation window (Unix epoch). Local mean time offsets from
/// the 19th and early 20th century are ignored.
const WINDOW_START_SECS: i64 = 0;

/// End of the evaluation window: 2100-01-01T00:00:00Z.
const WINDOW_END_SECS: i64 = 4_102_444_800;

/// Sampling step. Shorter than any DST period or Ramadan suspension.
const STEP_SECS: usize = 86_400;

/// Returns true if `name` denotes a timezone that is UTC for all time.
///
/// An empty name means "unset" and is treated as UTC. Names the tz database
/// does not know are never compatible.
pub fn is_utc_compatible(name: &str) -> bool {
    if name.is_empty() || FIXED_UTC_ALIASES.contains(&name) {
        return true;
    }

    let tz: Tz = match name.parse() {
        Ok(tz) => tz,
        Err(_) => {
            debug!("Unknown timezone '{}', treating as not UTC compatible", name);
            return false;
        }
    };

    always_zero_offset(tz)
}

fn always_zero_offset(tz: Tz) -> bool {
    for secs in (WINDOW_START_SECS..WINDOW_END_SECS).step_by(STEP_SECS) {
        let Some(instant) = DateTime::from_timestamp(secs, 0) else {
            return false;
        };
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        if !offset.base_utc_offset().is_zero() || !offset.dst_offset().is_zero() {
            debug!(
                "Timezone {} is not UTC at {} (base {}s, dst {}s)",
                tz.name(),
                instant,
                offset.base_utc_offset().num_seconds(),
                offset.dst_offset().num_seconds()
            );
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_utc() {
        assert!(is_utc_compatible(""));
    }

    #[test]
    fn fixed_zero_zones_are_compatible() {
        for name in [
            "UTC",
            "Etc/UTC",
            "GMT",
            "GMT0",
            "GMT+0",
            "Etc/GMT",
            "Etc/UCT",
            "Etc/Zulu",
            "Etc/Greenwich",
            "Greenwich",
            "GMT Standard Time",
            "Greenwich Standard Time",
        ] {
            assert!(is_utc_compatible(name), "{name} should be UTC compatible");
        }
    }

    #[test]
    fn geographic_zone_without_dst_is_compatible() {
        assert!(is_utc_compatible("Africa/Abidjan"));
    }

    #[test]
    fn non_zero_offsets_are_not_compatible() {
        for name in ["Etc/GMT+1", "Etc/GMT-14", "Australia/Yancowinna", "Asia/Kolkata"] {
            assert!(!is_utc_compatible(name), "{name} should not be UTC compatible");
        }
    }

    #[test]
    fn zones_with_dst_are_not_compatible() {
        for name in [
            "Europe/London",
            "America/Scoresbysund",
            "Antarctica/Troll",
            "Africa/El_Aaiun",
            "Atlantic/Madeira",
            "Europe/Belfast",
        ] {
            assert!(!is_utc_compatible(name), "{name} should not be UTC compatible");
        }
    }

    #[test]
    fn unknown_names_are_not_compatible() {
        for name in ["Foo/Bar", "FooBar", "FooBar+0", "utc ", "GMT+00:00"] {
            assert!(!is_utc_compatible(name), "{name} should not be UTC compatible");
        }
    }
}
