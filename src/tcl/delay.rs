//! Time remaining before a vehicle reaches a stop.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::warn;

/// Layout of `heurepassage` in the TCL feed, e.g. `2022-08-25 08:23:10`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Civil timezone the TCL feed writes its timestamps in.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Delay before a passage, ordered `Departed < Imminent < Minutes(1) < Minutes(2) < ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Delay {
    /// The vehicle has already gone.
    Departed,
    /// Due within the current minute, or the timestamp was unreadable.
    Imminent,
    /// Whole minutes left, always at least one.
    Minutes(u32),
}

impl Delay {
    /// Computes the delay of a passage scheduled at `heurepassage` (civil time
    /// in `tz`) as seen from `now`.
    pub fn until(heurepassage: &str, now: DateTime<Utc>, tz: Tz) -> Self {
        let Ok(naive) = NaiveDateTime::parse_from_str(heurepassage, TIMESTAMP_FORMAT) else {
            return Delay::Imminent;
        };
        let departure = localize(naive, tz);

        if departure < now {
            return Delay::Departed;
        }

        match (departure - now).num_minutes() {
            minutes if minutes <= 0 => Delay::Imminent,
            minutes => Delay::Minutes(u32::try_from(minutes).unwrap_or(u32::MAX)),
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delay::Departed => f.write_str("Passé"),
            Delay::Imminent => f.write_str("Proche"),
            Delay::Minutes(minutes) => write!(f, "{minutes} min"),
        }
    }
}

/// Resolves an IANA zone name, falling back to UTC when it is unknown.
pub fn resolve_timezone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(err) => {
            warn!(timezone = name, error = %err, "Unknown timezone, using UTC");
            chrono_tz::UTC
        }
    }
}

/// Pins a civil time to an instant. Ambiguous times take the earlier
/// instant; times inside a DST gap use the offset in force before the gap.
fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(time) | LocalResult::Ambiguous(time, _) => time.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz
                .offset_from_local_datetime(&(naive - TimeDelta::hours(1)))
                .earliest()
                .map(|offset| offset.fix().local_minus_utc())
                .unwrap_or(0);
            (naive - TimeDelta::seconds(i64::from(offset))).and_utc()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Paris;

    fn paris(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Paris
            .with_ymd_and_hms(2022, 8, 25, h, m, s)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn stamp(time: DateTime<Utc>) -> String {
        time.with_timezone(&Paris).format(TIMESTAMP_FORMAT).to_string()
    }

    #[test]
    fn test_future_passage_counts_minutes() {
        let delay = Delay::until("2022-08-25 08:23:10", paris(8, 0, 0), Paris);
        assert_eq!(delay, Delay::Minutes(23));
        assert_eq!(delay.to_string(), "23 min");
    }

    #[test]
    fn test_past_passage_is_departed() {
        let delay = Delay::until("2022-08-25 08:23:10", paris(9, 0, 0), Paris);
        assert_eq!(delay, Delay::Departed);
        assert_eq!(delay.to_string(), "Passé");
    }

    #[test]
    fn test_passage_at_now_is_imminent() {
        let now = paris(8, 23, 10);
        assert_eq!(Delay::until("2022-08-25 08:23:10", now, Paris), Delay::Imminent);
    }

    #[test]
    fn test_sub_minute_passage_is_imminent() {
        let now = paris(8, 23, 10);
        assert_eq!(Delay::until("2022-08-25 08:24:09", now, Paris), Delay::Imminent);
        assert_eq!(Delay::until("2022-08-25 08:24:10", now, Paris), Delay::Minutes(1));
    }

    #[test]
    fn test_unparseable_timestamp_is_imminent() {
        let now = paris(8, 0, 0);
        assert_eq!(Delay::until("", now, Paris), Delay::Imminent);
        assert_eq!(Delay::until("25/08/2022 08:23", now, Paris), Delay::Imminent);
        assert_eq!(Delay::Imminent.to_string(), "Proche");
    }

    #[test]
    fn test_timestamp_is_read_in_the_given_timezone() {
        // 08:23:10 in Paris is 06:23:10 UTC
        let now = Utc.with_ymd_and_hms(2022, 8, 25, 7, 0, 0).unwrap();
        assert_eq!(Delay::until("2022-08-25 08:23:10", now, Paris), Delay::Departed);
        assert_eq!(
            Delay::until("2022-08-25 08:23:10", now, chrono_tz::UTC),
            Delay::Minutes(83)
        );
    }

    #[test]
    fn test_sorted_delays_render_in_order() {
        let now = paris(8, 0, 0);
        let offsets = [
            TimeDelta::minutes(12),
            TimeDelta::seconds(30),
            TimeDelta::minutes(-10),
            TimeDelta::zero(),
        ];
        let mut delays: Vec<Delay> = offsets
            .iter()
            .map(|offset| Delay::until(&stamp(now + *offset), now, Paris))
            .collect();
        delays.sort();

        let labels: Vec<String> = delays.iter().map(Delay::to_string).collect();
        assert_eq!(labels, vec!["Passé", "Proche", "Proche", "12 min"]);
    }

    #[test]
    fn test_ordering_of_variants() {
        assert!(Delay::Departed < Delay::Imminent);
        assert!(Delay::Imminent < Delay::Minutes(1));
        assert!(Delay::Minutes(2) < Delay::Minutes(10));
    }

    #[test]
    fn test_resolve_timezone_falls_back_to_utc() {
        assert_eq!(resolve_timezone(DEFAULT_TIMEZONE), Paris);
        assert_eq!(resolve_timezone("Mars/Olympus_Mons"), chrono_tz::UTC);
    }

    #[test]
    fn test_time_in_dst_gap_does_not_panic() {
        // 2022-03-27 02:30 does not exist in Paris
        let now = Paris
            .with_ymd_and_hms(2022, 3, 27, 1, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            Delay::until("2022-03-27 02:30:00", now, Paris),
            Delay::Minutes(90)
        );
    }
}
