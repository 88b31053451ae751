use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DatePoint, LinearScale};
use crate::error::{ChartError, ChartResult};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Maps instants to horizontal pixel positions.
///
/// Internally a [`LinearScale`] over Unix milliseconds, so positions are
/// proportional to elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range: (f64, f64)) -> ChartResult<Self> {
        if start == end {
            return Err(ChartError::InvalidData(
                "time scale domain must span a non-zero duration".to_owned(),
            ));
        }
        let linear = LinearScale::new(
            (
                start.timestamp_millis() as f64,
                end.timestamp_millis() as f64,
            ),
            range,
        )?;
        Ok(Self { start, end, linear })
    }

    /// Domain is the `[earliest, latest]` date found in `points`.
    pub fn from_extent(points: &[DatePoint], range: (f64, f64)) -> ChartResult<Self> {
        let start = points.iter().map(|point| point.date).min();
        let end = points.iter().map(|point| point.date).max();
        let (Some(start), Some(end)) = (start, end) else {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        };
        trace!(%start, %end, "time scale extent");
        Self::new(start, end, range)
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn position(self, date: DateTime<Utc>) -> f64 {
        self.linear.position(date.timestamp_millis() as f64)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        let millis = self.linear.invert(pixel)?.round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return Err(ChartError::InvalidData(
                "inverted time is out of range".to_owned(),
            ));
        }
        DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or_else(|| {
            ChartError::InvalidData("inverted time is not representable".to_owned())
        })
    }

    /// About `count` midnight-aligned dates spaced by whole days, all inside
    /// the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<DateTime<Utc>> {
        let (min, max) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };

        let span_days = (max - min).num_milliseconds() as f64 / MILLIS_PER_DAY as f64;
        let step_days = (span_days / count.max(1) as f64).round().max(1.0) as i64;

        let mut cursor = min.date_naive().and_time(NaiveTime::MIN).and_utc();
        if cursor < min {
            match cursor.checked_add_signed(Duration::days(1)) {
                Some(next) => cursor = next,
                None => return Vec::new(),
            }
        }

        let mut ticks = Vec::new();
        while cursor <= max {
            ticks.push(cursor);
            match cursor.checked_add_signed(Duration::days(step_days)) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        if self.start > self.end {
            ticks.reverse();
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::TimeScale;
    use crate::core::DatePoint;

    #[test]
    fn extent_maps_first_and_last_dates_to_range_ends() {
        let first = Utc.with_ymd_and_hms(2020, 3, 1, 4, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(2021, 2, 1, 4, 0, 0).unwrap();
        let points = vec![
            DatePoint::new(last, 20.0),
            DatePoint::new(first, 38.0),
            DatePoint::new(Utc.with_ymd_and_hms(2020, 8, 1, 3, 0, 0).unwrap(), 20.0),
        ];
        let scale = TimeScale::from_extent(&points, (0.0, 190.0)).expect("scale");

        assert_eq!(scale.domain(), (first, last));
        assert_eq!(scale.position(first), 0.0);
        assert_eq!(scale.position(last), 190.0);
    }

    #[test]
    fn ticks_are_midnight_aligned_and_inside_domain() {
        let start = Utc.with_ymd_and_hms(2020, 10, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 10, 29, 0, 0, 0).unwrap();
        let scale = TimeScale::new(start, end, (0.0, 280.0)).expect("scale");

        let ticks = scale.ticks(4);
        assert_eq!(ticks[0], Utc.with_ymd_and_hms(2020, 10, 2, 0, 0, 0).unwrap());
        assert!(ticks.iter().all(|tick| *tick >= start && *tick <= end));
        assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0]).num_days() == 7));
    }

    #[test]
    fn ticks_stop_at_last_supported_date() {
        let end = DateTime::<Utc>::MAX_UTC;
        let start = end - Duration::days(20);
        let scale = TimeScale::new(start, end, (0.0, 100.0)).expect("scale");

        let ticks = scale.ticks(2);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|tick| *tick >= start && *tick <= end));
    }

    #[test]
    fn empty_extent_is_rejected() {
        assert!(TimeScale::from_extent(&[], (0.0, 1.0)).is_err());
    }
}
