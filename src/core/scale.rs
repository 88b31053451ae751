use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

const TICK_E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const TICK_E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const TICK_E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a value domain to a pixel range.
///
/// The range may run "backwards" (`range_start > range_end`), which is how
/// vertical value axes put larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Fixed `[0, 100]` domain used by percentage charts.
    pub fn percentage(range: (f64, f64)) -> ChartResult<Self> {
        Self::new((0.0, 100.0), range)
    }

    /// Builds the domain from the min/max of `values`.
    pub fn from_extent<I>(values: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "scale extent values must be finite".to_owned(),
                ));
            }
            min = min.min(value);
            max = max.max(value);
        }
        if min > max {
            return Err(ChartError::InvalidData(
                "scale cannot be built from empty data".to_owned(),
            ));
        }
        trace!(min, max, "linear scale extent");
        Self::new((min, max), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a scale with an empty range".to_owned(),
            ));
        }
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round tick values (multiples of 1, 2 or 5 times a power of ten)
    /// covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let reversed = self.domain_end < self.domain_start;
        let (min, max) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };
        let mut ticks = nice_ticks(min, max, count);
        if reversed {
            ticks.reverse();
        }
        ticks
    }
}

fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || min == max {
        return vec![min];
    }

    let step = (max - min) / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= TICK_E10 {
        10.0
    } else if error >= TICK_E5 {
        5.0
    } else if error >= TICK_E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        // Work with the inverse increment so fractional steps stay exact.
        let inverse = 10_f64.powf(-power) / factor;
        let mut first = (min * inverse).round();
        let mut last = (max * inverse).round();
        if first / inverse < min {
            first += 1.0;
        }
        if last / inverse > max {
            last -= 1.0;
        }
        steps_between(first, last).map(|i| i / inverse).collect()
    } else {
        let increment = 10_f64.powf(power) * factor;
        let mut first = (min / increment).round();
        let mut last = (max / increment).round();
        if first * increment < min {
            first += 1.0;
        }
        if last * increment > max {
            last -= 1.0;
        }
        steps_between(first, last).map(|i| i * increment).collect()
    }
}

fn steps_between(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let count = if last >= first {
        (last - first) as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| first + i as f64)
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn inverted_range_puts_larger_values_higher() {
        let scale = LinearScale::percentage((155.0, 30.0)).expect("scale");
        assert_eq!(scale.position(0.0), 155.0);
        assert_eq!(scale.position(100.0), 30.0);
        assert!(scale.position(80.0) < scale.position(20.0));
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new((3.0, 3.0), (0.0, 10.0)).is_err());
        assert!(LinearScale::new((0.0, f64::NAN), (0.0, 10.0)).is_err());
    }

    #[test]
    fn percentage_ticks_use_steps_of_twenty() {
        let scale = LinearScale::percentage((100.0, 0.0)).expect("scale");
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn fractional_ticks_avoid_float_drift() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn empty_extent_is_rejected() {
        assert!(LinearScale::from_extent(Vec::new(), (0.0, 1.0)).is_err());
    }
}
