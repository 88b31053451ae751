use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fraction of a step left empty between (and around) bands.
pub const DEFAULT_BAND_PADDING: f64 = 0.25;

/// Padding, alignment and rounding for a [`BandScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScaleOptions {
    pub padding_inner: f64,
    pub padding_outer: f64,
    /// Where leftover space goes: 0 = before the first band, 1 = after the last.
    pub align: f64,
    /// Snap band starts and widths to whole pixels.
    pub round: bool,
}

impl Default for BandScaleOptions {
    fn default() -> Self {
        Self {
            padding_inner: DEFAULT_BAND_PADDING,
            padding_outer: DEFAULT_BAND_PADDING,
            align: 0.5,
            round: false,
        }
    }
}

impl BandScaleOptions {
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.padding_inner.is_finite() || !(0.0..=1.0).contains(&self.padding_inner) {
            return Err(ChartError::InvalidData(
                "band inner padding must be in [0, 1]".to_owned(),
            ));
        }
        if !self.padding_outer.is_finite() || self.padding_outer < 0.0 {
            return Err(ChartError::InvalidData(
                "band outer padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.align.is_finite() || !(0.0..=1.0).contains(&self.align) {
            return Err(ChartError::InvalidData(
                "band align must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Categorical scale giving each key an equal-width slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    keys: IndexSet<String>,
    range: (f64, f64),
    first_start: f64,
    step: f64,
    bandwidth: f64,
    reversed: bool,
}

impl BandScale {
    pub fn new<I, K>(keys: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_options(keys, range, BandScaleOptions::default())
    }

    pub fn with_options<I, K>(
        keys: I,
        range: (f64, f64),
        options: BandScaleOptions,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let options = options.validate()?;
        let keys: IndexSet<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale requires at least one key".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }

        let reversed = range.1 < range.0;
        let (start, stop) = if reversed {
            (range.1, range.0)
        } else {
            (range.0, range.1)
        };
        let n = keys.len() as f64;
        let mut step =
            (stop - start) / (n - options.padding_inner + options.padding_outer * 2.0).max(1.0);
        if options.round {
            step = step.floor();
        }
        let mut first_start =
            start + (stop - start - step * (n - options.padding_inner)) * options.align;
        let mut bandwidth = step * (1.0 - options.padding_inner);
        if options.round {
            first_start = first_start.round();
            bandwidth = bandwidth.round();
        }

        Ok(Self {
            keys,
            range,
            first_start,
            step,
            bandwidth,
            reversed,
        })
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start coordinate of the band for `key`, or `None` for unknown keys.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.keys.get_index_of(key)?;
        let slot = if self.reversed {
            self.keys.len() - 1 - index
        } else {
            index
        };
        Some(self.first_start + self.step * slot as f64)
    }

    #[must_use]
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|start| start + self.bandwidth / 2.0)
    }
}
