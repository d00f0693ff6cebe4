// Dweve Benchart - Benchmark Comparison Charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Measurement value types stored per (case, runtime) cell.

/// A measurement that can fill one cell of an aligned matrix.
///
/// Alignment substitutes [`Measure::absent`] for every (case, runtime)
/// pair no input record covered, so the matrix handed to rendering is
/// always dense.
pub trait Measure: Clone {
    /// The value plotted for a missing (case, runtime) pair.
    fn absent() -> Self;
}

/// Effective code size in bytes. Negative values are legal: the metric is
/// text + rodata minus the whole on-disk file, so a runtime whose image is
/// dominated by excluded sections lands below zero.
impl Measure for i64 {
    fn absent() -> Self {
        0
    }
}

/// Peak RAM usage in bytes (heap + data + bss).
impl Measure for u64 {
    fn absent() -> Self {
        0
    }
}

/// A geometric mean together with its geometric standard deviation.
///
/// Both Embench-style scores and wall-clock timings are reported on a
/// multiplicative scale; the spread is a dimensionless factor, not an
/// additive offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoStat {
    /// Geometric mean of the samples.
    pub mean: f64,
    /// Geometric standard deviation, always > 1 for real spread and
    /// exactly 1 for no spread. Ingestion rejects non-positive values.
    pub geo_sd: f64,
}

impl GeoStat {
    /// Create a new statistic pair.
    pub fn new(mean: f64, geo_sd: f64) -> Self {
        Self { mean, geo_sd }
    }

    /// The neutral statistic: zero mean, unit deviation. Plots as a
    /// zero-height bar with a zero-width whisker.
    pub fn neutral() -> Self {
        Self {
            mean: 0.0,
            geo_sd: 1.0,
        }
    }

    /// Convert the multiplicative interval [mean/sd, mean·sd] into the
    /// additive deviations a bar renderer plots around the mean.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchart_core::GeoStat;
    ///
    /// let bounds = GeoStat::new(100.0, 1.2).deviation_bounds();
    /// assert!((bounds.below - (100.0 - 100.0 / 1.2)).abs() < 1e-9);
    /// assert!((bounds.above - 20.0).abs() < 1e-9);
    /// ```
    pub fn deviation_bounds(&self) -> ErrorBounds {
        ErrorBounds {
            below: self.mean - self.mean / self.geo_sd,
            above: self.mean * self.geo_sd - self.mean,
        }
    }
}

impl Measure for GeoStat {
    fn absent() -> Self {
        Self::neutral()
    }
}

/// Asymmetric plotted deviations around a bar's height.
///
/// A whisker spans [height − below, height + above].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBounds {
    /// Distance from the mean down to the lower deviation bound.
    pub below: f64,
    /// Distance from the mean up to the upper deviation bound.
    pub above: f64,
}

impl ErrorBounds {
    /// True when the whisker would have zero extent in both directions.
    pub fn is_zero(&self) -> bool {
        self.below == 0.0 && self.above == 0.0
    }
}

/// One benchmark case's result under one runtime: a normalized score and
/// an elapsed time, each with its geometric spread.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSample {
    /// Normalized benchmark score.
    pub score: GeoStat,
    /// Elapsed time in milliseconds.
    pub time: GeoStat,
}

impl Measure for ScoreSample {
    fn absent() -> Self {
        Self {
            score: GeoStat::neutral(),
            time: GeoStat::neutral(),
        }
    }
}
