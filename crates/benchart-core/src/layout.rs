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

//! Grouped-bar chart layout: the renderer-facing dataset.
//!
//! Every case occupies a unit-width slot on the x axis. Within a slot,
//! series `i` of `N` draws a bar of width `1/(N+1)` offset by `i/(N+1)`
//! from the slot's left edge, so `N` bars plus one bar-width of spacing
//! tile the slot without overlap. Renderers position bars from these
//! precomputed offsets and widths; changing the series count without
//! recomputing both breaks the grouping.

use crate::align::AlignedMatrix;
use crate::measure::{ErrorBounds, Measure, ScoreSample};

/// Bytes addressable by two 64 KiB wasm linear-memory pages; the fixed
/// ceiling drawn on RAM usage charts.
pub const WASM_LINEAR_MEMORY_BYTES: f64 = (2 * 64 * 1024) as f64;

/// One runtime's bars across all case slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarSeries {
    /// Runtime label shown in the legend.
    pub label: String,
    /// Horizontal offset of this series' bars from each slot's left edge,
    /// in slot widths.
    pub offset: f64,
    /// Bar width in slot widths.
    pub width: f64,
    /// Bar height per case, in case order.
    pub heights: Vec<f64>,
    /// Asymmetric whisker extents per case, when the metric carries
    /// spread information.
    pub spreads: Option<Vec<ErrorBounds>>,
}

/// A fixed horizontal rule drawn across the whole chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceLine {
    /// Legend label for the rule.
    pub label: String,
    /// Y value the rule is drawn at.
    pub value: f64,
}

/// The finished, fully aligned dataset a grouped-bar renderer consumes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupedBarData {
    /// Case names, one per slot, in render order.
    pub group_labels: Vec<String>,
    /// One positioned series per runtime, in render order.
    pub series: Vec<BarSeries>,
    /// Optional horizontal reference rule.
    pub reference_line: Option<ReferenceLine>,
}

impl GroupedBarData {
    /// Lay out one bar series per runtime, deriving heights with `height`.
    pub fn from_matrix<M, H>(matrix: &AlignedMatrix<M>, height: H) -> Self
    where
        M: Measure,
        H: Fn(&M) -> f64,
    {
        Self::build(matrix, height, None::<fn(&M) -> ErrorBounds>)
    }

    /// Lay out one bar series per runtime with error whiskers derived
    /// from each cell by `spread`.
    pub fn from_matrix_with_spreads<M, H, S>(
        matrix: &AlignedMatrix<M>,
        height: H,
        spread: S,
    ) -> Self
    where
        M: Measure,
        H: Fn(&M) -> f64,
        S: Fn(&M) -> ErrorBounds,
    {
        Self::build(matrix, height, Some(spread))
    }

    fn build<M, H, S>(matrix: &AlignedMatrix<M>, height: H, spread: Option<S>) -> Self
    where
        M: Measure,
        H: Fn(&M) -> f64,
        S: Fn(&M) -> ErrorBounds,
    {
        let slots = (matrix.runtimes().len() + 1) as f64;
        let width = 1.0 / slots;
        let series = matrix
            .runtimes()
            .iter()
            .enumerate()
            .map(|(index, label)| BarSeries {
                label: label.clone(),
                offset: index as f64 / slots,
                width,
                heights: matrix.column(index).map(&height).collect(),
                spreads: spread
                    .as_ref()
                    .map(|spread| matrix.column(index).map(spread).collect()),
            })
            .collect();
        Self {
            group_labels: matrix.cases().to_vec(),
            series,
            reference_line: None,
        }
    }

    /// Attach a horizontal reference rule.
    pub fn with_reference_line(mut self, label: impl Into<String>, value: f64) -> Self {
        self.reference_line = Some(ReferenceLine {
            label: label.into(),
            value,
        });
        self
    }
}

/// Chart dataset for the code size pipeline.
pub fn code_size_chart(matrix: &AlignedMatrix<i64>) -> GroupedBarData {
    GroupedBarData::from_matrix(matrix, |bytes| *bytes as f64)
}

/// Chart dataset for the RAM usage pipeline, bounded by the wasm linear
/// memory ceiling.
pub fn ram_usage_chart(matrix: &AlignedMatrix<u64>) -> GroupedBarData {
    GroupedBarData::from_matrix(matrix, |bytes| *bytes as f64)
        .with_reference_line("Wasm linear memory", WASM_LINEAR_MEMORY_BYTES)
}

/// Chart datasets for the score pipeline: score comparison and timing
/// comparison, in that order.
pub fn score_charts(matrix: &AlignedMatrix<ScoreSample>) -> (GroupedBarData, GroupedBarData) {
    let scores = GroupedBarData::from_matrix_with_spreads(
        matrix,
        |sample| sample.score.mean,
        |sample| sample.score.deviation_bounds(),
    );
    let times = GroupedBarData::from_matrix_with_spreads(
        matrix,
        |sample| sample.time.mean,
        |sample| sample.time.deviation_bounds(),
    );
    (scores, times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ResultTable;
    use crate::measure::GeoStat;

    #[test]
    fn three_series_tile_a_quarter_slot_each() {
        let mut table: ResultTable<u64> = ResultTable::new();
        table.record("crc32", "a", 1);
        table.record("crc32", "b", 2);
        table.record("crc32", "c", 3);
        let chart = ram_usage_chart(&AlignedMatrix::from_table(&table));

        assert_eq!(chart.series.len(), 3);
        for (index, series) in chart.series.iter().enumerate() {
            assert!((series.width - 0.25).abs() < 1e-12);
            assert!((series.offset - index as f64 * 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn ram_chart_carries_memory_ceiling() {
        let mut table: ResultTable<u64> = ResultTable::new();
        table.record("crc32", "a", 1);
        let chart = ram_usage_chart(&AlignedMatrix::from_table(&table));
        let line = chart.reference_line.expect("reference line");
        assert_eq!(line.value, 131_072.0);
    }

    #[test]
    fn size_chart_preserves_negative_heights() {
        let mut table: ResultTable<i64> = ResultTable::new();
        table.record("nrf52840", "wasmtime", -30);
        let chart = code_size_chart(&AlignedMatrix::from_table(&table));
        assert_eq!(chart.series[0].heights, vec![-30.0]);
        assert!(chart.reference_line.is_none());
        assert!(chart.series[0].spreads.is_none());
    }

    #[test]
    fn score_charts_split_score_and_time() {
        let mut table: ResultTable<ScoreSample> = ResultTable::new();
        table.record(
            "crc32",
            "wasmtime",
            ScoreSample {
                score: GeoStat::new(100.0, 1.2),
                time: GeoStat::new(250.0, 1.05),
            },
        );
        let (scores, times) = score_charts(&AlignedMatrix::from_table(&table));

        assert_eq!(scores.series[0].heights, vec![100.0]);
        assert_eq!(times.series[0].heights, vec![250.0]);

        let spread = &scores.series[0].spreads.as_ref().unwrap()[0];
        assert!((spread.below - (100.0 - 100.0 / 1.2)).abs() < 1e-9);
        assert!((spread.above - 20.0).abs() < 1e-9);
    }

    #[test]
    fn absent_cells_render_without_whiskers() {
        let mut table: ResultTable<ScoreSample> = ResultTable::new();
        table.record(
            "crc32",
            "wasmtime",
            ScoreSample {
                score: GeoStat::new(100.0, 1.2),
                time: GeoStat::new(250.0, 1.05),
            },
        );
        table.add_runtime("wasmi");
        let (scores, _) = score_charts(&AlignedMatrix::from_table(&table));

        let wasmi = &scores.series[0];
        assert_eq!(wasmi.label, "wasmi");
        assert_eq!(wasmi.heights, vec![0.0]);
        assert!(wasmi.spreads.as_ref().unwrap()[0].is_zero());
    }
}
