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

//! Aggregation of multi-runtime benchmark results into grouped-bar chart
//! datasets.
//!
//! This crate turns heterogeneous per-runtime CSV result files into a
//! fully aligned, deterministically ordered dataset a bar-chart renderer
//! can draw directly. It covers three measurement pipelines — effective
//! code size, peak RAM usage, and normalized score with timing — sharing
//! one shape:
//!
//! 1. **Aggregation** ([`aggregate`]): parse each (runtime, file) pair
//!    into a [`ResultTable`] keyed by case name then runtime label, with
//!    last-write-wins on duplicates.
//! 2. **Ordering & alignment** ([`align`]): sort cases and runtimes
//!    lexicographically (the [`BASELINE_RUNTIME`] pinned last when
//!    present) and fill every missing (case, runtime) cell with the
//!    metric's neutral default, yielding a dense [`AlignedMatrix`].
//! 3. **Layout** ([`layout`]): position one bar series per runtime inside
//!    unit-width case slots and, for geometric statistics, convert each
//!    (mean, deviation) pair into asymmetric whisker extents.
//!
//! Rendering itself is somebody else's job: the output of this crate is
//! data, not pixels.
//!
//! # Examples
//!
//! ```
//! use benchart_core::{read_scores, score_charts, AlignedMatrix, ResultTable};
//! use std::io::Cursor;
//!
//! let wasmtime = "# case, score, dev, time, dev\ncrc32,104.2,1.08,91.0,1.04\n";
//! let wasmi = "crc32,57.8,1.12,164.0,1.07\n";
//!
//! let mut table = ResultTable::new();
//! read_scores("wasmtime", "wasmtime.csv", Cursor::new(wasmtime), &mut table)?;
//! read_scores("wasmi", "wasmi.csv", Cursor::new(wasmi), &mut table)?;
//!
//! let matrix = AlignedMatrix::from_table(&table);
//! let (scores, times) = score_charts(&matrix);
//!
//! assert_eq!(scores.group_labels, vec!["crc32"]);
//! assert_eq!(scores.series.len(), 2);
//! assert_eq!(times.series[0].label, "wasmi");
//! # Ok::<(), benchart_core::ChartDataError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the chart dataset types
//!   so finished datasets can be exported for other tooling.

mod aggregate;
mod align;
mod error;
mod layout;
mod measure;

pub use aggregate::{
    collect_code_sizes, collect_ram_usage, collect_scores, read_code_sizes, read_ram_usage,
    read_scores, ResultTable, SourcePair,
};
pub use align::{AlignedMatrix, BASELINE_RUNTIME};
pub use error::{ChartDataError, Result};
pub use layout::{
    code_size_chart, ram_usage_chart, score_charts, BarSeries, GroupedBarData, ReferenceLine,
    WASM_LINEAR_MEMORY_BYTES,
};
pub use measure::{ErrorBounds, GeoStat, Measure, ScoreSample};
