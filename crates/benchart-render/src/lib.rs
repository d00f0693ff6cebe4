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

//! SVG rendering of benchart grouped-bar datasets.
//!
//! This crate is the drawing end of the pipeline: it takes a finished
//! [`GroupedBarData`](benchart_core::GroupedBarData) — ordered labels,
//! positioned series, optional whisker extents and reference rule — and
//! draws it with `plotters`. It never looks back into aggregation; bad
//! data cannot reach this point.
//!
//! # Examples
//!
//! ```no_run
//! use benchart_core::{collect_ram_usage, ram_usage_chart, AlignedMatrix, SourcePair};
//! use benchart_render::{render_grouped_bars, ChartStyle};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = vec![
//!     SourcePair::new("wasmi", "results/wasmi.csv"),
//!     SourcePair::new("wasmtime", "results/wasmtime.csv"),
//! ];
//! let table = collect_ram_usage(&sources)?;
//! let chart = ram_usage_chart(&AlignedMatrix::from_table(&table));
//! let style = ChartStyle::new("embench-1.0 on nrf52840dk", "Peak RAM usage (bytes)");
//! render_grouped_bars(&chart, &style, Path::new("ram-usage.svg"))?;
//! # Ok(())
//! # }
//! ```

mod chart;
mod error;

pub use chart::{render_grouped_bars, ChartStyle};
pub use error::{RenderError, Result};
