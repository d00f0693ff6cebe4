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

//! Ram command - peak RAM usage comparison.

use super::{export_datasets, report_chart, source_pairs};
use crate::cli::RamArgs;
use crate::error::CliError;
use benchart_core::{collect_ram_usage, ram_usage_chart, AlignedMatrix};
use benchart_render::{render_grouped_bars, ChartStyle};

/// Aggregate RAM usage result files and write the comparison chart.
pub fn ram(args: RamArgs) -> Result<(), CliError> {
    let sources = source_pairs(&args.sources)?;
    let table = collect_ram_usage(&sources)?;
    let matrix = AlignedMatrix::from_table(&table);
    let chart = ram_usage_chart(&matrix);

    let style = ChartStyle::new(
        format!("{} peak RAM usage on {}", args.benchmark, args.board),
        "Peak RAM usage (bytes)",
    );
    render_grouped_bars(&chart, &style, &args.output)?;
    report_chart("RAM usage chart", &args.output);

    if let Some(export) = &args.export {
        export_datasets(export, &[("ram_usage", &chart)])?;
    }
    Ok(())
}
