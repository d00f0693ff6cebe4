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

//! Size command - effective code size comparison.

use super::{export_datasets, report_chart, source_pairs};
use crate::cli::SizeArgs;
use crate::error::CliError;
use benchart_core::{code_size_chart, collect_code_sizes, AlignedMatrix};
use benchart_render::{render_grouped_bars, ChartStyle};

/// Aggregate code size result files and write the comparison chart.
pub fn size(args: SizeArgs) -> Result<(), CliError> {
    let sources = source_pairs(&args.sources)?;
    let table = collect_code_sizes(&args.board, &sources)?;
    let matrix = AlignedMatrix::from_table(&table);
    let chart = code_size_chart(&matrix);

    let style = ChartStyle::new(
        format!("{} effective code size on {}", args.benchmark, args.board),
        "Effective code size (bytes)",
    );
    render_grouped_bars(&chart, &style, &args.output)?;
    report_chart("code size chart", &args.output);

    if let Some(export) = &args.export {
        export_datasets(export, &[("code_size", &chart)])?;
    }
    Ok(())
}
