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

//! Score command - normalized score and timing comparison.

use super::{export_datasets, report_chart, source_pairs};
use crate::cli::ScoreArgs;
use crate::error::CliError;
use benchart_core::{collect_scores, score_charts, AlignedMatrix};
use benchart_render::{render_grouped_bars, ChartStyle};

/// Aggregate score result files and write both comparison charts:
/// normalized scores with error whiskers, then absolute execution times.
pub fn score(args: ScoreArgs) -> Result<(), CliError> {
    let sources = source_pairs(&args.sources)?;
    let table = collect_scores(&sources)?;
    let matrix = AlignedMatrix::from_table(&table);
    let (scores, times) = score_charts(&matrix);

    let score_style = ChartStyle::new(
        format!("{} on {}", args.benchmark, args.board),
        format!("{} score", args.benchmark),
    );
    render_grouped_bars(&scores, &score_style, &args.score_output)?;
    report_chart("score chart", &args.score_output);

    let time_style = ChartStyle::new(
        format!("{} execution time on {}", args.benchmark, args.board),
        "Time (ms)",
    );
    render_grouped_bars(&times, &time_style, &args.time_output)?;
    report_chart("timing chart", &args.time_output);

    if let Some(export) = &args.export {
        export_datasets(export, &[("scores", &scores), ("times", &times)])?;
    }
    Ok(())
}
