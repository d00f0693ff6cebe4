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

//! CLI command definitions and argument parsing.
//!
//! One subcommand per measurement pipeline. All three share the same
//! positional shape: a benchmark label, a board label, then an
//! even-length list alternating runtime labels and result file paths.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare effective code size across runtimes for one board
    Size(SizeArgs),

    /// Compare peak RAM usage per benchmark case
    Ram(RamArgs),

    /// Compare normalized scores and execution times per benchmark case
    Score(ScoreArgs),
}

/// Arguments for the `size` subcommand.
#[derive(Args)]
pub struct SizeArgs {
    /// Benchmark suite label, used in the chart caption
    pub benchmark: String,

    /// Board/platform label; the single group all size bars belong to
    pub board: String,

    /// Alternating runtime label and result file path pairs
    #[arg(value_name = "LABEL FILE", required = true, num_args = 1..)]
    pub sources: Vec<String>,

    /// Output path of the chart
    #[arg(short, long, default_value = "code-size.svg")]
    pub output: PathBuf,

    /// Also write the finished chart dataset as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `ram` subcommand.
#[derive(Args)]
pub struct RamArgs {
    /// Benchmark suite label, used in the chart caption
    pub benchmark: String,

    /// Board/platform label, used in the chart caption
    pub board: String,

    /// Alternating runtime label and result file path pairs
    #[arg(value_name = "LABEL FILE", required = true, num_args = 1..)]
    pub sources: Vec<String>,

    /// Output path of the chart
    #[arg(short, long, default_value = "ram-usage.svg")]
    pub output: PathBuf,

    /// Also write the finished chart dataset as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Arguments for the `score` subcommand.
#[derive(Args)]
pub struct ScoreArgs {
    /// Benchmark suite label, used in chart captions and the score axis
    pub benchmark: String,

    /// Board/platform label, used in chart captions
    pub board: String,

    /// Alternating runtime label and result file path pairs
    #[arg(value_name = "LABEL FILE", required = true, num_args = 1..)]
    pub sources: Vec<String>,

    /// Output path of the score comparison chart
    #[arg(long, default_value = "scores.svg")]
    pub score_output: PathBuf,

    /// Output path of the timing comparison chart
    #[arg(long, default_value = "times.svg")]
    pub time_output: PathBuf,

    /// Also write both finished chart datasets as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Returns `Err` when result files cannot be read, contain malformed
    /// records, or a chart artifact cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Size(args) => commands::size(args),
            Commands::Ram(args) => commands::ram(args),
            Commands::Score(args) => commands::score(args),
        }
    }
}
