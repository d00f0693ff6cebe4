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

//! Benchart command line interface.

use benchart_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;

/// Benchart - grouped comparison charts for multi-runtime benchmarks
///
/// Aggregates per-runtime benchmark result files and renders grouped
/// bar charts comparing effective code size, peak RAM usage, or
/// normalized score and timing.
///
/// # Examples
///
/// ```bash
/// # Compare embench scores across three runtimes
/// benchart score embench-1.0 nrf52840dk \
///     wasmtime wasmtime.csv wasmi wasmi.csv wasm-interpreter interp.csv
///
/// # Compare peak RAM usage with the linear-memory ceiling drawn in
/// benchart ram embench-1.0 nrf52840dk wasmi wasmi-ram.csv
/// ```
#[derive(Parser)]
#[command(name = "benchart")]
#[command(author, version, about = "Grouped comparison charts for multi-runtime benchmark results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
