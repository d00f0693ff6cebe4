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

//! CLI command implementations.

mod ram;
mod score;
mod size;

pub use ram::ram;
pub use score::score;
pub use size::size;

use crate::error::CliError;
use benchart_core::{GroupedBarData, SourcePair};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Turn the flat positional list into labelled sources.
///
/// # Errors
///
/// Returns a usage error when the list is empty or has an odd length.
pub(crate) fn source_pairs(raw: &[String]) -> Result<Vec<SourcePair>, CliError> {
    if raw.is_empty() || raw.len() % 2 != 0 {
        return Err(CliError::usage(format!(
            "runtime sources must come in LABEL FILE pairs, got {} trailing argument(s)",
            raw.len()
        )));
    }
    Ok(raw
        .chunks_exact(2)
        .map(|pair| SourcePair::new(&pair[0], &pair[1]))
        .collect())
}

/// Write one or more finished chart datasets to `path` as pretty JSON,
/// keyed by chart kind.
pub(crate) fn export_datasets(
    path: &Path,
    charts: &[(&str, &GroupedBarData)],
) -> Result<(), CliError> {
    let payload: BTreeMap<&str, &GroupedBarData> = charts.iter().copied().collect();
    let json =
        serde_json::to_string_pretty(&payload).map_err(|e| CliError::export(path, e))?;
    fs::write(path, json).map_err(|e| CliError::export(path, e))?;
    println!("{} dataset exported to {}", "✓".green(), path.display());
    Ok(())
}

/// Confirm a written chart artifact on stdout.
pub(crate) fn report_chart(what: &str, path: &Path) {
    println!("{} {} written to {}", "✓".green(), what, path.display());
}
