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

//! Structured error types for the benchart CLI.
//!
//! All command implementations return `Result<(), CliError>`; `main`
//! prints the error and maps it to a non-zero exit code.

use benchart_core::ChartDataError;
use benchart_render::RenderError;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchart CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line was shaped wrongly (e.g. an odd label/file list).
    #[error("invalid usage: {0}")]
    Usage(String),

    /// Aggregating the benchmark result files failed.
    #[error(transparent)]
    Data(#[from] ChartDataError),

    /// Drawing a chart artifact failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the JSON dataset export failed.
    #[error("cannot export dataset to '{path}': {message}")]
    Export {
        /// Path of the export file.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl CliError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create an export error with file context.
    pub fn export(path: impl Into<PathBuf>, source: impl Display) -> Self {
        Self::Export {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
