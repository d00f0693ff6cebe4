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

//! Error types for benchmark result ingestion.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while aggregating benchmark result files.
///
/// Benchmark artifacts are pre-generated, static files: both variants are
/// fatal for the whole invocation. There is no partial aggregation and no
/// retry — a bad record indicates an upstream benchmarking bug, and a
/// half-populated chart would be misleading.
///
/// # Examples
///
/// ```
/// use benchart_core::ChartDataError;
///
/// let err = ChartDataError::MalformedRecord {
///     origin: "results/wasmtime.csv".to_string(),
///     line: 3,
///     message: "expected exactly 5 fields, got 4".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug, Error)]
pub enum ChartDataError {
    /// A named result file cannot be opened or read.
    #[error("cannot read benchmark results '{path}': {message}")]
    SourceUnavailable {
        /// Path of the unreadable source.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// A line has the wrong field count, a non-numeric value where a
    /// number is expected, or a non-positive geometric standard deviation.
    #[error("malformed record in '{origin}' at line {line}: {message}")]
    MalformedRecord {
        /// Name of the source the record came from (usually the file path).
        origin: String,
        /// Line number of the offending record (1-based).
        line: u64,
        /// What was wrong with the record.
        message: String,
    },
}

/// Convenience alias for `Result` with [`ChartDataError`].
pub type Result<T> = std::result::Result<T, ChartDataError>;

impl ChartDataError {
    /// Create a [`ChartDataError::SourceUnavailable`] from an I/O error.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a [`ChartDataError::MalformedRecord`] with source context.
    pub fn malformed(origin: impl Into<String>, line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }

    /// Translate a `csv::Error` hit while reading `origin`.
    ///
    /// I/O failures mid-read surface as [`ChartDataError::SourceUnavailable`];
    /// everything else the reader can object to (bad UTF-8, unbalanced
    /// quoting) is a malformed record.
    pub(crate) fn from_csv(origin: &str, source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        if source.is_io_error() {
            match source.into_kind() {
                csv::ErrorKind::Io(e) => Self::source_unavailable(Path::new(origin), e),
                _ => unreachable!("is_io_error() only matches ErrorKind::Io"),
            }
        } else {
            Self::malformed(origin, line, source.to_string())
        }
    }
}
