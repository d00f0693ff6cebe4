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

//! Error types for chart rendering.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while drawing a chart artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The dataset has no groups or no series; there is nothing to draw.
    #[error("chart dataset has no bars to draw")]
    EmptyChart,

    /// The drawing backend failed, usually an I/O problem with the
    /// output path.
    #[error("failed to render chart '{path}': {message}")]
    Backend {
        /// Output path of the chart being rendered.
        path: PathBuf,
        /// The underlying backend error message.
        message: String,
    },
}

/// Convenience alias for `Result` with [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    /// Create a [`RenderError::Backend`] with output path context.
    pub fn backend(path: impl Into<PathBuf>, source: impl Display) -> Self {
        Self::Backend {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
