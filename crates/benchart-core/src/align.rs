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

//! Deterministic ordering and dense alignment of aggregated results.

use crate::aggregate::ResultTable;
use crate::measure::Measure;

/// The reference interpreter's label. When present it is always rendered
/// as the last series so the baseline sits at the same edge of every
/// group, whatever the other labels sort to.
pub const BASELINE_RUNTIME: &str = "wasm-interpreter";

/// Sort labels ascending, then move the baseline to the end if present.
///
/// Kept as an explicit two-step transform rather than a custom sort
/// comparator so the tie-break rule stays auditable.
fn order_runtimes(labels: impl Iterator<Item = impl Into<String>>) -> Vec<String> {
    let mut ordered: Vec<String> = labels.map(Into::into).collect();
    ordered.sort_unstable();
    if let Some(at) = ordered.iter().position(|l| l == BASELINE_RUNTIME) {
        let baseline = ordered.remove(at);
        ordered.push(baseline);
    }
    ordered
}

/// The fully populated case × runtime grid handed to chart layout.
///
/// Rows are case names in lexicographic order; columns are runtime labels
/// in lexicographic order with [`BASELINE_RUNTIME`] pinned last. Every
/// cell is populated: pairs with no input record hold [`Measure::absent`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedMatrix<M> {
    cases: Vec<String>,
    runtimes: Vec<String>,
    rows: Vec<Vec<M>>,
}

impl<M: Measure> AlignedMatrix<M> {
    /// Derive the dense matrix from an aggregated table.
    ///
    /// The row set is the union of case names across all sources: a case
    /// missing from one runtime's file still appears, zero-filled for
    /// that runtime.
    pub fn from_table(table: &ResultTable<M>) -> Self {
        let cases: Vec<String> = table.cases().map(str::to_owned).collect();
        let runtimes = order_runtimes(table.runtimes());
        let rows = cases
            .iter()
            .map(|case| {
                runtimes
                    .iter()
                    .map(|runtime| {
                        table
                            .get(case, runtime)
                            .cloned()
                            .unwrap_or_else(M::absent)
                    })
                    .collect()
            })
            .collect();
        Self {
            cases,
            runtimes,
            rows,
        }
    }
}

impl<M> AlignedMatrix<M> {
    /// Ordered case names (chart groups).
    pub fn cases(&self) -> &[String] {
        &self.cases
    }

    /// Ordered runtime labels (chart series).
    pub fn runtimes(&self) -> &[String] {
        &self.runtimes
    }

    /// The cell for case row `case` and runtime column `runtime`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    pub fn cell(&self, case: usize, runtime: usize) -> &M {
        &self.rows[case][runtime]
    }

    /// Iterate one runtime's values across all cases, in case order.
    pub fn column(&self, runtime: usize) -> impl Iterator<Item = &M> {
        self.rows.iter().map(move |row| &row[runtime])
    }

    /// Total number of cells, always `cases × runtimes`.
    pub fn cell_count(&self) -> usize {
        self.cases.len() * self.runtimes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ResultTable;

    fn table(entries: &[(&str, &str, u64)]) -> ResultTable<u64> {
        let mut table = ResultTable::new();
        for (case, runtime, value) in entries {
            table.record(*case, *runtime, *value);
        }
        table
    }

    #[test]
    fn baseline_is_pinned_last() {
        let table = table(&[
            ("crc32", "wasmtime", 1),
            ("crc32", "wasm-interpreter", 2),
            ("crc32", "wamr", 3),
        ]);
        let matrix = AlignedMatrix::from_table(&table);
        assert_eq!(
            matrix.runtimes(),
            ["wamr", "wasmtime", "wasm-interpreter"]
        );
    }

    #[test]
    fn ordering_is_lexicographic_without_baseline() {
        let table = table(&[("crc32", "wasmtime", 1), ("crc32", "wamr", 2)]);
        let matrix = AlignedMatrix::from_table(&table);
        assert_eq!(matrix.runtimes(), ["wamr", "wasmtime"]);
    }

    #[test]
    fn missing_cells_are_zero_filled() {
        let table = table(&[("crc32", "wamr", 7), ("ud", "wasmtime", 9)]);
        let matrix = AlignedMatrix::from_table(&table);
        assert_eq!(matrix.cases(), ["crc32", "ud"]);
        assert_eq!(matrix.runtimes(), ["wamr", "wasmtime"]);
        assert_eq!(*matrix.cell(0, 0), 7);
        assert_eq!(*matrix.cell(0, 1), 0);
        assert_eq!(*matrix.cell(1, 0), 0);
        assert_eq!(*matrix.cell(1, 1), 9);
        assert_eq!(matrix.cell_count(), 4);
    }

    #[test]
    fn column_walks_case_order() {
        let table = table(&[("b", "r", 2), ("a", "r", 1), ("c", "r", 3)]);
        let matrix = AlignedMatrix::from_table(&table);
        let col: Vec<u64> = matrix.column(0).copied().collect();
        assert_eq!(col, vec![1, 2, 3]);
    }

    #[test]
    fn baseline_alone_stays_put() {
        let table = table(&[("crc32", "wasm-interpreter", 1)]);
        let matrix = AlignedMatrix::from_table(&table);
        assert_eq!(matrix.runtimes(), ["wasm-interpreter"]);
    }
}
