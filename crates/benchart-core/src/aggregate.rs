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

//! Aggregation of per-runtime benchmark result files.
//!
//! Each pipeline reads a set of (runtime label, file) pairs and produces
//! one [`ResultTable`]: a mapping from benchmark case name to the
//! measurements every runtime reported for it. Three file formats are
//! supported, all comma-delimited text:
//!
//! - **code size**: `runtime,text,data,rodata,file_size` — the first line
//!   is a header and is always discarded. The measurement is
//!   text + rodata − file_size; the case axis is the board the invocation
//!   is for, so each file contributes to a single row.
//! - **RAM usage**: `case_name,peak_heap,data_bytes,bss_bytes` — blank
//!   lines and `#`-prefixed lines are skipped.
//! - **scores**: `case_name,score_mean,score_stddev,time_mean,time_stddev`
//!   — blank lines and `#`-prefixed lines are skipped; exactly five
//!   fields per record.
//!
//! Runtime labels come exclusively from the pair list, never from line
//! content, so the collected label set is identical however the files are
//! ordered. Repeated (case, runtime) records overwrite: the last one
//! wins, which lets a result file be regenerated and appended to without
//! special-casing duplicates.

use crate::error::{ChartDataError, Result};
use crate::measure::{GeoStat, ScoreSample};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

/// One input to an aggregation run: a runtime label and the path of the
/// result file measured for that runtime.
#[derive(Debug, Clone)]
pub struct SourcePair {
    /// Runtime/implementation label; becomes one chart series.
    pub label: String,
    /// Path of the CSV result file.
    pub path: PathBuf,
}

impl SourcePair {
    /// Create a labelled source.
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Aggregated measurements keyed by case name, then runtime label.
///
/// Built once per invocation from the full input set and never mutated
/// afterwards; iteration order over cases and runtimes is sorted, so the
/// table is independent of input file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable<M> {
    cells: BTreeMap<String, BTreeMap<String, M>>,
    runtimes: BTreeSet<String>,
}

impl<M> Default for ResultTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ResultTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
            runtimes: BTreeSet::new(),
        }
    }

    /// Record one measurement. A later record for the same (case, runtime)
    /// pair replaces the earlier one.
    pub fn record(&mut self, case: impl Into<String>, runtime: impl Into<String>, value: M) {
        let runtime = runtime.into();
        self.runtimes.insert(runtime.clone());
        self.cells
            .entry(case.into())
            .or_default()
            .insert(runtime, value);
    }

    /// Register a runtime label without any measurement, so a runtime
    /// whose result file is empty still gets a (zero-filled) column.
    pub fn add_runtime(&mut self, label: impl Into<String>) {
        self.runtimes.insert(label.into());
    }

    /// Look up the measurement for a (case, runtime) pair.
    pub fn get(&self, case: &str, runtime: &str) -> Option<&M> {
        self.cells.get(case).and_then(|row| row.get(runtime))
    }

    /// Case names in lexicographic order.
    pub fn cases(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Distinct runtime labels in lexicographic order.
    pub fn runtimes(&self) -> impl Iterator<Item = &str> {
        self.runtimes.iter().map(String::as_str)
    }

    /// Number of distinct case names.
    pub fn case_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of distinct runtime labels.
    pub fn runtime_count(&self) -> usize {
        self.runtimes.len()
    }

    /// True when no case has any measurement.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Reader for the header-carrying code size format: the `csv` crate
/// consumes the first line as a header record and never yields it.
fn size_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Reader for the comment-style formats: blank lines are dropped by the
/// reader, `#` opens a comment line.
fn commented_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Parse field `index` of `record` as a number, with the field name in
/// the error message.
fn parse_field<T: FromStr>(
    origin: &str,
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T> {
    let raw = record.get(index).unwrap_or("");
    raw.parse().map_err(|_| {
        ChartDataError::malformed(
            origin,
            record_line(record),
            format!("field '{}' is not a number: '{}'", name, raw),
        )
    })
}

fn check_width(
    origin: &str,
    record: &csv::StringRecord,
    required: usize,
    exact: bool,
) -> Result<()> {
    let got = record.len();
    let bad = if exact { got != required } else { got < required };
    if bad {
        let expectation = if exact { "exactly" } else { "at least" };
        return Err(ChartDataError::malformed(
            origin,
            record_line(record),
            format!("expected {} {} fields, got {}", expectation, required, got),
        ));
    }
    Ok(())
}

/// Ingest one code size result file for runtime `label`, attributing every
/// record to the single case row `board`.
///
/// Fields are `runtime,text,data,rodata,file_size`; the first field is
/// ignored (the series label comes from the pairing) and so is `data`.
/// The stored measurement is `text + rodata - file_size`.
///
/// # Errors
///
/// [`ChartDataError::MalformedRecord`] when a line has fewer than five
/// fields or a used field does not parse as an integer.
pub fn read_code_sizes<R: Read>(
    board: &str,
    label: &str,
    origin: &str,
    input: R,
    table: &mut ResultTable<i64>,
) -> Result<()> {
    let mut reader = size_reader(input);
    for record in reader.records() {
        let record = record.map_err(|e| ChartDataError::from_csv(origin, e))?;
        check_width(origin, &record, 5, false)?;
        let text: i64 = parse_field(origin, &record, 1, "text")?;
        let rodata: i64 = parse_field(origin, &record, 3, "rodata")?;
        let file_size: i64 = parse_field(origin, &record, 4, "file_size")?;
        table.record(board, label, text + rodata - file_size);
    }
    Ok(())
}

/// Ingest one RAM usage result file for runtime `label`.
///
/// Fields are `case_name,peak_heap,data_bytes,bss_bytes`; the stored
/// measurement is their sum. Extra trailing fields are tolerated.
///
/// # Errors
///
/// [`ChartDataError::MalformedRecord`] when a line has fewer than four
/// fields or a byte count does not parse as an unsigned integer.
pub fn read_ram_usage<R: Read>(
    label: &str,
    origin: &str,
    input: R,
    table: &mut ResultTable<u64>,
) -> Result<()> {
    let mut reader = commented_reader(input);
    for record in reader.records() {
        let record = record.map_err(|e| ChartDataError::from_csv(origin, e))?;
        check_width(origin, &record, 4, false)?;
        let case = record.get(0).unwrap_or("").to_string();
        let heap: u64 = parse_field(origin, &record, 1, "peak_heap")?;
        let data: u64 = parse_field(origin, &record, 2, "data_bytes")?;
        let bss: u64 = parse_field(origin, &record, 3, "bss_bytes")?;
        table.record(case, label, heap + data + bss);
    }
    Ok(())
}

/// Ingest one score result file for runtime `label`.
///
/// Fields are `case_name,score_mean,score_stddev,time_mean,time_stddev`,
/// exactly five per record. Geometric standard deviations must be
/// positive: a zero deviation would divide by zero when the plotted
/// whisker is derived, so it is rejected here rather than at layout time.
///
/// # Errors
///
/// [`ChartDataError::MalformedRecord`] on a wrong field count, an
/// unparseable number, or a non-positive standard deviation.
pub fn read_scores<R: Read>(
    label: &str,
    origin: &str,
    input: R,
    table: &mut ResultTable<ScoreSample>,
) -> Result<()> {
    let mut reader = commented_reader(input);
    for record in reader.records() {
        let record = record.map_err(|e| ChartDataError::from_csv(origin, e))?;
        check_width(origin, &record, 5, true)?;
        let case = record.get(0).unwrap_or("").to_string();
        let score_mean: f64 = parse_field(origin, &record, 1, "score_mean")?;
        let score_sd: f64 = parse_field(origin, &record, 2, "score_stddev")?;
        let time_mean: f64 = parse_field(origin, &record, 3, "time_mean")?;
        let time_sd: f64 = parse_field(origin, &record, 4, "time_stddev")?;
        for (name, sd) in [("score_stddev", score_sd), ("time_stddev", time_sd)] {
            if sd <= 0.0 {
                return Err(ChartDataError::malformed(
                    origin,
                    record_line(&record),
                    format!("field '{}' must be positive, got {}", name, sd),
                ));
            }
        }
        table.record(
            case,
            label,
            ScoreSample {
                score: GeoStat::new(score_mean, score_sd),
                time: GeoStat::new(time_mean, time_sd),
            },
        );
    }
    Ok(())
}

fn open(pair: &SourcePair) -> Result<File> {
    File::open(&pair.path).map_err(|e| ChartDataError::source_unavailable(&pair.path, e))
}

/// Aggregate code size result files for one board.
///
/// # Errors
///
/// [`ChartDataError::SourceUnavailable`] when a path cannot be opened,
/// [`ChartDataError::MalformedRecord`] for bad content. Either aborts the
/// whole aggregation.
pub fn collect_code_sizes(board: &str, sources: &[SourcePair]) -> Result<ResultTable<i64>> {
    let mut table = ResultTable::new();
    for pair in sources {
        table.add_runtime(&pair.label);
        let file = open(pair)?;
        read_code_sizes(
            board,
            &pair.label,
            &pair.path.display().to_string(),
            file,
            &mut table,
        )?;
    }
    Ok(table)
}

/// Aggregate RAM usage result files.
///
/// # Errors
///
/// As [`collect_code_sizes`].
pub fn collect_ram_usage(sources: &[SourcePair]) -> Result<ResultTable<u64>> {
    let mut table = ResultTable::new();
    for pair in sources {
        table.add_runtime(&pair.label);
        let file = open(pair)?;
        read_ram_usage(
            &pair.label,
            &pair.path.display().to_string(),
            file,
            &mut table,
        )?;
    }
    Ok(table)
}

/// Aggregate score result files.
///
/// # Errors
///
/// As [`collect_code_sizes`].
pub fn collect_scores(sources: &[SourcePair]) -> Result<ResultTable<ScoreSample>> {
    let mut table = ResultTable::new();
    for pair in sources {
        table.add_runtime(&pair.label);
        let file = open(pair)?;
        read_scores(
            &pair.label,
            &pair.path.display().to_string(),
            file,
            &mut table,
        )?;
    }
    Ok(table)
}
