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

//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Test helper to create a benchart command
fn benchart_cmd() -> Command {
    Command::cargo_bin("benchart").expect("Failed to find benchart binary")
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write result file");
    path
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchart_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grouped comparison charts"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    benchart_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchart"));
}

#[test]
fn test_no_subcommand_fails() {
    benchart_cmd().assert().failure();
}

// ===== Size Command Tests =====

#[test]
fn test_size_chart_end_to_end() {
    let dir = TempDir::new().unwrap();
    let r1 = write_file(
        dir.path(),
        "r1.csv",
        "runtime,text,data,rodata,file\nr1,100,0,20,150\n",
    );
    let r2 = write_file(
        dir.path(),
        "r2.csv",
        "runtime,text,data,rodata,file\nr2,80,0,10,120\n",
    );
    let output = dir.path().join("code-size.svg");

    benchart_cmd()
        .arg("size")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["r1", r1.to_str().unwrap(), "r2", r2.to_str().unwrap()])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("code size chart written"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("nrf52840dk"));
}

#[test]
fn test_size_missing_file_fails() {
    benchart_cmd()
        .arg("size")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["r1", "/nonexistent/r1.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read benchmark results"))
        .stderr(predicate::str::contains("/nonexistent/r1.csv"));
}

// ===== Ram Command Tests =====

#[test]
fn test_ram_chart_end_to_end() {
    let dir = TempDir::new().unwrap();
    let wasmi = write_file(
        dir.path(),
        "wasmi.csv",
        "# name, heap, data, bss\ncrc32,1000,200,100\nud,2000,200,100\n",
    );
    let output = dir.path().join("ram-usage.svg");

    benchart_cmd()
        .arg("ram")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmi", wasmi.to_str().unwrap()])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    // The linear-memory ceiling is always part of the RAM chart legend.
    assert!(svg.contains("Wasm linear memory"));
}

#[test]
fn test_ram_non_numeric_field_fails() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(dir.path(), "wasmi.csv", "crc32,lots,200,100\n");

    benchart_cmd()
        .arg("ram")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmi", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed record"))
        .stderr(predicate::str::contains("line 1"));
}

// ===== Score Command Tests =====

#[test]
fn test_score_writes_both_charts() {
    let dir = TempDir::new().unwrap();
    let wasmtime = write_file(
        dir.path(),
        "wasmtime.csv",
        "crc32,104.2,1.08,91.0,1.04\nud,88.0,1.02,107.5,1.01\n",
    );
    let interp = write_file(
        dir.path(),
        "interp.csv",
        "crc32,11.9,1.22,796.0,1.18\n",
    );
    let score_out = dir.path().join("scores.svg");
    let time_out = dir.path().join("times.svg");

    benchart_cmd()
        .arg("score")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args([
            "wasmtime",
            wasmtime.to_str().unwrap(),
            "wasm-interpreter",
            interp.to_str().unwrap(),
        ])
        .arg("--score-output")
        .arg(&score_out)
        .arg("--time-output")
        .arg(&time_out)
        .assert()
        .success()
        .stdout(predicate::str::contains("score chart written"))
        .stdout(predicate::str::contains("timing chart written"));

    assert!(fs::read_to_string(&score_out).unwrap().contains("<svg"));
    assert!(fs::read_to_string(&time_out).unwrap().contains("<svg"));
}

#[test]
fn test_score_wrong_field_count_fails() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(dir.path(), "wasmtime.csv", "crc32,104.2,1.08,91.0\n");

    benchart_cmd()
        .arg("score")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmtime", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 5 fields"));
}

#[test]
fn test_score_zero_stddev_fails() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(dir.path(), "wasmtime.csv", "crc32,104.2,0.0,91.0,1.04\n");

    benchart_cmd()
        .arg("score")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmtime", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score_stddev"));
}

// ===== Pair List Validation =====

#[test]
fn test_odd_pair_list_is_rejected() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "wasmi.csv", "crc32,1,2,3\n");

    benchart_cmd()
        .arg("ram")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmi", file.to_str().unwrap(), "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LABEL FILE pairs"));
}

// ===== Dataset Export =====

#[test]
fn test_export_writes_parseable_json() {
    let dir = TempDir::new().unwrap();
    let wasmi = write_file(dir.path(), "wasmi.csv", "crc32,1000,200,100\n");
    let output = dir.path().join("ram-usage.svg");
    let export = dir.path().join("dataset.json");

    benchart_cmd()
        .arg("ram")
        .arg("embench-1.0")
        .arg("nrf52840dk")
        .args(["wasmi", wasmi.to_str().unwrap()])
        .arg("--output")
        .arg(&output)
        .arg("--export")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("dataset exported"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    let chart = &json["ram_usage"];
    assert_eq!(chart["group_labels"][0], "crc32");
    assert_eq!(chart["series"][0]["label"], "wasmi");
    assert_eq!(chart["series"][0]["heights"][0], 1300.0);
    assert_eq!(chart["reference_line"]["value"], 131072.0);
}
