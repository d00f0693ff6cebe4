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

//! Aggregation and alignment throughput over a synthetic multi-runtime
//! result set.

use benchart_core::{read_scores, score_charts, AlignedMatrix, ResultTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write as _;
use std::io::Cursor;

const RUNTIMES: &[&str] = &["wamr", "wasefire", "wasmi", "wasmtime", "wasm-interpreter"];
const CASES: usize = 24;

fn synthetic_file(runtime_index: usize) -> String {
    let mut out = String::from("# case, score_mean, score_stddev, time_mean, time_stddev\n");
    for case in 0..CASES {
        let mean = 40.0 + (runtime_index * CASES + case) as f64;
        writeln!(
            out,
            "bench-{:02},{:.1},1.08,{:.1},1.04",
            case,
            mean,
            10_000.0 / mean
        )
        .unwrap();
    }
    out
}

fn bench_score_pipeline(c: &mut Criterion) {
    let files: Vec<(&str, String)> = RUNTIMES
        .iter()
        .enumerate()
        .map(|(index, runtime)| (*runtime, synthetic_file(index)))
        .collect();

    c.bench_function("aggregate_scores", |b| {
        b.iter(|| {
            let mut table = ResultTable::new();
            for (runtime, content) in &files {
                read_scores(runtime, runtime, Cursor::new(content.as_bytes()), &mut table)
                    .unwrap();
            }
            black_box(table)
        })
    });

    let mut table = ResultTable::new();
    for (runtime, content) in &files {
        read_scores(runtime, runtime, Cursor::new(content.as_bytes()), &mut table).unwrap();
    }

    c.bench_function("align_and_layout", |b| {
        b.iter(|| {
            let matrix = AlignedMatrix::from_table(black_box(&table));
            black_box(score_charts(&matrix))
        })
    });
}

criterion_group!(benches, bench_score_pipeline);
criterion_main!(benches);
