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

//! Grouped-bar SVG drawing.

use crate::error::{RenderError, Result};
use benchart_core::{BarSeries, GroupedBarData};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

const TITLE_FONT_SIZE: u32 = 28;
const TICK_LABEL_FONT_SIZE: u32 = 15;
const LEGEND_FONT_SIZE: u32 = 16;

/// Series color palette, indexed by series position.
const PALETTE: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // blue
    RGBColor(219, 68, 55),   // red
    RGBColor(244, 180, 0),   // yellow
    RGBColor(15, 157, 88),   // green
    RGBColor(171, 71, 188),  // purple
    RGBColor(0, 172, 193),   // teal
    RGBColor(255, 112, 67),  // orange
    RGBColor(93, 109, 126),  // slate
];

fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Presentation knobs for one chart artifact.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Chart caption.
    pub title: String,
    /// Y axis description.
    pub y_label: String,
    /// Output size in pixels.
    pub size: (u32, u32),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: String::new(),
            y_label: String::new(),
            size: (1000, 600),
        }
    }
}

impl ChartStyle {
    /// Style with a caption and y axis description at the default size.
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            ..Self::default()
        }
    }
}

/// Vertical extent the chart must cover, including whiskers and the
/// reference rule, with a little headroom above.
fn value_range(data: &GroupedBarData) -> (f64, f64) {
    let mut low = 0.0_f64;
    let mut high = 0.0_f64;
    for series in &data.series {
        for (index, &height) in series.heights.iter().enumerate() {
            let (below, above) = match series.spreads.as_deref() {
                Some(spreads) => (spreads[index].below, spreads[index].above),
                None => (0.0, 0.0),
            };
            low = low.min(height - below);
            high = high.max(height + above);
        }
    }
    if let Some(line) = &data.reference_line {
        high = high.max(line.value);
    }
    if high == low {
        high = low + 1.0;
    }
    let headroom = (high - low) * 0.1;
    (low, high + headroom)
}

/// X position of the left edge of `series`' bar in group slot `group`.
///
/// Slot `group` spans [group − 0.5, group + 0.5); the precomputed offset
/// and width place the bar inside it.
fn bar_left(group: usize, series: &BarSeries) -> f64 {
    group as f64 - 0.5 + series.offset
}

/// Attach the output path to a drawing-area error. The mapper is `Copy`
/// so one instance serves every fallible drawing call.
fn backend_err<E>(path: &Path) -> impl Fn(DrawingAreaErrorKind<E>) -> RenderError + Copy + '_
where
    E: std::error::Error + Send + Sync,
{
    move |e| RenderError::backend(path, e)
}

/// Draw `data` as a grouped bar chart and write it to `path` as SVG.
///
/// One bar per (group, series) pair, positioned by the dataset's
/// offset/width contract; vertical whiskers with caps where a series
/// carries spreads; a legend naming every series; the dotted reference
/// rule when the dataset has one.
///
/// # Errors
///
/// [`RenderError::EmptyChart`] when the dataset has no groups or series,
/// [`RenderError::Backend`] when the drawing backend fails.
pub fn render_grouped_bars(data: &GroupedBarData, style: &ChartStyle, path: &Path) -> Result<()> {
    if data.group_labels.is_empty() || data.series.is_empty() {
        return Err(RenderError::EmptyChart);
    }

    let backend = backend_err(path);

    let root = SVGBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let groups = data.group_labels.len();
    let (y_min, y_max) = value_range(data);
    let x_range = -0.5..(groups as f64 - 0.5);

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(backend)?;

    let labels = &data.group_labels;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups)
        .x_label_formatter(&|x| {
            let index = x.round() as usize;
            if *x >= -0.3 && index < labels.len() && (x - index as f64).abs() < 0.3 {
                labels[index].clone()
            } else {
                String::new()
            }
        })
        .x_label_style(
            ("sans-serif", TICK_LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(style.y_label.clone())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .draw()
        .map_err(backend)?;

    for (series_index, series) in data.series.iter().enumerate() {
        let color = series_color(series_index);

        let bars = (0..groups).map(|group| {
            let left = bar_left(group, series);
            Rectangle::new(
                [(left, 0.0), (left + series.width, series.heights[group])],
                color.filled(),
            )
        });
        chart
            .draw_series(bars)
            .map_err(backend)?
            .label(&series.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
            });

        if let Some(spreads) = series.spreads.as_deref() {
            let cap = series.width * 0.25;
            let mut whiskers = Vec::new();
            for group in 0..groups {
                let bounds = &spreads[group];
                if bounds.is_zero() {
                    continue;
                }
                let mid = bar_left(group, series) + series.width / 2.0;
                let bottom = series.heights[group] - bounds.below;
                let top = series.heights[group] + bounds.above;
                whiskers.push(PathElement::new(
                    vec![(mid, bottom), (mid, top)],
                    BLACK.stroke_width(1),
                ));
                whiskers.push(PathElement::new(
                    vec![(mid - cap, bottom), (mid + cap, bottom)],
                    BLACK.stroke_width(1),
                ));
                whiskers.push(PathElement::new(
                    vec![(mid - cap, top), (mid + cap, top)],
                    BLACK.stroke_width(1),
                ));
            }
            chart.draw_series(whiskers).map_err(backend)?;
        }
    }

    if let Some(line) = &data.reference_line {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-0.5, line.value), (groups as f64 - 0.5, line.value)],
                BLACK.stroke_width(1),
            )))
            .map_err(backend)?
            .label(&line.label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(1)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(backend)?;

    root.present().map_err(backend)?;
    Ok(())
}
