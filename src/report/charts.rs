//! # Chart Rendering
//!
//! Renders the sentiment distribution and word-frequency images with
//! plotters. All charts are written as PNG files.

use crate::error::PipelineError;
use crate::report::frequency::{sorted_by_count, LabelCounts};
use plotters::element::Pie;
use plotters::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Label order used across the distribution charts
const LABELS: [&str; 3] = ["Positive", "Neutral", "Negative"];

/// Words drawn on a word-frequency image
const MAX_WORDS_PER_IMAGE: usize = 40;

fn chart_err<E: std::fmt::Display>(error: E) -> PipelineError {
    PipelineError::Chart(error.to_string())
}

fn label_color(index: usize) -> RGBColor {
    match index {
        0 => RGBColor(46, 160, 67),   // Positive
        1 => RGBColor(139, 148, 158), // Neutral
        _ => RGBColor(218, 54, 51),   // Negative
    }
}

/// Render the per-label record counts as a bar chart
pub fn render_bar_chart(
    counts: &LabelCounts,
    path: &Path,
    subreddit: &str,
) -> Result<(), PipelineError> {
    let values = [counts.positive, counts.neutral, counts.negative];
    let y_max = values.iter().copied().max().unwrap_or(0).max(1);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Sentiment Distribution of r/{subreddit} Posts"),
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0usize..3usize).into_segmented(), 0usize..y_max + y_max / 5 + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sentiment")
        .y_desc("Number of Posts")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) if *index < LABELS.len() => LABELS[*index].to_string(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(index, &count)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0),
                    (SegmentValue::Exact(index + 1), count),
                ],
                label_color(index).filled(),
            );
            bar.set_margin(0, 0, 30, 30);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Render the per-label proportions as a pie chart
pub fn render_pie_chart(
    counts: &LabelCounts,
    path: &Path,
    subreddit: &str,
) -> Result<(), PipelineError> {
    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let root = root
        .titled(
            &format!("Sentiment Distribution of r/{subreddit} Posts"),
            ("sans-serif", 28),
        )
        .map_err(chart_err)?;

    // Zero-count slices confuse the angle math, keep only present labels
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for (index, &count) in [counts.positive, counts.neutral, counts.negative]
        .iter()
        .enumerate()
    {
        if count > 0 {
            sizes.push(count as f64);
            colors.push(label_color(index));
            labels.push(LABELS[index].to_string());
        }
    }

    let center = (400, 420);
    let radius = 280.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 24).into_font());
    pie.percentages(("sans-serif", 20).into_font().color(&BLACK));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;
    Ok(())
}

/// Render a frequency-weighted word image
///
/// The most frequent words are laid out row by row on a dark canvas,
/// with font size and color intensity proportional to frequency.
pub fn render_word_image(
    frequencies: &HashMap<String, usize>,
    path: &Path,
    title: &str,
    base_color: RGBColor,
) -> Result<(), PipelineError> {
    let words = sorted_by_count(frequencies);
    let words = &words[..words.len().min(MAX_WORDS_PER_IMAGE)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&BLACK).map_err(chart_err)?;

    root.draw(&Text::new(
        title.to_string(),
        (20, 20),
        ("sans-serif", 32).into_font().color(&WHITE),
    ))
    .map_err(chart_err)?;

    let max_count = words.first().map(|(_, c)| *c).unwrap_or(1) as f64;
    let min_count = words.last().map(|(_, c)| *c).unwrap_or(1) as f64;

    let mut x: i32 = 30;
    let mut y: i32 = 100;

    for (word, count) in words {
        let weight = if max_count > min_count {
            (*count as f64 - min_count) / (max_count - min_count)
        } else {
            1.0
        };
        let size = (18.0 + weight * 42.0) as i32;

        // Rough width estimate; exact metrics are not worth a font pass
        let advance = word.len() as i32 * size * 6 / 10 + 30;
        if x + advance > 1170 {
            x = 30;
            y += 75;
            if y > 740 {
                break;
            }
        }

        let color = base_color.mix(0.45 + 0.55 * weight);
        root.draw(&Text::new(
            word.clone(),
            (x, y),
            ("sans-serif", size).into_font().color(&color),
        ))
        .map_err(chart_err)?;

        x += advance;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Green used for the positive word image
pub fn positive_word_color() -> RGBColor {
    RGBColor(63, 185, 80)
}

/// Red used for the negative word image
pub fn negative_word_color() -> RGBColor {
    RGBColor(248, 81, 73)
}
