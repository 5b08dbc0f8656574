//! SVG line charts for inspecting signals.
//!
//! Requires the `plot` feature.

use crate::{Error, Result};
use plotters::prelude::*;
use std::path::Path;

/// A labelled y sequence drawn against the chart's shared x axis.
#[derive(Debug, Clone)]
struct Series {
    label: String,
    values: Vec<f64>,
}

/// A line chart of one or more series over a shared x axis.
///
/// # Examples
///
/// ```no_run
/// use rfpulse::plot::LineChart;
///
/// let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|v| (v / 10.0).sin()).collect();
///
/// LineChart::new("Sine", &x)
///     .x_label("Sample")
///     .y_label("Amplitude")
///     .series("sin", &y)
///     .render_svg("sine.svg")
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LineChart {
    title: String,
    x_label: String,
    y_label: String,
    x: Vec<f64>,
    series: Vec<Series>,
    size: (u32, u32),
}

impl LineChart {
    pub fn new(title: impl Into<String>, x: &[f64]) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x: x.to_vec(),
            series: Vec::new(),
            size: (1000, 400),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Image size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Adds a labelled series; its length is checked when rendering.
    pub fn series(mut self, label: impl Into<String>, values: &[f64]) -> Self {
        self.series.push(Series {
            label: label.into(),
            values: values.to_vec(),
        });
        self
    }

    /// Checks that there is something to draw and every series lines up
    /// with the x axis.
    pub fn validate(&self) -> Result<()> {
        if self.x.is_empty() || self.series.is_empty() {
            return Err(Error::EmptySignal);
        }
        for series in &self.series {
            if series.values.len() != self.x.len() {
                return Err(Error::LengthMismatch {
                    expected: self.x.len(),
                    actual: series.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Renders the chart as an SVG file.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySignal`] if there is no x data or no series
    /// - [`Error::LengthMismatch`] if a series does not match the x length
    /// - [`Error::Plot`] if the backend fails to draw or write the file
    pub fn render_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;

        let (x_min, x_max) = padded_range(self.x.iter().copied());
        let (y_min, y_max) =
            padded_range(self.series.iter().flat_map(|s| s.values.iter().copied()));

        let root = SVGBackend::new(path.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(plot_error)?;

        for (index, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    self.x.iter().copied().zip(series.values.iter().copied()),
                    color.stroke_width(2),
                ))
                .map_err(plot_error)?
                .label(series.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
        log::info!("wrote chart '{}' to {}", self.title, path.as_ref().display());
        Ok(())
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}

/// Min and max of the values, widened by 5% so lines do not touch the frame.
/// A flat or empty sequence gets a unit-wide range.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() {
        return (-1.0, 1.0);
    }
    if max - min == 0.0 {
        return (min - 0.5, max + 0.5);
    }

    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
