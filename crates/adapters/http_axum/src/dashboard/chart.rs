//! Energy usage chart rendered as inline SVG.
//!
//! An area chart filled down to zero, with hour labels on the x axis and a
//! watt scale on the y axis. Coordinates are computed here and laid out by
//! the `energy_chart.html` template.

use askama::Template;

use terratrack_domain::energy_log::{ENERGY_LOG_RANGE, EnergyLogSeries};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 48.0;
const Y_TICK_STEP: f64 = 0.5;

/// One horizontal grid line with its scale label.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label_y: f64,
    pub watts: f64,
}

/// One hourly data point, in chart coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub watts: f64,
}

/// Energy usage chart.
#[derive(Debug, Template)]
#[template(path = "energy_chart.html")]
pub struct EnergyChart {
    width: f64,
    height: f64,
    plot_left: f64,
    plot_right: f64,
    scale_label_x: f64,
    hour_label_y: f64,
    axis_title_y: f64,
    plot_middle_x: f64,
    plot_middle_y: f64,
    baseline: f64,
    grid: Vec<GridLine>,
    markers: Vec<Marker>,
    line_path: String,
    area_path: String,
}

impl EnergyChart {
    #[must_use]
    pub fn new(series: &EnergyLogSeries) -> Self {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        let y_max = (series.peak().max(ENERGY_LOG_RANGE.max) / Y_TICK_STEP).ceil() * Y_TICK_STEP;
        let y_at = |watts: f64| baseline - (watts / y_max) * plot_height;

        let points = series.points();
        #[allow(clippy::cast_precision_loss)]
        let step = if points.len() > 1 {
            plot_width / (points.len() - 1) as f64
        } else {
            0.0
        };

        #[allow(clippy::cast_precision_loss)]
        let markers: Vec<Marker> = points
            .iter()
            .enumerate()
            .map(|(index, point)| Marker {
                x: MARGIN_LEFT + step * index as f64,
                y: y_at(point.watts),
                label: point.label.clone(),
                watts: point.watts,
            })
            .collect();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ticks = (y_max / Y_TICK_STEP).round() as u32;
        let grid = (0..=ticks)
            .map(|tick| {
                let watts = f64::from(tick) * Y_TICK_STEP;
                let y = y_at(watts);
                GridLine {
                    y,
                    label_y: y + 4.0,
                    watts,
                }
            })
            .collect();

        let line_path = spline_path(&markers);
        let area_path = match (markers.first(), markers.last()) {
            (Some(first), Some(last)) => format!(
                "{line_path} L{:.1},{baseline:.1} L{:.1},{baseline:.1} Z",
                last.x, first.x
            ),
            _ => String::new(),
        };

        Self {
            width: WIDTH,
            height: HEIGHT,
            plot_left: MARGIN_LEFT,
            plot_right: WIDTH - MARGIN_RIGHT,
            scale_label_x: MARGIN_LEFT - 6.0,
            hour_label_y: baseline + 16.0,
            axis_title_y: HEIGHT - 8.0,
            plot_middle_x: MARGIN_LEFT + plot_width / 2.0,
            plot_middle_y: MARGIN_TOP + plot_height / 2.0,
            baseline,
            grid,
            markers,
            line_path,
            area_path,
        }
    }
}

/// Smooth path through every marker, as cubic Bézier segments
/// (Catmull-Rom tangents, end points repeated).
fn spline_path(markers: &[Marker]) -> String {
    let Some(first) = markers.first() else {
        return String::new();
    };
    let at = |index: usize| {
        let marker = &markers[index.min(markers.len() - 1)];
        (marker.x, marker.y)
    };

    let mut commands = vec![format!("M{:.1},{:.1}", first.x, first.y)];
    commands.extend((0..markers.len() - 1).map(|index| {
        let (x0, y0) = at(index.saturating_sub(1));
        let (x1, y1) = at(index);
        let (x2, y2) = at(index + 1);
        let (x3, y3) = at(index + 2);
        format!(
            "C{:.1},{:.1} {:.1},{:.1} {x2:.1},{y2:.1}",
            x1 + (x2 - x0) / 6.0,
            y1 + (y2 - y0) / 6.0,
            x2 - (x3 - x1) / 6.0,
            y2 - (y3 - y1) / 6.0,
        )
    }));
    commands.join(" ")
}
