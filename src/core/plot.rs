//! Static SVG plot of a game: every shot, the target marker and a legend.
//! Read-only over the session.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::core::ballistics::Trajectory;
use crate::core::config::PlotConfig;
use crate::core::error::GameError;
use crate::core::session::Session;
use crate::core::window::plot_window;

const TARGET_MARKER_PX: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed { size: u32, spacing: u32 },
}

/// Dash pattern for the n-th shot, cycling like a plot's default line styles.
pub fn line_dash_for(shot_index: usize) -> LineDash {
    match shot_index % 4 {
        0 => LineDash::Solid,
        1 => LineDash::Dashed {
            size: 10,
            spacing: 6,
        },
        2 => LineDash::Dashed {
            size: 10,
            spacing: 3,
        },
        _ => LineDash::Dashed {
            size: 2,
            spacing: 4,
        },
    }
}

pub fn default_plot_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("planet_shot_{}.svg", now.format("%Y%m%d_%H%M%S")))
}

pub fn render_svg(session: &Session, path: &Path, config: &PlotConfig) -> Result<(), GameError> {
    draw_session(session, path, config).map_err(|e| GameError::Render(e.to_string()))?;
    tracing::info!("Wrote trajectory plot to {}", path.display());
    Ok(())
}

fn trace_style(trajectory: &Trajectory) -> ShapeStyle {
    let (r, g, b) = trajectory.color.rgb();
    RGBColor(r, g, b).stroke_width(2)
}

fn draw_session(session: &Session, path: &Path, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let window = plot_window(session.trajectories(), session.target());
    let root = SVGBackend::new(path, (config.width_px, config.height_px)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Trajectory of a projectile on {}", session.planet()),
            ("sans-serif", 24),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;

    chart
        .configure_mesh()
        .x_desc("x - horizontal distance in meters")
        .y_desc("y - vertical distance in meters")
        .draw()?;

    for (idx, trajectory) in session.trajectories().iter().enumerate() {
        let style = trace_style(trajectory);
        let points = trajectory.points().iter().copied();
        let anno = match line_dash_for(idx) {
            LineDash::Solid => chart.draw_series(LineSeries::new(points, style))?,
            LineDash::Dashed { size, spacing } => {
                chart.draw_series(DashedLineSeries::new(points, size, spacing, style))?
            }
        };
        anno.label(trajectory.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    let target_style = RGBColor(219, 39, 119).filled();
    chart
        .draw_series(std::iter::once(Circle::new(
            session.target().position,
            TARGET_MARKER_PX,
            target_style,
        )))?
        .label("Target")
        .legend(move |(x, y)| Circle::new((x + 10, y), TARGET_MARKER_PX / 2, target_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
