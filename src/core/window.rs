use crate::core::ballistics::Trajectory;
use crate::core::target::Target;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const PADDING_RATIO: f64 = 0.05;

/// Data-space bounds shared by the plot and the interactive renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotWindow {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Bounds covering every shot and the target marker, padded and stretched to
/// the fixed x:y ratio.
pub fn plot_window(trajectories: &[Trajectory], target: &Target) -> PlotWindow {
    let raw_max_x = trajectories
        .iter()
        .flat_map(|t| t.points().iter().map(|p| p.0))
        .fold(target.position.0, f64::max);
    let raw_max_y = trajectories
        .iter()
        .map(Trajectory::apex_height_m)
        .fold(target.position.1, f64::max);

    let (x_span, y_span) = fixed_ratio_axis_window(raw_max_x, raw_max_y);
    PlotWindow {
        x_min: -x_span * PADDING_RATIO,
        x_max: x_span,
        y_min: 0.0,
        y_max: y_span,
    }
}

pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let mut x_span = (raw_max_x.max(1.0) * (1.0 + PADDING_RATIO)).max(1.0);
    let mut y_span = (raw_max_y.max(1.0) * (1.0 + PADDING_RATIO)).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}
