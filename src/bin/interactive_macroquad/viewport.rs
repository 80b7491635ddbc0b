use macroquad::prelude::*;
use planet_shot::core::window::PlotWindow;

/// Screen rectangle the plot is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub(crate) fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

pub(crate) fn world_to_screen(world: (f64, f64), window: &PlotWindow, area: &PlotArea) -> Vec2 {
    let tx = ((world.0 - window.x_min) / window.x_span().max(1.0)) as f32;
    let ty = ((world.1 - window.y_min) / window.y_span().max(1.0)) as f32;
    vec2(area.left + tx * area.width(), area.bottom - ty * area.height())
}
