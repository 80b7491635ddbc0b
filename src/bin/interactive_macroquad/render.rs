use macroquad::prelude::*;
use planet_shot::core::window::PlotWindow;
use planet_shot::{Target, TraceColor, Trajectory};

use crate::constants::{TARGET_MARKER_RADIUS, X_GRID_LINES, Y_GRID_LINES};
use crate::viewport::{PlotArea, world_to_screen};

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn trace_color(color: TraceColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgba(r, g, b, 255)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: &PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(area: &PlotArea, window: &PlotWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        let value = window.x_min + f64::from(t) * window.x_span();
        let label = format_axis_value(value, window.x_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        let value = window.y_min + f64::from(t) * window.y_span();
        let label = format_axis_value(value, window.y_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "x - horizontal distance (m)",
        area.right - 230.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "y - vertical distance (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_trajectory(trajectory: &Trajectory, window: &PlotWindow, area: &PlotArea) {
    let points = trajectory.points();
    if points.len() < 2 {
        return;
    }
    let color = trace_color(trajectory.color);
    let mut prev = world_to_screen(points[0], window, area);
    for point in points.iter().skip(1).copied() {
        let cur = world_to_screen(point, window, area);
        draw_line(prev.x, prev.y, cur.x, cur.y, 3.0, color);
        prev = cur;
    }
}

pub(crate) fn draw_target(target: &Target, window: &PlotWindow, area: &PlotArea) {
    let center = world_to_screen(target.position, window, area);
    draw_circle(
        center.x,
        center.y,
        TARGET_MARKER_RADIUS,
        Color::from_rgba(219, 39, 119, 230),
    );
    draw_circle_lines(center.x, center.y, TARGET_MARKER_RADIUS, 2.0, MAROON);
}
