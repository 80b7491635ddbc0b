use macroquad::prelude::*;
use planet_shot::Resolution;

use crate::constants::TITLE_Y;
use crate::controls::state_text;
use crate::render::{draw_ui_text, trace_color};
use crate::state::AppRuntime;
use crate::viewport::PlotArea;

pub(crate) fn draw_hud(state: &AppRuntime, area: &PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_header_block(state, area, font);
    draw_legend(state, area, font);
    draw_status_block(state, area, screen_h, font);
}

fn draw_header_block(state: &AppRuntime, area: &PlotArea, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let planet = state.session.planet();
    let (target_x, target_y) = state.session.target().position;
    draw_ui_text(
        &format!("Can you hit the target on planet {planet}?"),
        area.left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        &format!("The target is at x = {target_x:.3} meters and y = {target_y:.3} meters"),
        area.left,
        TITLE_Y + 32.0,
        22,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        "Controls: sliders set velocity and angle | Space shoot | R new game",
        area.left,
        TITLE_Y + 60.0,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_legend(state: &AppRuntime, area: &PlotArea, font: Option<&Font>) {
    let x = area.right - 320.0;
    let mut y = area.top + 24.0;
    for trajectory in state.session.trajectories() {
        let color = trace_color(trajectory.color);
        draw_line(x, y - 5.0, x + 24.0, y - 5.0, 3.0, color);
        draw_ui_text(&trajectory.label, x + 32.0, y, 18, DARKGRAY, font);
        y += 24.0;
    }
}

fn draw_status_block(state: &AppRuntime, area: &PlotArea, screen_h: f32, font: Option<&Font>) {
    let resolution = state.session.resolution();
    let status_color = match resolution {
        Resolution::Hit => DARKGREEN,
        Resolution::OutOfGuesses { .. } => RED,
        Resolution::KeepTrying => ORANGE,
        Resolution::Ready => DARKGRAY,
    };

    draw_ui_text(
        &state.session.status_line(),
        area.left,
        screen_h - 45.0,
        26,
        status_color,
        font,
    );

    let last_landing = state
        .session
        .trajectories()
        .last()
        .map_or(String::from("-"), |t| {
            let (x, y) = t.landing_point();
            format!("({x:.2}, {y:.2}) m")
        });
    draw_ui_text(
        &format!(
            "State: {} | Shots: {} | Last landing: {} | Hit box: +/-{} m",
            state_text(state.session.state()),
            state.session.trajectories().len(),
            last_landing,
            state.session.hit_tolerance_m()
        ),
        area.left,
        screen_h - 14.0,
        20,
        BLUE,
        font,
    );

    if let Some(notice) = &state.notice {
        draw_ui_text(notice, area.left, screen_h - 76.0, 18, MAROON, font);
    }
}
