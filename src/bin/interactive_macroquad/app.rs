use macroquad::prelude::*;
use planet_shot::core::window::plot_window;
use planet_shot::{GameConfig, GameError};

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::apply_actions;
use crate::hud::draw_hud;
use crate::render::{draw_axis_tick_labels, draw_grid, draw_target, draw_trajectory};
use crate::state::AppRuntime;
use crate::viewport::PlotArea;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Planet Shot".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> Result<GameConfig, GameError> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json_file(path),
        None => Ok(GameConfig::default()),
    }
}

pub(crate) async fn run() -> Result<(), GameError> {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config()?)?;

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        let window = plot_window(state.session.trajectories(), state.session.target());

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(&area, Color::from_rgba(227, 231, 236, 255));
        draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
        draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(&area, &window, ui_font.as_ref());

        for trajectory in state.session.trajectories() {
            draw_trajectory(trajectory, &window, &area);
        }
        draw_target(state.session.target(), &window, &area);

        draw_hud(&state, &area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
