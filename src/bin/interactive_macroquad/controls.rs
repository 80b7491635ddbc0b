use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use planet_shot::SessionState;
use planet_shot::core::shot::{ANGLE_RANGE_DEG, SPEED_RANGE_MPS, snap_angle_deg, snap_speed_mps};

use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) shoot: bool,
    pub(crate) new_game: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            shoot: self.shoot || other.shoot,
            new_game: self.new_game || other.new_game,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        shoot: is_key_pressed(KeyCode::Space),
        new_game: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let planet = state.session.planet();
    let awaiting_shot = state.session.state() == SessionState::AwaitingShot;

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(360.0, 260.0))
        .label("Enter the parameters")
        .ui(&mut *root_ui(), |ui| {
            ui.label(
                None,
                &format!("{}'s gravity: {} m/s^2", planet, planet.gravity_mps2()),
            );
            ui.separator();
            ui.slider(
                hash!(),
                "Initial Velocity (m/s)",
                *SPEED_RANGE_MPS.start() as f32..*SPEED_RANGE_MPS.end() as f32,
                &mut state.speed_slider,
            );
            ui.slider(
                hash!(),
                "Initial Angle (deg)",
                *ANGLE_RANGE_DEG.start() as f32..*ANGLE_RANGE_DEG.end() as f32,
                &mut state.angle_slider,
            );
            ui.label(
                None,
                &format!(
                    "Shot: {} m/s at {} deg",
                    snap_speed_mps(state.speed_slider),
                    snap_angle_deg(state.angle_slider)
                ),
            );
            ui.separator();
            if awaiting_shot && ui.button(None, "Shoot! (Space)") {
                actions.shoot = true;
            }
            if ui.button(None, "New Game (R)") {
                actions.new_game = true;
            }
            ui.label(
                None,
                &format!(
                    "Guesses remaining: {}",
                    state.session.remaining_guesses()
                ),
            );
        });

    actions
}

pub(crate) fn state_text(state: SessionState) -> &'static str {
    match state {
        SessionState::AwaitingShot => "Aiming",
        SessionState::Hit => "Hit",
        SessionState::OutOfGuesses => "Out of guesses",
    }
}
