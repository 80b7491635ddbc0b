use planet_shot::ShotRequest;
use planet_shot::core::shot::{snap_angle_deg, snap_speed_mps};

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.new_game {
        if let Err(err) = state.start_new_game() {
            tracing::error!("Could not start a new game: {err}");
            state.notice = Some(err.to_string());
        }
        return;
    }

    if actions.shoot {
        let shot = ShotRequest::new(
            snap_speed_mps(state.speed_slider),
            snap_angle_deg(state.angle_slider),
        )
        .and_then(|shot| state.session.fire_shot(shot));
        state.notice = match shot {
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("Shot rejected: {err}");
                Some(err.to_string())
            }
        };
    }
}
