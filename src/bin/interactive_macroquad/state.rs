use planet_shot::{GameConfig, GameError, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::{DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS};

pub(crate) struct AppRuntime {
    pub(crate) config: GameConfig,
    pub(crate) session: Session,
    pub(crate) speed_slider: f32,
    pub(crate) angle_slider: f32,
    pub(crate) notice: Option<String>,
    rng: ChaCha8Rng,
}

impl AppRuntime {
    pub(crate) fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.resolved_seed());
        let session = Session::new(&config, &mut rng)?;
        Ok(Self {
            config,
            session,
            speed_slider: DEFAULT_SPEED_MPS,
            angle_slider: DEFAULT_ANGLE_DEG,
            notice: None,
            rng,
        })
    }

    /// Replaces the session with a freshly drawn game. Only called on an
    /// explicit player request, never per frame.
    pub(crate) fn start_new_game(&mut self) -> Result<(), GameError> {
        self.session = Session::new(&self.config, &mut self.rng)?;
        self.speed_slider = DEFAULT_SPEED_MPS;
        self.angle_slider = DEFAULT_ANGLE_DEG;
        self.notice = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AppRuntime;
    use crate::constants::{DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS};
    use planet_shot::{GameConfig, SessionState};

    fn seeded_config() -> GameConfig {
        GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        }
    }

    #[test]
    fn launch_opens_directly_into_a_playable_game() {
        let runtime = AppRuntime::new(seeded_config()).expect("valid config");

        assert_eq!(runtime.session.state(), SessionState::AwaitingShot);
        assert_eq!(runtime.session.remaining_guesses(), 3);
        assert!(runtime.session.trajectories().is_empty());
        assert_eq!(runtime.speed_slider, DEFAULT_SPEED_MPS);
        assert_eq!(runtime.angle_slider, DEFAULT_ANGLE_DEG);
        assert!(runtime.notice.is_none());
    }

    #[test]
    fn new_game_resets_sliders_and_notice() {
        let mut runtime = AppRuntime::new(seeded_config()).expect("valid config");
        runtime.speed_slider = 12.0;
        runtime.angle_slider = 85.0;
        runtime.notice = Some("stale".to_string());

        runtime.start_new_game().expect("fresh game");

        assert_eq!(runtime.session.state(), SessionState::AwaitingShot);
        assert_eq!(runtime.speed_slider, DEFAULT_SPEED_MPS);
        assert_eq!(runtime.angle_slider, DEFAULT_ANGLE_DEG);
        assert!(runtime.notice.is_none());
    }
}
