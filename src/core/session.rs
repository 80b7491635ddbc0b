//! Per-game state: remaining guesses, shot history and outcome resolution.
//!
//! A `Session` draws its planet and target once, at construction, and never
//! re-derives them. Front ends hold the session and only read from it to
//! render.

use rand::Rng;

use crate::core::ballistics::{Trajectory, compute_trajectory};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::planets::Planet;
use crate::core::shot::ShotRequest;
use crate::core::target::{Solution, Target, generate_target, pick_planet};

pub const STARTING_GUESSES: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingShot,
    Hit,
    OutOfGuesses,
}

/// What a front end should tell the player after the latest shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// No shot fired yet.
    Ready,
    KeepTrying,
    Hit,
    OutOfGuesses { solution: Solution },
}

#[derive(Clone, Debug)]
pub struct Session {
    remaining_guesses: u32,
    trajectories: Vec<Trajectory>,
    target: Target,
    hit_tolerance_m: f64,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let planet = pick_planet(rng);
        let target = generate_target(rng, planet)?;
        Self::with_target(target, config)
    }

    pub fn with_target(target: Target, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        tracing::info!(
            "New game on {} (g = {} m/s^2), target at x = {:.3} m",
            target.planet,
            target.planet.gravity_mps2(),
            target.position.0
        );
        Ok(Self {
            remaining_guesses: STARTING_GUESSES,
            trajectories: Vec::new(),
            target,
            hit_tolerance_m: config.hit_tolerance_m,
        })
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn planet(&self) -> Planet {
        self.target.planet
    }

    pub fn hit_tolerance_m(&self) -> f64 {
        self.hit_tolerance_m
    }

    pub fn fire_shot(&mut self, shot: ShotRequest) -> Result<Resolution, GameError> {
        if self.state() != SessionState::AwaitingShot {
            tracing::debug!("Shot ignored: game already finished");
            return Err(GameError::GameOver);
        }

        let planet = self.planet();
        let trajectory = compute_trajectory(
            planet,
            f64::from(shot.speed_mps()),
            f64::from(shot.angle_deg()).to_radians(),
        )?;
        tracing::debug!(
            "Shot v0={} angle={} landed at x={:.3} m",
            shot.speed_mps(),
            shot.angle_deg(),
            trajectory.landing_point().0
        );

        self.remaining_guesses -= 1;
        self.trajectories.push(trajectory);

        let resolution = self.resolution();
        match resolution {
            Resolution::Hit => tracing::info!("Target hit after {} shot(s)", self.trajectories.len()),
            Resolution::OutOfGuesses { solution } => tracing::info!(
                "Out of guesses; solution was v0={} angle={}",
                solution.speed_mps,
                solution.angle_deg
            ),
            _ => {}
        }
        Ok(resolution)
    }

    /// True if any recorded shot landed inside the tolerance box.
    pub fn check_hit(&self) -> bool {
        self.trajectories.iter().any(|trajectory| {
            within_tolerance(
                self.target.position,
                trajectory.landing_point(),
                self.hit_tolerance_m,
            )
        })
    }

    pub fn state(&self) -> SessionState {
        if self.check_hit() {
            SessionState::Hit
        } else if self.remaining_guesses == 0 {
            SessionState::OutOfGuesses
        } else {
            SessionState::AwaitingShot
        }
    }

    pub fn resolution(&self) -> Resolution {
        match self.state() {
            SessionState::Hit => Resolution::Hit,
            SessionState::OutOfGuesses => Resolution::OutOfGuesses {
                solution: self.target.solution(),
            },
            SessionState::AwaitingShot if self.trajectories.is_empty() => Resolution::Ready,
            SessionState::AwaitingShot => Resolution::KeepTrying,
        }
    }

    pub fn status_line(&self) -> String {
        match self.resolution() {
            Resolution::Ready => format!(
                "You have {} guesses remaining.",
                self.remaining_guesses
            ),
            Resolution::KeepTrying => format!(
                "Keep trying! You have {} guesses remaining.",
                self.remaining_guesses
            ),
            Resolution::Hit => "You hit the target!".to_string(),
            Resolution::OutOfGuesses { solution } => format!(
                "You're out of guesses! One possible solution was v0={} m/s and angle={} deg.",
                solution.speed_mps, solution.angle_deg
            ),
        }
    }
}

/// Box test on both axes, strict on the edge.
pub fn within_tolerance(target: (f64, f64), landing: (f64, f64), tolerance_m: f64) -> bool {
    (target.0 - landing.0).abs() < tolerance_m && (target.1 - landing.1).abs() < tolerance_m
}

#[cfg(test)]
mod tests {
    use super::{Resolution, STARTING_GUESSES, Session, SessionState, within_tolerance};
    use crate::core::config::GameConfig;
    use crate::core::error::GameError;
    use crate::core::planets::Planet;
    use crate::core::shot::ShotRequest;
    use crate::core::target::{Solution, target_for_solution};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn earth_session(solution_speed: u32) -> Session {
        let target = target_for_solution(
            Planet::Earth,
            Solution {
                speed_mps: solution_speed,
                angle_deg: 45,
            },
        )
        .expect("valid solution");
        Session::with_target(target, &GameConfig::default()).expect("valid config")
    }

    fn shot(speed: u32, angle: u32) -> ShotRequest {
        ShotRequest::new(speed, angle).expect("valid shot")
    }

    #[test]
    fn starts_waiting_for_first_shot() {
        let session = earth_session(50);
        assert_eq!(session.remaining_guesses(), STARTING_GUESSES);
        assert!(session.trajectories().is_empty());
        assert_eq!(session.state(), SessionState::AwaitingShot);
        assert_eq!(session.resolution(), Resolution::Ready);
        assert!(!session.check_hit());
    }

    #[test]
    fn matching_shot_is_a_hit() {
        let mut session = earth_session(50);
        let resolution = session.fire_shot(shot(50, 45)).expect("shot accepted");

        assert_eq!(resolution, Resolution::Hit);
        assert_eq!(session.state(), SessionState::Hit);
        assert_eq!(session.remaining_guesses(), 2);
        assert_eq!(session.status_line(), "You hit the target!");
    }

    #[test]
    fn miss_keeps_trying() {
        let mut session = earth_session(50);
        let resolution = session.fire_shot(shot(40, 45)).expect("shot accepted");

        assert_eq!(resolution, Resolution::KeepTrying);
        assert_eq!(session.remaining_guesses(), 2);
        assert_eq!(session.trajectories().len(), 1);
        assert!(session.status_line().starts_with("Keep trying!"));
    }

    #[test]
    fn three_misses_reveal_solution() {
        let mut session = earth_session(50);
        session.fire_shot(shot(10, 45)).unwrap();
        session.fire_shot(shot(20, 45)).unwrap();
        let resolution = session.fire_shot(shot(30, 45)).unwrap();

        let expected = Solution {
            speed_mps: 50,
            angle_deg: 45,
        };
        assert_eq!(resolution, Resolution::OutOfGuesses { solution: expected });
        assert_eq!(session.state(), SessionState::OutOfGuesses);
        assert!(session.status_line().contains("v0=50 m/s and angle=45 deg"));
    }

    #[test]
    fn shots_after_running_out_change_nothing() {
        let mut session = earth_session(50);
        for speed in [10, 20, 30] {
            session.fire_shot(shot(speed, 45)).unwrap();
        }

        let err = session.fire_shot(shot(50, 45)).expect_err("no guesses left");
        assert!(matches!(err, GameError::GameOver));
        assert_eq!(session.remaining_guesses(), 0);
        assert_eq!(session.trajectories().len(), 3);
        assert!(!session.check_hit());
    }

    #[test]
    fn shots_after_a_hit_are_rejected() {
        let mut session = earth_session(50);
        session.fire_shot(shot(50, 45)).unwrap();
        assert!(session.fire_shot(shot(10, 45)).is_err());
        assert_eq!(session.trajectories().len(), 1);
    }

    #[test]
    fn hit_on_last_guess_wins_over_running_out() {
        let mut session = earth_session(50);
        session.fire_shot(shot(10, 45)).unwrap();
        session.fire_shot(shot(20, 45)).unwrap();
        let resolution = session.fire_shot(shot(50, 45)).unwrap();
        assert_eq!(resolution, Resolution::Hit);
        assert_eq!(session.remaining_guesses(), 0);
    }

    #[test]
    fn tolerance_box_edges() {
        assert!(within_tolerance((100.0, 0.0), (100.5, 0.3), 1.0));
        assert!(!within_tolerance((100.0, 0.0), (102.0, 0.0), 1.0));
        assert!(!within_tolerance((100.0, 0.0), (101.0, 0.0), 1.0));
        assert!(!within_tolerance((100.0, 0.0), (100.0, 1.5), 1.0));
    }

    fn session_with_target_at(planet: Planet, position: (f64, f64)) -> Session {
        let mut target = target_for_solution(
            planet,
            Solution {
                speed_mps: 40,
                angle_deg: 45,
            },
        )
        .unwrap();
        target.position = position;
        Session::with_target(target, &GameConfig::default()).unwrap()
    }

    #[test]
    fn check_hit_against_target_at_one_hundred_meters() {
        // 33 m/s at 10 deg on Mars lands at about 100.66 m.
        let mut mars = session_with_target_at(Planet::Mars, (100.0, 0.0));
        assert_eq!(mars.fire_shot(shot(10, 45)).unwrap(), Resolution::KeepTrying);
        assert_eq!(mars.fire_shot(shot(33, 10)).unwrap(), Resolution::Hit);
        let (x, y) = mars.trajectories()[1].landing_point();
        assert!((x - 100.0).abs() < 1.0 && y.abs() < 1.0);
        assert!(mars.check_hit());
        assert!(mars.check_hit());

        // 34 m/s at 30 deg on Earth lands at about 102.16 m.
        let mut earth = session_with_target_at(Planet::Earth, (100.0, 0.0));
        assert_eq!(earth.fire_shot(shot(34, 30)).unwrap(), Resolution::KeepTrying);
        assert!((earth.trajectories()[0].landing_point().0 - 102.16).abs() < 0.01);
        assert!(!earth.check_hit());
    }

    #[test]
    fn complementary_angles_fall_short() {
        // 30 and 60 deg share a range, shorter than the 45 deg solution.
        let mut session = earth_session(50);
        let range_target = session.target().position.0;
        assert!(range_target > 0.0);
        assert_eq!(session.fire_shot(shot(50, 30)).unwrap(), Resolution::KeepTrying);
        assert_eq!(session.fire_shot(shot(50, 60)).unwrap(), Resolution::KeepTrying);
    }

    #[test]
    fn check_hit_is_idempotent() {
        let mut session = earth_session(50);
        session.fire_shot(shot(50, 45)).unwrap();
        assert_eq!(session.check_hit(), session.check_hit());
        assert_eq!(session.remaining_guesses(), 2);
    }

    #[test]
    fn tolerance_is_taken_from_config() {
        let target = target_for_solution(
            Planet::Earth,
            Solution {
                speed_mps: 50,
                angle_deg: 45,
            },
        )
        .unwrap();
        // 49 m/s at 45 deg lands about 10 m short of the 50 m/s target.
        let wide = GameConfig {
            hit_tolerance_m: 15.0,
            ..GameConfig::default()
        };
        let mut session = Session::with_target(target, &wide).unwrap();
        assert_eq!(session.fire_shot(shot(49, 45)).unwrap(), Resolution::Hit);

        let mut strict = Session::with_target(target, &GameConfig::default()).unwrap();
        assert_eq!(strict.fire_shot(shot(49, 45)).unwrap(), Resolution::KeepTrying);
    }

    #[test]
    fn random_session_target_is_fixed_for_the_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut session = Session::new(&GameConfig::default(), &mut rng).unwrap();
        let before = *session.target();
        let _ = session.fire_shot(shot(10, 45));
        assert_eq!(*session.target(), before);
        assert_eq!(session.target().position, before.position);
        assert_eq!(session.planet(), before.planet);
    }
}
