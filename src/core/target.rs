use rand::Rng;
use serde::Serialize;

use crate::core::ballistics::compute_trajectory;
use crate::core::error::GameError;
use crate::core::planets::Planet;

pub const SOLUTION_SPEED_MIN_MPS: u32 = 30;
pub const SOLUTION_SPEED_MAX_MPS: u32 = 60;
pub const SOLUTION_ANGLE_DEG: u32 = 45;

/// Launch parameters known to land on the target. Revealed only when the
/// player runs out of guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub speed_mps: u32,
    pub angle_deg: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Target {
    pub position: (f64, f64),
    pub planet: Planet,
    solution: Solution,
}

impl Target {
    pub fn solution(&self) -> Solution {
        self.solution
    }
}

pub fn pick_planet<R: Rng + ?Sized>(rng: &mut R) -> Planet {
    let index = rng.gen_range(0..Planet::ALL.len());
    Planet::ALL[index]
}

pub fn generate_target<R: Rng + ?Sized>(rng: &mut R, planet: Planet) -> Result<Target, GameError> {
    let speed_mps = rng.gen_range(SOLUTION_SPEED_MIN_MPS..=SOLUTION_SPEED_MAX_MPS);
    target_for_solution(
        planet,
        Solution {
            speed_mps,
            angle_deg: SOLUTION_ANGLE_DEG,
        },
    )
}

/// Places the target where `solution` lands on `planet`.
pub fn target_for_solution(planet: Planet, solution: Solution) -> Result<Target, GameError> {
    let trajectory = compute_trajectory(
        planet,
        f64::from(solution.speed_mps),
        f64::from(solution.angle_deg).to_radians(),
    )?;
    let (landing_x, _) = trajectory.landing_point();

    Ok(Target {
        position: (landing_x, 0.0),
        planet,
        solution,
    })
}
