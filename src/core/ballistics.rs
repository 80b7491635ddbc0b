use crate::core::error::GameError;
use crate::core::planets::{Planet, TraceColor};

pub const TRAJECTORY_SAMPLES: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    pub angle_rad: f64,
    pub gravity_mps2: f64,
}

impl LaunchInputs {
    pub fn from_degrees(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> Self {
        Self {
            speed_mps,
            angle_rad: angle_deg.to_radians(),
            gravity_mps2,
        }
    }
}

/// Sampled flight path of one shot. Immutable once computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub inputs: LaunchInputs,
    pub planet: Planet,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub label: String,
    pub color: TraceColor,
    points: Vec<(f64, f64)>,
}

impl Trajectory {
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Final sample, taken at t = t_max.
    pub fn landing_point(&self) -> (f64, f64) {
        self.points.last().copied().unwrap_or((0.0, 0.0))
    }

    pub fn apex_height_m(&self) -> f64 {
        self.points.iter().fold(0.0f64, |acc, p| acc.max(p.1))
    }
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let vx = inputs.speed_mps * inputs.angle_rad.cos();
    let vy = inputs.speed_mps * inputs.angle_rad.sin();
    (vx, vy)
}

pub fn position_at_time(inputs: LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * inputs.gravity_mps2 * time_s * time_s);
    (x, y)
}

pub fn flight_time(inputs: LaunchInputs) -> Result<f64, GameError> {
    if !inputs.angle_rad.is_finite()
        || !inputs.speed_mps.is_finite()
        || !inputs.gravity_mps2.is_finite()
    {
        return Err(GameError::invalid_input("Inputs must be finite numbers."));
    }
    if inputs.speed_mps <= 0.0 {
        return Err(GameError::invalid_input(format!(
            "Velocity must be positive, got {}.",
            inputs.speed_mps
        )));
    }
    if inputs.gravity_mps2 <= 0.0 {
        return Err(GameError::invalid_input(format!(
            "Gravity must be positive, got {}.",
            inputs.gravity_mps2
        )));
    }

    let (_, vy) = velocity_components(inputs);
    let t_max = 2.0 * vy / inputs.gravity_mps2;
    if inputs.angle_rad <= 0.0 || inputs.angle_rad >= std::f64::consts::PI || t_max <= 0.0 {
        return Err(GameError::invalid_input(format!(
            "Launch angle {:.2} deg gives no flight time ({t_max}).",
            inputs.angle_rad.to_degrees()
        )));
    }

    Ok(t_max)
}

/// Evenly spaced times covering [0, t_max], both endpoints included.
pub fn sample_times(time_of_flight_s: f64, samples: usize) -> Vec<f64> {
    let sample_count = samples.max(2);
    let last = (sample_count - 1) as f64;
    (0..sample_count)
        .map(|i| {
            if i == sample_count - 1 {
                time_of_flight_s
            } else {
                (i as f64 * time_of_flight_s) / last
            }
        })
        .collect()
}

/// Samples the flight path for any gravity, without planet metadata.
pub fn sample_path(inputs: LaunchInputs) -> Result<Vec<(f64, f64)>, GameError> {
    let t_max = flight_time(inputs)?;
    Ok(sample_times(t_max, TRAJECTORY_SAMPLES)
        .into_iter()
        .map(|t| position_at_time(inputs, t))
        .collect())
}

/// Shot fired on `planet`: gravity, label and color all come from it.
pub fn compute_trajectory(
    planet: Planet,
    speed_mps: f64,
    angle_rad: f64,
) -> Result<Trajectory, GameError> {
    let inputs = LaunchInputs {
        speed_mps,
        angle_rad,
        gravity_mps2: planet.gravity_mps2(),
    };
    let t_max = flight_time(inputs)?;
    let points = sample_path(inputs)?;
    let (range_m, _) = position_at_time(inputs, t_max);

    Ok(Trajectory {
        inputs,
        planet,
        flight_time_s: t_max,
        range_m,
        label: format!(
            "v0={}, θ={:.2}, g={} ({})",
            inputs.speed_mps, inputs.angle_rad, inputs.gravity_mps2, planet
        ),
        color: planet.trace_color(),
        points,
    })
}
