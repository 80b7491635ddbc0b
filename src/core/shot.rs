use std::ops::RangeInclusive;

use crate::core::error::GameError;

pub const SPEED_RANGE_MPS: RangeInclusive<u32> = 1..=100;
pub const ANGLE_RANGE_DEG: RangeInclusive<u32> = 5..=90;
pub const ANGLE_STEP_DEG: u32 = 5;

/// A shot whose speed and angle already passed boundary validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotRequest {
    speed_mps: u32,
    angle_deg: u32,
}

impl ShotRequest {
    pub fn new(speed_mps: u32, angle_deg: u32) -> Result<Self, GameError> {
        if !SPEED_RANGE_MPS.contains(&speed_mps) {
            return Err(GameError::invalid_input(format!(
                "Velocity {speed_mps} m/s is outside {}..={} m/s.",
                SPEED_RANGE_MPS.start(),
                SPEED_RANGE_MPS.end()
            )));
        }
        if !ANGLE_RANGE_DEG.contains(&angle_deg) {
            return Err(GameError::invalid_input(format!(
                "Angle {angle_deg} deg is outside {}..={} deg.",
                ANGLE_RANGE_DEG.start(),
                ANGLE_RANGE_DEG.end()
            )));
        }
        if angle_deg % ANGLE_STEP_DEG != 0 {
            return Err(GameError::invalid_input(format!(
                "Angle {angle_deg} deg must be a multiple of {ANGLE_STEP_DEG}."
            )));
        }

        Ok(Self {
            speed_mps,
            angle_deg,
        })
    }

    pub fn parse(speed: &str, angle: &str) -> Result<Self, GameError> {
        Self::new(parse_u32(speed, "velocity")?, parse_u32(angle, "angle")?)
    }

    pub fn speed_mps(self) -> u32 {
        self.speed_mps
    }

    pub fn angle_deg(self) -> u32 {
        self.angle_deg
    }
}

fn parse_u32(value: &str, label: &str) -> Result<u32, GameError> {
    value.trim().parse::<u32>().map_err(|_| {
        GameError::invalid_input(format!("Invalid {label}: '{value}'. Expected a whole number."))
    })
}

/// Snaps a raw slider value onto the closest angle the boundary accepts.
pub fn snap_angle_deg(raw_deg: f32) -> u32 {
    let (lo, hi) = (*ANGLE_RANGE_DEG.start(), *ANGLE_RANGE_DEG.end());
    let steps = (raw_deg / ANGLE_STEP_DEG as f32).round().max(0.0) as u32;
    (steps * ANGLE_STEP_DEG).clamp(lo, hi)
}

pub fn snap_speed_mps(raw_mps: f32) -> u32 {
    (raw_mps.round().max(0.0) as u32).clamp(*SPEED_RANGE_MPS.start(), *SPEED_RANGE_MPS.end())
}
