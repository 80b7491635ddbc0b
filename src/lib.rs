//! Projectile guessing game engine: ballistics, hidden target generation and
//! the per-game session state machine. Front ends live in the binaries.

pub mod core {
    pub mod ballistics;
    pub mod config;
    pub mod error;
    pub mod planets;
    pub mod plot;
    pub mod session;
    pub mod shot;
    pub mod target;
    pub mod window;
}

pub use crate::core::ballistics::{LaunchInputs, Trajectory, compute_trajectory};
pub use crate::core::config::GameConfig;
pub use crate::core::error::GameError;
pub use crate::core::planets::{Planet, TraceColor};
pub use crate::core::session::{Resolution, Session, SessionState};
pub use crate::core::shot::ShotRequest;
pub use crate::core::target::{Solution, Target};
