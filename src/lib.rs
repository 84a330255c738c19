//! Golf Sim - arcade golf shot simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clubs, holes, ball flight, game state)
//! - `tuning`: Data-driven physics and rules balance
//! - `error`: Rejected requests and bad tuning

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{RequestRejected, TuningError};
pub use sim::{SimulationSession, Snapshot};
pub use tuning::Tuning;

use glam::{Vec2, Vec3};

/// Engine constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep in scaled seconds (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 32;

    /// Golf ball radius (metres)
    pub const BALL_RADIUS: f32 = 0.0214;
    /// Ball centre when teed up
    pub const TEE_ORIGIN: Vec3 = Vec3::new(0.0, BALL_RADIUS, 0.0);

    /// Flight loft floor, keeps the projectile solver finite for the putter
    pub const MIN_FLIGHT_LOFT_DEG: f32 = 2.0;
    /// Smallest range handed to the launch solver (yards)
    pub const MIN_EFFECTIVE_YARDS: f32 = 0.01;
    /// Lateral miss under this fraction of carry reads as straight
    pub const STRAIGHT_TOLERANCE: f32 = 0.02;

    /// Hazards start this far from the tee (yards)
    pub const HAZARD_START_YARDS: f32 = 50.0;
    /// Maximum hazard offset from the centre line (yards)
    pub const LATERAL_SCATTER_YARDS: f32 = 40.0;
}

/// Ground-plane projection (x lateral, y downrange)
#[inline]
pub fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}
