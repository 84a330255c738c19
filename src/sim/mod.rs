//! Deterministic shot simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod autoplay;
pub mod club;
pub mod hazard;
pub mod hole;
pub mod session;
pub mod shot;
pub mod state;
pub mod tick;

pub use autoplay::plan_shot;
pub use club::{Club, ClubCatalog, ClubCategory, Wind};
pub use hazard::{
    TreeContact, check_tree_collision, classify_rest, reflect_velocity, sweep_tree_collision,
};
pub use hole::{Hazard, HoleLayout, generate_hole};
pub use session::SimulationSession;
pub use shot::{ActiveShot, ShotMotion, ShotOutcome, ShotRequest, ShotVariance, effective_distance};
pub use state::{BallState, GamePhase, HoleSummary, Lie, Snapshot};
pub use tick::SimulationClock;
