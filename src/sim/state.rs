//! Session state types
//!
//! Everything a presentation layer reads lives here, and all of it is
//! serializable so a host can mirror or persist snapshots.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::club::Club;
use crate::consts::{BALL_RADIUS, TEE_ORIGIN};

/// Surface the ball rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lie {
    Tee,
    Fairway,
    Bunker,
    Green,
    Water,
}

impl Lie {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lie::Tee => "tee",
            Lie::Fairway => "fairway",
            Lie::Bunker => "bunker",
            Lie::Green => "green",
            Lie::Water => "water",
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hole generated, waiting for the player to start
    Intro,
    /// Ready for a full swing (from the tee, fairway or sand)
    Tee,
    /// Ball in the air
    Flying,
    /// Putt rolling toward the hole
    RollingPutt,
    /// Ready for a putt
    Putting,
    /// Ball is in the hole
    HoleOut,
}

impl GamePhase {
    /// Phases that accept a shot request
    pub fn accepts_shot(&self) -> bool {
        matches!(self, GamePhase::Tee | GamePhase::Putting)
    }
}

/// The ball: position, velocity and what it rests on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    /// Ball centre in world units
    pub position: Vec3,
    pub velocity: Vec3,
    pub lie: Lie,
}

impl BallState {
    /// Ball teed up at the origin
    pub fn on_tee() -> Self {
        Self {
            position: TEE_ORIGIN,
            velocity: Vec3::ZERO,
            lie: Lie::Tee,
        }
    }

    /// Settle the ball on the ground at its current spot
    pub fn come_to_rest(&mut self, lie: Lie) {
        self.position.y = BALL_RADIUS;
        self.velocity = Vec3::ZERO;
        self.lie = lie;
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::on_tee()
    }
}

/// Result of a completed hole, consumed by scoring/history collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSummary {
    pub hole_number: u32,
    pub par: u8,
    pub strokes: u32,
    /// Strokes minus par (negative is under par)
    pub relative_to_par: i32,
    pub label: String,
}

impl HoleSummary {
    pub fn new(hole_number: u32, par: u8, strokes: u32) -> Self {
        let relative_to_par = strokes as i32 - i32::from(par);
        Self {
            hole_number,
            par,
            strokes,
            relative_to_par,
            label: score_label(strokes, relative_to_par),
        }
    }
}

/// Conventional name for a hole score
pub fn score_label(strokes: u32, relative_to_par: i32) -> String {
    if strokes == 1 {
        return "Hole-in-one".to_string();
    }
    match relative_to_par {
        i32::MIN..=-3 => "Albatross".to_string(),
        -2 => "Eagle".to_string(),
        -1 => "Birdie".to_string(),
        0 => "Par".to_string(),
        1 => "Bogey".to_string(),
        2 => "Double Bogey".to_string(),
        3 => "Triple Bogey".to_string(),
        n => format!("+{}", n),
    }
}

/// Read-only view of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hole_number: u32,
    pub par: u8,
    pub phase: GamePhase,
    pub ball_position: Vec3,
    pub stroke_count: u32,
    pub lie: Lie,
    pub distance_to_hole_yards: f32,
    pub suggested_club: Club,
    pub last_message: String,
    pub is_simulating: bool,
    /// Present once the hole is finished
    pub summary: Option<HoleSummary>,
}
