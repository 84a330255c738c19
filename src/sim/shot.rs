//! Shot resolution: effective distance, launch and per-tick integration
//!
//! A shot is either a ballistic flight (full swing) or a friction roll
//! (putt). The resolver only mutates the `BallState` it is handed; the
//! session decides what the resting lie means for play.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::club::Club;
use super::hazard::{classify_rest, reflect_velocity, sweep_tree_collision};
use super::hole::HoleLayout;
use super::state::{BallState, Lie};
use crate::consts::{BALL_RADIUS, MIN_EFFECTIVE_YARDS, MIN_FLIGHT_LOFT_DEG, STRAIGHT_TOLERANCE};
use crate::horizontal;
use crate::tuning::Tuning;

/// One swing as requested by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRequest {
    pub club: Club,
    /// Swing power, 1..=100
    pub power_percent: f32,
}

impl ShotRequest {
    pub fn new(club: Club, power_percent: f32) -> Self {
        Self {
            club,
            power_percent,
        }
    }

    /// Power clamped into 1..=100 (non-finite input becomes minimum power)
    pub fn normalized_power(&self) -> f32 {
        if self.power_percent.is_finite() {
            self.power_percent.clamp(1.0, 100.0)
        } else {
            1.0
        }
    }
}

/// Random draws for one shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotVariance {
    /// Distance multiplier around 1.0
    pub accuracy_factor: f32,
    /// Lateral miss as a signed fraction of effective distance (+ is right)
    pub lateral_ratio: f32,
}

impl ShotVariance {
    /// A dead-straight, full-value strike
    pub const PURE: Self = Self {
        accuracy_factor: 1.0,
        lateral_ratio: 0.0,
    };

    /// Draw accuracy and dispersion for a lie from an injected source
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, lie: Lie, tuning: &Tuning) -> Self {
        let (spread, dispersion) = tuning.variance_for(lie == Lie::Bunker);
        let accuracy_factor = if spread > 0.0 {
            rng.random_range(1.0 - spread..=1.0 + spread)
        } else {
            1.0
        };
        let lateral_ratio = if dispersion > 0.0 {
            rng.random_range(-dispersion..=dispersion)
        } else {
            0.0
        };
        Self {
            accuracy_factor,
            lateral_ratio,
        }
    }
}

/// Yards the shot is worth before dispersion
///
/// Sand multiplies by the sand penalty, and driver from sand multiplies again
/// by the driver penalty. Never negative.
pub fn effective_distance(
    request: &ShotRequest,
    lie: Lie,
    variance: &ShotVariance,
    tuning: &Tuning,
) -> f32 {
    let mut yards = request.club.max_carry_yards
        * (request.normalized_power() / 100.0)
        * variance.accuracy_factor;
    if lie == Lie::Bunker {
        yards *= tuning.sand_penalty;
        if request.club.is_driver() {
            yards *= tuning.bunker_driver_penalty;
        }
    }
    yards.max(0.0)
}

/// Launch speed for a no-drag projectile to cover `range` at `loft_rad`
///
/// range = v0² · sin(2·loft) / g
pub fn launch_speed(range: f32, loft_rad: f32, gravity: f32) -> f32 {
    let sin2 = (2.0 * loft_rad).sin().max(f32::EPSILON);
    (range * gravity / sin2).sqrt()
}

/// How the ball is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotMotion {
    Flight,
    Roll,
}

/// What a shot did once the ball stopped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub motion: ShotMotion,
    pub lie: Lie,
    pub distance_to_hole_yards: f32,
    /// Ground distance covered, yards
    pub carry_yards: f32,
    /// Signed offset from the aim line, yards (+ is right)
    pub lateral_yards: f32,
    pub tree_hits: u32,
}

impl ShotOutcome {
    /// Slice/hook description of a flight shot
    pub fn shape(&self) -> &'static str {
        if self.lateral_yards.abs() < self.carry_yards * STRAIGHT_TOLERANCE {
            "straight"
        } else if self.lateral_yards > 0.0 {
            "slice"
        } else {
            "hook"
        }
    }
}

/// Integration state of the shot currently in motion
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveShot {
    pub motion: ShotMotion,
    pub club_name: String,
    pub effective_yards: f32,
    /// Where the ball started (world units)
    origin: Vec3,
    /// Unit ground heading toward the cup at address
    aim: Vec2,
    tree_hits: u32,
    ticks: u32,
}

/// Unit ground direction from `from` toward the cup (downrange if on top of it)
fn aim_at_cup(from: Vec3, layout: &HoleLayout) -> Vec2 {
    let to_cup = horizontal(layout.green_position - from);
    if to_cup.length_squared() > 1e-8 {
        to_cup.normalize()
    } else {
        Vec2::Y
    }
}

/// Right-hand perpendicular of a ground heading (x = lateral, y = downrange)
#[inline]
fn right_of(aim: Vec2) -> Vec2 {
    Vec2::new(aim.y, -aim.x)
}

impl ActiveShot {
    /// Set the ball in motion
    ///
    /// `roll` selects the putting model; otherwise the shot flies. A loft
    /// below the flight minimum is raised to it so the solver stays finite.
    pub fn launch(
        ball: &mut BallState,
        request: &ShotRequest,
        variance: &ShotVariance,
        layout: &HoleLayout,
        tuning: &Tuning,
        roll: bool,
    ) -> Self {
        let effective_yards = effective_distance(request, ball.lie, variance, tuning);
        let aim = aim_at_cup(ball.position, layout);
        ball.position.y = BALL_RADIUS;

        let motion = if roll {
            let units = layout.to_units(effective_yards);
            let speed = units * tuning.roll_constant;
            ball.velocity = Vec3::new(aim.x, 0.0, aim.y) * speed;
            ShotMotion::Roll
        } else {
            let range = layout.to_units(effective_yards.max(MIN_EFFECTIVE_YARDS));
            let loft = request
                .club
                .loft_degrees
                .max(MIN_FLIGHT_LOFT_DEG)
                .to_radians();
            let v0 = launch_speed(range, loft, tuning.gravity);

            let angle = variance.lateral_ratio.atan();
            let heading = aim * angle.cos() + right_of(aim) * angle.sin();
            let ground_speed = v0 * loft.cos();
            ball.velocity = Vec3::new(
                heading.x * ground_speed,
                v0 * loft.sin(),
                heading.y * ground_speed,
            );
            ShotMotion::Flight
        };

        log::debug!(
            "Launch {} ({:?}): power {:.0}%, effective {:.1}y, accuracy {:.3}, lateral {:+.3}",
            request.club.name,
            motion,
            request.normalized_power(),
            effective_yards,
            variance.accuracy_factor,
            variance.lateral_ratio
        );

        Self {
            motion,
            club_name: request.club.name.clone(),
            effective_yards,
            origin: ball.position,
            aim,
            tree_hits: 0,
            ticks: 0,
        }
    }

    /// Advance one fixed tick; returns the outcome once the ball is at rest
    pub fn step(
        &mut self,
        ball: &mut BallState,
        layout: &HoleLayout,
        tuning: &Tuning,
        dt: f32,
    ) -> Option<ShotOutcome> {
        self.ticks += 1;
        let resting = match self.motion {
            ShotMotion::Flight => self.step_flight(ball, layout, tuning, dt),
            ShotMotion::Roll => self.step_roll(ball, tuning, dt),
        };
        if !resting {
            return None;
        }

        let lie = classify_rest(ball.position, layout);
        ball.come_to_rest(lie);

        let travel = horizontal(ball.position - self.origin);
        let outcome = ShotOutcome {
            motion: self.motion,
            lie,
            distance_to_hole_yards: layout.distance_to_hole_yards(ball.position),
            carry_yards: layout.to_yards(travel.length()),
            lateral_yards: layout.to_yards(travel.dot(right_of(self.aim))),
            tree_hits: self.tree_hits,
        };
        log::debug!(
            "Ball at rest after {} ticks: {:?}, {:.1}y to hole",
            self.ticks,
            outcome.lie,
            outcome.distance_to_hole_yards
        );
        Some(outcome)
    }

    /// Ballistic tick; true once the ball is back on the ground
    fn step_flight(
        &mut self,
        ball: &mut BallState,
        layout: &HoleLayout,
        tuning: &Tuning,
        dt: f32,
    ) -> bool {
        let prev = ball.position;
        let accel = Vec3::new(0.0, -tuning.gravity, 0.0);
        ball.position += ball.velocity * dt + 0.5 * accel * dt * dt;
        ball.velocity += accel * dt;

        // Only an approaching ball is rewound; one leaving a trunk flies on
        if let Some((t, contact)) = sweep_tree_collision(prev, ball.position, layout) {
            if ball.velocity.dot(contact.normal) < 0.0 {
                ball.position = prev.lerp(ball.position, t) + contact.normal * contact.penetration;
                ball.velocity = reflect_velocity(ball.velocity, contact.normal) * tuning.tree_damping;
                self.tree_hits += 1;
                log::debug!("Tree strike #{} at {:?}", self.tree_hits, ball.position);
            }
        }

        if ball.position.y > BALL_RADIUS {
            return false;
        }

        // Pull back to where the ball crossed the ground this tick
        if prev.y > ball.position.y {
            let t = ((prev.y - BALL_RADIUS) / (prev.y - ball.position.y)).clamp(0.0, 1.0);
            ball.position = prev.lerp(ball.position, t);
        }
        ball.position.y = BALL_RADIUS;
        true
    }

    /// Friction tick; true once the roll has died
    fn step_roll(&mut self, ball: &mut BallState, tuning: &Tuning, dt: f32) -> bool {
        ball.position += ball.velocity * dt;
        ball.position.y = BALL_RADIUS;
        ball.velocity *= tuning.putt_friction;
        ball.velocity.length() < tuning.roll_stop_speed
    }
}
