//! Hazard evaluation
//!
//! Classifies where a ball comes to rest and detects trunk strikes during
//! flight. Overlapping hazards resolve by fixed precedence: water, then
//! bunker, then green, otherwise fairway.

use glam::Vec3;

use super::hole::{Hazard, HoleLayout};
use super::state::Lie;
use crate::consts::BALL_RADIUS;
use crate::horizontal;

/// A ball touching a tree trunk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeContact {
    /// Horizontal unit normal pointing from the trunk toward the ball
    pub normal: Vec3,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

/// Surface under a resting ball
pub fn classify_rest(position: Vec3, layout: &HoleLayout) -> Lie {
    if layout.water().any(|h| h.contains(position)) {
        return Lie::Water;
    }
    if layout.bunkers().any(|h| h.contains(position)) {
        return Lie::Bunker;
    }
    let to_cup = horizontal(layout.green_position - position).length();
    if to_cup <= layout.green_radius {
        return Lie::Green;
    }
    Lie::Fairway
}

/// First tree the ball overlaps at this position, if any
pub fn check_tree_collision(position: Vec3, layout: &HoleLayout) -> Option<TreeContact> {
    layout.trees().find_map(|tree| match *tree {
        Hazard::Tree {
            center,
            trunk_radius,
            canopy_height,
        } => trunk_contact(position, center, trunk_radius, canopy_height),
        _ => None,
    })
}

/// Earliest trunk the ball meets while moving `from -> to` this tick
///
/// Returns the fraction of the move at first contact and the contact there.
/// The whole segment is tested; a full drive covers more than a thin
/// trunk's width in one tick.
pub fn sweep_tree_collision(
    from: Vec3,
    to: Vec3,
    layout: &HoleLayout,
) -> Option<(f32, TreeContact)> {
    let mut first: Option<(f32, TreeContact)> = None;
    for tree in layout.trees() {
        let Hazard::Tree {
            center,
            trunk_radius,
            canopy_height,
        } = *tree
        else {
            continue;
        };
        let Some(t) = trunk_entry(from, to, center, trunk_radius + BALL_RADIUS) else {
            continue;
        };
        if first.is_some_and(|(best, _)| best <= t) {
            continue;
        }
        let at = from.lerp(to, t);
        if let Some(contact) = trunk_contact(at, center, trunk_radius, canopy_height)
            .or_else(|| grazing_contact(at, center, trunk_radius, canopy_height))
        {
            first = Some((t, contact));
        }
    }
    first
}

/// Fraction along `from -> to` where the horizontal path enters the trunk circle
fn trunk_entry(from: Vec3, to: Vec3, center: Vec3, reach: f32) -> Option<f32> {
    let d = horizontal(to - from);
    let f = horizontal(from - center);
    let c = f.length_squared() - reach * reach;
    if c <= 0.0 {
        return Some(0.0);
    }
    let a = d.length_squared();
    if a <= f32::EPSILON {
        return None;
    }
    let b = 2.0 * f.dot(d);
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Contact exactly on the trunk surface (entry point, zero overlap)
fn grazing_contact(
    position: Vec3,
    center: Vec3,
    trunk_radius: f32,
    canopy_height: f32,
) -> Option<TreeContact> {
    if position.y >= canopy_height {
        return None;
    }
    let offset = horizontal(position - center);
    let dist = offset.length();
    if dist <= 1e-6 {
        return None;
    }
    let flat = offset / dist;
    Some(TreeContact {
        normal: Vec3::new(flat.x, 0.0, flat.y),
        penetration: (trunk_radius + BALL_RADIUS - dist).max(0.0),
    })
}

fn trunk_contact(
    position: Vec3,
    center: Vec3,
    trunk_radius: f32,
    canopy_height: f32,
) -> Option<TreeContact> {
    if position.y >= canopy_height {
        return None;
    }
    let offset = horizontal(position - center);
    let reach = trunk_radius + BALL_RADIUS;
    let dist = offset.length();
    if dist >= reach {
        return None;
    }

    // Dead centre has no direction; kick the ball back toward the tee
    let flat = if dist > 1e-6 {
        offset / dist
    } else {
        glam::Vec2::NEG_Y
    };
    Some(TreeContact {
        normal: Vec3::new(flat.x, 0.0, flat.y),
        penetration: reach - dist,
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
