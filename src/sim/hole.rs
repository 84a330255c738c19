//! Hole layout and procedural hole generation
//!
//! A layout is built once per hole and never mutated afterwards. All hazard
//! geometry is stored in world units; the layout carries the yards-per-unit
//! scale it was generated with.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{HAZARD_START_YARDS, LATERAL_SCATTER_YARDS};
use crate::horizontal;
use crate::tuning::Tuning;

/// Course obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hazard {
    /// Elliptical sand trap; `radius_x` is lateral, `radius_z` downrange
    Bunker {
        center: Vec3,
        radius_x: f32,
        radius_z: f32,
    },
    /// Circular pond
    Water { center: Vec3, radius: f32 },
    /// Vertical trunk the ball can strike below the canopy top
    Tree {
        center: Vec3,
        trunk_radius: f32,
        canopy_height: f32,
    },
}

impl Hazard {
    pub fn center(&self) -> Vec3 {
        match *self {
            Hazard::Bunker { center, .. }
            | Hazard::Water { center, .. }
            | Hazard::Tree { center, .. } => center,
        }
    }

    /// Whether a ground position lies inside the footprint (trees have none)
    pub fn contains(&self, position: Vec3) -> bool {
        let offset = horizontal(position - self.center());
        match *self {
            Hazard::Bunker {
                radius_x, radius_z, ..
            } => {
                let scaled = Vec2::new(offset.x / radius_x, offset.y / radius_z);
                scaled.length_squared() <= 1.0
            }
            Hazard::Water { radius, .. } => offset.length() <= radius,
            Hazard::Tree { .. } => false,
        }
    }
}

/// Immutable description of one hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleLayout {
    pub par: u8,
    pub total_distance_yards: f32,
    pub tee_position: Vec3,
    /// Cup position, world units
    pub green_position: Vec3,
    /// Green radius, world units
    pub green_radius: f32,
    pub hazards: Vec<Hazard>,
    /// Fixed for the lifetime of the hole
    pub yards_per_unit: f32,
}

impl HoleLayout {
    /// Bare hole with no hazards, mainly for tests and tools
    pub fn flat(par: u8, total_distance_yards: f32, tuning: &Tuning) -> Self {
        let ypu = tuning.yards_per_unit;
        Self {
            par,
            total_distance_yards,
            tee_position: Vec3::ZERO,
            green_position: Vec3::new(0.0, 0.0, total_distance_yards / ypu),
            green_radius: tuning.putt_threshold_yards / ypu,
            hazards: Vec::new(),
            yards_per_unit: ypu,
        }
    }

    #[inline]
    pub fn to_yards(&self, units: f32) -> f32 {
        units * self.yards_per_unit
    }

    #[inline]
    pub fn to_units(&self, yards: f32) -> f32 {
        yards / self.yards_per_unit
    }

    /// Ground distance from a position to the cup, in yards
    pub fn distance_to_hole_yards(&self, position: Vec3) -> f32 {
        self.to_yards(horizontal(self.green_position - position).length())
    }

    pub fn bunkers(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards
            .iter()
            .filter(|h| matches!(h, Hazard::Bunker { .. }))
    }

    pub fn water(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards
            .iter()
            .filter(|h| matches!(h, Hazard::Water { .. }))
    }

    pub fn trees(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards
            .iter()
            .filter(|h| matches!(h, Hazard::Tree { .. }))
    }
}

/// Par band: weight out of 100 and length range in yards
struct ParBand {
    par: u8,
    weight: u32,
    min_yards: f32,
    max_yards: f32,
}

const PAR_BANDS: [ParBand; 3] = [
    ParBand {
        par: 3,
        weight: 25,
        min_yards: 130.0,
        max_yards: 180.0,
    },
    ParBand {
        par: 4,
        weight: 50,
        min_yards: 280.0,
        max_yards: 380.0,
    },
    ParBand {
        par: 5,
        weight: 25,
        min_yards: 450.0,
        max_yards: 550.0,
    },
];

/// Draw a par, then a uniform length within that par's band
fn draw_par<R: Rng + ?Sized>(rng: &mut R) -> (u8, f32) {
    let total: u32 = PAR_BANDS.iter().map(|b| b.weight).sum();
    let mut roll = rng.random_range(0..total);
    for band in &PAR_BANDS {
        if roll < band.weight {
            return (band.par, rng.random_range(band.min_yards..=band.max_yards));
        }
        roll -= band.weight;
    }
    let band = &PAR_BANDS[1];
    (band.par, rng.random_range(band.min_yards..=band.max_yards))
}

/// Uniform point between the hazard start line and the green, scattered laterally.
/// Returned in world units.
fn scatter_point<R: Rng + ?Sized>(rng: &mut R, length_yards: f32, ypu: f32) -> Vec3 {
    let start = HAZARD_START_YARDS.min(length_yards);
    let downrange = rng.random_range(start..=length_yards);
    let lateral = rng.random_range(-LATERAL_SCATTER_YARDS..=LATERAL_SCATTER_YARDS);
    Vec3::new(lateral / ypu, 0.0, downrange / ypu)
}

/// Generate a random hole
///
/// Hazards are drawn independently and may overlap; containment precedence
/// is decided by the hazard evaluator.
pub fn generate_hole<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> HoleLayout {
    let ypu = tuning.yards_per_unit;
    let (par, length) = draw_par(rng);
    let mut layout = HoleLayout::flat(par, length, tuning);

    let (min_bunkers, max_bunkers) = tuning.bunkers;
    let bunkers = rng.random_range(min_bunkers..=max_bunkers);
    for _ in 0..bunkers {
        let center = scatter_point(rng, length, ypu);
        let radius_x = rng.random_range(5.0f32..=15.0) / ypu;
        let radius_z = rng.random_range(5.0f32..=15.0) / ypu;
        layout.hazards.push(Hazard::Bunker {
            center,
            radius_x,
            radius_z,
        });
    }

    let water = rng.random_range(0..=tuning.max_water);
    for _ in 0..water {
        let center = scatter_point(rng, length, ypu);
        let radius = rng.random_range(8.0f32..=20.0) / ypu;
        layout.hazards.push(Hazard::Water { center, radius });
    }

    let trees = rng.random_range(0..=tuning.max_trees);
    for _ in 0..trees {
        let center = scatter_point(rng, length, ypu);
        layout.hazards.push(Hazard::Tree {
            center,
            trunk_radius: rng.random_range(0.3..=0.8),
            canopy_height: rng.random_range(8.0..=15.0),
        });
    }

    log::info!(
        "Generated par {} hole: {:.0}y, {} bunkers, {} water, {} trees",
        par,
        length,
        bunkers,
        water,
        trees
    );
    layout
}
