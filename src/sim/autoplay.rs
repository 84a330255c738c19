//! Autoplay: pick a club and power from a snapshot
//!
//! Used by the headless host and demos. Aims to cover exactly the remaining
//! distance, allowing for the sand penalty.

use super::club::{Club, ClubCatalog};
use super::state::{GamePhase, Lie, Snapshot};
use crate::tuning::Tuning;

/// Club and power for the next shot, or `None` when no shot is possible
pub fn plan_shot(snapshot: &Snapshot, catalog: &ClubCatalog, tuning: &Tuning) -> Option<(Club, f32)> {
    match snapshot.phase {
        GamePhase::Putting => {
            let putter = catalog.putter();
            Some((putter.clone(), power_for(snapshot.distance_to_hole_yards, putter)))
        }
        GamePhase::Tee => {
            let mut target = snapshot.distance_to_hole_yards;
            if snapshot.lie == Lie::Bunker && tuning.sand_penalty > 0.0 {
                target /= tuning.sand_penalty;
            }
            let mut club = catalog.suggest_club(target);
            // Never take driver out of sand
            if snapshot.lie == Lie::Bunker && club.is_driver() {
                club = catalog
                    .all_clubs()
                    .iter()
                    .find(|c| !c.is_driver() && !c.is_putter())
                    .unwrap_or(club);
            }
            let sand = if snapshot.lie == Lie::Bunker {
                tuning.sand_penalty.max(f32::EPSILON)
            } else {
                1.0
            };
            let power = power_for(snapshot.distance_to_hole_yards / sand, club);
            Some((club.clone(), power))
        }
        _ => None,
    }
}

fn power_for(distance_yards: f32, club: &Club) -> f32 {
    (distance_yards / club.max_carry_yards * 100.0).clamp(1.0, 100.0)
}
