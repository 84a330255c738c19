//! Club catalog and club suggestion
//!
//! A fixed 14-club bag. Suggestions are advisory; the player may hit any club.

use serde::{Deserialize, Serialize};

/// Club families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubCategory {
    Driver,
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Putter,
}

/// A club definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    /// Full-power carry (roll distance for the putter), yards
    pub max_carry_yards: f32,
    /// Launch angle in degrees (0 for the putter)
    pub loft_degrees: f32,
    pub category: ClubCategory,
}

impl Club {
    fn new(name: &str, max_carry_yards: f32, loft_degrees: f32, category: ClubCategory) -> Self {
        Self {
            name: name.to_string(),
            max_carry_yards,
            loft_degrees,
            category,
        }
    }

    #[inline]
    pub fn is_putter(&self) -> bool {
        self.category == ClubCategory::Putter
    }

    #[inline]
    pub fn is_driver(&self) -> bool {
        self.category == ClubCategory::Driver
    }
}

/// Wind relative to the line of play, in mph
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Wind {
    #[default]
    Calm,
    Headwind(f32),
    Tailwind(f32),
}

impl Wind {
    /// Yards the shot effectively plays at
    pub fn plays_as(&self, distance_yards: f32) -> f32 {
        match *self {
            Wind::Calm => distance_yards,
            Wind::Headwind(mph) => distance_yards + mph * 1.5,
            Wind::Tailwind(mph) => (distance_yards - mph).max(0.0),
        }
    }
}

/// Immutable club table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubCatalog {
    /// Sorted longest to shortest, putter last
    clubs: Vec<Club>,
}

impl Default for ClubCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClubCatalog {
    /// The standard bag
    pub fn standard() -> Self {
        use ClubCategory::*;
        Self {
            clubs: vec![
                Club::new("Driver", 260.0, 10.5, Driver),
                Club::new("3 Wood", 230.0, 15.0, Wood),
                Club::new("5 Wood", 210.0, 18.0, Wood),
                Club::new("4 Hybrid", 195.0, 22.0, Hybrid),
                Club::new("5 Iron", 175.0, 27.0, Iron),
                Club::new("6 Iron", 165.0, 30.0, Iron),
                Club::new("7 Iron", 155.0, 34.0, Iron),
                Club::new("8 Iron", 145.0, 38.0, Iron),
                Club::new("9 Iron", 135.0, 42.0, Iron),
                Club::new("Pitching Wedge", 120.0, 46.0, Wedge),
                Club::new("Gap Wedge", 100.0, 50.0, Wedge),
                Club::new("Sand Wedge", 85.0, 56.0, Wedge),
                Club::new("Lob Wedge", 60.0, 60.0, Wedge),
                Club::new("Putter", 40.0, 0.0, Putter),
            ],
        }
    }

    pub fn all_clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn by_name(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Longest-carrying club (the driver)
    pub fn longest(&self) -> &Club {
        &self.clubs[0]
    }

    pub fn putter(&self) -> &Club {
        self.clubs
            .iter()
            .find(|c| c.is_putter())
            .unwrap_or_else(|| self.shortest_full_swing())
    }

    fn shortest_full_swing(&self) -> &Club {
        self.full_swing().last().unwrap_or(&self.clubs[0])
    }

    fn full_swing(&self) -> impl DoubleEndedIterator<Item = &Club> {
        self.clubs.iter().filter(|c| !c.is_putter())
    }

    /// Shortest full-swing club that still reaches `remaining_yards`,
    /// falling back to the driver when nothing does
    pub fn suggest_club(&self, remaining_yards: f32) -> &Club {
        self.full_swing()
            .filter(|c| c.max_carry_yards >= remaining_yards)
            .min_by(|a, b| a.max_carry_yards.total_cmp(&b.max_carry_yards))
            .unwrap_or_else(|| self.longest())
    }

    /// Suggestion after adjusting the distance for wind
    pub fn suggest_for_wind(&self, remaining_yards: f32, wind: Wind) -> &Club {
        self.suggest_club(wind.plays_as(remaining_yards))
    }
}
