//! Rarity tier registry: draw weights, income rates, and level caps.
//!
//! The draw algorithm walks [`Rarity::ALL`] in declared order, accumulating
//! weights. That order is part of the draw contract — reordering tiers moves
//! the cumulative boundaries and changes which samples map to which tier —
//! so tier iteration always goes through the explicit `ALL` list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Normal,
    Rare,
    SuperRare,
    SuperSuperRare,
    UltraRare,
    Legendary,
}

/// Per-tier draw and scaling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityParams {
    /// Draw weight as a percentage; all six weights sum to exactly 100.
    pub weight: f64,
    /// Passive income contribution (berries per second) of a recruit.
    pub bps: f64,
    /// Highest level a character of this tier can reach.
    pub max_level: u32,
}

impl Rarity {
    /// All tiers in draw order. This order is load-bearing (see module docs).
    pub const ALL: [Rarity; 6] = [
        Rarity::Normal,
        Rarity::Rare,
        Rarity::SuperRare,
        Rarity::SuperSuperRare,
        Rarity::UltraRare,
        Rarity::Legendary,
    ];

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::SuperSuperRare => "Super Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Short code used in recruit names and save listings.
    pub fn code(&self) -> &'static str {
        match self {
            Rarity::Normal => "N",
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::SuperSuperRare => "SSR",
            Rarity::UltraRare => "UR",
            Rarity::Legendary => "L",
        }
    }

    /// Draw and scaling parameters for this tier. Total over the closed enum.
    pub fn params(&self) -> RarityParams {
        match self {
            Rarity::Normal => RarityParams {
                weight: 50.0,
                bps: 0.5,
                max_level: 45,
            },
            Rarity::Rare => RarityParams {
                weight: 30.0,
                bps: 1.0,
                max_level: 50,
            },
            Rarity::SuperRare => RarityParams {
                weight: 15.0,
                bps: 2.0,
                max_level: 65,
            },
            Rarity::SuperSuperRare => RarityParams {
                weight: 4.89,
                bps: 5.0,
                max_level: 75,
            },
            Rarity::UltraRare => RarityParams {
                weight: 0.1,
                bps: 10.0,
                max_level: 100,
            },
            Rarity::Legendary => RarityParams {
                weight: 0.01,
                bps: 25.0,
                max_level: 125,
            },
        }
    }
}

/// Ordered `(tier, weight)` pairs for drop-rate display.
pub fn draw_rates() -> Vec<(Rarity, f64)> {
    Rarity::ALL
        .iter()
        .map(|&rarity| (rarity, rarity.params().weight))
        .collect()
}
