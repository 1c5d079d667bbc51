//! River-crossing strategies and their resolution tables.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CAULK_FAIL_CEILING, CAULK_FOOD_CAP, CAULK_FOOD_DIVISOR, FORD_FOOD_CAP, FORD_FOOD_DIVISOR,
};

/// How the party attempts a river crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingMethod {
    Ford,
    CaulkAndFloat,
    HireGuide,
    WaitOut,
}

impl CrossingMethod {
    pub const ALL: &'static [Self] = &[
        Self::Ford,
        Self::CaulkAndFloat,
        Self::HireGuide,
        Self::WaitOut,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ford => "ford",
            Self::CaulkAndFloat => "caulk_and_float",
            Self::HireGuide => "hire_guide",
            Self::WaitOut => "wait_out",
        }
    }

    /// Map a menu option (1-4) onto a strategy.
    #[must_use]
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(Self::Ford),
            2 => Some(Self::CaulkAndFloat),
            3 => Some(Self::HireGuide),
            4 => Some(Self::WaitOut),
            _ => None,
        }
    }
}

/// Fording succeeds when the roll clears the river depth.
#[must_use]
pub const fn ford_succeeds(roll: i32, river_depth: i32) -> bool {
    roll > river_depth
}

/// Caulking fails only on the lowest rolls, regardless of depth.
#[must_use]
pub const fn caulk_succeeds(roll: i32) -> bool {
    roll > CAULK_FAIL_CEILING
}

/// Food washed away when a ford attempt tips the wagon.
#[must_use]
pub const fn ford_food_loss(food: i32) -> i32 {
    min_i32(food / FORD_FOOD_DIVISOR, FORD_FOOD_CAP)
}

/// Food soaked when a caulked wagon founders.
#[must_use]
pub const fn caulk_food_loss(food: i32) -> i32 {
    min_i32(food / CAULK_FOOD_DIVISOR, CAULK_FOOD_CAP)
}

const fn min_i32(a: i32, b: i32) -> i32 {
    if a < b { a } else { b }
}
