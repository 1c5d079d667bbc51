//! Hunting resolution: one shot per command, food scaled by the roll.

use serde::{Deserialize, Serialize};

use crate::constants::{HUNT_FOOD_PER_ROLL, HUNT_MISS_CEILING};
use crate::resources::Resources;
use crate::rng::RandomSource;

/// Result of firing (or trying to fire) one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntOutcome {
    /// The shot landed; food is already credited to the ledger.
    Hit { food_gained: i32 },
    /// The shot missed; the round is spent.
    Miss,
    /// No ammunition left; nothing was consumed.
    OutOfAmmo,
}

/// Fire one shot. Consumes a round if any is available, rolls 1-10, and
/// credits `10 x roll` pounds of food on a hit (rolls above 3).
pub fn resolve_shot(resources: &mut Resources, rng: &mut dyn RandomSource) -> HuntOutcome {
    if resources.ammunition <= 0 {
        return HuntOutcome::OutOfAmmo;
    }
    resources.take_ammunition(1);
    let roll = rng.roll(1, 10);
    if roll > HUNT_MISS_CEILING {
        let food_gained = roll * HUNT_FOOD_PER_ROLL;
        resources.food += food_gained;
        HuntOutcome::Hit { food_gained }
    } else {
        HuntOutcome::Miss
    }
}
