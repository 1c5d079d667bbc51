//! Catalog of scripted trail events.
//!
//! The catalog itself is a fixed table; the application of each effect
//! lives in `journey::event` because two entries advance calendar time.

use serde::{Deserialize, Serialize};

use crate::numbers::usize_to_i32;
use crate::rng::RandomSource;

/// The ten scripted events a travel day can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailEvent {
    SickOxen,
    DamagedWheel,
    HeavyRains,
    WildBerries,
    Shortcut,
    BrokenAxle,
    BanditRaid,
    SettlerGift,
    Snowstorm,
    Dysentery,
}

impl TrailEvent {
    pub const ALL: &'static [Self] = &[
        Self::SickOxen,
        Self::DamagedWheel,
        Self::HeavyRains,
        Self::WildBerries,
        Self::Shortcut,
        Self::BrokenAxle,
        Self::BanditRaid,
        Self::SettlerGift,
        Self::Snowstorm,
        Self::Dysentery,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SickOxen => "sick_oxen",
            Self::DamagedWheel => "damaged_wheel",
            Self::HeavyRains => "heavy_rains",
            Self::WildBerries => "wild_berries",
            Self::Shortcut => "shortcut",
            Self::BrokenAxle => "broken_axle",
            Self::BanditRaid => "bandit_raid",
            Self::SettlerGift => "settler_gift",
            Self::Snowstorm => "snowstorm",
            Self::Dysentery => "dysentery",
        }
    }

    /// Player-facing notice shown when the event fires.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::SickOxen => "One of your oxen is sick. It needs to rest for a day.",
            Self::DamagedWheel => "A wheel on your wagon is damaged. You lose a wagon part.",
            Self::HeavyRains => "Heavy rains have washed out part of the trail ahead.",
            Self::WildBerries => "You found wild berries and gathered some extra food!",
            Self::Shortcut => "A helpful local guide shows you a shortcut.",
            Self::BrokenAxle => "Your wagon axle breaks! You must repair it to continue.",
            Self::BanditRaid => "Bandits attack your party! You lose some supplies.",
            Self::SettlerGift => "A friendly settler shares some food with your party.",
            Self::Snowstorm => "A snowstorm forces you to take shelter.",
            Self::Dysentery => "One of your party members has come down with dysentery.",
        }
    }

    /// Uniform pick from the catalog.
    pub fn pick(rng: &mut dyn RandomSource) -> Self {
        let index = rng.roll(0, usize_to_i32(Self::ALL.len()) - 1);
        Self::ALL[usize::try_from(index).unwrap_or(0).min(Self::ALL.len() - 1)]
    }
}
