//! Daily weather model: a seasonal base with a small random deviation.

use serde::{Deserialize, Serialize};

use crate::constants::{SEASONAL_WEATHER_PCT, WEATHER_IMPROVE_PCT};
use crate::rng::RandomSource;

/// Weather conditions that shape each travel day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Fair,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl Weather {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fair => "Fair",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Snowy => "Snowy",
        }
    }

    /// Daily mileage adjustment applied on top of the base travel rate.
    #[must_use]
    pub const fn travel_modifier(self) -> i32 {
        match self {
            Self::Fair => 5,
            Self::Cloudy => 0,
            Self::Rainy => -3,
            Self::Stormy => -7,
            Self::Snowy => -10,
        }
    }

    /// Wet weather that wears out clothing and can damage the wagon.
    #[must_use]
    pub const fn is_foul(self) -> bool {
        matches!(self, Self::Rainy | Self::Stormy)
    }

    /// Cold, wet conditions that punish a party without spare clothing.
    #[must_use]
    pub const fn is_chilling(self) -> bool {
        matches!(self, Self::Rainy | Self::Snowy)
    }

    /// One step kinder on the Fair < Cloudy < Rainy < Stormy ordering.
    /// Snow lifts to overcast; fair skies cannot improve further.
    const fn one_step_better(self) -> Self {
        match self {
            Self::Snowy | Self::Rainy => Self::Cloudy,
            Self::Stormy => Self::Rainy,
            Self::Cloudy | Self::Fair => Self::Fair,
        }
    }

    /// One step harsher on the same ordering. Storms are the ceiling; a
    /// snowy base degrades to storm rather than deeper snow.
    const fn one_step_worse(self) -> Self {
        match self {
            Self::Fair => Self::Cloudy,
            Self::Cloudy => Self::Rainy,
            Self::Rainy | Self::Stormy | Self::Snowy => Self::Stormy,
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seasonal base weather for a calendar month (1-12). Snow only enters
/// through the winter base.
#[must_use]
pub const fn seasonal_base(month: i32) -> Weather {
    match month {
        12 | 1 | 2 => Weather::Snowy,
        3..=5 => Weather::Rainy,
        6..=8 => Weather::Fair,
        9..=11 => Weather::Cloudy,
        _ => Weather::Fair,
    }
}

/// Select the day's weather: 70% the seasonal base, 15% one step better,
/// 15% one step worse.
pub fn select_daily_weather(month: i32, rng: &mut dyn RandomSource) -> Weather {
    let base = seasonal_base(month);
    let roll = rng.roll(1, 100);
    if roll <= SEASONAL_WEATHER_PCT {
        base
    } else if roll <= SEASONAL_WEATHER_PCT + WEATHER_IMPROVE_PCT {
        base.one_step_better()
    } else {
        base.one_step_worse()
    }
}
