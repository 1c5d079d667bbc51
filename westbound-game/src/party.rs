//! Party roster and per-member health tracking.

use serde::{Deserialize, Serialize};

use crate::constants::HEALTH_MAX;
use crate::numbers::usize_to_i32;
use crate::rng::RandomSource;

/// Ailment labels attached to members; empty string means healthy.
pub const AILMENT_SICK: &str = "sick";
pub const AILMENT_RECOVERING: &str = "recovering";
pub const AILMENT_DYSENTERY: &str = "dysentery";

/// Coarse condition bands used by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLabel {
    Good,
    Fair,
    Poor,
    Critical,
    Dead,
}

impl HealthLabel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
            Self::Dead => "Dead",
        }
    }
}

impl std::fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One traveler in the party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    pub name: String,
    pub health: i32,
    pub alive: bool,
    #[serde(default)]
    pub ailment: String,
}

impl PartyMember {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: HEALTH_MAX,
            alive: true,
            ailment: String::new(),
        }
    }

    /// Apply a net health delta, clamping into `[0, 100]`.
    ///
    /// Returns true when the member died on this adjustment. Dead members
    /// are frozen: the call is a no-op and death is reported exactly once.
    pub fn adjust_health(&mut self, delta: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health + delta).clamp(0, HEALTH_MAX);
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Condition band for display purposes.
    #[must_use]
    pub const fn condition(&self) -> HealthLabel {
        if !self.alive {
            HealthLabel::Dead
        } else if self.health >= 80 {
            HealthLabel::Good
        } else if self.health >= 50 {
            HealthLabel::Fair
        } else if self.health >= 20 {
            HealthLabel::Poor
        } else {
            HealthLabel::Critical
        }
    }
}

/// The full roster for one journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Party {
    pub members: Vec<PartyMember>,
}

impl Party {
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = names.into_iter().map(PartyMember::new).collect();
        Self { members }
    }

    /// The fixed five-seat roster every journey starts with.
    #[must_use]
    pub fn default_roster() -> Self {
        Self::from_names([
            "Player",
            "Companion 1",
            "Companion 2",
            "Companion 3",
            "Companion 4",
        ])
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|member| member.alive).count()
    }

    #[must_use]
    pub fn any_alive(&self) -> bool {
        self.members.iter().any(|member| member.alive)
    }

    /// Pick a living member uniformly, returning their roster index.
    pub fn pick_living(&self, rng: &mut dyn RandomSource) -> Option<usize> {
        let living: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.alive)
            .map(|(index, _)| index)
            .collect();
        if living.is_empty() {
            return None;
        }
        let pick = rng.roll(0, usize_to_i32(living.len()) - 1);
        living.get(usize::try_from(pick).unwrap_or(0)).copied()
    }
}
