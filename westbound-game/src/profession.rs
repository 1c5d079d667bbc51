//! Professions and the starting outfits they buy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::resources::Resources;

const DEFAULT_PROFESSIONS_DATA: &str = include_str!("../assets/data/professions.json");

/// Player archetype chosen before departure. Determines the starting
/// ledger and the final score multiplier; `Pioneer` is the fallback for
/// anyone who declines to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Banker,
    Carpenter,
    Farmer,
    #[default]
    Pioneer,
}

impl Profession {
    pub const ALL: &'static [Self] = &[Self::Banker, Self::Carpenter, Self::Farmer, Self::Pioneer];

    /// Stable identifier used in data assets.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Banker => "banker",
            Self::Carpenter => "carpenter",
            Self::Farmer => "farmer",
            Self::Pioneer => "pioneer",
        }
    }

    /// Two-letter tag used in journey codes.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Banker => "BK",
            Self::Carpenter => "CP",
            Self::Farmer => "FM",
            Self::Pioneer => "PN",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "BK" => Some(Self::Banker),
            "CP" => Some(Self::Carpenter),
            "FM" => Some(Self::Farmer),
            "PN" => Some(Self::Pioneer),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }
}

/// Starting counters granted by a profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfessionStart {
    #[serde(default)]
    pub money: i32,
    #[serde(default)]
    pub food: i32,
    #[serde(default)]
    pub ammunition: i32,
    #[serde(default)]
    pub clothing: i32,
    #[serde(default)]
    pub wagon_parts: i32,
    #[serde(default)]
    pub medicines: i32,
}

impl From<ProfessionStart> for Resources {
    fn from(start: ProfessionStart) -> Self {
        Self {
            money: start.money,
            food: start.food,
            ammunition: start.ammunition,
            clothing: start.clothing,
            wagon_parts: start.wagon_parts,
            medicines: start.medicines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct ProfessionNoId {
    pub name: String,
    pub desc: String,
    pub score_mult: u32,
    pub start: ProfessionStart,
}

/// One profession's full entry: display text, multiplier, and outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionSpec {
    pub id: Profession,
    pub name: String,
    pub desc: String,
    pub score_mult: u32,
    pub start: ProfessionStart,
}

impl ProfessionSpec {
    fn with_id(id: Profession, p: ProfessionNoId) -> Self {
        Self {
            id,
            name: p.name,
            desc: p.desc,
            score_mult: p.score_mult,
            start: p.start,
        }
    }
}

/// Ordered list of the professions a journey can start with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfessionsList(pub Vec<ProfessionSpec>);

impl ProfessionsList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Load professions from a JSON map keyed by profession id. Unknown ids
    /// are ignored; known ids come out in the canonical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into profession data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let map: HashMap<String, ProfessionNoId> = serde_json::from_str(json)?;
        let mut list = Vec::with_capacity(Profession::ALL.len());
        for &id in Profession::ALL {
            if let Some(spec) = map.get(id.key()) {
                list.push(ProfessionSpec::with_id(id, spec.clone()));
            }
        }
        Ok(Self(list))
    }

    /// Parse the embedded profession table.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in asset is invalid, which would be a build
    /// defect rather than a runtime condition.
    #[must_use]
    pub fn load_default() -> Self {
        Self::from_json(DEFAULT_PROFESSIONS_DATA).expect("valid embedded profession data")
    }

    #[must_use]
    pub fn get(&self, id: Profession) -> Option<&ProfessionSpec> {
        self.0.iter().find(|spec| spec.id == id)
    }

    /// Starting ledger for a profession; falls back to the pioneer outfit,
    /// then to an empty ledger, when the table is incomplete.
    #[must_use]
    pub fn start_for(&self, id: Profession) -> Resources {
        self.get(id)
            .or_else(|| self.get(Profession::Pioneer))
            .map(|spec| Resources::from(spec.start))
            .unwrap_or_default()
    }

    /// Final score multiplier for a profession (1 when unspecified).
    #[must_use]
    pub fn score_mult_for(&self, id: Profession) -> u32 {
        self.get(id).map_or(1, |spec| spec.score_mult.max(1))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfessionSpec> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProfessionsList {
    type Item = &'a ProfessionSpec;
    type IntoIter = std::slice::Iter<'a, ProfessionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
