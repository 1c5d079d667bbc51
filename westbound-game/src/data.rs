//! Static game data bundled for one engine instance.

use anyhow::Context;

use crate::profession::ProfessionsList;
use crate::route::RouteTable;

/// Read-only tables a journey consults: profession outfits and the route.
/// Loaded once per engine; never mutated during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameData {
    pub professions: ProfessionsList,
    pub route: RouteTable,
}

impl GameData {
    #[must_use]
    pub const fn new(professions: ProfessionsList, route: RouteTable) -> Self {
        Self { professions, route }
    }

    /// Load the embedded data set.
    ///
    /// # Errors
    ///
    /// Returns an error when an embedded asset fails to parse or validate;
    /// both assets are compiled in, so failure indicates a build defect.
    pub fn load_default() -> anyhow::Result<Self> {
        let professions = ProfessionsList::from_json(include_str!("../assets/data/professions.json"))
            .context("parse embedded profession data")?;
        let route = RouteTable::from_json(include_str!("../assets/data/route.json"))
            .context("parse embedded route data")?;
        Ok(Self::new(professions, route))
    }
}
