//! Shared journey state: one aggregate mutated by whichever phase handler
//! is active. Only one handler runs at a time, so the aggregate is passed
//! by exclusive reference and never aliased.

use serde::{Deserialize, Serialize};

use crate::constants::{LOG_JOURNEY_BEGIN, START_DAY, START_MONTH, START_YEAR};
use crate::data::GameData;
use crate::party::Party;
use crate::profession::Profession;
use crate::resources::Resources;
use crate::route::Landmark;
use crate::weather::Weather;

/// Interaction mode currently active within the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    #[default]
    Setup,
    Traveling,
    Location,
    River,
    Hunting,
    Trading,
    Event,
    Resting,
    GameOver,
}

impl JourneyPhase {
    /// Terminal phases never transition back into play.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Full mutable state of one journey attempt. Created fresh when a journey
/// begins and discarded when it ends; nothing persists across journeys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyState {
    pub profession: Profession,
    pub seed: u64,
    /// Day of the month, 1-30.
    pub day: i32,
    /// Calendar month, 1-12.
    pub month: i32,
    pub year: i32,
    /// Total ticks since departure.
    pub days_elapsed: i32,
    pub miles_traveled: i32,
    /// Cursor into the route table; monotonically non-decreasing.
    pub next_landmark_index: usize,
    pub weather: Weather,
    pub party: Party,
    pub resources: Resources,
    pub phase: JourneyPhase,
    /// Scratch text shown by the Event phase; freely overwritten.
    #[serde(default)]
    pub event_message: String,
    pub game_over: bool,
    pub reached_destination: bool,
    /// Set while a player-requested rest sequence is ticking.
    #[serde(default)]
    pub resting: bool,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl JourneyState {
    /// Fresh state for a new journey: full roster, profession outfit,
    /// departure on March 1st, 1848.
    #[must_use]
    pub fn new(profession: Profession, seed: u64, data: &GameData) -> Self {
        let mut state = Self {
            profession,
            seed,
            day: START_DAY,
            month: START_MONTH,
            year: START_YEAR,
            days_elapsed: 0,
            miles_traveled: 0,
            next_landmark_index: 0,
            weather: Weather::default(),
            party: Party::default_roster(),
            resources: data.professions.start_for(profession),
            phase: JourneyPhase::Setup,
            event_message: String::new(),
            game_over: false,
            reached_destination: false,
            resting: false,
            logs: Vec::new(),
        };
        state.logs.push(String::from(LOG_JOURNEY_BEGIN));
        state
    }

    /// The landmark most recently reached, if any.
    #[must_use]
    pub fn current_landmark<'a>(&self, data: &'a GameData) -> Option<&'a Landmark> {
        let index = self.next_landmark_index.checked_sub(1)?;
        data.route.get(index)
    }

    /// The next landmark still ahead of the party.
    #[must_use]
    pub fn next_landmark<'a>(&self, data: &'a GameData) -> Option<&'a Landmark> {
        data.route.get(self.next_landmark_index)
    }

    /// Miles between the party and the next landmark, when one remains.
    #[must_use]
    pub fn miles_to_next_landmark(&self, data: &GameData) -> Option<i32> {
        self.next_landmark(data)
            .map(|landmark| (landmark.distance_miles - self.miles_traveled).max(0))
    }
}

/// Calendar month name for presentation layers.
#[must_use]
pub const fn month_name(month: i32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Undated",
    }
}
