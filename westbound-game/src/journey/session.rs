//! Journey session: the engine boundary a host application drives.

use serde::{Deserialize, Serialize};

use crate::data::GameData;
use crate::party::Party;
use crate::profession::Profession;
use crate::resources::Resources;
use crate::rng::{JourneyRng, RandomSource};
use crate::score::{self, ResultSummary};
use crate::state::{JourneyPhase, JourneyState};
use crate::weather::Weather;

use super::{Command, CommandOutcome, handle_command};

/// One journey attempt: state, static data, and the seeded random source.
///
/// The host feeds classified commands in through [`JourneySession::submit`]
/// and reads the outbound contract back through [`JourneySession::snapshot`]
/// or the direct state accessors. The engine never acts spontaneously.
#[derive(Debug)]
pub struct JourneySession {
    state: JourneyState,
    data: GameData,
    rng: Box<dyn RandomSource>,
}

impl JourneySession {
    /// Start a journey for a profession with a deterministic seed.
    #[must_use]
    pub fn new(profession: Profession, seed: u64, data: GameData) -> Self {
        let state = JourneyState::new(profession, seed, &data);
        Self {
            state,
            data,
            rng: Box::new(JourneyRng::from_seed(seed)),
        }
    }

    /// Start a journey using the embedded data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to load, which would be
    /// a build defect rather than a runtime condition.
    pub fn with_defaults(profession: Profession, seed: u64) -> anyhow::Result<Self> {
        Ok(Self::new(profession, seed, GameData::load_default()?))
    }

    /// Start a journey with an explicit random source (deterministic tests
    /// and scripted replays).
    #[must_use]
    pub fn with_random_source(
        profession: Profession,
        seed: u64,
        data: GameData,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let state = JourneyState::new(profession, seed, &data);
        Self { state, data, rng }
    }

    /// Route one classified command into the active phase.
    pub fn submit(&mut self, command: Command) -> CommandOutcome {
        handle_command(&mut self.state, &self.data, self.rng.as_mut(), command)
    }

    /// Borrow the underlying immutable journey state.
    #[must_use]
    pub const fn state(&self) -> &JourneyState {
        &self.state
    }

    /// Borrow the underlying mutable journey state.
    pub const fn state_mut(&mut self) -> &mut JourneyState {
        &mut self.state
    }

    /// Apply a closure to the mutable journey state.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut JourneyState) -> R) -> R {
        f(&mut self.state)
    }

    /// Static data tables backing this journey.
    #[must_use]
    pub const fn data(&self) -> &GameData {
        &self.data
    }

    /// Result summary, present once the journey has ended.
    #[must_use]
    pub fn result(&self) -> Option<ResultSummary> {
        score::summarize(&self.state, &self.data)
    }

    /// Compose the full outbound view for a presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> JourneySnapshot {
        JourneySnapshot {
            phase: self.state.phase,
            profession: self.state.profession,
            day: self.state.day,
            month: self.state.month,
            year: self.state.year,
            weather: self.state.weather,
            miles_traveled: self.state.miles_traveled,
            next_landmark: self.state.next_landmark(&self.data).map(|landmark| {
                NextLandmarkView {
                    name: landmark.name.clone(),
                    miles_remaining: (landmark.distance_miles - self.state.miles_traveled).max(0),
                }
            }),
            party: self.state.party.clone(),
            resources: self.state.resources,
            event_message: self.state.event_message.clone(),
            game_over: self.state.game_over,
            reached_destination: self.state.reached_destination,
            result: self.result(),
        }
    }

    /// Consume the session, returning the final journey state.
    #[must_use]
    pub fn into_state(self) -> JourneyState {
        self.state
    }
}

/// Next landmark as the presentation layer wants it: a name and the miles
/// still to cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLandmarkView {
    pub name: String,
    pub miles_remaining: i32,
}

/// Frame-queryable view of a journey. Values only; reading it can never
/// mutate the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySnapshot {
    pub phase: JourneyPhase,
    pub profession: Profession,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub weather: Weather,
    pub miles_traveled: i32,
    pub next_landmark: Option<NextLandmarkView>,
    pub party: Party,
    pub resources: Resources,
    pub event_message: String,
    pub game_over: bool,
    pub reached_destination: bool,
    pub result: Option<ResultSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use crate::score::Ending;

    #[test]
    fn session_starts_in_setup_with_the_profession_outfit() {
        let session = JourneySession::with_defaults(Profession::Farmer, 7).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, JourneyPhase::Setup);
        assert_eq!(snapshot.profession, Profession::Farmer);
        assert_eq!(snapshot.resources.money, 400);
        assert_eq!(snapshot.party.members.len(), 5);
        assert_eq!(
            snapshot.next_landmark.unwrap().name,
            "Independence, Missouri"
        );
        assert!(snapshot.result.is_none());
    }

    #[test]
    fn snapshot_tracks_next_landmark_distance() {
        let mut session = JourneySession::with_defaults(Profession::Banker, 7).unwrap();
        session.with_state_mut(|state| {
            state.next_landmark_index = 1;
            state.miles_traveled = 30;
        });
        let snapshot = session.snapshot();
        let next = snapshot.next_landmark.unwrap();
        assert_eq!(next.name, "Kansas River Crossing");
        assert_eq!(next.miles_remaining, 72);
    }

    #[test]
    fn submit_drives_the_state_machine() {
        let data = GameData::load_default().unwrap();
        let rng = ScriptedSource::new([], 100);
        let mut session =
            JourneySession::with_random_source(Profession::Banker, 7, data, Box::new(rng));

        assert_eq!(session.submit(Command::Continue), CommandOutcome::Handled);
        assert_eq!(session.state().phase, JourneyPhase::Traveling);

        assert_eq!(session.submit(Command::Advance), CommandOutcome::Handled);
        assert_eq!(session.state().day, 2);
        assert!(session.state().miles_traveled > 0);
    }

    #[test]
    fn result_appears_once_the_journey_ends() {
        let mut session = JourneySession::with_defaults(Profession::Carpenter, 7).unwrap();
        assert!(session.result().is_none());
        session.with_state_mut(|state| {
            state.game_over = true;
            state.reached_destination = true;
            state.miles_traveled = 2040;
        });
        let result = session.result().unwrap();
        assert_eq!(result.ending, Ending::Arrived);
        assert_eq!(result.score.unwrap().multiplier, 2);
        assert_eq!(session.snapshot().result, Some(result));
    }

    #[test]
    fn snapshot_serializes_for_hosts() {
        let session = JourneySession::with_defaults(Profession::Pioneer, 7).unwrap();
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let back: JourneySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session.snapshot());
    }
}
