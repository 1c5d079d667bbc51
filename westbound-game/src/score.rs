//! Final scoring and journey result summaries.

use serde::{Deserialize, Serialize};

use crate::data::GameData;
use crate::numbers::round_f64_to_i32;
use crate::party::Party;
use crate::resources::Resources;
use crate::state::JourneyState;

/// How a journey ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The party reached the destination.
    Arrived,
    /// Every member of the party died on the trail.
    PartyLost,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrived => write!(f, "arrived"),
            Self::PartyLost => write!(f, "party_lost"),
        }
    }
}

/// Rating bands for a winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    TrailGuide,
    SeasonedPioneer,
    DeterminedTraveler,
    LuckyGreenhorn,
    SurvivingPioneer,
}

impl Rating {
    /// Band for a total score.
    #[must_use]
    pub const fn for_score(score: i32) -> Self {
        if score > 1000 {
            Self::TrailGuide
        } else if score > 750 {
            Self::SeasonedPioneer
        } else if score > 500 {
            Self::DeterminedTraveler
        } else if score > 250 {
            Self::LuckyGreenhorn
        } else {
            Self::SurvivingPioneer
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TrailGuide => "Trail Guide",
            Self::SeasonedPioneer => "Seasoned Pioneer",
            Self::DeterminedTraveler => "Determined Traveler",
            Self::LuckyGreenhorn => "Lucky Greenhorn",
            Self::SurvivingPioneer => "Surviving Pioneer",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Itemized winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub party_score: i32,
    pub resource_score: i32,
    pub multiplier: u32,
    pub total: i32,
    pub rating: Rating,
}

/// Compute the winning score: surviving health plus weighted leftover
/// supplies, scaled by the profession multiplier.
#[must_use]
pub fn compute_score(party: &Party, resources: &Resources, multiplier: u32) -> ScoreBreakdown {
    let party_score: i32 = party
        .members
        .iter()
        .filter(|member| member.alive)
        .map(|member| member.health)
        .sum();
    let resource_score = resources.food / 5
        + resources.money / 5
        + resources.ammunition / 10
        + resources.clothing * 10
        + resources.wagon_parts * 15
        + resources.medicines * 20;
    let multiplier = multiplier.max(1);
    let total = (party_score + resource_score)
        .saturating_mul(i32::try_from(multiplier).unwrap_or(i32::MAX));
    ScoreBreakdown {
        party_score,
        resource_score,
        multiplier,
        total,
        rating: Rating::for_score(total),
    }
}

/// Whole-journey completion percentage, capped at 100.
#[must_use]
pub fn percent_complete(miles_traveled: i32, total_miles: i32) -> i32 {
    if total_miles <= 0 {
        return 0;
    }
    let pct = f64::from(miles_traveled) / f64::from(total_miles) * 100.0;
    round_f64_to_i32(pct).clamp(0, 100)
}

/// Complete summary of a finished journey for the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub ending: Ending,
    pub miles_traveled: i32,
    pub percent_complete: i32,
    pub days_on_trail: i32,
    /// Present only for a winning journey.
    pub score: Option<ScoreBreakdown>,
}

/// Summarize a journey once it has ended; `None` while still in play.
#[must_use]
pub fn summarize(state: &JourneyState, data: &GameData) -> Option<ResultSummary> {
    if !state.game_over {
        return None;
    }
    let percent = percent_complete(state.miles_traveled, data.route.total_miles());
    if state.reached_destination {
        let multiplier = data.professions.score_mult_for(state.profession);
        let score = compute_score(&state.party, &state.resources, multiplier);
        Some(ResultSummary {
            ending: Ending::Arrived,
            miles_traveled: state.miles_traveled,
            percent_complete: percent,
            days_on_trail: state.days_elapsed,
            score: Some(score),
        })
    } else {
        Some(ResultSummary {
            ending: Ending::PartyLost,
            miles_traveled: state.miles_traveled,
            percent_complete: percent,
            days_on_trail: state.days_elapsed,
            score: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profession::Profession;

    #[test]
    fn score_weights_match_the_formula() {
        let mut party = Party::from_names(["A", "B", "C"]);
        party.members[0].health = 90;
        party.members[1].health = 60;
        party.members[2].alive = false;
        party.members[2].health = 0;

        let resources = Resources {
            money: 100,
            food: 50,
            ammunition: 40,
            clothing: 2,
            wagon_parts: 1,
            medicines: 1,
        };

        // party 150; resources 10 + 20 + 4 + 20 + 15 + 20 = 89
        let score = compute_score(&party, &resources, 2);
        assert_eq!(score.party_score, 150);
        assert_eq!(score.resource_score, 89);
        assert_eq!(score.total, 478);
        assert_eq!(score.rating, Rating::LuckyGreenhorn);
    }

    #[test]
    fn rating_bands_honor_thresholds() {
        assert_eq!(Rating::for_score(1001), Rating::TrailGuide);
        assert_eq!(Rating::for_score(1000), Rating::SeasonedPioneer);
        assert_eq!(Rating::for_score(751), Rating::SeasonedPioneer);
        assert_eq!(Rating::for_score(750), Rating::DeterminedTraveler);
        assert_eq!(Rating::for_score(501), Rating::DeterminedTraveler);
        assert_eq!(Rating::for_score(500), Rating::LuckyGreenhorn);
        assert_eq!(Rating::for_score(251), Rating::LuckyGreenhorn);
        assert_eq!(Rating::for_score(250), Rating::SurvivingPioneer);
        assert_eq!(Rating::for_score(0), Rating::SurvivingPioneer);
    }

    #[test]
    fn zero_multiplier_is_lifted_to_one() {
        let party = Party::from_names(["A"]);
        let resources = Resources::default();
        let score = compute_score(&party, &resources, 0);
        assert_eq!(score.multiplier, 1);
        assert_eq!(score.total, 100);
    }

    #[test]
    fn percent_complete_rounds_and_caps() {
        assert_eq!(percent_complete(1020, 2040), 50);
        assert_eq!(percent_complete(0, 2040), 0);
        assert_eq!(percent_complete(2100, 2040), 100);
        assert_eq!(percent_complete(10, 0), 0);
    }

    #[test]
    fn summaries_follow_the_flags() {
        let data = GameData::load_default().unwrap();
        let mut state = JourneyState::new(Profession::Farmer, 1, &data);
        assert!(summarize(&state, &data).is_none());

        state.game_over = true;
        state.miles_traveled = 1020;
        state.days_elapsed = 80;
        let summary = summarize(&state, &data).unwrap();
        assert_eq!(summary.ending, Ending::PartyLost);
        assert_eq!(summary.percent_complete, 50);
        assert!(summary.score.is_none());

        state.reached_destination = true;
        state.miles_traveled = 2040;
        let summary = summarize(&state, &data).unwrap();
        assert_eq!(summary.ending, Ending::Arrived);
        assert_eq!(summary.percent_complete, 100);
        let score = summary.score.unwrap();
        assert_eq!(score.multiplier, 3);
    }
}
