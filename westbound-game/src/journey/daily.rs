//! The day-advance algorithm: one tick of trail time.
//!
//! Every tick runs the same ordered pipeline: calendar, weather,
//! consumption, health, travel, termination checks, starvation, landmark
//! detection, random events. Routing precedence within a tick: a death
//! routes to Event first, a terminal condition overwrites with GameOver,
//! and the landmark/random-event steps only run while the phase is still
//! Traveling.

use smallvec::SmallVec;

use crate::constants::{
    BASE_MILES_PER_DAY, CLOTHING_WEAR_PCT, DAYS_PER_MONTH, EXPOSURE_PENALTY,
    FOOD_PER_MEMBER_PER_DAY, HUNGER_PENALTY, ILLNESS_PCT, ILLNESS_PENALTY, LOG_ARRIVED,
    LOG_CLOTHING_WEAR, LOG_LANDMARK_REACHED, LOG_MEMBER_DEATH, LOG_PARTY_LOST,
    LOG_STARVATION_TICK, LOG_WAGON_PART_BROKE, LOG_WAGON_SLOWDOWN, MEDICINE_RELIEF,
    MIN_MILES_PER_DAY, MONTHS_PER_YEAR, RANDOM_EVENT_PCT, REST_HEAL, STARVATION_PENALTY,
    WAGON_BREAK_PCT, WAGON_DAMAGE_TRAVEL_PENALTY,
};
use crate::data::GameData;
use crate::numbers::usize_to_i32;
use crate::party::{AILMENT_RECOVERING, AILMENT_SICK};
use crate::rng::RandomSource;
use crate::state::{JourneyPhase, JourneyState};
use crate::weather::{Weather, select_daily_weather};

use super::event::trigger_random_event;

/// Names of members lost in one tick; almost always empty or one entry.
pub type TickDeaths = SmallVec<[String; 2]>;

/// Observable outcome of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    /// Miles credited to the journey this tick.
    pub miles: i32,
    /// Weather selected for the day.
    pub weather: Weather,
    /// Members lost to the tick's health and starvation passes, in
    /// processing order.
    pub deaths: TickDeaths,
    /// Whether the journey reached a terminal state.
    pub ended: bool,
}

/// Advance the journey by one day. A no-op returning `ended` when the
/// journey is already over.
pub fn advance_day(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
) -> DayOutcome {
    if state.game_over {
        return DayOutcome {
            miles: 0,
            weather: state.weather,
            deaths: TickDeaths::new(),
            ended: true,
        };
    }

    roll_calendar(state);
    state.weather = select_daily_weather(state.month, rng);
    consume_daily(state, rng);
    let mut deaths = update_health(state, rng);

    let miles = daily_miles(state);
    state.miles_traveled += miles;

    if state.miles_traveled >= data.route.total_miles() {
        state.reached_destination = true;
        state.game_over = true;
        state.event_message = format!(
            "Congratulations! You have reached {}!",
            data.route.destination_name()
        );
        state.phase = JourneyPhase::GameOver;
        state.logs.push(String::from(LOG_ARRIVED));
    }

    if !state.party.any_alive() {
        state.game_over = true;
        state.event_message = String::from("All members of your party have died.");
        state.phase = JourneyPhase::GameOver;
        state.logs.push(String::from(LOG_PARTY_LOST));
    }

    apply_starvation(state, &mut deaths);

    if state.phase == JourneyPhase::Traveling {
        check_landmark(state, data);
    }

    if state.phase == JourneyPhase::Traveling && rng.percent(RANDOM_EVENT_PCT) {
        trigger_random_event(state, data, rng);
    }

    DayOutcome {
        miles,
        weather: state.weather,
        deaths,
        ended: state.game_over,
    }
}

/// Thirty-day months, twelve-month years.
fn roll_calendar(state: &mut JourneyState) {
    state.day += 1;
    if state.day > DAYS_PER_MONTH {
        state.day = 1;
        state.month += 1;
        if state.month > MONTHS_PER_YEAR {
            state.month = 1;
            state.year += 1;
        }
    }
    state.days_elapsed += 1;
}

/// Food for every mouth, plus weather wear on clothing and wagon.
fn consume_daily(state: &mut JourneyState, rng: &mut dyn RandomSource) {
    let mouths = usize_to_i32(state.party.alive_count());
    state
        .resources
        .take_food(mouths * FOOD_PER_MEMBER_PER_DAY);

    if state.weather.is_foul() && rng.percent(CLOTHING_WEAR_PCT) && state.resources.clothing > 0 {
        state.resources.take_clothing(1);
        state.logs.push(String::from(LOG_CLOTHING_WEAR));
    }

    if state.weather == Weather::Stormy && rng.percent(WAGON_BREAK_PCT) {
        if state.resources.wagon_parts > 0 {
            state.resources.take_wagon_parts(1);
            state.logs.push(String::from(LOG_WAGON_PART_BROKE));
        } else {
            // Nothing left to break; the damage shows up as slower travel.
            state.logs.push(String::from(LOG_WAGON_SLOWDOWN));
        }
    }
}

/// Per-member health pass. All deltas for the tick are summed and applied
/// once, then clamped, so a sick member treated with medicine is judged on
/// the net result.
fn update_health(state: &mut JourneyState, rng: &mut dyn RandomSource) -> TickDeaths {
    let mut deaths = TickDeaths::new();
    let resting = state.resting;
    let starving = state.resources.food <= 0;
    let exposed = state.weather.is_chilling() && state.resources.clothing <= 0;

    for index in 0..state.party.members.len() {
        if !state.party.members[index].alive {
            continue;
        }
        let mut delta = 0;
        if resting {
            delta += REST_HEAL;
        }
        if starving {
            delta -= HUNGER_PENALTY;
        }
        if exposed {
            delta -= EXPOSURE_PENALTY;
        }
        if rng.percent(ILLNESS_PCT) {
            delta -= ILLNESS_PENALTY;
            state.party.members[index].ailment = String::from(AILMENT_SICK);
            if state.resources.use_medicine() {
                delta += MEDICINE_RELIEF;
                state.party.members[index].ailment = String::from(AILMENT_RECOVERING);
            }
        }
        if state.party.members[index].adjust_health(delta) {
            let name = state.party.members[index].name.clone();
            state.event_message = format!("{name} has died.");
            state.phase = JourneyPhase::Event;
            state.logs.push(String::from(LOG_MEMBER_DEATH));
            deaths.push(name);
        }
    }
    deaths
}

/// Base rate, weather modifier, and the broken-wagon penalty; never less
/// than one mile.
fn daily_miles(state: &JourneyState) -> i32 {
    let mut miles = BASE_MILES_PER_DAY + state.weather.travel_modifier();
    if state.resources.wagon_parts <= 0 {
        miles = (miles - WAGON_DAMAGE_TRAVEL_PENALTY).max(MIN_MILES_PER_DAY);
    }
    miles.max(MIN_MILES_PER_DAY)
}

/// An empty larder costs every living member extra health on the same
/// tick. Deaths here carry no notice; the total-loss check catches a wipe
/// on the next tick.
fn apply_starvation(state: &mut JourneyState, deaths: &mut TickDeaths) {
    if state.resources.food > 0 {
        return;
    }
    state.logs.push(String::from(LOG_STARVATION_TICK));
    for index in 0..state.party.members.len() {
        if !state.party.members[index].alive {
            continue;
        }
        if state.party.members[index].adjust_health(-STARVATION_PENALTY) {
            deaths.push(state.party.members[index].name.clone());
            state.logs.push(String::from(LOG_MEMBER_DEATH));
        }
    }
}

/// Advance the landmark cursor by at most one entry per tick. A day that
/// jumps past two landmark distances silently passes the first; the next
/// tick lands on the second.
fn check_landmark(state: &mut JourneyState, data: &GameData) {
    let Some(landmark) = data.route.get(state.next_landmark_index) else {
        return;
    };
    if state.miles_traveled < landmark.distance_miles {
        return;
    }
    state.event_message = format!("You have reached {}!\n{}", landmark.name, landmark.description);
    state.phase = if landmark.is_river {
        JourneyPhase::River
    } else {
        JourneyPhase::Location
    };
    state.next_landmark_index += 1;
    state.logs.push(String::from(LOG_LANDMARK_REACHED));
}
