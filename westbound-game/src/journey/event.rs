//! Application of scripted trail events.
//!
//! The phase is moved to Event before any effect runs, so the nested day
//! ticks fired by the sick-oxen and snowstorm entries never re-enter the
//! landmark check or the random-event roll.

use crate::constants::{
    BANDIT_AMMO_LOSS, BANDIT_FOOD_LOSS, BANDIT_MONEY_LOSS, BERRIES_FOOD_GAIN, DYSENTERY_PENALTY,
    DYSENTERY_RELIEF, LOG_EVENT_PREFIX, LOG_MEMBER_DEATH, SETTLER_FOOD_GAIN, SHORTCUT_MILES,
    SNOWSTORM_SHELTER_DAYS,
};
use crate::data::GameData;
use crate::events::TrailEvent;
use crate::party::AILMENT_DYSENTERY;
use crate::rng::RandomSource;
use crate::state::{JourneyPhase, JourneyState};
use crate::weather::Weather;

use super::daily::advance_day;

/// Pick one catalog entry uniformly and apply it.
pub(crate) fn trigger_random_event(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
) {
    let event = TrailEvent::pick(rng);
    apply_event(state, data, rng, event);
}

/// Apply a specific catalog entry. Public within the crate so tests can
/// exercise entries directly.
pub(crate) fn apply_event(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    event: TrailEvent,
) {
    state
        .logs
        .push(format!("{LOG_EVENT_PREFIX}{}", event.key()));
    state.phase = JourneyPhase::Event;
    state.event_message = String::from(event.describe());

    match event {
        TrailEvent::SickOxen => {
            let _ = advance_day(state, data, rng);
        }
        TrailEvent::DamagedWheel => {
            if state.resources.wagon_parts > 0 {
                state.resources.take_wagon_parts(1);
            } else {
                state
                    .event_message
                    .push_str(" Without spare parts, this will slow your journey.");
            }
        }
        TrailEvent::HeavyRains => {
            state.weather = Weather::Rainy;
        }
        TrailEvent::WildBerries => {
            state.resources.food += BERRIES_FOOD_GAIN;
        }
        TrailEvent::Shortcut => {
            state.miles_traveled += SHORTCUT_MILES;
        }
        TrailEvent::BrokenAxle => {
            if state.resources.wagon_parts > 0 {
                state.resources.take_wagon_parts(1);
                state
                    .event_message
                    .push_str(" You used a spare part to fix it.");
            } else {
                state
                    .event_message
                    .push_str(" Without spare parts, your wagon is severely damaged.");
            }
        }
        TrailEvent::BanditRaid => {
            state.resources.take_food(BANDIT_FOOD_LOSS);
            state.resources.take_ammunition(BANDIT_AMMO_LOSS);
            state.resources.take_money(BANDIT_MONEY_LOSS);
        }
        TrailEvent::SettlerGift => {
            state.resources.food += SETTLER_FOOD_GAIN;
        }
        TrailEvent::Snowstorm => {
            state.weather = Weather::Snowy;
            for _ in 0..SNOWSTORM_SHELTER_DAYS {
                if state.game_over {
                    break;
                }
                let _ = advance_day(state, data, rng);
            }
        }
        TrailEvent::Dysentery => {
            apply_dysentery(state, rng);
        }
    }
}

fn apply_dysentery(state: &mut JourneyState, rng: &mut dyn RandomSource) {
    let Some(index) = state.party.pick_living(rng) else {
        return;
    };
    let name = state.party.members[index].name.clone();
    state
        .event_message
        .push_str(&format!(" {name} has caught it."));
    state.party.members[index].ailment = String::from(AILMENT_DYSENTERY);

    let mut delta = -DYSENTERY_PENALTY;
    if state.resources.use_medicine() {
        delta += DYSENTERY_RELIEF;
        state
            .event_message
            .push_str(" You used medicine to treat them.");
    }
    if state.party.members[index].adjust_health(delta) {
        state
            .event_message
            .push_str(&format!(" Unfortunately, {name} has died."));
        state.logs.push(String::from(LOG_MEMBER_DEATH));
    }
}
