//! Journey orchestration: phases, commands, and the command router.
//!
//! The router is the only writer of journey state. Each phase owns a small
//! handler; an exhaustive match keeps the transition table in one place.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FORD_INJURY, GUIDE_FEE, REST_LONG_DAYS, REST_MEDIUM_DAYS, REST_SHORT_DAYS, WAIT_MAX_DAYS,
    WAIT_MIN_DAYS,
};
use crate::crossing::{self, CrossingMethod};
use crate::data::GameData;
use crate::hunt::{HuntOutcome, resolve_shot};
use crate::rng::RandomSource;
use crate::state::{JourneyPhase, JourneyState};
use crate::trade::{PurchaseOutcome, TradeGood, purchase};

pub mod daily;
pub mod event;
pub mod session;

pub use daily::{DayOutcome, advance_day};
pub use session::{JourneySession, JourneySnapshot, NextLandmarkView};

/// One classified player command, already translated by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Acknowledge / proceed (SPACE or RETURN in the original bindings).
    Continue,
    /// Leave the current mode, or the journey when nothing is pending.
    Cancel,
    /// Pick a numbered menu option, 1-5.
    Select(u8),
    /// Spend a day on the trail.
    Advance,
}

/// What the host should do after submitting a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command was consumed; state may have changed.
    Handled,
    /// The command means nothing in the current phase; nothing changed.
    Ignored,
    /// The player is done with this journey; the host should discard it.
    Exit,
}

/// Route one command to the active phase handler.
pub fn handle_command(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    command: Command,
) -> CommandOutcome {
    match state.phase {
        JourneyPhase::Setup => handle_setup(state, command),
        JourneyPhase::Traveling => handle_traveling(state, data, rng, command),
        JourneyPhase::Location => handle_location(state, command),
        JourneyPhase::River => handle_river(state, data, rng, command),
        JourneyPhase::Hunting => handle_hunting(state, rng, command),
        JourneyPhase::Trading => handle_trading(state, command),
        JourneyPhase::Event => handle_event(state, command),
        JourneyPhase::Resting => handle_resting(state, data, rng, command),
        JourneyPhase::GameOver => CommandOutcome::Exit,
    }
}

fn handle_setup(state: &mut JourneyState, command: Command) -> CommandOutcome {
    match command {
        Command::Continue => {
            state.phase = JourneyPhase::Traveling;
            CommandOutcome::Handled
        }
        Command::Cancel => CommandOutcome::Exit,
        _ => CommandOutcome::Ignored,
    }
}

fn handle_traveling(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    command: Command,
) -> CommandOutcome {
    match command {
        Command::Advance => {
            let _ = advance_day(state, data, rng);
            CommandOutcome::Handled
        }
        Command::Select(1) => {
            state.phase = JourneyPhase::Resting;
            CommandOutcome::Handled
        }
        Command::Select(2) => {
            state.phase = JourneyPhase::Hunting;
            CommandOutcome::Handled
        }
        Command::Select(3) => {
            state.phase = JourneyPhase::Trading;
            CommandOutcome::Handled
        }
        Command::Select(4) => {
            state.event_message = supplies_report(state);
            state.phase = JourneyPhase::Event;
            CommandOutcome::Handled
        }
        Command::Cancel => CommandOutcome::Exit,
        _ => CommandOutcome::Ignored,
    }
}

fn handle_location(state: &mut JourneyState, command: Command) -> CommandOutcome {
    match command {
        Command::Continue => {
            state.phase = JourneyPhase::Traveling;
            CommandOutcome::Handled
        }
        Command::Cancel => CommandOutcome::Exit,
        _ => CommandOutcome::Ignored,
    }
}

fn handle_event(state: &mut JourneyState, command: Command) -> CommandOutcome {
    match command {
        Command::Continue => {
            // A terminal journey re-enters GameOver; Event never resurrects play.
            state.phase = if state.game_over {
                JourneyPhase::GameOver
            } else {
                JourneyPhase::Traveling
            };
            CommandOutcome::Handled
        }
        Command::Cancel => CommandOutcome::Exit,
        _ => CommandOutcome::Ignored,
    }
}

fn handle_river(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    command: Command,
) -> CommandOutcome {
    match command {
        Command::Select(option) => match CrossingMethod::from_option(option) {
            Some(method) => {
                resolve_crossing(state, data, rng, method);
                CommandOutcome::Handled
            }
            None => CommandOutcome::Ignored,
        },
        Command::Cancel => CommandOutcome::Exit,
        _ => CommandOutcome::Ignored,
    }
}

fn resolve_crossing(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    method: CrossingMethod,
) {
    match method {
        CrossingMethod::Ford => ford_river(state, data, rng),
        CrossingMethod::CaulkAndFloat => caulk_and_float(state, rng),
        CrossingMethod::HireGuide => hire_guide(state),
        CrossingMethod::WaitOut => wait_out_river(state, data, rng),
    }
}

fn ford_river(state: &mut JourneyState, data: &GameData, rng: &mut dyn RandomSource) {
    let depth = state
        .current_landmark(data)
        .filter(|landmark| landmark.is_river)
        .map_or(0, |landmark| landmark.river_depth);
    let roll = rng.roll(1, 10);
    if crossing::ford_succeeds(roll, depth) {
        state.event_message = String::from("You successfully forded the river!");
    } else {
        state.event_message = String::from("Disaster! Your wagon tipped while crossing!");
        let food_loss = crossing::ford_food_loss(state.resources.food);
        state.resources.take_food(food_loss);
        if let Some(index) = state.party.pick_living(rng) {
            let died = state.party.members[index].adjust_health(-FORD_INJURY);
            let name = state.party.members[index].name.clone();
            if died {
                state
                    .event_message
                    .push_str(&format!(" {name} has drowned."));
            } else {
                state
                    .event_message
                    .push_str(&format!(" {name} was injured."));
            }
        }
    }
    state.phase = JourneyPhase::Event;
}

fn caulk_and_float(state: &mut JourneyState, rng: &mut dyn RandomSource) {
    if state.resources.wagon_parts >= 1 {
        state.resources.take_wagon_parts(1);
        let roll = rng.roll(1, 10);
        if crossing::caulk_succeeds(roll) {
            state.event_message =
                String::from("You successfully caulked and floated the wagon across!");
        } else {
            state.event_message =
                String::from("The river was too deep! Your wagon and supplies were damaged.");
            let food_loss = crossing::caulk_food_loss(state.resources.food);
            state.resources.take_food(food_loss);
            state.resources.take_clothing(1);
        }
    } else {
        state.event_message = String::from("You don't have enough wagon parts to caulk the wagon.");
    }
    state.phase = JourneyPhase::Event;
}

fn hire_guide(state: &mut JourneyState) {
    if state.resources.spend(GUIDE_FEE) {
        state.event_message =
            String::from("You hired a guide to help you cross the river safely.");
    } else {
        state.event_message = String::from("You don't have enough money to hire a guide.");
    }
    state.phase = JourneyPhase::Event;
}

fn wait_out_river(state: &mut JourneyState, data: &GameData, rng: &mut dyn RandomSource) {
    let days = rng.roll(WAIT_MIN_DAYS, WAIT_MAX_DAYS);
    for _ in 0..days {
        if state.game_over {
            break;
        }
        let _ = advance_day(state, data, rng);
    }
    if !state.game_over {
        state.event_message = format!(
            "You waited {days} days for river conditions to improve. The river seems a bit calmer now."
        );
        state.phase = JourneyPhase::Event;
    }
}

fn handle_hunting(
    state: &mut JourneyState,
    rng: &mut dyn RandomSource,
    command: Command,
) -> CommandOutcome {
    match command {
        Command::Continue => {
            state.event_message = match resolve_shot(&mut state.resources, rng) {
                HuntOutcome::Hit { food_gained } => {
                    format!("Successful hunt! You gained {food_gained} pounds of food.")
                }
                HuntOutcome::Miss => {
                    String::from("The hunt was unsuccessful. You wasted ammunition.")
                }
                HuntOutcome::OutOfAmmo => {
                    String::from("You're out of ammunition. You cannot hunt.")
                }
            };
            state.phase = JourneyPhase::Event;
            CommandOutcome::Handled
        }
        Command::Cancel => {
            // Walking away from a hunt skips the Event stop.
            state.phase = JourneyPhase::Traveling;
            CommandOutcome::Handled
        }
        _ => CommandOutcome::Ignored,
    }
}

fn handle_trading(state: &mut JourneyState, command: Command) -> CommandOutcome {
    match command {
        Command::Select(option) => match TradeGood::from_option(option) {
            Some(good) => {
                match purchase(&mut state.resources, good) {
                    PurchaseOutcome::Bought { good } => {
                        state.event_message = format!(
                            "You purchased {} for ${}.",
                            good.lot_label(),
                            good.price()
                        );
                        state.phase = JourneyPhase::Event;
                    }
                    PurchaseOutcome::InsufficientFunds { good } => {
                        // Informational only: the ledger and phase are untouched.
                        state.event_message = format!(
                            "You don't have enough money for {}.",
                            good.lot_label()
                        );
                    }
                }
                CommandOutcome::Handled
            }
            None => CommandOutcome::Ignored,
        },
        Command::Cancel => {
            state.phase = JourneyPhase::Traveling;
            CommandOutcome::Handled
        }
        _ => CommandOutcome::Ignored,
    }
}

fn handle_resting(
    state: &mut JourneyState,
    data: &GameData,
    rng: &mut dyn RandomSource,
    command: Command,
) -> CommandOutcome {
    let days = match command {
        Command::Select(1) => REST_SHORT_DAYS,
        Command::Select(2) => REST_MEDIUM_DAYS,
        Command::Select(3) => REST_LONG_DAYS,
        Command::Cancel => {
            state.phase = JourneyPhase::Traveling;
            return CommandOutcome::Handled;
        }
        _ => return CommandOutcome::Ignored,
    };
    rest_for_days(state, data, rng, days);
    CommandOutcome::Handled
}

/// Run a player-requested rest: each day is a full tick with the rest
/// bonus active. Aborts as soon as the journey ends.
fn rest_for_days(state: &mut JourneyState, data: &GameData, rng: &mut dyn RandomSource, days: i32) {
    state.resting = true;
    for _ in 0..days {
        if state.game_over {
            break;
        }
        let _ = advance_day(state, data, rng);
    }
    state.resting = false;
    if !state.game_over {
        state.event_message =
            format!("You rested for {days} days. Your party's health has improved.");
        state.phase = JourneyPhase::Event;
    }
}

fn supplies_report(state: &JourneyState) -> String {
    format!(
        "Current Supplies:\nMoney: ${}\nFood: {} pounds\nAmmunition: {} bullets\nClothing: {} sets\nWagon Parts: {}\nMedicines: {}",
        state.resources.money,
        state.resources.food,
        state.resources.ammunition,
        state.resources.clothing,
        state.resources.wagon_parts,
        state.resources.medicines,
    )
}
