//! Westbound Game Engine
//!
//! Platform-agnostic core game logic for the Westbound overland journey
//! simulation. This crate provides all game mechanics without UI or
//! platform-specific dependencies: the host application owns the window
//! and the frame loop, translates raw input into [`Command`] values, and
//! renders whatever [`JourneySnapshot`] reports back.

pub mod constants;
pub mod crossing;
pub mod data;
pub mod events;
pub mod hunt;
pub mod journey;
pub mod numbers;
pub mod party;
pub mod profession;
pub mod resources;
pub mod rng;
pub mod route;
pub mod score;
pub mod seed;
pub mod state;
pub mod trade;
pub mod weather;

// Re-export commonly used types
pub use crossing::CrossingMethod;
pub use data::GameData;
pub use events::TrailEvent;
pub use hunt::{HuntOutcome, resolve_shot};
pub use journey::{
    Command, CommandOutcome, DayOutcome, JourneySession, JourneySnapshot, NextLandmarkView,
    advance_day, handle_command,
};
pub use party::{HealthLabel, Party, PartyMember};
pub use profession::{Profession, ProfessionSpec, ProfessionsList};
pub use resources::Resources;
pub use rng::{JourneyRng, RandomSource, ScriptedSource};
pub use route::{Landmark, RouteError, RouteTable};
pub use score::{
    Ending, Rating, ResultSummary, ScoreBreakdown, compute_score, percent_complete, summarize,
};
pub use seed::{decode_to_seed, encode_friendly, generate_code_from_entropy};
pub use state::{JourneyPhase, JourneyState, month_name};
pub use trade::{PurchaseOutcome, TradeGood, purchase};
pub use weather::{Weather, seasonal_base, select_daily_weather};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_boots_and_travels() {
        let mut session = JourneySession::with_defaults(Profession::Banker, 0xABCD).unwrap();
        assert_eq!(session.state().phase, JourneyPhase::Setup);

        session.submit(Command::Continue);
        assert_eq!(session.state().phase, JourneyPhase::Traveling);

        session.submit(Command::Advance);
        let snapshot = session.snapshot();
        assert!(snapshot.miles_traveled >= 1);
        assert_eq!(snapshot.day, 2);
    }

    #[test]
    fn journey_code_feeds_a_session() {
        let (profession, seed) = decode_to_seed("FM-WAGON07").unwrap();
        let session = JourneySession::with_defaults(profession, seed).unwrap();
        assert_eq!(session.state().profession, Profession::Farmer);
        assert_eq!(session.state().seed, seed);
        assert_eq!(encode_friendly(profession, seed), "FM-WAGON07");
    }
}
