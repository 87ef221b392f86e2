//! Tabletop encounter difficulty scoring.
//!
//! `encounter-core` turns a party (size and level) and a roster of enemy and
//! ally creatures (counts per challenge rating) into an expected share of
//! party hit points lost, plus a qualitative difficulty band. The pure
//! scoring lives in [`difficulty::DifficultyEngine`]; [`EncounterSession`]
//! owns the mutable party and roster and republishes the difficulty after
//! every change.
pub mod challenge;
pub mod command;
pub mod config;
pub mod describe;
pub mod difficulty;
pub mod error;
pub mod events;
pub mod party;
pub mod roster;
pub mod session;
pub mod tables;

pub use challenge::{ChallengeRating, IntoChallengeRating};
pub use command::EncounterCommand;
pub use config::EncounterConfig;
pub use describe::{describe_enemies, describe_group, describe_party};
pub use difficulty::{Difficulty, DifficultyEngine, DifficultyReport};
pub use error::{
    DomainError, EncounterError, ErrorSeverity, InvalidChallengeRating, LookupError,
    ValidationError,
};
pub use events::{DifficultyChanged, PartyEvent, RosterEvent, Subscribers, SubscriptionId};
pub use party::{Party, parse_integer};
pub use roster::{CreatureCounts, CreatureGroup, CreatureSpec, Roster};
pub use session::EncounterSession;
pub use tables::{CR_POWER, LEVEL_POWER, PowerTables, RATIO_SCALE, ScaleBand, TablesOracle};
