use crate::challenge::ChallengeRating;
use crate::difficulty::DifficultyReport;
use crate::roster::CreatureGroup;

/// Events published by [`Party`](crate::Party).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyEvent {
    SizeChanged { size: u32 },
    LevelChanged { level: u32 },
}

/// Events published by [`Roster`](crate::Roster).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterEvent {
    /// The count for one CR in `group` was written.
    GroupChanged {
        group: CreatureGroup,
        cr: ChallengeRating,
        count: u32,
    },
    /// The group targeted by the active-group mutators was switched.
    ActiveGroupChanged { group: CreatureGroup },
}

/// Published by [`EncounterSession`](crate::EncounterSession) after every
/// recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyChanged {
    pub report: DifficultyReport,
}
