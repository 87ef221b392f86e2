//! Mutations an encounter session accepts.

use crate::challenge::ChallengeRating;
use crate::roster::CreatureGroup;

/// A single state change applied through
/// [`EncounterSession::execute`](crate::EncounterSession::execute).
///
/// Challenge ratings are already validated; string input goes through
/// [`ChallengeRating::from_str`](core::str::FromStr) or
/// [`CreatureSpec`](crate::CreatureSpec) first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterCommand {
    SetPartySize(i64),
    SetPartyLevel(i64),
    AddPlayer,
    RemovePlayer,
    AddLevel,
    RemoveLevel,
    SetCount {
        group: CreatureGroup,
        cr: ChallengeRating,
        count: i64,
    },
    Increment {
        group: CreatureGroup,
        cr: ChallengeRating,
    },
    Decrement {
        group: CreatureGroup,
        cr: ChallengeRating,
    },
    Toggle {
        group: CreatureGroup,
        cr: ChallengeRating,
    },
    ToggleActiveGroup,
}

impl EncounterCommand {
    /// Level the party would have after this command, if it changes the level.
    pub(crate) fn target_level(&self, current: u32) -> Option<i64> {
        let current = i64::from(current);
        match self {
            Self::SetPartyLevel(level) => Some(*level),
            Self::AddLevel => Some(current + 1),
            Self::RemoveLevel => Some(current - 1),
            _ => None,
        }
    }
}
