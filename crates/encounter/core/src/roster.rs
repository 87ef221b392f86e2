//! Enemy and ally creatures, counted per challenge rating.

use core::fmt;
use core::str::FromStr;

use crate::challenge::{ChallengeRating, IntoChallengeRating};
use crate::error::{EncounterError, InvalidChallengeRating, ValidationError};
use crate::events::{RosterEvent, Subscribers, SubscriptionId};

/// Which side of the encounter a creature fights on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreatureGroup {
    #[default]
    Enemies,
    Allies,
}

impl CreatureGroup {
    pub const fn other(self) -> Self {
        match self {
            Self::Enemies => Self::Allies,
            Self::Allies => Self::Enemies,
        }
    }
}

/// Dense creature counts for all 34 challenge ratings.
///
/// Absent ratings are simply zero, so sparse inputs can be collected into
/// this type with [`FromIterator`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatureCounts {
    counts: [u32; ChallengeRating::COUNT],
}

impl CreatureCounts {
    pub const fn new() -> Self {
        Self {
            counts: [0; ChallengeRating::COUNT],
        }
    }

    pub fn get(&self, cr: ChallengeRating) -> u32 {
        self.counts[cr.index()]
    }

    pub fn set(&mut self, cr: ChallengeRating, count: u32) {
        self.counts[cr.index()] = count;
    }

    /// Every rating with its count, in ascending CR order.
    pub fn iter(&self) -> impl Iterator<Item = (ChallengeRating, u32)> + '_ {
        ChallengeRating::all().map(|cr| (cr, self.get(cr)))
    }

    /// Ratings with a count above zero, in ascending CR order.
    pub fn present(&self) -> impl Iterator<Item = (ChallengeRating, u32)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    pub fn contains(&self, cr: ChallengeRating) -> bool {
        self.get(cr) > 0
    }

    /// Total number of creatures across all ratings.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

impl Default for CreatureCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CreatureCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.present().map(|(cr, count)| (cr.as_str(), count)))
            .finish()
    }
}

impl FromIterator<(ChallengeRating, u32)> for CreatureCounts {
    /// Repeated ratings accumulate.
    fn from_iter<I: IntoIterator<Item = (ChallengeRating, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (cr, count) in iter {
            counts.set(cr, counts.get(cr).saturating_add(count));
        }
        counts
    }
}

/// A creature entry typed as `CR` or `CRxN`, e.g. `"1/2x3"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatureSpec {
    pub cr: ChallengeRating,
    pub count: u32,
}

impl FromStr for CreatureSpec {
    type Err = EncounterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (cr, count) = match trimmed.split_once(['x', 'X']) {
            Some((cr, count)) => {
                let count = count
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::NotAnInteger {
                        field: "creature count",
                        input: count.to_owned(),
                    })?;
                (cr.trim(), count)
            }
            None => (trimmed, 1),
        };
        Ok(Self {
            cr: cr.parse()?,
            count,
        })
    }
}

/// Enemies and allies for one encounter.
///
/// Every mutator validates its CR before touching state, so a rejected call
/// leaves the roster unchanged and publishes nothing.
#[derive(Debug, Default)]
pub struct Roster {
    enemies: CreatureCounts,
    allies: CreatureCounts,
    active_group: CreatureGroup,
    subscribers: Subscribers<RosterEvent>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, group: CreatureGroup, cr: ChallengeRating) -> u32 {
        self.group(group).get(cr)
    }

    /// Sets a count directly, clamping negative values to zero.
    pub fn set_count(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
        count: i64,
    ) -> Result<(), InvalidChallengeRating> {
        let cr = cr.into_challenge_rating()?;
        self.write(group, cr, clamp_count(count));
        Ok(())
    }

    pub fn increment(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        self.adjust(group, cr, 1)
    }

    /// Removes one creature; a zero count stays at zero.
    pub fn decrement(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        self.adjust(group, cr, -1)
    }

    /// Flips presence: a CR with any creatures goes to zero, otherwise to one.
    pub fn toggle(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        let cr = cr.into_challenge_rating()?;
        let next = if self.group(group).contains(cr) { 0 } else { 1 };
        self.write(group, cr, next);
        Ok(())
    }

    /// Returns a copy of one group's counts.
    pub fn snapshot(&self, group: CreatureGroup) -> CreatureCounts {
        *self.group(group)
    }

    pub fn enemies(&self) -> CreatureCounts {
        self.enemies
    }

    pub fn allies(&self) -> CreatureCounts {
        self.allies
    }

    pub fn active_group(&self) -> CreatureGroup {
        self.active_group
    }

    pub fn set_active_group(&mut self, group: CreatureGroup) {
        self.active_group = group;
        self.subscribers
            .publish(&RosterEvent::ActiveGroupChanged { group });
    }

    pub fn toggle_active_group(&mut self) {
        self.set_active_group(self.active_group.other());
    }

    pub fn contains_active(&self, cr: ChallengeRating) -> bool {
        self.group(self.active_group).contains(cr)
    }

    pub fn set_active_count(
        &mut self,
        cr: impl IntoChallengeRating,
        count: i64,
    ) -> Result<(), InvalidChallengeRating> {
        self.set_count(self.active_group, cr, count)
    }

    pub fn increment_active(
        &mut self,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        self.increment(self.active_group, cr)
    }

    pub fn decrement_active(
        &mut self,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        self.decrement(self.active_group, cr)
    }

    pub fn toggle_active(
        &mut self,
        cr: impl IntoChallengeRating,
    ) -> Result<(), InvalidChallengeRating> {
        self.toggle(self.active_group, cr)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&RosterEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn adjust(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
        delta: i64,
    ) -> Result<(), InvalidChallengeRating> {
        let cr = cr.into_challenge_rating()?;
        let next = clamp_count(i64::from(self.group(group).get(cr)) + delta);
        self.write(group, cr, next);
        Ok(())
    }

    fn write(&mut self, group: CreatureGroup, cr: ChallengeRating, count: u32) {
        self.group_mut(group).set(cr, count);
        self.subscribers
            .publish(&RosterEvent::GroupChanged { group, cr, count });
    }

    fn group(&self, group: CreatureGroup) -> &CreatureCounts {
        match group {
            CreatureGroup::Enemies => &self.enemies,
            CreatureGroup::Allies => &self.allies,
        }
    }

    fn group_mut(&mut self, group: CreatureGroup) -> &mut CreatureCounts {
        match group {
            CreatureGroup::Enemies => &mut self.enemies,
            CreatureGroup::Allies => &mut self.allies,
        }
    }
}

fn clamp_count(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}
