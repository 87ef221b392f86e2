//! The adventuring party: member count and shared level.

use crate::config::EncounterConfig;
use crate::error::ValidationError;
use crate::events::{PartyEvent, Subscribers, SubscriptionId};

/// Party size and level, with change notification.
///
/// `Party` knows nothing about rosters or difficulty; it only validates its
/// own input and publishes a [`PartyEvent`] on every successful write.
#[derive(Debug)]
pub struct Party {
    size: u32,
    level: u32,
    subscribers: Subscribers<PartyEvent>,
}

impl Party {
    /// Creates a party without publishing any events.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveLevel`] if `level` is zero.
    pub fn new(size: u32, level: u32) -> Result<Self, ValidationError> {
        if level == 0 {
            return Err(ValidationError::NonPositiveLevel { level: 0 });
        }
        Ok(Self {
            size,
            level,
            subscribers: Subscribers::new(),
        })
    }

    /// Creates a party from the configured defaults.
    pub fn from_config(config: &EncounterConfig) -> Result<Self, ValidationError> {
        Self::new(config.default_party_size, config.default_party_level)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Sets the party size, clamping negative values to zero.
    pub fn set_size(&mut self, size: i64) {
        self.size = u32::try_from(size.max(0)).unwrap_or(u32::MAX);
        self.subscribers
            .publish(&PartyEvent::SizeChanged { size: self.size });
    }

    /// Sets the party level.
    ///
    /// Levels above the power table are accepted here and rejected at lookup
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveLevel`] if `level <= 0`; the
    /// party is left unchanged.
    pub fn set_level(&mut self, level: i64) -> Result<(), ValidationError> {
        if level <= 0 {
            return Err(ValidationError::NonPositiveLevel { level });
        }
        self.level = u32::try_from(level).unwrap_or(u32::MAX);
        self.subscribers
            .publish(&PartyEvent::LevelChanged { level: self.level });
        Ok(())
    }

    pub fn add_player(&mut self) {
        self.set_size(i64::from(self.size) + 1);
    }

    pub fn remove_player(&mut self) {
        self.set_size(i64::from(self.size) - 1);
    }

    pub fn add_level(&mut self) -> Result<(), ValidationError> {
        self.set_level(i64::from(self.level) + 1)
    }

    pub fn remove_level(&mut self) -> Result<(), ValidationError> {
        self.set_level(i64::from(self.level) - 1)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&PartyEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl Default for Party {
    fn default() -> Self {
        Self {
            size: EncounterConfig::DEFAULT_PARTY_SIZE,
            level: EncounterConfig::DEFAULT_PARTY_LEVEL,
            subscribers: Subscribers::new(),
        }
    }
}

/// Parses an integer field typed by a person, e.g. a party size.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnInteger`] naming `field` when `input` is
/// not a base-10 integer.
pub fn parse_integer(field: &'static str, input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            input: input.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorded(party: &mut Party) -> Rc<RefCell<Vec<PartyEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        party.subscribe(move |event| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn defaults_to_five_level_one_players() {
        let party = Party::default();
        assert_eq!(party.size(), 5);
        assert_eq!(party.level(), 1);
    }

    #[test]
    fn default_matches_configured_defaults() {
        let party = Party::default();
        let configured = Party::from_config(&EncounterConfig::default()).unwrap();
        assert_eq!(party.size(), configured.size());
        assert_eq!(party.level(), configured.level());
    }

    #[test]
    fn set_size_clamps_negative_to_zero() {
        let mut party = Party::default();
        let events = recorded(&mut party);

        party.set_size(-3);

        assert_eq!(party.size(), 0);
        assert_eq!(*events.borrow(), vec![PartyEvent::SizeChanged { size: 0 }]);
    }

    #[test]
    fn remove_player_stops_at_zero() {
        let mut party = Party::new(1, 3).unwrap();
        party.remove_player();
        party.remove_player();
        assert_eq!(party.size(), 0);
        party.add_player();
        assert_eq!(party.size(), 1);
    }

    #[test]
    fn non_positive_level_is_rejected_without_side_effects() {
        let mut party = Party::new(4, 7).unwrap();
        let events = recorded(&mut party);

        assert_eq!(
            party.set_level(0),
            Err(ValidationError::NonPositiveLevel { level: 0 })
        );
        assert!(party.set_level(-2).is_err());

        assert_eq!(party.level(), 7);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn level_above_table_is_stored() {
        let mut party = Party::default();
        party.set_level(21).unwrap();
        assert_eq!(party.level(), 21);
    }

    #[test]
    fn level_steps_publish_changes() {
        let mut party = Party::default();
        let events = recorded(&mut party);

        party.add_level().unwrap();
        assert!(party.remove_level().is_ok());
        assert!(party.remove_level().is_err());

        assert_eq!(party.level(), 1);
        assert_eq!(
            *events.borrow(),
            vec![
                PartyEvent::LevelChanged { level: 2 },
                PartyEvent::LevelChanged { level: 1 },
            ]
        );
    }

    #[test]
    fn new_rejects_level_zero() {
        assert!(Party::new(5, 0).is_err());
    }

    #[test]
    fn parse_integer_reports_field() {
        assert_eq!(parse_integer("size", " 4 "), Ok(4));
        assert_eq!(
            parse_integer("size", "4.5"),
            Err(ValidationError::NotAnInteger {
                field: "size",
                input: "4.5".to_owned(),
            })
        );
    }
}
