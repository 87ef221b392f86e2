//! Session wiring: every mutation recomputes and republishes the difficulty.

use crate::challenge::{ChallengeRating, IntoChallengeRating};
use crate::command::EncounterCommand;
use crate::config::EncounterConfig;
use crate::difficulty::{DifficultyEngine, DifficultyReport};
use crate::error::{EncounterError, LookupError, ValidationError};
use crate::events::{DifficultyChanged, PartyEvent, RosterEvent, Subscribers, SubscriptionId};
use crate::party::Party;
use crate::roster::{CreatureGroup, CreatureSpec, Roster};
use crate::tables::{PowerTables, TablesOracle};

/// One party and one roster, scored by a [`DifficultyEngine`].
///
/// All mutations go through [`EncounterSession::execute`]. A successful
/// command runs in this order, synchronously:
///
/// 1. the party or roster applies it and publishes its own event
/// 2. the engine recomputes from the current party and roster
/// 3. [`DifficultyChanged`] is published and the new report is returned
///
/// A failing command is rejected before anything is mutated, so the session
/// state and the last published report stay as they were.
#[derive(Debug)]
pub struct EncounterSession<T = PowerTables> {
    party: Party,
    roster: Roster,
    engine: DifficultyEngine<T>,
    report: DifficultyReport,
    subscribers: Subscribers<DifficultyChanged>,
}

impl EncounterSession<PowerTables> {
    pub fn new(config: &EncounterConfig) -> Result<Self, EncounterError> {
        Self::with_tables(PowerTables, config)
    }
}

impl<T: TablesOracle> EncounterSession<T> {
    /// Builds a session from configured defaults and computes the initial
    /// report. Nothing is published during construction.
    pub fn with_tables(tables: T, config: &EncounterConfig) -> Result<Self, EncounterError> {
        let party = Party::from_config(config)?;
        let roster = Roster::new();
        let engine = DifficultyEngine::with_tables(tables, config);
        let report = engine.compute_difficulty(
            party.size(),
            party.level(),
            &roster.enemies(),
            &roster.allies(),
        )?;

        Ok(Self {
            party,
            roster,
            engine,
            report,
            subscribers: Subscribers::new(),
        })
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn engine(&self) -> &DifficultyEngine<T> {
        &self.engine
    }

    /// The most recently published report.
    pub fn report(&self) -> &DifficultyReport {
        &self.report
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&DifficultyChanged) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscribe_party(&mut self, listener: impl FnMut(&PartyEvent) + 'static) -> SubscriptionId {
        self.party.subscribe(listener)
    }

    pub fn subscribe_roster(
        &mut self,
        listener: impl FnMut(&RosterEvent) + 'static,
    ) -> SubscriptionId {
        self.roster.subscribe(listener)
    }

    /// Applies `command`, recomputes, and publishes the new report.
    ///
    /// # Errors
    ///
    /// - [`ValidationError`] for a non-positive level
    /// - [`LookupError`] for a level or CR missing from the power tables
    ///
    /// In both cases nothing is mutated or published.
    pub fn execute(&mut self, command: EncounterCommand) -> Result<DifficultyReport, EncounterError> {
        self.check(&command)?;
        self.apply(command)?;
        Ok(self.recalculate()?)
    }

    /// Recomputes from the current state and publishes the result.
    pub fn recalculate(&mut self) -> Result<DifficultyReport, LookupError> {
        let report = self.engine.compute_difficulty(
            self.party.size(),
            self.party.level(),
            &self.roster.enemies(),
            &self.roster.allies(),
        )?;
        self.report = report.clone();
        self.subscribers.publish(&DifficultyChanged {
            report: report.clone(),
        });
        Ok(report)
    }

    pub fn set_party_size(&mut self, size: i64) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::SetPartySize(size))
    }

    pub fn set_party_level(&mut self, level: i64) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::SetPartyLevel(level))
    }

    pub fn add_player(&mut self) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::AddPlayer)
    }

    pub fn remove_player(&mut self) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::RemovePlayer)
    }

    pub fn add_level(&mut self) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::AddLevel)
    }

    pub fn remove_level(&mut self) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::RemoveLevel)
    }

    pub fn set_count(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
        count: i64,
    ) -> Result<DifficultyReport, EncounterError> {
        let cr = cr.into_challenge_rating()?;
        self.execute(EncounterCommand::SetCount { group, cr, count })
    }

    pub fn increment(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<DifficultyReport, EncounterError> {
        let cr = cr.into_challenge_rating()?;
        self.execute(EncounterCommand::Increment { group, cr })
    }

    pub fn decrement(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<DifficultyReport, EncounterError> {
        let cr = cr.into_challenge_rating()?;
        self.execute(EncounterCommand::Decrement { group, cr })
    }

    pub fn toggle(
        &mut self,
        group: CreatureGroup,
        cr: impl IntoChallengeRating,
    ) -> Result<DifficultyReport, EncounterError> {
        let cr = cr.into_challenge_rating()?;
        self.execute(EncounterCommand::Toggle { group, cr })
    }

    /// Toggles `cr` in whichever group is currently active.
    pub fn toggle_active(
        &mut self,
        cr: impl IntoChallengeRating,
    ) -> Result<DifficultyReport, EncounterError> {
        let group = self.roster.active_group();
        self.toggle(group, cr)
    }

    pub fn toggle_active_group(&mut self) -> Result<DifficultyReport, EncounterError> {
        self.execute(EncounterCommand::ToggleActiveGroup)
    }

    /// Adds `spec.count` creatures on top of the current count.
    pub fn add_creatures(
        &mut self,
        group: CreatureGroup,
        spec: CreatureSpec,
    ) -> Result<DifficultyReport, EncounterError> {
        let count = i64::from(self.roster.count(group, spec.cr)) + i64::from(spec.count);
        self.execute(EncounterCommand::SetCount {
            group,
            cr: spec.cr,
            count,
        })
    }

    fn check(&self, command: &EncounterCommand) -> Result<(), EncounterError> {
        if let Some(level) = command.target_level(self.party.level()) {
            if level <= 0 {
                return Err(ValidationError::NonPositiveLevel { level }.into());
            }
            let level = u32::try_from(level).unwrap_or(u32::MAX);
            self.engine.player_power(level)?;
        }

        if let Some(cr) = command_cr(command) {
            let tables = self.engine.tables();
            tables
                .cr_power(cr)
                .ok_or(LookupError::ChallengeRating { cr })?;
            if tables.ratio_scale().is_empty() {
                return Err(LookupError::EmptyRatioScale.into());
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: EncounterCommand) -> Result<(), EncounterError> {
        tracing::debug!("Applying {:?}", command);
        match command {
            EncounterCommand::SetPartySize(size) => self.party.set_size(size),
            EncounterCommand::SetPartyLevel(level) => self.party.set_level(level)?,
            EncounterCommand::AddPlayer => self.party.add_player(),
            EncounterCommand::RemovePlayer => self.party.remove_player(),
            EncounterCommand::AddLevel => self.party.add_level()?,
            EncounterCommand::RemoveLevel => self.party.remove_level()?,
            EncounterCommand::SetCount { group, cr, count } => {
                self.roster.set_count(group, cr, count)?
            }
            EncounterCommand::Increment { group, cr } => self.roster.increment(group, cr)?,
            EncounterCommand::Decrement { group, cr } => self.roster.decrement(group, cr)?,
            EncounterCommand::Toggle { group, cr } => self.roster.toggle(group, cr)?,
            EncounterCommand::ToggleActiveGroup => self.roster.toggle_active_group(),
        }
        Ok(())
    }
}

fn command_cr(command: &EncounterCommand) -> Option<ChallengeRating> {
    match *command {
        EncounterCommand::SetCount { cr, .. }
        | EncounterCommand::Increment { cr, .. }
        | EncounterCommand::Decrement { cr, .. }
        | EncounterCommand::Toggle { cr, .. } => Some(cr),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::difficulty::Difficulty;

    fn session() -> EncounterSession {
        EncounterSession::new(&EncounterConfig::default()).unwrap()
    }

    fn published(session: &mut EncounterSession) -> Rc<RefCell<Vec<DifficultyReport>>> {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        session.subscribe(move |event| sink.borrow_mut().push(event.report.clone()));
        reports
    }

    #[test]
    fn starts_with_no_loss_report() {
        let session = session();
        assert_eq!(session.party().size(), 5);
        assert_eq!(session.party().level(), 1);
        assert_eq!(session.report().hp_cost, 0);
        assert_eq!(session.report().difficulty, None);
    }

    #[test]
    fn every_mutation_publishes_once() {
        let mut session = session();
        let reports = published(&mut session);

        session.increment(CreatureGroup::Enemies, "1").unwrap();
        session.set_party_size(5).unwrap();
        session.toggle_active_group().unwrap();

        let reports = reports.borrow();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].hp_cost, 26);
        assert_eq!(reports[0].difficulty, Some(Difficulty::Bruising));
        assert_eq!(reports[1], reports[0]);
    }

    #[test]
    fn component_events_fire_before_difficulty() {
        let mut session = session();
        let order = Rc::new(RefCell::new(Vec::new()));

        let party_log = Rc::clone(&order);
        session.subscribe_party(move |_| party_log.borrow_mut().push("party"));
        let difficulty_log = Rc::clone(&order);
        session.subscribe(move |_| difficulty_log.borrow_mut().push("difficulty"));

        session.add_player().unwrap();

        assert_eq!(*order.borrow(), vec!["party", "difficulty"]);
    }

    #[test]
    fn level_outside_table_is_rejected_up_front() {
        let mut session = session();
        session.increment(CreatureGroup::Enemies, "2").unwrap();
        let reports = published(&mut session);
        let before = session.report().clone();

        assert_eq!(
            session.set_party_level(21),
            Err(EncounterError::Lookup(LookupError::Level { level: 21 }))
        );
        assert!(matches!(
            session.set_party_level(0),
            Err(EncounterError::Validation(ValidationError::NonPositiveLevel { level: 0 }))
        ));
        assert!(session.remove_level().is_err());

        assert_eq!(session.party().level(), 1);
        assert_eq!(session.report(), &before);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn level_twenty_is_the_ceiling() {
        let mut session = session();
        session.set_party_level(20).unwrap();
        assert!(session.add_level().is_err());
        assert_eq!(session.party().level(), 20);
    }

    #[test]
    fn invalid_cr_string_is_rejected() {
        let mut session = session();
        let reports = published(&mut session);

        assert!(matches!(
            session.toggle(CreatureGroup::Allies, "1/3"),
            Err(EncounterError::ChallengeRating(_))
        ));
        assert!(session.roster().allies().is_empty());
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn add_creatures_stacks_counts() {
        let mut session = session();
        let spec: CreatureSpec = "1/2x2".parse().unwrap();
        session.add_creatures(CreatureGroup::Enemies, spec).unwrap();
        session.add_creatures(CreatureGroup::Enemies, spec).unwrap();
        assert_eq!(
            session
                .roster()
                .count(CreatureGroup::Enemies, ChallengeRating::OneHalf),
            4
        );
    }

    #[test]
    fn toggle_active_targets_selected_group() {
        let mut session = session();
        session.toggle_active_group().unwrap();
        let report = session.toggle_active("3").unwrap();

        assert_eq!(session.roster().count(CreatureGroup::Allies, ChallengeRating::Cr3), 1);
        assert!(report.ally_power > 0);
        assert_eq!(report.enemy_power, 0);
    }

    struct NoBandsTables;

    impl TablesOracle for NoBandsTables {
        fn level_power(&self, level: u32) -> Option<u32> {
            PowerTables.level_power(level)
        }

        fn cr_power(&self, cr: ChallengeRating) -> Option<u32> {
            PowerTables.cr_power(cr)
        }

        fn ratio_scale(&self) -> &[crate::tables::ScaleBand] {
            &[]
        }
    }

    #[test]
    fn empty_ratio_scale_rejects_creatures_before_mutating() {
        let mut session =
            EncounterSession::with_tables(NoBandsTables, &EncounterConfig::default()).unwrap();

        assert_eq!(
            session.increment(CreatureGroup::Enemies, "1"),
            Err(EncounterError::Lookup(LookupError::EmptyRatioScale))
        );
        assert!(session.roster().enemies().is_empty());
        assert_eq!(session.report().difficulty, None);
    }
}
