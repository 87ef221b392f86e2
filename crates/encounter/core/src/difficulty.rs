//! Encounter difficulty scoring.
//!
//! The engine compares the total power of the enemies against the power of
//! the party (plus allies) and squares the ratio to estimate the share of the
//! party's hit points the fight will cost:
//!
//! ```text
//! hp_cost = round(100 * (enemy_power / (party_power + ally_power))^2)
//! ```
//!
//! Each creature's raw power is first scaled by the multiplier of the ratio
//! band nearest to `creature_power / player_power`, then rounded per creature
//! type before being multiplied by its count.

use crate::challenge::ChallengeRating;
use crate::config::EncounterConfig;
use crate::error::LookupError;
use crate::roster::CreatureCounts;
use crate::tables::{PowerTables, ScaleBand, TablesOracle};

/// Qualitative difficulty band for a numeric hp cost.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Mild,
    Bruising,
    Bloody,
    Brutal,
    Oppressive,
    Overwhelming,
    Crushing,
    Devastating,
    Impossible,
}

impl Difficulty {
    /// Exclusive upper bounds, ascending; anything at or above the last is
    /// [`Difficulty::Impossible`].
    const BANDS: [(u64, Difficulty); 8] = [
        (20, Self::Mild),
        (40, Self::Bruising),
        (60, Self::Bloody),
        (80, Self::Brutal),
        (100, Self::Oppressive),
        (130, Self::Overwhelming),
        (170, Self::Crushing),
        (250, Self::Devastating),
    ];

    pub fn from_hp_cost(hp_cost: u64) -> Self {
        Self::BANDS
            .iter()
            .find(|(bound, _)| hp_cost < *bound)
            .map_or(Self::Impossible, |&(_, difficulty)| difficulty)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Result of one difficulty computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyReport {
    /// Expected percentage of party hit points lost.
    pub hp_cost: u64,
    /// `None` when the encounter has no enemy power at all.
    pub difficulty: Option<Difficulty>,
    /// Expected percentage of daily resources spent.
    pub resources_spent: u64,
    pub player_power: u32,
    /// Power of the party members alone, before allies.
    pub party_power: u64,
    pub ally_power: u64,
    pub enemy_power: u64,
    /// Some enemy can knock out a party member in a single turn.
    pub ko_risk: bool,
}

impl DifficultyReport {
    pub const NO_LOSS_LABEL: &'static str = "no hit points lost";

    pub fn label(&self) -> &'static str {
        self.difficulty
            .map_or(Self::NO_LOSS_LABEL, Difficulty::as_str)
    }

    pub fn total_party_power(&self) -> u64 {
        self.party_power + self.ally_power
    }
}

/// Pure difficulty calculator over a set of power tables.
#[derive(Clone, Debug)]
pub struct DifficultyEngine<T = PowerTables> {
    tables: T,
    resource_ratio: f64,
    ko_warning_ratio: f64,
}

impl DifficultyEngine<PowerTables> {
    pub fn new() -> Self {
        Self::with_tables(PowerTables, &EncounterConfig::default())
    }

    pub fn from_config(config: &EncounterConfig) -> Self {
        Self::with_tables(PowerTables, config)
    }
}

impl Default for DifficultyEngine<PowerTables> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TablesOracle> DifficultyEngine<T> {
    pub fn with_tables(tables: T, config: &EncounterConfig) -> Self {
        Self {
            tables,
            resource_ratio: config.resource_ratio,
            ko_warning_ratio: config.ko_warning_ratio,
        }
    }

    pub fn tables(&self) -> &T {
        &self.tables
    }

    /// Power of one party member at `level`.
    pub fn player_power(&self, level: u32) -> Result<u32, LookupError> {
        self.tables
            .level_power(level)
            .ok_or(LookupError::Level { level })
    }

    /// Multiplier of the ratio band nearest to `ratio`.
    ///
    /// Ties go to the band scanned first.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::EmptyRatioScale`] if the tables declare no bands.
    pub fn nearest_ratio_multiplier(&self, ratio: f64) -> Result<f64, LookupError> {
        nearest_band(self.tables.ratio_scale(), ratio)
            .map(|band| band.multiplier)
            .ok_or(LookupError::EmptyRatioScale)
    }

    /// Scales and rounds the power of a single creature of rating `cr`.
    pub fn scaled_power(&self, cr: ChallengeRating, player_power: u32) -> Result<u64, LookupError> {
        let raw = f64::from(self.raw_power(cr)?);
        let multiplier = self.nearest_ratio_multiplier(raw / f64::from(player_power))?;
        Ok((raw * multiplier).round() as u64)
    }

    /// Computes the difficulty of `enemies` against a party plus `allies`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if `party_level` or any present CR is missing
    /// from the power tables.
    pub fn compute_difficulty(
        &self,
        party_size: u32,
        party_level: u32,
        enemies: &CreatureCounts,
        allies: &CreatureCounts,
    ) -> Result<DifficultyReport, LookupError> {
        let player_power = self.player_power(party_level)?;
        let party_power = u64::from(party_size) * u64::from(player_power);

        let enemy_power = self.group_power(enemies, player_power)?;
        let ally_power = self.group_power(allies, player_power)?;
        let ko_risk = self.has_ko_risk(enemies, player_power)?;

        let total_party_power = party_power + ally_power;
        let (hp_cost, difficulty) = if enemy_power == 0 {
            (0, None)
        } else if total_party_power == 0 {
            tracing::warn!(
                "Encounter has {} enemy power against an empty party",
                enemy_power
            );
            (u64::MAX, Some(Difficulty::Impossible))
        } else {
            let share = enemy_power as f64 / total_party_power as f64;
            let hp_cost = (100.0 * share * share).round() as u64;
            (hp_cost, Some(Difficulty::from_hp_cost(hp_cost)))
        };

        let resources_spent = (self.resource_ratio * hp_cost as f64).round() as u64;

        tracing::debug!(
            party_size,
            party_level,
            enemy_power,
            ally_power,
            hp_cost,
            "Computed encounter difficulty"
        );

        Ok(DifficultyReport {
            hp_cost,
            difficulty,
            resources_spent,
            player_power,
            party_power,
            ally_power,
            enemy_power,
            ko_risk,
        })
    }

    fn raw_power(&self, cr: ChallengeRating) -> Result<u32, LookupError> {
        self.tables
            .cr_power(cr)
            .ok_or(LookupError::ChallengeRating { cr })
    }

    fn group_power(&self, group: &CreatureCounts, player_power: u32) -> Result<u64, LookupError> {
        group.present().try_fold(0u64, |total, (cr, count)| {
            let scaled = self.scaled_power(cr, player_power)?;
            Ok(total.saturating_add(u64::from(count).saturating_mul(scaled)))
        })
    }

    fn has_ko_risk(&self, enemies: &CreatureCounts, player_power: u32) -> Result<bool, LookupError> {
        for (cr, _) in enemies.present() {
            let ratio = f64::from(self.raw_power(cr)?) / f64::from(player_power);
            if ratio >= self.ko_warning_ratio {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn nearest_band(bands: &[ScaleBand], ratio: f64) -> Option<&ScaleBand> {
    let mut bands = bands.iter();
    let first = bands.next()?;
    Some(bands.fold(first, |best, band| {
        if (band.ratio - ratio).abs() < (best.ratio - ratio).abs() {
            band
        } else {
            best
        }
    }))
}
