use crate::challenge::ChallengeRating;

/// Oracle providing the power lookup tables used by the difficulty engine.
///
/// Lookups return `None` for keys outside the table; the engine turns that
/// into a [`LookupError`](crate::LookupError) rather than substituting a
/// default.
pub trait TablesOracle: Send + Sync {
    /// Power of a single party member at `level`.
    fn level_power(&self, level: u32) -> Option<u32>;

    /// Power of a single creature at `cr`.
    fn cr_power(&self, cr: ChallengeRating) -> Option<u32>;

    /// Ratio bands in their declared scan order. An empty scale makes every
    /// creature scaling fail with `LookupError::EmptyRatioScale`.
    fn ratio_scale(&self) -> &[ScaleBand];
}

/// One entry of the ratio scaling table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    pub ratio: f64,
    pub multiplier: f64,
}

impl ScaleBand {
    pub const fn new(ratio: f64, multiplier: f64) -> Self {
        Self { ratio, multiplier }
    }
}

/// Power of one party member, indexed by `level - 1`.
pub const LEVEL_POWER: [u32; 20] = [
    11, 14, 18, 23, 32, 35, 41, 44, 49, 53, 62, 68, 71, 74, 82, 84, 103, 119, 131, 141,
];

/// Power of one creature, indexed by [`ChallengeRating::index`].
pub const CR_POWER: [u32; ChallengeRating::COUNT] = [
    1, 5, 10, 16, // 0, 1/8, 1/4, 1/2
    22, 28, 37, 48, 60, 65, 70, 85, 85, 95, // 1-10
    105, 115, 120, 125, 130, 140, 150, 160, 165, 180, // 11-20
    200, 225, 250, 275, 300, 325, 350, 375, 400, 425, // 21-30
];

/// Ratio bands, scanned in this order when snapping to the nearest ratio.
pub const RATIO_SCALE: [ScaleBand; 7] = [
    ScaleBand::new(5.0, 1.67),
    ScaleBand::new(2.5, 1.33),
    ScaleBand::new(1.5, 1.25),
    ScaleBand::new(1.0, 1.0),
    ScaleBand::new(0.67, 0.8),
    ScaleBand::new(0.4, 0.67),
    ScaleBand::new(0.2, 0.5),
];

/// The standard process-wide power tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerTables;

impl PowerTables {
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = LEVEL_POWER.len() as u32;
}

impl TablesOracle for PowerTables {
    fn level_power(&self, level: u32) -> Option<u32> {
        let index = level.checked_sub(1)? as usize;
        LEVEL_POWER.get(index).copied()
    }

    fn cr_power(&self, cr: ChallengeRating) -> Option<u32> {
        CR_POWER.get(cr.index()).copied()
    }

    fn ratio_scale(&self) -> &[ScaleBand] {
        &RATIO_SCALE
    }
}
