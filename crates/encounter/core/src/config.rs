/// Encounter defaults and tunable scoring parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterConfig {
    /// Party size a new session starts with.
    pub default_party_size: u32,
    /// Party level a new session starts with.
    pub default_party_level: u32,
    /// Share of the hp cost reported as daily resources spent.
    pub resource_ratio: f64,
    /// Creature-to-player power ratio at which an enemy can knock out a
    /// party member in a single turn.
    pub ko_warning_ratio: f64,
}

impl EncounterConfig {
    pub const DEFAULT_PARTY_SIZE: u32 = 5;
    pub const DEFAULT_PARTY_LEVEL: u32 = 1;
    pub const DEFAULT_RESOURCE_RATIO: f64 = 0.67;
    pub const DEFAULT_KO_WARNING_RATIO: f64 = 2.5;

    pub fn new() -> Self {
        Self {
            default_party_size: Self::DEFAULT_PARTY_SIZE,
            default_party_level: Self::DEFAULT_PARTY_LEVEL,
            resource_ratio: Self::DEFAULT_RESOURCE_RATIO,
            ko_warning_ratio: Self::DEFAULT_KO_WARNING_RATIO,
        }
    }

    #[must_use]
    pub fn with_party(mut self, size: u32, level: u32) -> Self {
        self.default_party_size = size;
        self.default_party_level = level;
        self
    }

    #[must_use]
    pub fn with_resource_ratio(mut self, resource_ratio: f64) -> Self {
        self.resource_ratio = resource_ratio;
        self
    }

    #[must_use]
    pub fn with_ko_warning_ratio(mut self, ko_warning_ratio: f64) -> Self {
        self.ko_warning_ratio = ko_warning_ratio;
        self
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}
