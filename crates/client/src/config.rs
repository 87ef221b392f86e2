//! Client configuration loaded from the process environment.
use std::env;

use encounter_core::EncounterConfig;

/// Configuration required to bootstrap an encounter session.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub encounter: EncounterConfig,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENCOUNTER_PARTY_SIZE` - Starting party size (default: 5)
    /// - `ENCOUNTER_PARTY_LEVEL` - Starting party level (default: 1)
    /// - `ENCOUNTER_RESOURCE_RATIO` - Share of hp cost spent as daily resources (default: 0.67)
    /// - `ENCOUNTER_KO_WARNING_RATIO` - Power ratio that triggers the KO warning (default: 2.5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup. Unparsable values are
    /// ignored; a level of 0 is kept so session startup rejects it.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = read_var::<u32>(&lookup, "ENCOUNTER_PARTY_SIZE") {
            config.encounter.default_party_size = size;
        }

        if let Some(level) = read_var::<u32>(&lookup, "ENCOUNTER_PARTY_LEVEL") {
            config.encounter.default_party_level = level;
        }

        if let Some(ratio) = read_var::<f64>(&lookup, "ENCOUNTER_RESOURCE_RATIO") {
            config.encounter.resource_ratio = ratio;
        }

        if let Some(ratio) = read_var::<f64>(&lookup, "ENCOUNTER_KO_WARNING_RATIO") {
            config.encounter.ko_warning_ratio = ratio;
        }

        config
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
