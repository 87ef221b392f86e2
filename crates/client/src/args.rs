use clap::Parser;
use encounter_core::CreatureSpec;

/// Estimate how many hit points a party loses in an encounter.
#[derive(Debug, Parser)]
#[command(name = "encounter", version)]
pub struct Args {
    /// Number of players in the party.
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Level shared by every player (1-20).
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// Enemy creatures as CR or CRxCOUNT, e.g. `1/2x3`. Repeatable.
    #[arg(long = "enemy", short = 'e', value_name = "CR[xN]")]
    pub enemies: Vec<CreatureSpec>,

    /// Allied creatures as CR or CRxCOUNT. Repeatable.
    #[arg(long = "ally", short = 'a', value_name = "CR[xN]")]
    pub allies: Vec<CreatureSpec>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
