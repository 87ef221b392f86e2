//! Plain-text summaries of a party, a roster group and a difficulty report.

use crate::difficulty::{Difficulty, DifficultyReport};
use crate::party::Party;
use crate::roster::CreatureCounts;

/// Lists the present ratings of a group, e.g. `"2 CR 1/2 enemies, and 1 CR 3 enemies"`.
///
/// Returns `"no {noun}"` when the group is empty.
pub fn describe_group(counts: &CreatureCounts, noun: &str) -> String {
    let mut entries: Vec<String> = counts
        .present()
        .map(|(cr, count)| format!("{count} CR {cr} {noun}"))
        .collect();

    match entries.pop() {
        None => format!("no {noun}"),
        Some(last) if entries.is_empty() => last,
        Some(last) => format!("{}, and {last}", entries.join(", ")),
    }
}

pub fn describe_party(party: &Party, allies: &CreatureCounts) -> String {
    format!(
        "There are {} Level {} players in the party, and {}.",
        party.size(),
        party.level(),
        describe_group(allies, "allies")
    )
}

pub fn describe_enemies(enemies: &CreatureCounts) -> String {
    format!("There are {}.", describe_group(enemies, "enemies"))
}

impl DifficultyReport {
    /// One or two sentences describing the band and the expected losses.
    pub fn description(&self) -> String {
        let Some(difficulty) = self.difficulty else {
            return "The players will lose no hit points.".to_owned();
        };

        let article = match difficulty.as_str().chars().next() {
            Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
            _ => "a",
        };
        let hp_cost = self.hp_cost;
        let outlook = match difficulty {
            Difficulty::Mild | Difficulty::Bruising | Difficulty::Bloody | Difficulty::Brutal => {
                format!("The players will lose approximately {hp_cost}% of their hit points.")
            }
            Difficulty::Oppressive => format!(
                "The players will lose approximately {hp_cost}% of their hit points, and might need a little luck or skill to win."
            ),
            Difficulty::Overwhelming => {
                "The players can win only with a lot of luck or skill.".to_owned()
            }
            Difficulty::Crushing => {
                "The players can win only with an exceptional amount of luck or skill.".to_owned()
            }
            Difficulty::Devastating => {
                "The players can only win under perfect conditions.".to_owned()
            }
            Difficulty::Impossible => "The players cannot win.".to_owned(),
        };

        format!("This is {article} {difficulty} encounter. {outlook}")
    }

    /// `None` when nothing is lost, or when an empty party has no resources
    /// to spend against its enemies.
    pub fn resources_description(&self) -> Option<String> {
        if self.difficulty.is_none() || self.total_party_power() == 0 {
            return None;
        }
        Some(format!(
            "The players will spend {}% of their daily resources.",
            self.resources_spent
        ))
    }

    pub fn ko_warning(&self) -> Option<&'static str> {
        self.ko_risk.then_some(
            "WARNING: This encounter contains one or more enemies sufficiently powerful to KO one or more players on a single turn.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ChallengeRating::*;

    fn report(hp_cost: u64) -> DifficultyReport {
        DifficultyReport {
            hp_cost,
            difficulty: Some(Difficulty::from_hp_cost(hp_cost)),
            resources_spent: 0,
            player_power: 11,
            party_power: 55,
            ally_power: 0,
            enemy_power: 1,
            ko_risk: false,
        }
    }

    #[test]
    fn empty_group_reads_as_none() {
        assert_eq!(describe_group(&CreatureCounts::new(), "allies"), "no allies");
    }

    #[test]
    fn groups_join_with_oxford_and() {
        let one: CreatureCounts = [(Cr1, 1)].into_iter().collect();
        assert_eq!(describe_group(&one, "enemies"), "1 CR 1 enemies");

        let three: CreatureCounts = [(Cr3, 1), (OneHalf, 2), (Cr10, 4)].into_iter().collect();
        assert_eq!(
            describe_group(&three, "enemies"),
            "2 CR 1/2 enemies, 1 CR 3 enemies, and 4 CR 10 enemies"
        );
    }

    #[test]
    fn party_sentence_mentions_allies() {
        let party = Party::default();
        assert_eq!(
            describe_party(&party, &CreatureCounts::new()),
            "There are 5 Level 1 players in the party, and no allies."
        );
    }

    #[test]
    fn description_uses_an_before_vowels() {
        assert!(report(85).description().starts_with("This is an Oppressive encounter."));
        assert!(report(300).description().starts_with("This is an Impossible encounter."));
        assert_eq!(
            report(26).description(),
            "This is a Bruising encounter. The players will lose approximately 26% of their hit points."
        );
    }

    #[test]
    fn no_enemy_power_reads_as_no_loss() {
        let mut quiet = report(0);
        quiet.difficulty = None;
        assert_eq!(quiet.description(), "The players will lose no hit points.");
        assert_eq!(quiet.resources_description(), None);
        assert_eq!(quiet.ko_warning(), None);
    }

    #[test]
    fn resources_sentence_uses_spent_share() {
        let mut bruising = report(26);
        bruising.resources_spent = 17;
        assert_eq!(
            bruising.resources_description().as_deref(),
            Some("The players will spend 17% of their daily resources.")
        );
    }

    #[test]
    fn empty_party_has_no_resources_sentence() {
        let mut overrun = report(u64::MAX);
        overrun.party_power = 0;
        overrun.resources_spent = u64::MAX;
        assert_eq!(overrun.difficulty, Some(Difficulty::Impossible));
        assert_eq!(overrun.resources_description(), None);
        assert_eq!(
            overrun.description(),
            "This is an Impossible encounter. The players cannot win."
        );
    }
}
