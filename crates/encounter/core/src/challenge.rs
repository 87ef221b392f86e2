//! Challenge ratings.
//!
//! A challenge rating is one of 34 fixed tiers: `0`, `1/8`, `1/4`, `1/2` and
//! the whole numbers `1` through `30`. Variants are declared in ascending
//! order, so the derived `Ord` and [`ChallengeRating::all`] both follow the
//! numeric value.

use core::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::InvalidChallengeRating;

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
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum ChallengeRating {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1/8")]
    OneEighth,
    #[strum(serialize = "1/4")]
    OneQuarter,
    #[strum(serialize = "1/2")]
    OneHalf,
    #[strum(serialize = "1")]
    Cr1,
    #[strum(serialize = "2")]
    Cr2,
    #[strum(serialize = "3")]
    Cr3,
    #[strum(serialize = "4")]
    Cr4,
    #[strum(serialize = "5")]
    Cr5,
    #[strum(serialize = "6")]
    Cr6,
    #[strum(serialize = "7")]
    Cr7,
    #[strum(serialize = "8")]
    Cr8,
    #[strum(serialize = "9")]
    Cr9,
    #[strum(serialize = "10")]
    Cr10,
    #[strum(serialize = "11")]
    Cr11,
    #[strum(serialize = "12")]
    Cr12,
    #[strum(serialize = "13")]
    Cr13,
    #[strum(serialize = "14")]
    Cr14,
    #[strum(serialize = "15")]
    Cr15,
    #[strum(serialize = "16")]
    Cr16,
    #[strum(serialize = "17")]
    Cr17,
    #[strum(serialize = "18")]
    Cr18,
    #[strum(serialize = "19")]
    Cr19,
    #[strum(serialize = "20")]
    Cr20,
    #[strum(serialize = "21")]
    Cr21,
    #[strum(serialize = "22")]
    Cr22,
    #[strum(serialize = "23")]
    Cr23,
    #[strum(serialize = "24")]
    Cr24,
    #[strum(serialize = "25")]
    Cr25,
    #[strum(serialize = "26")]
    Cr26,
    #[strum(serialize = "27")]
    Cr27,
    #[strum(serialize = "28")]
    Cr28,
    #[strum(serialize = "29")]
    Cr29,
    #[strum(serialize = "30")]
    Cr30,
}

impl ChallengeRating {
    /// Number of legal challenge ratings.
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// Dense index of this rating in ascending order (`0` → 0, `30` → 33).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All ratings in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the rating at a dense index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Numeric value of the rating (`1/4` → 0.25).
    pub fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::OneEighth => 0.125,
            Self::OneQuarter => 0.25,
            Self::OneHalf => 0.5,
            // Whole-number ratings follow the fractions: index 4 is CR 1.
            whole => (whole.index() - 3) as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl FromStr for ChallengeRating {
    type Err = InvalidChallengeRating;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|cr| cr.as_str() == input)
            .ok_or_else(|| InvalidChallengeRating::new(input))
    }
}

impl TryFrom<&str> for ChallengeRating {
    type Error = InvalidChallengeRating;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

/// Anything a roster mutator accepts as a challenge rating.
///
/// Strings are validated against the closed set before any state changes.
pub trait IntoChallengeRating {
    fn into_challenge_rating(self) -> Result<ChallengeRating, InvalidChallengeRating>;
}

impl IntoChallengeRating for ChallengeRating {
    fn into_challenge_rating(self) -> Result<ChallengeRating, InvalidChallengeRating> {
        Ok(self)
    }
}

impl IntoChallengeRating for &str {
    fn into_challenge_rating(self) -> Result<ChallengeRating, InvalidChallengeRating> {
        self.parse()
    }
}

impl IntoChallengeRating for &String {
    fn into_challenge_rating(self) -> Result<ChallengeRating, InvalidChallengeRating> {
        self.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChallengeRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChallengeRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_set_has_thirty_four_ratings() {
        assert_eq!(ChallengeRating::COUNT, 34);
        assert_eq!(ChallengeRating::iter().count(), 34);
    }

    #[test]
    fn parses_fractions_and_whole_numbers() {
        assert_eq!("0".parse(), Ok(ChallengeRating::Zero));
        assert_eq!("1/8".parse(), Ok(ChallengeRating::OneEighth));
        assert_eq!("1/2".parse(), Ok(ChallengeRating::OneHalf));
        assert_eq!("30".parse(), Ok(ChallengeRating::Cr30));
    }

    #[test]
    fn rejects_values_outside_the_set() {
        for input in ["1/3", "31", "-1", "abc", "01", "", " 1", "0.5"] {
            let err = input.parse::<ChallengeRating>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn labels_round_trip_through_display() {
        for cr in ChallengeRating::iter() {
            assert_eq!(cr.to_string(), cr.as_str());
            assert_eq!(cr.as_str().parse::<ChallengeRating>(), Ok(cr));
        }
    }

    #[test]
    fn ordering_follows_numeric_value() {
        let values: Vec<f64> = ChallengeRating::iter().map(ChallengeRating::value).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ChallengeRating::Cr1.value(), 1.0);
        assert_eq!(ChallengeRating::Cr30.value(), 30.0);
    }

    #[test]
    fn index_is_dense() {
        for (i, cr) in ChallengeRating::iter().enumerate() {
            assert_eq!(cr.index(), i);
            assert_eq!(ChallengeRating::from_index(i), Some(cr));
        }
        assert_eq!(ChallengeRating::from_index(34), None);
    }
}
