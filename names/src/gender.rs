use std::{fmt, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

/// Which first-name table to draw from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Gender {
    /// Male first names
    Male,
    /// Female first names
    Female,
}

impl Gender {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `male` nor `female`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown gender `{0}`, expected `male` or `female`")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// Picks either gender with equal probability.
impl Distribution<Gender> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gender {
        if rng.gen() {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, ParseGenderError};

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" Female ".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "robot".parse::<Gender>(),
            Err(ParseGenderError("robot".to_string()))
        );
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for gender in [Gender::Male, Gender::Female].iter() {
            assert_eq!(gender.to_string().parse::<Gender>(), Ok(*gender));
        }
    }
}
