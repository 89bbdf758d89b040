use std::{fmt, str::FromStr};

use crate::error::Error;

/// The party a plan is drawn to favor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    Democratic,
    Republican,
}

impl Party {
    /// The opposing party.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Party::Democratic => Party::Republican,
            Party::Republican => Party::Democratic,
        }
    }

    /// Favorability of a block to this party, as a fraction of its population.
    ///
    /// A zero-population block scores 0 for either party: it carries no votes
    /// and matters only for contiguity.
    #[inline]
    pub fn favorability(self, population: f64, democrats: f64) -> f64 {
        if population == 0.0 {
            return 0.0;
        }
        match self {
            Party::Democratic => democrats / population,
            Party::Republican => (population - democrats) / population,
        }
    }
}

impl FromStr for Party {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "dem" | "democratic" => Ok(Party::Democratic),
            "r" | "rep" | "republican" => Ok(Party::Republican),
            _ => Err(Error::InvalidParty(s.to_string())),
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Democratic => write!(f, "D"),
            Party::Republican => write!(f, "R"),
        }
    }
}
