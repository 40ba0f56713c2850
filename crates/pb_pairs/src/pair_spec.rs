use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use colored::*;

use crate::Base;
use crate::PairKind;
use crate::Orientation;
use crate::PairSpecError;
use crate::RESIDX;


/// One side of a typed base pair, e.g. "G3" or "3G". Letters are kept as
/// typed, classification happens later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseToken {
    pub letters: String,
    pub index: RESIDX,
}

impl FromStr for BaseToken {
    type Err = PairSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tok = s.trim();
        let format_err = || PairSpecError::Format(tok.to_string());
        let is_letter = |c: char| c.is_ascii_alphabetic();
        let is_digit = |c: char| c.is_ascii_digit();

        let (letters, digits) = if tok.starts_with(is_letter) {
            let at = tok.find(|c: char| !is_letter(c)).ok_or_else(format_err)?;
            (&tok[..at], &tok[at..])
        } else if tok.starts_with(is_digit) {
            let at = tok.find(|c: char| !is_digit(c)).ok_or_else(format_err)?;
            (&tok[at..], &tok[..at])
        } else {
            return Err(format_err());
        };

        if !letters.chars().all(is_letter) || !digits.chars().all(is_digit) {
            return Err(format_err());
        }
        let index = digits.parse::<RESIDX>()
            .map_err(|_| PairSpecError::InvalidIndex(tok.to_string()))?;

        Ok(BaseToken { letters: letters.to_string(), index })
    }
}

/// A raw pair token, e.g. "G3-C16", in the order it was typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePairSpec {
    pub raw: String,
    pub sides: [BaseToken; 2],
}

impl FromStr for BasePairSpec {
    type Err = PairSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let mut parts = raw.split('-');
        let (Some(t0), Some(t1), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(PairSpecError::Format(raw.to_string()));
        };
        // Report the whole pair token, not just the offending side.
        let reformat = |e: PairSpecError| match e {
            PairSpecError::Format(_) => PairSpecError::Format(raw.to_string()),
            e => e,
        };
        let sides = [
            t0.parse::<BaseToken>().map_err(reformat)?,
            t1.parse::<BaseToken>().map_err(reformat)?,
        ];
        Ok(BasePairSpec { raw: raw.to_string(), sides })
    }
}

/// A classified nucleotide at a residue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Residue {
    pub base: Base,
    pub index: RESIDX,
}

impl Residue {
    pub fn new(base: Base, index: RESIDX) -> Self {
        Residue { base, index }
    }

    /// The residue column of a .gro line: number followed by name, "16C".
    pub fn identifier(&self) -> String {
        format!("{}{}", self.index, self.base)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.index)
    }
}

/// A base pair oriented such that sides[0] carries the leading base (G or A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalPair {
    pub kind: PairKind,
    pub sides: [Residue; 2],
}

impl CanonicalPair {
    pub fn leading(&self) -> &Residue {
        &self.sides[0]
    }

    pub fn trailing(&self) -> &Residue {
        &self.sides[1]
    }
}

impl TryFrom<&BasePairSpec> for CanonicalPair {
    type Error = PairSpecError;

    fn try_from(spec: &BasePairSpec) -> Result<Self, Self::Error> {
        let [t0, t1] = &spec.sides;
        let unsupported = || PairSpecError::Unsupported(spec.raw.clone());

        let b0 = Base::try_from(t0.letters.as_str()).map_err(|_| unsupported())?;
        let b1 = Base::try_from(t1.letters.as_str()).map_err(|_| unsupported())?;
        let (kind, orientation) = PairKind::classify(b0, b1).ok_or_else(unsupported)?;

        let r0 = Residue::new(b0, t0.index);
        let r1 = Residue::new(b1, t1.index);
        let sides = match orientation {
            Orientation::Forward => [r0, r1],
            Orientation::Reverse => [r1, r0],
        };
        Ok(CanonicalPair { kind, sides })
    }
}

impl FromStr for CanonicalPair {
    type Err = PairSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalPair::try_from(&s.parse::<BasePairSpec>()?)
    }
}

impl fmt::Display for CanonicalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sides[0], self.sides[1])
    }
}

/// Parse a comma-separated list of pair tokens, e.g. "G3-C16,C4-G15".
/// The first malformed or unsupported token aborts parsing.
pub fn parse_pair_list(s: &str) -> Result<Vec<CanonicalPair>, PairSpecError> {
    let mut pairs: Vec<CanonicalPair> = Vec::new();
    for token in s.split(',') {
        let pair = token.parse::<CanonicalPair>()?;
        debug!("Parsed '{}' as {} pair {}", token.trim(), pair.kind, pair);
        if pairs.contains(&pair) {
            warn!("{} Base pair {} is listed more than once.", "WARNING:".red(), pair);
        }
        pairs.push(pair);
    }
    Ok(pairs)
}
