use std::fmt;
use std::str::FromStr;

use crate::PairSpecError;


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = PairSpecError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' => Ok(Base::U),
            _ => Err(PairSpecError::InvalidBase(c.to_string())),
        }
    }
}

impl TryFrom<&str> for Base {
    type Error = PairSpecError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Base::try_from(c),
            _ => Err(PairSpecError::InvalidBase(s.to_string())),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", c)
    }
}

/// Whether a typed (base, base) tuple already lists the leading base first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation { Forward, Reverse }

/// The canonical base pair kinds. The leading base (G or A) is always
/// the first letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairKind { AU, GC, GU }

const PAIR_LOOKUP: [[Option<(PairKind, Orientation)>; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairKind::*;
    use Orientation::*;
    let mut table = [[None; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = Some((AU, Forward));
    table[U as usize][A as usize] = Some((AU, Reverse));
    table[G as usize][C as usize] = Some((GC, Forward));
    table[C as usize][G as usize] = Some((GC, Reverse));
    table[G as usize][U as usize] = Some((GU, Forward));
    table[U as usize][G as usize] = Some((GU, Reverse));
    table
};

impl PairKind {
    pub const ALL: [PairKind; 3] = [PairKind::AU, PairKind::GC, PairKind::GU];

    /// Classify a typed base tuple. Returns None for anything but the six
    /// orientations of G-C, G-U and A-U.
    pub fn classify(b0: Base, b1: Base) -> Option<(PairKind, Orientation)> {
        PAIR_LOOKUP[b0 as usize][b1 as usize]
    }

    /// (leading, trailing) bases.
    pub fn bases(&self) -> (Base, Base) {
        match self {
            PairKind::AU => (Base::A, Base::U),
            PairKind::GC => (Base::G, Base::C),
            PairKind::GU => (Base::G, Base::U),
        }
    }

    pub fn is_wcf(&self) -> bool {
        matches!(self, PairKind::GC | PairKind::AU)
    }

    pub fn is_wobble(&self) -> bool {
        matches!(self, PairKind::GU)
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairKind::AU => "AU",
            PairKind::GC => "GC",
            PairKind::GU => "GU",
        };
        write!(f, "{}", s)
    }
}

/// Accepts "GC", "G-C" and the reversed spellings ("CG", "c-g", ...).
impl FromStr for PairKind {
    type Err = PairSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().filter(|&c| c != '-').collect();
        let [c0, c1] = letters[..] else {
            return Err(PairSpecError::Format(s.to_string()));
        };
        let unsupported = |_| PairSpecError::Unsupported(s.to_string());
        let b0 = Base::try_from(c0).map_err(unsupported)?;
        let b1 = Base::try_from(c1).map_err(unsupported)?;
        PairKind::classify(b0, b1)
            .map(|(kind, _)| kind)
            .ok_or_else(|| PairSpecError::Unsupported(s.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('G').unwrap(), G);
        assert_eq!(Base::try_from('u').unwrap(), U);
        assert!(matches!(Base::try_from('T'), Err(PairSpecError::InvalidBase(_))));
    }

    #[test]
    fn test_base_from_str() {
        assert_eq!(Base::try_from("a").unwrap(), A);
        assert!(matches!(Base::try_from("RG"), Err(PairSpecError::InvalidBase(s)) if s == "RG"));
        assert!(Base::try_from("").is_err());
    }

    #[test]
    fn test_classify_forward_and_reverse() {
        assert_eq!(PairKind::classify(G, C), Some((PairKind::GC, Orientation::Forward)));
        assert_eq!(PairKind::classify(C, G), Some((PairKind::GC, Orientation::Reverse)));
        assert_eq!(PairKind::classify(G, U), Some((PairKind::GU, Orientation::Forward)));
        assert_eq!(PairKind::classify(U, G), Some((PairKind::GU, Orientation::Reverse)));
        assert_eq!(PairKind::classify(A, U), Some((PairKind::AU, Orientation::Forward)));
        assert_eq!(PairKind::classify(U, A), Some((PairKind::AU, Orientation::Reverse)));
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(PairKind::classify(G, G), None);
        assert_eq!(PairKind::classify(A, C), None);
        assert_eq!(PairKind::classify(C, A), None);
        assert_eq!(PairKind::classify(U, U), None);
    }

    #[test]
    fn test_bases_are_leading_first() {
        for kind in PairKind::ALL {
            let (b0, b1) = kind.bases();
            assert_eq!(PairKind::classify(b0, b1), Some((kind, Orientation::Forward)));
            assert_eq!(PairKind::classify(b1, b0), Some((kind, Orientation::Reverse)));
        }
    }

    #[test]
    fn test_pair_kind_from_str() {
        assert_eq!("GC".parse::<PairKind>().unwrap(), PairKind::GC);
        assert_eq!("c-g".parse::<PairKind>().unwrap(), PairKind::GC);
        assert_eq!("UA".parse::<PairKind>().unwrap(), PairKind::AU);
        assert_eq!(" G-U ".parse::<PairKind>().unwrap(), PairKind::GU);
        assert!(matches!("GG".parse::<PairKind>(), Err(PairSpecError::Unsupported(_))));
        assert!(matches!("GCA".parse::<PairKind>(), Err(PairSpecError::Format(_))));
    }

    #[test]
    fn test_pair_kind_display() {
        assert_eq!(PairKind::AU.to_string(), "AU");
        assert_eq!(PairKind::GU.to_string(), "GU");
        assert!(PairKind::GU.is_wobble());
        assert!(PairKind::GC.is_wcf());
    }
}
