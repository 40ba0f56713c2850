use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairSpecError {
    Format(String),        // token is neither letters+digits nor digits+letters
    Unsupported(String),   // bases are not G-C, G-U or A-U (in either order)
    InvalidBase(String),   // letters do not name a supported nucleotide
    InvalidIndex(String),  // digits do not fit a residue index
}

impl fmt::Display for PairSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSpecError::Format(tok) => {
                write!(f, "Unsupported base pair format '{}' (expected e.g. G3-C16 or 3G-16C)", tok)
            }
            PairSpecError::Unsupported(tok) => {
                write!(f, "Unsupported base pair '{}' (only G-C, G-U and A-U pairs are supported)", tok)
            }
            PairSpecError::InvalidBase(tok) => {
                write!(f, "Invalid nucleotide '{}'", tok)
            }
            PairSpecError::InvalidIndex(tok) => {
                write!(f, "Invalid residue index in '{}'", tok)
            }
        }
    }
}

impl std::error::Error for PairSpecError {}

