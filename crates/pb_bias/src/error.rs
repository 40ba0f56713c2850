use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum BiasError {
    Io(std::io::Error),
    Json(serde_json::Error),
    AtomNotFound { pair: String, residue: String, atoms: String },
    Empty,
}

impl fmt::Display for BiasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::AtomNotFound { pair, residue, atoms } =>
                write!(f, "Base pair {pair} not found in the structure file (no atoms {atoms} in residue {residue})"),
            Self::Empty =>
                write!(f, "No hydrogen bonds to restrain"),
        }
    }
}

impl Error for BiasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BiasError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

impl From<serde_json::Error> for BiasError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e) }
}

