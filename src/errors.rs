//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for acdat.
pub type Result<T, E = AcdatError> = std::result::Result<T, E>;

/// Errors in acdat.
#[derive(Debug)]
pub enum AcdatError {
    /// Contains [`EmptyPatternSetError`].
    EmptyPatternSet(EmptyPatternSetError),

    /// Contains [`TrieError`] raised while building the transition table.
    TrieConstruction(TrieError),
}

impl fmt::Display for AcdatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyPatternSet(e) => e.fmt(f),
            Self::TrieConstruction(e) => e.fmt(f),
        }
    }
}

impl Error for AcdatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyPatternSet(e) => Some(e),
            Self::TrieConstruction(e) => Some(e),
        }
    }
}

impl From<TrieError> for AcdatError {
    fn from(e: TrieError) -> Self {
        Self::TrieConstruction(e)
    }
}

impl AcdatError {
    pub(crate) const fn empty_pattern_set() -> Self {
        Self::EmptyPatternSet(EmptyPatternSetError)
    }
}

/// Error used when no keyword is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPatternSetError;

impl fmt::Display for EmptyPatternSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyPatternSetError: at least one keyword is required")
    }
}

impl Error for EmptyPatternSetError {}

/// Errors raised while building a double-array trie.
#[derive(Debug)]
pub enum TrieError {
    /// Contains [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// Contains [`EmptyKeywordError`].
    EmptyKeyword(EmptyKeywordError),

    /// Contains [`AutomatonScaleError`].
    AutomatonScale(AutomatonScaleError),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::EmptyKeyword(e) => e.fmt(f),
            Self::AutomatonScale(e) => e.fmt(f),
        }
    }
}

impl Error for TrieError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::EmptyKeyword(e) => Some(e),
            Self::AutomatonScale(e) => Some(e),
        }
    }
}

impl TrieError {
    pub(crate) const fn invalid_argument(arg: &'static str, msg: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgumentError { arg, msg })
    }

    pub(crate) const fn empty_keyword(index: usize) -> Self {
        Self::EmptyKeyword(EmptyKeywordError { index })
    }

    pub(crate) const fn automaton_scale(arg: &'static str, max_value: u32) -> Self {
        Self::AutomatonScale(AutomatonScaleError { arg, max_value })
    }
}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: &'static str,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a keyword of length zero is given.
#[derive(Debug)]
pub struct EmptyKeywordError {
    /// Position of the keyword in the input sequence.
    pub(crate) index: usize,
}

impl EmptyKeywordError {
    /// Position of the offending keyword in the input sequence.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for EmptyKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyKeywordError: keyword #{} is empty", self.index)
    }
}

impl Error for EmptyKeywordError {}

/// Error used when the scale of the automaton exceeds the expected one.
#[derive(Debug)]
pub struct AutomatonScaleError {
    pub(crate) arg: &'static str,
    pub(crate) max_value: u32,
}

impl fmt::Display for AutomatonScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "AutomatonScaleError: {} must be <= {}",
            self.arg, self.max_value
        )
    }
}

impl Error for AutomatonScaleError {}
