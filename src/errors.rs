use std::fmt;
use std::error::Error;

/// Represents errors that can occur when configuring the trig approximations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrigError {
    /// Indicates a polynomial degree with no tabulated coefficient set.
    UnsupportedDegree(u32),
}

impl fmt::Display for TrigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrigError::UnsupportedDegree(degree) => {
                write!(f, "Unsupported polynomial degree: {} (supported degrees are 7 and 9)", degree)
            }
        }
    }
}

impl Error for TrigError {}
