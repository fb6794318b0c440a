use std::fmt;
use std::io;

/// Error type for a uniformity session
#[derive(Debug)]
pub enum SessionError {
    /// A token where an integer was expected
    InvalidNumber(String),
    /// Minimum distribution above maximum distribution
    InvertedRange { min: i32, max: i32 },
    /// Zero or negative number of tries
    NonPositiveTries(i32),
    /// Negative number of draws per try
    NegativeSeeds(i32),
    /// Averaging over zero tries
    DivisionByZero,
    /// Reading input or writing output failed
    Io(io::Error),
}

impl SessionError {
    /// Whether the session loop can report this error and carry on.
    /// Only I/O failures end the loop.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::Io(_))
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::InvalidNumber(token) => write!(f, "'{}' is not a valid integer", token),
            SessionError::InvertedRange { min, max } => write!(
                f,
                "minimum distribution {} is greater than maximum distribution {}",
                min, max
            ),
            SessionError::NonPositiveTries(n) => write!(f, "tries must be positive, got {}", n),
            SessionError::NegativeSeeds(n) => {
                write!(f, "seeds per try must not be negative, got {}", n)
            }
            SessionError::DivisionByZero => write!(f, "cannot average over zero tries"),
            SessionError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}
