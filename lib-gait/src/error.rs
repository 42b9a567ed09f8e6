use core::{error::Error, fmt};

use angles::AngleError;

/// Errors the per-tick pipeline surfaces to the calling loop.
///
/// Ticks are independent: a failed tick leaves every component in its prior
/// state, and whether to skip the sample, reuse the last output or abort the
/// session is entirely the caller's policy. Nothing in here is retried.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaitError
{
    /// The orientation input was not a usable unit quaternion.
    InvalidQuaternion,
    /// The angular rate input did not have exactly 3 components.
    InvalidSample,
}

impl Error for GaitError {}

impl fmt::Display for GaitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidQuaternion => write!(f, "Invalid orientation quaternion"),
            Self::InvalidSample => write!(f, "Invalid angular rate sample"),
        }
    }
}

impl From<AngleError> for GaitError
{
    fn from(err: AngleError) -> Self {
        match err {
            AngleError::InvalidQuaternion => GaitError::InvalidQuaternion,
        }
    }
}

/// Rejected session configuration values.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError
{
    NonPositiveSampleRate,
    NonPositivePulseLength,
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonPositiveSampleRate => write!(f, "Sample rate must be greater than zero"),
            Self::NonPositivePulseLength => write!(f, "Pulse length must be greater than zero"),
        }
    }
}
