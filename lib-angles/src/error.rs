use core::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleError
{
    /// The raw quaternion did not have exactly 4 components, or its norm is
    /// zero/non-finite so it cannot be scaled to a unit rotation.
    InvalidQuaternion,
}

impl Error for AngleError {}

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidQuaternion => write!(f, "Quaternion is not a usable unit rotation"),
        }
    }
}
