use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum RadiationErrors {
    /// A solver argument was zero, negative, or not finite.
    InvalidArgument(&'static str, f64),
}

impl fmt::Display for RadiationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadiationErrors::InvalidArgument(name, value) => {
                write!(f, "{} must be a positive finite number, got {}", name, value)
            }
        }
    }
}

impl Error for RadiationErrors {}
