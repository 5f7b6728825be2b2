//! Error types for the grid engine.
//!
//! The engine only fails at construction time. Once an engine exists every
//! operation on it is total.

use thiserror::Error;

/// Errors raised while building a grid or an engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LifeError {
    /// The caller asked for something the engine cannot represent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
}

/// What exactly was wrong with a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigIssue {
    /// Width or height is zero.
    #[error("grid must be at least 1x1 (got {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    /// A rule threshold can never be reached by a Moore neighborhood.
    #[error("{name} threshold {value} is outside 0..=8")]
    ThresholdOutOfRange { name: &'static str, value: u8 },

    /// The render surface has no usable area.
    #[error("surface must have a positive, finite size (got {width}x{height})")]
    EmptySurface { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = LifeError::from(ConfigIssue::ThresholdOutOfRange {
            name: "reproduction",
            value: 9,
        });
        assert_eq!(
            err.to_string(),
            "invalid configuration: reproduction threshold 9 is outside 0..=8"
        );

        let err = LifeError::from(ConfigIssue::EmptyGrid {
            width: 0,
            height: 4,
        });
        assert!(err.to_string().contains("0x4"));
    }
}
