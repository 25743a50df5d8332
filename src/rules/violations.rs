//! Reasons a pot can be rejected.

use crate::core::ColorName;
use thiserror::Error;

/// A sequencing rule broken by a proposed pot
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PotViolation {
    #[error("A colour is on, cannot pot {got}")]
    ColorOn { got: ColorName },

    #[error("A red is on, cannot pot {got}")]
    RedOn { got: ColorName },

    #[error("Colours must be potted in order: wanted {wanted}, got {got}")]
    OutOfOrder { wanted: ColorName, got: ColorName },

    #[error("No colours left on the table")]
    TableCleared,
}

impl PotViolation {
    /// The ball that would have been legal, when there is exactly one.
    pub fn wanted(&self) -> Option<ColorName> {
        match self {
            Self::RedOn { .. } => Some(ColorName::Red),
            Self::OutOfOrder { wanted, .. } => Some(*wanted),
            Self::ColorOn { .. } | Self::TableCleared => None,
        }
    }
}
