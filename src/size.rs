// src/size.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ContextError, Result};

/// Scale factors for size steps 1 through 10, relative to the normal size.
const SIZING_MULTIPLIERS: [f64; 10] = [0.5, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.73, 2.07, 2.49];

/// A font size step, `\tiny` (1) through `\Huge` (10).
///
/// Only valid steps can be constructed, so size arithmetic downstream never
/// has to deal with an out-of-range tier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Size(u8);

impl Size {
    pub const MIN: Size = Size(1);
    pub const MAX: Size = Size(10);
    /// `\normalsize`.
    pub const NORMAL: Size = Size(5);

    pub fn new(step: u8) -> Result<Self> {
        Self::try_from(i64::from(step))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Scale factor relative to `Size::NORMAL`.
    pub fn multiplier(self) -> f64 {
        SIZING_MULTIPLIERS[usize::from(self.0 - 1)]
    }

    /// One step down, saturating at `Size::MIN`.
    pub fn smaller(self) -> Size {
        Size(self.0.saturating_sub(1).max(Self::MIN.0))
    }

    /// One step up, saturating at `Size::MAX`.
    pub fn larger(self) -> Size {
        Size((self.0 + 1).min(Self::MAX.0))
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::NORMAL
    }
}

impl TryFrom<i64> for Size {
    type Error = ContextError;

    fn try_from(step: i64) -> Result<Self> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&step) {
            Ok(Size(step as u8))
        } else {
            Err(ContextError::InvalidSize(step))
        }
    }
}

impl TryFrom<u8> for Size {
    type Error = ContextError;

    fn try_from(step: u8) -> Result<Self> {
        Self::new(step)
    }
}

impl From<Size> for u8 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size{}", self.0)
    }
}
