//! Configurable base page size.

use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => unreachable!(),
    }
}

const THREE: NonZeroUsize = non_zero(3);
const SIX: NonZeroUsize = non_zero(6);
const TWELVE: NonZeroUsize = non_zero(12);

/// Base client page size. Restricted to the sizes the page-size selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "usize")]
pub enum PageSize {
    /// Three records per page.
    Three,
    /// Six records per page.
    #[default]
    Six,
    /// Twelve records per page.
    Twelve,
}

impl PageSize {
    /// Every selectable size, smallest first.
    pub const ALL: [PageSize; 3] = [PageSize::Three, PageSize::Six, PageSize::Twelve];

    /// Records per page.
    pub fn get(self) -> usize {
        self.as_non_zero().get()
    }

    /// Records per page as a [`NonZeroUsize`].
    pub fn as_non_zero(self) -> NonZeroUsize {
        match self {
            PageSize::Three => THREE,
            PageSize::Six => SIX,
            PageSize::Twelve => TWELVE,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(PageSize::Three),
            6 => Ok(PageSize::Six),
            12 => Ok(PageSize::Twelve),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A page size outside {3, 6, 12}.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page size must be one of 3, 6 or 12, got {0}")]
pub struct InvalidPageSize(pub usize);
