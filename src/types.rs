//! Contains various types needed across the crate.

use crate::{DEFAULT_CUT_DEPTH, MAX_CUT_DEPTH};
use std::{
    error::Error,
    fmt::{Debug, Display},
};

/// An error type for when a value is above the maximum supported value.
///
/// The inner value is the maximum supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveMaxLen<T>(pub T);

impl<T: Display> Display for AboveMaxLen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "above the maximum of {}", self.0)
    }
}

impl<T: Debug + Display> Error for AboveMaxLen<T> {}

/// An error type for a flat RGBA sample buffer whose length is not a multiple
/// of the channel stride of `4`.
///
/// The inner value is the offending buffer length.
/// Returned by [`from_rgba_buffer`](crate::from_rgba_buffer) before any
/// partitioning begins; no partial palette is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedBuffer(pub usize);

impl Display for MalformedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "buffer length {} is not a multiple of the RGBA stride of 4", self.0)
    }
}

impl Error for MalformedBuffer {}

/// This type specifies the recursion depth of the median cut partitioner.
///
/// A depth of `d` produces at most `2^d` colors before filtering.
/// This is a simple new type wrapper around `u8` with the invariant that it must be
/// less than or equal to [`MAX_CUT_DEPTH`].
///
/// # Examples
/// Use `into` or `try_into` to create [`CutDepth`]s.
/// You can also use [`CutDepth::from_clamped`] or the default of [`DEFAULT_CUT_DEPTH`].
///
/// ```
/// # use mediancut::{CutDepth, AboveMaxLen};
/// # fn main() -> Result<(), AboveMaxLen<u8>> {
/// let depth = CutDepth::try_from(6u8)?;
/// let depth: CutDepth = 6u8.try_into()?;
/// let depth = CutDepth::from_clamped(100);
/// let depth = CutDepth::default();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CutDepth(u8);

impl CutDepth {
    /// The maximum supported cut depth (given by [`MAX_CUT_DEPTH`]).
    pub const MAX: Self = Self(MAX_CUT_DEPTH);

    /// Gets the inner `u8` value.
    #[must_use]
    pub const fn into_inner(self) -> u8 {
        self.0
    }

    /// Creates a [`CutDepth`] by clamping the given `u8` to be less than or equal to
    /// [`MAX_CUT_DEPTH`].
    #[must_use]
    pub const fn from_clamped(value: u8) -> Self {
        if value <= MAX_CUT_DEPTH {
            Self(value)
        } else {
            Self(MAX_CUT_DEPTH)
        }
    }
}

impl Default for CutDepth {
    fn default() -> Self {
        Self(DEFAULT_CUT_DEPTH)
    }
}

impl From<CutDepth> for u8 {
    fn from(val: CutDepth) -> Self {
        val.into_inner()
    }
}

impl TryFrom<u8> for CutDepth {
    type Error = AboveMaxLen<u8>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_CUT_DEPTH {
            Ok(CutDepth(value))
        } else {
            Err(AboveMaxLen(MAX_CUT_DEPTH))
        }
    }
}

impl Display for CutDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_inner())
    }
}
