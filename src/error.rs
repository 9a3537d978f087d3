// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::Axis;

/// An error related to decoding an axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisError {
    // we want to be able to change this representation later
    repr: Repr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Repr {
    OutOfRange(i128),
    UnknownName,
}

impl AxisError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::OutOfRange(_) => ErrorKind::OutOfRange,
            Repr::UnknownName => ErrorKind::UnknownName,
        }
    }

    /// Return the rejected axis ordinal, if this is an `OutOfRange` error.
    ///
    /// The value is widened so that integers read from a serialized form
    /// that do not fit an `i32` are reported as they were.
    #[inline]
    pub fn ordinal(&self) -> Option<i128> {
        match self.repr {
            Repr::OutOfRange(ordinal) => Some(ordinal),
            Repr::UnknownName => None,
        }
    }
}

/// Error code for an error related to decoding an axis.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// axis ordinal outside `Axis::MIN_ORDINAL..=Axis::MAX_ORDINAL`
    OutOfRange,
    /// string is not the name of an axis
    UnknownName,
}

#[inline(always)]
pub(crate) fn out_of_range(ordinal: i128) -> AxisError {
    AxisError {
        repr: Repr::OutOfRange(ordinal),
    }
}

#[inline(always)]
pub(crate) fn unknown_name() -> AxisError {
    AxisError {
        repr: Repr::UnknownName,
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::OutOfRange(ordinal) => write!(
                f,
                "axis ordinal {} out of range {}..={}",
                ordinal,
                Axis::MIN_ORDINAL,
                Axis::MAX_ORDINAL
            ),
            Repr::UnknownName => f.write_str("unknown axis name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn out_of_range_message() {
        let e = out_of_range(5);
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(e.ordinal(), Some(5));
        assert_eq!(e.to_string(), "axis ordinal 5 out of range -2..=4");
    }

    #[test]
    fn unknown_name_has_no_ordinal() {
        let e = unknown_name();
        assert_eq!(e.kind(), ErrorKind::UnknownName);
        assert_eq!(e.ordinal(), None);
        assert_ne!(e, out_of_range(0));
    }

    #[test]
    fn out_of_range_keeps_wide_ordinal() {
        let e = out_of_range(i128::from(u64::MAX));
        assert_eq!(e.ordinal(), Some(18446744073709551615));
        assert_eq!(
            e.to_string(),
            "axis ordinal 18446744073709551615 out of range -2..=4"
        );
    }
}
