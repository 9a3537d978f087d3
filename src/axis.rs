// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use crate::error::{out_of_range, unknown_name, AxisError};
use crate::Locale;

/// The role a dimension plays in a multidimensional query result.
///
/// Typically used values are `Rows`, `Columns` and `Slicer`.
///
/// Variants are declared in a fixed order, and each one carries an
/// [*axis ordinal*](Axis::axis_ordinal): its declaration index less two.
/// `Unused` and `Slicer` get the negative ordinals -2 and -1 because they are
/// not laid out like the other axes; `Columns` is 0, `Rows` is 1, and so on
/// up to `Sections`, which is [`Axis::MAX_ORDINAL`].
///
/// The axis ordinal, not the enum discriminant, is the stable encoding.
/// Use [`Axis::for_ordinal`] to decode it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// A hierarchy that is on no axis
    Unused,
    /// The filter axis
    Slicer,
    /// Axis 0
    Columns,
    /// Axis 1
    Rows,
    /// Axis 2
    Pages,
    /// Axis 3
    Chapters,
    /// Axis 4
    Sections,
}

/// Reverse lookup table: `AXES[i].index() == i`.
static AXES: [Axis; Axis::COUNT] = Axis::ALL;

impl Axis {
    /// The number of axes.
    pub const COUNT: usize = 7;

    /// All axes, in declaration order.
    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::Unused,
        Axis::Slicer,
        Axis::Columns,
        Axis::Rows,
        Axis::Pages,
        Axis::Chapters,
        Axis::Sections,
    ];

    /// The smallest legal value for [`Axis::for_ordinal`]; the ordinal of
    /// `Unused`.
    pub const MIN_ORDINAL: i32 = Axis::Unused.axis_ordinal();

    /// The largest legal value for [`Axis::for_ordinal`]; the ordinal of
    /// `Sections`.
    pub const MAX_ORDINAL: i32 = Axis::Sections.axis_ordinal();

    /// Return the ordinal used to retrieve this axis from the axis list of
    /// a cell set, or its coordinate from the coordinate list of a cell.
    ///
    /// The axis ordinal is two less than the declaration index, so
    /// `Unused` is -2, `Slicer` is -1, `Columns` is 0, `Rows` is 1, and so
    /// forth.
    ///
    /// ```
    /// use olap_axis::Axis;
    ///
    /// assert_eq!(Axis::Columns.axis_ordinal(), 0);
    /// assert_eq!(Axis::Slicer.axis_ordinal(), -1);
    /// ```
    #[inline]
    pub const fn axis_ordinal(self) -> i32 {
        match self {
            Axis::Unused => -2,
            Axis::Slicer => -1,
            Axis::Columns => 0,
            Axis::Rows => 1,
            Axis::Pages => 2,
            Axis::Chapters => 3,
            Axis::Sections => 4,
        }
    }

    /// Return the axis with the given [axis ordinal](Axis::axis_ordinal).
    ///
    /// **Errors** with `ErrorKind::OutOfRange` if `axis_ordinal` is outside
    /// `Axis::MIN_ORDINAL..=Axis::MAX_ORDINAL`.
    ///
    /// ```
    /// use olap_axis::{Axis, ErrorKind};
    ///
    /// assert_eq!(Axis::for_ordinal(4), Ok(Axis::Sections));
    /// assert_eq!(Axis::for_ordinal(5).unwrap_err().kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn for_ordinal(axis_ordinal: i32) -> Result<Axis, AxisError> {
        let axis = axis_ordinal
            .checked_add(2)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(Axis::from_index)
            .ok_or_else(|| out_of_range(axis_ordinal.into()))?;
        debug_assert_eq!(axis.axis_ordinal(), axis_ordinal);
        Ok(axis)
    }

    /// Return the declaration index of the axis, which is its axis ordinal
    /// plus two.
    ///
    /// This is the position of the axis in [`Axis::ALL`], and a suitable
    /// index for a list that holds one entry for every axis.
    #[inline]
    pub const fn index(self) -> usize {
        (self.axis_ordinal() + 2) as usize
    }

    /// Return the axis with the given declaration index, or `None` if
    /// `index >= Axis::COUNT`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Axis> {
        AXES.get(index).copied()
    }

    /// Return the canonical name of the axis, such as `"ROWS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Unused => "UNUSED",
            Axis::Slicer => "SLICER",
            Axis::Columns => "COLUMNS",
            Axis::Rows => "ROWS",
            Axis::Pages => "PAGES",
            Axis::Chapters => "CHAPTERS",
            Axis::Sections => "SECTIONS",
        }
    }

    /// Return the caption of the axis in the given locale.
    ///
    /// Captions are not localized yet: the result is the canonical
    /// [name](Axis::name) whatever the locale.
    ///
    /// ```
    /// use olap_axis::{Axis, Locale};
    ///
    /// assert_eq!(Axis::Rows.caption(&Locale::from_static("de_DE")), "ROWS");
    /// ```
    #[inline]
    pub fn caption(self, _locale: &Locale) -> &'static str {
        self.name()
    }

    /// Return true if this is the `Slicer` axis.
    #[inline]
    pub fn is_slicer(self) -> bool {
        self == Axis::Slicer
    }

    /// Return true if this is the `Unused` pseudo-axis.
    #[inline]
    pub fn is_unused(self) -> bool {
        self == Axis::Unused
    }

    /// Return true if the axis is laid out in the result, that is, its
    /// axis ordinal is a position in a cell's coordinate list.
    ///
    /// This holds for `Columns` through `Sections`.
    #[inline]
    pub fn is_positional(self) -> bool {
        self.axis_ordinal() >= 0
    }

    /// Return an iterator over all axes, in declaration order.
    ///
    /// ```
    /// use olap_axis::Axis;
    ///
    /// let positional: Vec<_> = Axis::iter().filter(|a| a.is_positional()).collect();
    /// assert_eq!(positional.first(), Some(&Axis::Columns));
    /// assert_eq!(positional.len(), 5);
    /// ```
    #[inline]
    pub fn iter() -> Iter {
        Iter {
            start: 0,
            end: Axis::COUNT,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Parse a canonical axis name, ignoring ASCII case.
impl FromStr for Axis {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AXES.iter()
            .copied()
            .find(|axis| axis.name().eq_ignore_ascii_case(s))
            .ok_or_else(unknown_name)
    }
}

impl TryFrom<i32> for Axis {
    type Error = AxisError;

    #[inline]
    fn try_from(axis_ordinal: i32) -> Result<Self, Self::Error> {
        Axis::for_ordinal(axis_ordinal)
    }
}

impl From<Axis> for i32 {
    #[inline]
    fn from(axis: Axis) -> i32 {
        axis.axis_ordinal()
    }
}

/// An iterator over all axes, in declaration order.
///
/// Created with [`Axis::iter`]. Iterator element type is `Axis`.
#[derive(Clone, Debug)]
pub struct Iter {
    start: usize,
    end: usize,
}

impl Iterator for Iter {
    type Item = Axis;

    #[inline]
    fn next(&mut self) -> Option<Axis> {
        if self.start < self.end {
            let axis = AXES[self.start];
            self.start += 1;
            Some(axis)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Axis> {
        if self.start < self.end {
            self.end -= 1;
            Some(AXES[self.end])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
