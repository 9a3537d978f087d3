// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// A culture identifier, such as `en_US` or `fr-CA`.
///
/// The identifier is kept as given; it is not validated or normalized.
/// [`Axis::caption`](crate::Axis::caption) accepts a locale but currently
/// returns the canonical axis name for every locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// The language-neutral root locale, with an empty identifier.
    pub const ROOT: Locale = Locale(Cow::Borrowed(""));

    /// Create a locale from a static identifier.
    #[inline]
    pub const fn from_static(tag: &'static str) -> Self {
        Locale(Cow::Borrowed(tag))
    }

    /// Create a locale from an identifier.
    pub fn new<S>(tag: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Locale(tag.into())
    }

    /// Return the identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}

impl From<&'static str> for Locale {
    fn from(tag: &'static str) -> Self {
        Locale::from_static(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale(Cow::Owned(tag))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
