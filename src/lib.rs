// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/olap-axis/0.1/")]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `olap-axis` crate provides the [`Axis`] type, the role a dimension
//! plays in the result of a multidimensional (OLAP) query.
//!
//! A cell set lays its dimensions out on axes: the familiar
//! [`Columns`](Axis::Columns) and [`Rows`](Axis::Rows), the rarely used
//! [`Pages`](Axis::Pages), [`Chapters`](Axis::Chapters) and
//! [`Sections`](Axis::Sections), and the [`Slicer`](Axis::Slicer), which
//! filters the result without being laid out. [`Unused`](Axis::Unused)
//! marks a hierarchy that appears on no axis at all.
//!
//! Every axis has an *axis ordinal*, a stable integer code used to index
//! parallel result structures: `Columns` is 0, `Rows` is 1 and so on, while
//! `Slicer` is -1 and `Unused` is -2.
//!
//! ```
//! use olap_axis::Axis;
//!
//! assert_eq!(Axis::Rows.axis_ordinal(), 1);
//! assert_eq!(Axis::for_ordinal(-1), Ok(Axis::Slicer));
//! assert!(Axis::for_ordinal(Axis::MAX_ORDINAL + 1).is_err());
//! ```
//!
//! ## Crate Feature Flags
//!
//! The following crate feature flags are available. They are configured in
//! your `Cargo.toml`.
//!
//! - `std`
//!   - Rust standard library (enabled by default)
//!   - This crate can be used without the standard library by disabling the
//!     default `std` feature. To do so, use `default-features = false` in
//!     your `Cargo.toml`. Only `Locale` then needs the `alloc` crate.
//! - `serde`
//!   - Enables serialization support for serde 1.x
//! - `quickcheck`
//!   - Implements `quickcheck::Arbitrary` for `Axis`

extern crate alloc;

pub use crate::axis::{Axis, Iter};
pub use crate::error::{AxisError, ErrorKind};
pub use crate::locale::Locale;

mod axis;
#[cfg(feature = "quickcheck")]
mod axis_quickcheck;
#[cfg(feature = "serde")]
mod axis_serde;
mod error;
mod locale;
pub mod prelude;
