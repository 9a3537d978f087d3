// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! olap-axis prelude.
//!
//! This module contains the most used types that you can import easily as a
//! group.
//!
//! ```
//! use olap_axis::prelude::*;
//!
//! assert_eq!(Axis::for_ordinal(0), Ok(Axis::Columns));
//! ```

#[doc(no_inline)]
pub use crate::{Axis, AxisError, ErrorKind, Locale};
