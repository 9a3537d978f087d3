// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use quickcheck::{Arbitrary, Gen};

use crate::Axis;

/// **Requires crate feature `"quickcheck"`**
///
/// Shrinks toward axes declared earlier.
impl Arbitrary for Axis {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Axis::ALL).unwrap_or(&Axis::Columns)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(Axis::iter().take(self.index()).rev())
    }
}
