// Copyright 2024 olap-axis developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use core::fmt;

use crate::error::{out_of_range, AxisError};
use crate::Axis;

/// **Requires crate feature `"serde"`**
///
/// An axis is written as its canonical name.
impl Serialize for Axis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// **Requires crate feature `"serde"`**
///
/// An axis is read from its name (in any ASCII case). Human-readable
/// formats may also give its axis ordinal instead. Other formats are asked
/// for a string only, so formats that are not self-describing work too.
impl<'de> Deserialize<'de> for Axis {
    fn deserialize<D>(deserializer: D) -> Result<Axis, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(AxisVisitor)
        } else {
            deserializer.deserialize_str(AxisVisitor)
        }
    }
}

fn wide_ordinal<T>(value: T) -> Result<Axis, AxisError>
where
    T: Copy + Into<i128> + TryInto<i32>,
{
    match TryInto::<i32>::try_into(value) {
        Ok(ordinal) => Axis::for_ordinal(ordinal),
        Err(_) => Err(out_of_range(value.into())),
    }
}

struct AxisVisitor;

impl<'de> Visitor<'de> for AxisVisitor {
    type Value = Axis;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "an axis name or an axis ordinal in {}..={}",
            Axis::MIN_ORDINAL,
            Axis::MAX_ORDINAL
        )
    }

    fn visit_str<E>(self, value: &str) -> Result<Axis, E>
    where
        E: de::Error,
    {
        value.parse::<Axis>().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Axis, E>
    where
        E: de::Error,
    {
        wide_ordinal(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Axis, E>
    where
        E: de::Error,
    {
        wide_ordinal(value).map_err(E::custom)
    }
}
