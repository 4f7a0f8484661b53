/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Common [values][values] used in the `clip` property.
//!
//! [values]: https://drafts.csswg.org/css-values/

use std::fmt::{self, Write};

use cssparser::ToCss;

pub mod animated;
pub mod computed;
pub mod generics;
pub mod specified;

/// A CSS float value.
pub type CSSFloat = f32;

/// One of the four edges of a `clip` rectangle.
///
/// The discriminant is the position of the edge in `rect(<top>, <right>,
/// <bottom>, <left>)`, and every per-edge array in this crate is indexed by it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Side {
    /// The top edge.
    Top = 0,
    /// The right edge.
    Right = 1,
    /// The bottom edge.
    Bottom = 2,
    /// The left edge.
    Left = 3,
}

impl Side {
    /// All sides, in serialization order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The index of this side in per-edge arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Serializes a number followed by a unit, the way lengths are written back
/// into style.
pub(crate) fn serialize_dimension<W>(value: CSSFloat, unit: &str, dest: &mut W) -> fmt::Result
where
    W: Write,
{
    write!(dest, "{}", value)?;
    dest.write_str(unit)
}

/// The `auto` keyword, used both for a whole `clip` value and for a single
/// edge of a clip rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Auto;

impl ToCss for Auto {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("auto")
    }
}
