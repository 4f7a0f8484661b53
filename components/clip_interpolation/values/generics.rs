/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Generic types for the `clip` property, shared between the specified and
//! computed representations.

use std::fmt::{self, Write};

use cssparser::ToCss;

use super::{Auto, Side};

/// rect(<top>, <right>, <bottom>, <left>) used by `clip`.
///
/// An absent edge is `auto`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GenericClipRect<L> {
    /// <top> (<length> | <auto>)
    pub top: Option<L>,
    /// <right> (<length> | <auto>)
    pub right: Option<L>,
    /// <bottom> (<length> | <auto>)
    pub bottom: Option<L>,
    /// <left> (<length> | <auto>)
    pub left: Option<L>,
}

impl<L> GenericClipRect<L> {
    /// Creates a clip rectangle from its four edges.
    pub fn new(top: Option<L>, right: Option<L>, bottom: Option<L>, left: Option<L>) -> Self {
        GenericClipRect {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Builds a rectangle by computing each edge in order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Side) -> Option<L>,
    {
        let top = f(Side::Top);
        let right = f(Side::Right);
        let bottom = f(Side::Bottom);
        let left = f(Side::Left);
        Self::new(top, right, bottom, left)
    }

    /// Returns the given edge, or `None` if it is `auto`.
    #[inline]
    pub fn get(&self, side: Side) -> Option<&L> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    /// Maps every present edge through `f`, keeping `auto` edges.
    pub fn map<M, F>(&self, mut f: F) -> GenericClipRect<M>
    where
        F: FnMut(&L) -> M,
    {
        GenericClipRect::from_fn(|side| self.get(side).map(&mut f))
    }
}

impl<L: ToCss> ToCss for GenericClipRect<L> {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str("rect(")?;
        for (i, side) in Side::ALL.iter().enumerate() {
            if i != 0 {
                dest.write_str(", ")?;
            }
            match self.get(*side) {
                Some(length) => length.to_css(dest)?,
                None => Auto.to_css(dest)?,
            }
        }
        dest.write_str(")")
    }
}

/// rect(...) | auto
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenericClipRectOrAuto<R> {
    /// A clip rectangle.
    Rect(R),
    /// The `auto` keyword.
    Auto,
}

impl<R> GenericClipRectOrAuto<R> {
    /// The initial value of the `clip` property.
    #[inline]
    pub fn auto() -> Self {
        GenericClipRectOrAuto::Auto
    }
}

impl<R: ToCss> ToCss for GenericClipRectOrAuto<R> {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            GenericClipRectOrAuto::Rect(ref rect) => rect.to_css(dest),
            GenericClipRectOrAuto::Auto => Auto.to_css(dest),
        }
    }
}
