/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified values.

use crate::values::computed::{self, Context, ToComputedValue};
use crate::values::generics::{GenericClipRect, GenericClipRectOrAuto};

pub mod length;

pub use self::length::{AbsoluteLength, FontRelativeLength, Length, ViewportPercentageLength};

/// rect(<top>, <right>, <bottom>, <left>) as declared.
pub type ClipRect = GenericClipRect<Length>;

/// The specified value of the `clip` property.
pub type ClipRectOrAuto = GenericClipRectOrAuto<ClipRect>;

impl ClipRect {
    /// A rectangle whose four edges are the given pixel lengths.
    pub fn from_px(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        ClipRect::new(
            Some(Length::from_px(top)),
            Some(Length::from_px(right)),
            Some(Length::from_px(bottom)),
            Some(Length::from_px(left)),
        )
    }
}

impl ToComputedValue for ClipRect {
    type ComputedValue = computed::ClipRect;

    #[inline]
    fn to_computed_value(&self, context: &Context) -> computed::ClipRect {
        self.map(|length| length.to_computed_value(context))
    }

    #[inline]
    fn from_computed_value(computed: &computed::ClipRect) -> Self {
        computed.map(Length::from_computed_value)
    }
}

impl ToComputedValue for ClipRectOrAuto {
    type ComputedValue = computed::ClipRectOrAuto;

    #[inline]
    fn to_computed_value(&self, context: &Context) -> computed::ClipRectOrAuto {
        match *self {
            GenericClipRectOrAuto::Rect(ref rect) => {
                GenericClipRectOrAuto::Rect(rect.to_computed_value(context))
            },
            GenericClipRectOrAuto::Auto => GenericClipRectOrAuto::Auto,
        }
    }

    #[inline]
    fn from_computed_value(computed: &computed::ClipRectOrAuto) -> Self {
        match *computed {
            GenericClipRectOrAuto::Rect(ref rect) => {
                GenericClipRectOrAuto::Rect(ClipRect::from_computed_value(rect))
            },
            GenericClipRectOrAuto::Auto => GenericClipRectOrAuto::Auto,
        }
    }
}
