/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! [Length values][length].
//!
//! [length]: https://drafts.csswg.org/css-values/#lengths

use std::cmp;
use std::fmt::{self, Write};

use app_units::Au;
use cssparser::ToCss;
use euclid::default::Size2D;

use crate::values::computed::{self, Context, LengthDependencies, ToComputedValue};
use crate::values::{CSSFloat, serialize_dimension};

/// Number of app units per pixel
pub const AU_PER_PX: CSSFloat = 60.;
/// Number of app units per inch
pub const AU_PER_IN: CSSFloat = AU_PER_PX * 96.;
/// Number of app units per centimeter
pub const AU_PER_CM: CSSFloat = AU_PER_IN / 2.54;
/// Number of app units per millimeter
pub const AU_PER_MM: CSSFloat = AU_PER_IN / 25.4;
/// Number of app units per quarter
pub const AU_PER_Q: CSSFloat = AU_PER_MM / 4.;
/// Number of app units per point
pub const AU_PER_PT: CSSFloat = AU_PER_IN / 72.;
/// Number of app units per pica
pub const AU_PER_PC: CSSFloat = AU_PER_PT * 12.;

/// A font relative length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontRelativeLength {
    /// A "em" value: https://drafts.csswg.org/css-values/#em
    Em(CSSFloat),
    /// A "ex" value: https://drafts.csswg.org/css-values/#ex
    Ex(CSSFloat),
    /// A "ch" value: https://drafts.csswg.org/css-values/#ch
    Ch(CSSFloat),
    /// A "rem" value: https://drafts.csswg.org/css-values/#rem
    Rem(CSSFloat),
}

impl FontRelativeLength {
    /// Computes the font-relative length.
    pub fn to_computed_value(&self, context: &Context) -> computed::Length {
        let (reference_size, length) = self.reference_font_size_and_length(context);
        reference_size * length
    }

    /// Return reference font size.
    ///
    /// This returns a pair, the first one is the reference font size, and the
    /// second one is the unpacked relative length.
    fn reference_font_size_and_length(&self, context: &Context) -> (computed::Length, CSSFloat) {
        let reference_font_size = context.style().font_size;
        match *self {
            FontRelativeLength::Em(length) => {
                context.add_dependencies(LengthDependencies::FONT);
                (reference_font_size, length)
            },
            FontRelativeLength::Ex(length) => {
                context.add_dependencies(LengthDependencies::FONT);
                // In the cases where it is impossible or impractical to
                // determine the x-height, a value of 0.5em must be assumed.
                let reference_size = context
                    .font_metrics()
                    .x_height
                    .unwrap_or_else(|| reference_font_size * 0.5);
                (reference_size, length)
            },
            FontRelativeLength::Ch(length) => {
                context.add_dependencies(LengthDependencies::FONT);
                // The ch unit falls back to 0.5em when the advance of the "0"
                // glyph can't be determined.
                let reference_size = context
                    .font_metrics()
                    .zero_advance_measure
                    .unwrap_or_else(|| reference_font_size * 0.5);
                (reference_size, length)
            },
            FontRelativeLength::Rem(length) => {
                // When specified on the root element, the rem units refer to
                // the element's own font-size.
                let reference_size = if context.is_root_element() {
                    context.add_dependencies(LengthDependencies::FONT);
                    reference_font_size
                } else {
                    context.add_dependencies(LengthDependencies::ROOT_FONT_SIZE);
                    context.root_font_size()
                };
                (reference_size, length)
            },
        }
    }

    fn unpack(&self) -> (CSSFloat, &'static str) {
        match *self {
            FontRelativeLength::Em(v) => (v, "em"),
            FontRelativeLength::Ex(v) => (v, "ex"),
            FontRelativeLength::Ch(v) => (v, "ch"),
            FontRelativeLength::Rem(v) => (v, "rem"),
        }
    }
}

/// A viewport-relative length.
///
/// <https://drafts.csswg.org/css-values/#viewport-relative-lengths>
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportPercentageLength {
    /// A vw unit: https://drafts.csswg.org/css-values/#vw
    Vw(CSSFloat),
    /// A vh unit: https://drafts.csswg.org/css-values/#vh
    Vh(CSSFloat),
    /// <https://drafts.csswg.org/css-values/#vmin>
    Vmin(CSSFloat),
    /// <https://drafts.csswg.org/css-values/#vmax>
    Vmax(CSSFloat),
}

impl ViewportPercentageLength {
    /// Computes the given viewport-relative length for the given viewport size.
    pub fn to_computed_value(&self, viewport_size: Size2D<Au>) -> computed::Length {
        let (factor, length) = match *self {
            ViewportPercentageLength::Vw(length) => (length, viewport_size.width),
            ViewportPercentageLength::Vh(length) => (length, viewport_size.height),
            ViewportPercentageLength::Vmin(length) => {
                (length, cmp::min(viewport_size.width, viewport_size.height))
            },
            ViewportPercentageLength::Vmax(length) => {
                (length, cmp::max(viewport_size.width, viewport_size.height))
            },
        };

        // We truncate so that adding multiple viewport units that add up to
        // 100 does not overflow due to rounding differences.
        let trunc_scaled = ((length.0 as f64) * factor as f64 / 100.).trunc();
        Au::from_f64_au(trunc_scaled).into()
    }

    fn unpack(&self) -> (CSSFloat, &'static str) {
        match *self {
            ViewportPercentageLength::Vw(v) => (v, "vw"),
            ViewportPercentageLength::Vh(v) => (v, "vh"),
            ViewportPercentageLength::Vmin(v) => (v, "vmin"),
            ViewportPercentageLength::Vmax(v) => (v, "vmax"),
        }
    }
}

/// Represents an absolute length with its unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AbsoluteLength {
    /// An absolute length in pixels (px)
    Px(CSSFloat),
    /// An absolute length in inches (in)
    In(CSSFloat),
    /// An absolute length in centimeters (cm)
    Cm(CSSFloat),
    /// An absolute length in millimeters (mm)
    Mm(CSSFloat),
    /// An absolute length in quarter-millimeters (q)
    Q(CSSFloat),
    /// An absolute length in points (pt)
    Pt(CSSFloat),
    /// An absolute length in pica (pc)
    Pc(CSSFloat),
}

impl AbsoluteLength {
    /// Convert this into a pixel value.
    #[inline]
    pub fn to_px(&self) -> CSSFloat {
        let pixel = match *self {
            AbsoluteLength::Px(value) => value,
            AbsoluteLength::In(value) => value * (AU_PER_IN / AU_PER_PX),
            AbsoluteLength::Cm(value) => value * (AU_PER_CM / AU_PER_PX),
            AbsoluteLength::Mm(value) => value * (AU_PER_MM / AU_PER_PX),
            AbsoluteLength::Q(value) => value * (AU_PER_Q / AU_PER_PX),
            AbsoluteLength::Pt(value) => value * (AU_PER_PT / AU_PER_PX),
            AbsoluteLength::Pc(value) => value * (AU_PER_PC / AU_PER_PX),
        };
        pixel.min(f32::MAX).max(f32::MIN)
    }

    fn unpack(&self) -> (CSSFloat, &'static str) {
        match *self {
            AbsoluteLength::Px(v) => (v, "px"),
            AbsoluteLength::In(v) => (v, "in"),
            AbsoluteLength::Cm(v) => (v, "cm"),
            AbsoluteLength::Mm(v) => (v, "mm"),
            AbsoluteLength::Q(v) => (v, "q"),
            AbsoluteLength::Pt(v) => (v, "pt"),
            AbsoluteLength::Pc(v) => (v, "pc"),
        }
    }
}

/// A `<length>` as it appears in a `clip` declaration.
///
/// `calc()` and percentages are not valid inside `rect()`, so every length is
/// a single dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// An absolute length: https://drafts.csswg.org/css-values/#absolute-length
    Absolute(AbsoluteLength),
    /// A font-relative length:
    ///
    /// https://drafts.csswg.org/css-values/#font-relative-lengths
    FontRelative(FontRelativeLength),
    /// A viewport-relative length.
    ///
    /// https://drafts.csswg.org/css-values/#viewport-relative-lengths
    ViewportPercentage(ViewportPercentageLength),
}

impl Length {
    /// Get an absolute length from a px value.
    #[inline]
    pub fn from_px(px_value: CSSFloat) -> Length {
        Length::Absolute(AbsoluteLength::Px(px_value))
    }
}

impl ToComputedValue for Length {
    type ComputedValue = computed::Length;

    fn to_computed_value(&self, context: &Context) -> computed::Length {
        match *self {
            Length::Absolute(length) => computed::Length::new(length.to_px()),
            Length::FontRelative(length) => length.to_computed_value(context),
            Length::ViewportPercentage(length) => {
                context.add_dependencies(LengthDependencies::VIEWPORT);
                length.to_computed_value(context.viewport_size())
            },
        }
    }

    fn from_computed_value(computed: &computed::Length) -> Self {
        Length::from_px(computed.px())
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        let (value, unit) = match *self {
            Length::Absolute(ref length) => length.unpack(),
            Length::FontRelative(ref length) => length.unpack(),
            Length::ViewportPercentage(ref length) => length.unpack(),
        };
        serialize_dimension(value, unit, dest)
    }
}
