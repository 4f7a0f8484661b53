/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed values.

use std::cell::Cell;

use app_units::Au;
use bitflags::bitflags;
use euclid::default::Size2D;

use crate::context::{ComputedValues, FontMetrics, StyleResolverState};
use crate::values::generics::{GenericClipRect, GenericClipRectOrAuto};

pub mod length;

pub use self::length::{CSSPixelLength, Length};

bitflags! {
    /// The parts of the style resolver state a computed value was derived
    /// from.
    ///
    /// Anything recorded here can change independently of the declared value,
    /// so a cached conversion has to be re-validated against it.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct LengthDependencies: u8 {
        /// The element's font-size or font metrics (`em`, `ex`, `ch`, and
        /// `rem` on the root element).
        const FONT = 1 << 0;
        /// The root element's font-size (`rem`).
        const ROOT_FONT_SIZE = 1 << 1;
        /// The viewport size (`vw`, `vh`, `vmin`, `vmax`).
        const VIEWPORT = 1 << 2;
    }
}

/// A `Context` is all the data a specified value could ever need to compute
/// itself and be transformed to a computed value.
pub struct Context<'a> {
    state: &'a StyleResolverState,
    dependencies: Cell<LengthDependencies>,
}

impl<'a> Context<'a> {
    /// Creates a context reading from the given resolver state.
    pub fn new(state: &'a StyleResolverState) -> Self {
        Context {
            state,
            dependencies: Cell::new(LengthDependencies::empty()),
        }
    }

    /// Whether the current element is the root element.
    pub fn is_root_element(&self) -> bool {
        self.state.is_root_element()
    }

    /// The current viewport size, used to resolve viewport units.
    pub fn viewport_size(&self) -> Size2D<Au> {
        self.state.viewport_size()
    }

    /// The font-size of the root element.
    pub fn root_font_size(&self) -> Length {
        self.state.root_font_size()
    }

    /// The metrics of the element's first available font.
    pub fn font_metrics(&self) -> FontMetrics {
        self.state.font_metrics()
    }

    /// The computed style being built for the current element.
    pub fn style(&self) -> &ComputedValues {
        self.state.style()
    }

    /// Records that the value being computed depends on `dependencies`.
    #[inline]
    pub fn add_dependencies(&self, dependencies: LengthDependencies) {
        self.dependencies.set(self.dependencies.get() | dependencies);
    }

    /// Everything recorded through `add_dependencies` so far.
    #[inline]
    pub fn dependencies(&self) -> LengthDependencies {
        self.dependencies.get()
    }
}

/// A trait to represent the conversion between computed and specified values.
pub trait ToComputedValue {
    /// The computed value type we're going to be converted to.
    type ComputedValue;

    /// Convert a specified value to a computed value, using itself and the data
    /// inside the `Context`.
    fn to_computed_value(&self, context: &Context) -> Self::ComputedValue;

    /// Convert a computed value to specified value form.
    ///
    /// This will be used for recascading during animation.
    /// Such from_computed_valued values should recompute to the same value.
    fn from_computed_value(computed: &Self::ComputedValue) -> Self;
}

impl<T> ToComputedValue for Option<T>
where
    T: ToComputedValue,
{
    type ComputedValue = Option<<T as ToComputedValue>::ComputedValue>;

    #[inline]
    fn to_computed_value(&self, context: &Context) -> Self::ComputedValue {
        self.as_ref().map(|item| item.to_computed_value(context))
    }

    #[inline]
    fn from_computed_value(computed: &Self::ComputedValue) -> Self {
        computed.as_ref().map(T::from_computed_value)
    }
}

/// The computed value of a clip rectangle.
pub type ClipRect = GenericClipRect<Length>;

/// The computed value of the `clip` property.
pub type ClipRectOrAuto = GenericClipRectOrAuto<ClipRect>;

impl ClipRect {
    /// A rectangle whose four edges are the given pixel lengths.
    pub fn from_px(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        ClipRect::new(
            Some(Length::new(top)),
            Some(Length::new(right)),
            Some(Length::new(bottom)),
            Some(Length::new(left)),
        )
    }
}
