/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The style resolver state consulted while converting and applying `clip`
//! values.

use app_units::Au;
use euclid::default::Size2D;

use crate::values::computed::{ClipRectOrAuto, Length};

/// The initial value of `font-size`.
pub const DEFAULT_FONT_SIZE: Length = Length::new(16.);

/// Metrics of the first available font, used by `ex` and `ch`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// The x-height of the font, if known.
    pub x_height: Option<Length>,
    /// The advance of the "0" glyph, if known.
    pub zero_advance_measure: Option<Length>,
}

/// The computed style of an element, restricted to what `clip` animations
/// read and write.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedValues {
    /// The computed `clip`.
    pub clip: ClipRectOrAuto,
    /// The computed `font-size`.
    pub font_size: Length,
}

impl Default for ComputedValues {
    fn default() -> Self {
        ComputedValues {
            clip: ClipRectOrAuto::auto(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// The state of the style resolver for the element being styled.
#[derive(Clone, Debug)]
pub struct StyleResolverState {
    viewport_size: Size2D<Au>,
    root_font_size: Length,
    font_metrics: FontMetrics,
    is_root_element: bool,
    parent_style: Option<ComputedValues>,
    style: ComputedValues,
}

impl StyleResolverState {
    /// Creates the state for a non-root element without a parent style.
    pub fn new(viewport_size: Size2D<Au>) -> Self {
        StyleResolverState {
            viewport_size,
            root_font_size: DEFAULT_FONT_SIZE,
            font_metrics: FontMetrics::default(),
            is_root_element: false,
            parent_style: None,
            style: ComputedValues::default(),
        }
    }

    /// Sets the parent computed style, returning `self`.
    pub fn with_parent_style(mut self, parent_style: ComputedValues) -> Self {
        self.parent_style = Some(parent_style);
        self
    }

    pub fn viewport_size(&self) -> Size2D<Au> {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, viewport_size: Size2D<Au>) {
        self.viewport_size = viewport_size;
    }

    pub fn root_font_size(&self) -> Length {
        self.root_font_size
    }

    pub fn set_root_font_size(&mut self, root_font_size: Length) {
        self.root_font_size = root_font_size;
    }

    pub fn font_metrics(&self) -> FontMetrics {
        self.font_metrics
    }

    pub fn set_font_metrics(&mut self, font_metrics: FontMetrics) {
        self.font_metrics = font_metrics;
    }

    pub fn is_root_element(&self) -> bool {
        self.is_root_element
    }

    pub fn set_is_root_element(&mut self, is_root_element: bool) {
        self.is_root_element = is_root_element;
    }

    /// The parent's computed style, or `None` for the root element.
    pub fn parent_style(&self) -> Option<&ComputedValues> {
        self.parent_style.as_ref()
    }

    pub fn mutate_parent_style(&mut self) -> Option<&mut ComputedValues> {
        self.parent_style.as_mut()
    }

    /// The computed style under construction.
    pub fn style(&self) -> &ComputedValues {
        &self.style
    }

    pub fn mutate_style(&mut self) -> &mut ComputedValues {
        &mut self.style
    }

    /// The `clip` an `inherit` keyword resolves to.
    ///
    /// Without a parent this is the initial value.
    pub fn inherited_clip(&self) -> ClipRectOrAuto {
        self.parent_style
            .as_ref()
            .map_or_else(ClipRectOrAuto::auto, |parent| parent.clip)
    }
}

/// What the animation engine hands to the underlying converter and the
/// applier: exclusive access to the resolver state for the duration of the
/// call.
pub struct InterpolationEnvironment<'a> {
    state: &'a mut StyleResolverState,
}

impl<'a> InterpolationEnvironment<'a> {
    pub fn new(state: &'a mut StyleResolverState) -> Self {
        InterpolationEnvironment { state }
    }

    pub fn state(&self) -> &StyleResolverState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut StyleResolverState {
        self.state
    }
}
