/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversion checkers.
//!
//! A conversion can read more than the declared value: font sizes, the
//! viewport, the parent's style, or the underlying value. Every such read
//! leaves a checker behind, and the engine may keep reusing the conversion
//! for as long as all of its checkers stay valid.

use std::fmt;

use app_units::Au;
use euclid::default::Size2D;
use log::trace;
use smallvec::SmallVec;

use crate::context::{FontMetrics, InterpolationEnvironment, StyleResolverState};
use crate::values::animated::{ClipAutos, InterpolationValue};
use crate::values::computed::{ClipRectOrAuto, Length, LengthDependencies};

/// A predicate that must keep holding for a cached conversion to stay valid.
pub trait ConversionChecker: fmt::Debug {
    /// Whether the conversion that registered this checker would still produce
    /// the same result in `environment`, on top of `underlying`.
    fn is_valid(
        &self,
        environment: &InterpolationEnvironment,
        underlying: Option<&InterpolationValue>,
    ) -> bool;
}

/// The checkers registered by a single conversion.
pub type ConversionCheckers = SmallVec<[Box<dyn ConversionChecker>; 4]>;

/// Whether every checker in `checkers` still holds.
pub fn all_valid(
    checkers: &[Box<dyn ConversionChecker>],
    environment: &InterpolationEnvironment,
    underlying: Option<&InterpolationValue>,
) -> bool {
    checkers.iter().all(|checker| {
        let valid = checker.is_valid(environment, underlying);
        if !valid {
            trace!("Conversion invalidated by {:?}", checker);
        }
        valid
    })
}

/// Invalidates font-relative lengths when the element's font changes.
#[derive(Debug)]
pub struct FontRelativeChecker {
    font_size: Length,
    font_metrics: FontMetrics,
}

impl FontRelativeChecker {
    pub fn new(state: &StyleResolverState) -> Self {
        FontRelativeChecker {
            font_size: state.style().font_size,
            font_metrics: state.font_metrics(),
        }
    }
}

impl ConversionChecker for FontRelativeChecker {
    fn is_valid(&self, environment: &InterpolationEnvironment, _: Option<&InterpolationValue>) -> bool {
        let state = environment.state();
        state.style().font_size == self.font_size && state.font_metrics() == self.font_metrics
    }
}

/// Invalidates `rem` lengths when the root font-size changes.
#[derive(Debug)]
pub struct RootFontSizeChecker {
    root_font_size: Length,
}

impl RootFontSizeChecker {
    pub fn new(state: &StyleResolverState) -> Self {
        RootFontSizeChecker {
            root_font_size: state.root_font_size(),
        }
    }
}

impl ConversionChecker for RootFontSizeChecker {
    fn is_valid(&self, environment: &InterpolationEnvironment, _: Option<&InterpolationValue>) -> bool {
        environment.state().root_font_size() == self.root_font_size
    }
}

/// Invalidates viewport-relative lengths when the viewport is resized.
#[derive(Debug)]
pub struct ViewportChecker {
    viewport_size: Size2D<Au>,
}

impl ViewportChecker {
    pub fn new(state: &StyleResolverState) -> Self {
        ViewportChecker {
            viewport_size: state.viewport_size(),
        }
    }
}

impl ConversionChecker for ViewportChecker {
    fn is_valid(&self, environment: &InterpolationEnvironment, _: Option<&InterpolationValue>) -> bool {
        environment.state().viewport_size() == self.viewport_size
    }
}

/// Invalidates an `inherit` conversion when the parent's `clip` changes.
#[derive(Debug)]
pub struct InheritedClipChecker {
    parent_clip: ClipRectOrAuto,
}

impl InheritedClipChecker {
    pub fn new(parent_clip: ClipRectOrAuto) -> Self {
        InheritedClipChecker { parent_clip }
    }
}

impl ConversionChecker for InheritedClipChecker {
    fn is_valid(&self, environment: &InterpolationEnvironment, _: Option<&InterpolationValue>) -> bool {
        environment.state().inherited_clip() == self.parent_clip
    }
}

/// Invalidates a neutral conversion when the underlying value's `auto` flags
/// change, since the neutral value copies them.
#[derive(Debug)]
pub struct UnderlyingAutosChecker {
    autos: ClipAutos,
}

impl UnderlyingAutosChecker {
    pub fn new(autos: ClipAutos) -> Self {
        UnderlyingAutosChecker { autos }
    }
}

impl ConversionChecker for UnderlyingAutosChecker {
    fn is_valid(&self, _: &InterpolationEnvironment, underlying: Option<&InterpolationValue>) -> bool {
        underlying.is_some_and(|underlying| underlying.autos == self.autos)
    }
}

/// Registers one checker per kind of state the computed lengths were resolved
/// against.
pub fn push_length_checkers(
    checkers: &mut ConversionCheckers,
    dependencies: LengthDependencies,
    state: &StyleResolverState,
) {
    if dependencies.contains(LengthDependencies::FONT) {
        checkers.push(Box::new(FontRelativeChecker::new(state)));
    }
    if dependencies.contains(LengthDependencies::ROOT_FONT_SIZE) {
        checkers.push(Box::new(RootFontSizeChecker::new(state)));
    }
    if dependencies.contains(LengthDependencies::VIEWPORT) {
        checkers.push(Box::new(ViewportChecker::new(state)));
    }
}
