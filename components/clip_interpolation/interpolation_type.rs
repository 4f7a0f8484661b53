/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The interpolation type for `clip`.
//!
//! <https://drafts.fxtf.org/css-masking/#clip-property>: `clip` animates as a
//! rectangle, edge by edge. `auto` is not a length, so an `auto` edge can only
//! animate towards another `auto` edge; anything else animates discretely.

use cssparser::ToCss;
use log::{debug, trace};

use crate::checkers::{
    ConversionCheckers, InheritedClipChecker, UnderlyingAutosChecker, push_length_checkers,
};
use crate::context::{InterpolationEnvironment, StyleResolverState};
use crate::prefs::Preferences;
use crate::properties::{CssWideKeyword, DeclaredValue, PropertyId};
use crate::values::animated::{
    ClipAutos, InterpolableClip, InterpolationValue, PairwiseValue, ToAnimatedZero,
    UnderlyingValueOwner,
};
use crate::values::computed::{ClipRectOrAuto, Context, ToComputedValue};

/// The operations the animation engine performs on the values of a single
/// property.
///
/// Every converter may return `None`, meaning the value can't take part in a
/// smooth animation; the engine then animates the segment discretely.
pub trait InterpolationType {
    /// The property this type interpolates.
    fn property(&self) -> PropertyId;

    /// Converts the current computed value of the property.
    fn convert_underlying(
        &self,
        environment: &InterpolationEnvironment,
    ) -> Option<InterpolationValue>;

    /// A value that adds nothing on top of `underlying` while staying
    /// compatible with it.
    fn convert_neutral(
        &self,
        underlying: &InterpolationValue,
        checkers: &mut ConversionCheckers,
    ) -> InterpolationValue;

    /// The property's initial value.
    fn convert_initial(&self) -> InterpolationValue;

    /// The parent's computed value.
    fn convert_inherit(
        &self,
        state: &StyleResolverState,
        checkers: &mut ConversionCheckers,
    ) -> InterpolationValue;

    /// Converts a declared value in the context of `state`.
    fn convert_value(
        &self,
        declared: &DeclaredValue,
        state: &StyleResolverState,
        checkers: &mut ConversionCheckers,
    ) -> Option<InterpolationValue>;

    /// Pairs two endpoints up, if they can be interpolated smoothly.
    fn merge_single_conversions(
        &self,
        start: InterpolationValue,
        end: InterpolationValue,
    ) -> Option<PairwiseValue>;

    /// Stacks `value` on top of the value held by `owner`, keeping
    /// `underlying_fraction` of the latter.
    fn composite(
        &self,
        owner: &mut UnderlyingValueOwner,
        underlying_fraction: f64,
        value: &InterpolationValue,
    );

    /// Writes an animated value back into the computed style.
    fn apply(
        &self,
        interpolable: &InterpolableClip,
        autos: ClipAutos,
        environment: &mut InterpolationEnvironment,
    );

    /// Converts a declared keyframe value, resolving CSS-wide keywords first.
    fn convert_single(
        &self,
        declared: &DeclaredValue,
        state: &StyleResolverState,
        checkers: &mut ConversionCheckers,
    ) -> Option<InterpolationValue> {
        match *declared {
            DeclaredValue::CssWideKeyword(CssWideKeyword::Initial) => Some(self.convert_initial()),
            DeclaredValue::CssWideKeyword(CssWideKeyword::Inherit) => {
                Some(self.convert_inherit(state, checkers))
            },
            DeclaredValue::CssWideKeyword(CssWideKeyword::Unset) => {
                if self.property().is_inherited() {
                    Some(self.convert_inherit(state, checkers))
                } else {
                    Some(self.convert_initial())
                }
            },
            _ => self.convert_value(declared, state, checkers),
        }
    }
}

/// The interpolation type for the `clip` property.
#[derive(Clone, Debug, Default)]
pub struct ClipInterpolationType {
    log_conversions: bool,
}

impl ClipInterpolationType {
    pub fn new(prefs: &Preferences) -> Self {
        ClipInterpolationType {
            log_conversions: prefs.log_conversions,
        }
    }

    fn log_conversion(&self, source: &str, clip: &ClipRectOrAuto) {
        if self.log_conversions {
            debug!("Converted {} clip: {}", source, clip.to_css_string());
        } else {
            trace!("Converted {} clip: {}", source, clip.to_css_string());
        }
    }
}

impl InterpolationType for ClipInterpolationType {
    fn property(&self) -> PropertyId {
        PropertyId::Clip
    }

    fn convert_underlying(
        &self,
        environment: &InterpolationEnvironment,
    ) -> Option<InterpolationValue> {
        let clip = environment.state().style().clip;
        self.log_conversion("underlying", &clip);
        Some(InterpolationValue::from_computed(&clip))
    }

    fn convert_neutral(
        &self,
        underlying: &InterpolationValue,
        checkers: &mut ConversionCheckers,
    ) -> InterpolationValue {
        checkers.push(Box::new(UnderlyingAutosChecker::new(underlying.autos)));
        let zero = underlying.interpolable.to_animated_zero().unwrap_or_default();
        InterpolationValue::new(zero, underlying.autos)
    }

    fn convert_initial(&self) -> InterpolationValue {
        InterpolationValue::auto()
    }

    fn convert_inherit(
        &self,
        state: &StyleResolverState,
        checkers: &mut ConversionCheckers,
    ) -> InterpolationValue {
        let parent_clip = state.inherited_clip();
        checkers.push(Box::new(InheritedClipChecker::new(parent_clip)));
        self.log_conversion("inherited", &parent_clip);
        InterpolationValue::from_computed(&parent_clip)
    }

    fn convert_value(
        &self,
        declared: &DeclaredValue,
        state: &StyleResolverState,
        checkers: &mut ConversionCheckers,
    ) -> Option<InterpolationValue> {
        let specified = match *declared {
            DeclaredValue::Value(ref specified) => specified,
            _ => {
                trace!("Not a clip value: {}", declared.to_css_string());
                return None;
            },
        };

        let context = Context::new(state);
        let computed = specified.to_computed_value(&context);
        push_length_checkers(checkers, context.dependencies(), state);
        self.log_conversion("declared", &computed);
        Some(InterpolationValue::from_computed(&computed))
    }

    fn merge_single_conversions(
        &self,
        start: InterpolationValue,
        end: InterpolationValue,
    ) -> Option<PairwiseValue> {
        if !start.is_compatible_with(&end) {
            debug!(
                "Can't interpolate clip between {:?} and {:?} autos",
                start.autos, end.autos
            );
            return None;
        }
        Some(PairwiseValue {
            start: start.interpolable,
            end: end.interpolable,
            autos: start.autos,
        })
    }

    fn composite(
        &self,
        owner: &mut UnderlyingValueOwner,
        underlying_fraction: f64,
        value: &InterpolationValue,
    ) {
        match owner.mutable_value() {
            Some(underlying) if underlying.is_compatible_with(value) => {
                underlying
                    .interpolable
                    .scale_and_add(underlying_fraction, &value.interpolable);
            },
            _ => owner.set(*value),
        }
    }

    fn apply(
        &self,
        interpolable: &InterpolableClip,
        autos: ClipAutos,
        environment: &mut InterpolationEnvironment,
    ) {
        let clip = InterpolationValue::new(*interpolable, autos).to_computed_value();
        trace!("Applying animated clip: {}", clip.to_css_string());
        environment.state_mut().mutate_style().clip = clip;
    }
}
