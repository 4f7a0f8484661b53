/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Sampling a single animation segment between two converted values.

use log::debug;

use crate::context::InterpolationEnvironment;
use crate::interpolation_type::InterpolationType;
use crate::values::animated::{InterpolationValue, PairwiseValue, UnderlyingValueOwner};

/// One segment of a transition or keyframe animation.
///
/// If the endpoints can't be merged, the segment flips from `start` to `end`
/// halfway through.
pub struct TransitionInterpolation<'a> {
    interpolation_type: &'a dyn InterpolationType,
    start: InterpolationValue,
    end: InterpolationValue,
    merged: Option<PairwiseValue>,
}

impl<'a> TransitionInterpolation<'a> {
    pub fn new(
        interpolation_type: &'a dyn InterpolationType,
        start: InterpolationValue,
        end: InterpolationValue,
    ) -> Self {
        let merged = interpolation_type.merge_single_conversions(start, end);
        if merged.is_none() {
            debug!(
                "{} segment falls back to discrete animation",
                interpolation_type.property().name()
            );
        }
        TransitionInterpolation {
            interpolation_type,
            start,
            end,
            merged,
        }
    }

    /// Whether the segment interpolates smoothly.
    pub fn is_smooth(&self) -> bool {
        self.merged.is_some()
    }

    /// The value at `progress`.
    pub fn current_value(&self, progress: f64) -> InterpolationValue {
        if let Some(ref pair) = self.merged {
            if let Ok(value) = pair.interpolate(progress) {
                return value;
            }
        }
        if progress < 0.5 { self.start } else { self.end }
    }

    /// Writes the value at `progress` into the environment's computed style.
    pub fn apply(&self, progress: f64, environment: &mut InterpolationEnvironment) {
        let value = self.current_value(progress);
        self.interpolation_type
            .apply(&value.interpolable, value.autos, environment);
    }

    /// Composites the value at `progress` onto `owner`, as an additive effect
    /// keeping `underlying_fraction` of what is already there.
    pub fn composite_onto(
        &self,
        owner: &mut UnderlyingValueOwner,
        underlying_fraction: f64,
        progress: f64,
    ) {
        let value = self.current_value(progress);
        self.interpolation_type
            .composite(owner, underlying_fraction, &value);
    }
}
