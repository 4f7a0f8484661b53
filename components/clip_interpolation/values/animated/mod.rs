/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated values.
//!
//! `clip` cannot be interpolated directly with its computed value, since an
//! `auto` edge has no numeric meaning. This module holds the intermediate
//! representation the animation engine does arithmetic on.

pub mod clip;

pub use self::clip::{
    ClipAutos, InterpolableClip, InterpolationValue, PairwiseValue, UnderlyingValueOwner,
};

/// The procedure to use when animating one value towards another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Procedure {
    /// <https://drafts.csswg.org/web-animations/#animation-interpolation>
    Interpolate { progress: f64 },
    /// <https://drafts.csswg.org/web-animations/#animation-addition>
    Add,
    /// <https://drafts.csswg.org/web-animations/#animation-accumulation>
    Accumulate { count: u64 },
}

impl Procedure {
    /// The weights applied to `self` and `other` respectively.
    #[inline]
    pub fn weights(self) -> (f64, f64) {
        match self {
            Procedure::Interpolate { progress } => (1. - progress, progress),
            Procedure::Add => (1., 1.),
            Procedure::Accumulate { count } => (count as f64, 1.),
        }
    }
}

/// Animate from one value to another.
pub trait Animate: Sized {
    /// Animate a value towards another one, given an animation procedure.
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()>;
}

/// Returns a value similar to `self` that represents zero.
///
/// This is used for composition, where a missing underlying value is treated
/// as its zero.
pub trait ToAnimatedZero: Sized {
    /// Returns a value that, when added with an underlying value, will produce
    /// the underlying value. This is used for SMIL animation's "by-animation"
    /// where we are provided with only the `to` value.
    fn to_animated_zero(&self) -> Result<Self, ()>;
}

impl Animate for f64 {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        let (self_weight, other_weight) = procedure.weights();
        Ok(*self * self_weight + *other * other_weight)
    }
}

impl ToAnimatedZero for f64 {
    #[inline]
    fn to_animated_zero(&self) -> Result<Self, ()> {
        Ok(0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_weights_sum_to_one() {
        let (a, b) = Procedure::Interpolate { progress: 0.25 }.weights();
        assert_eq!(a + b, 1.);
        assert_eq!(
            10f64.animate(&20., Procedure::Interpolate { progress: 0.25 }),
            Ok(12.5)
        );
    }

    #[test]
    fn add_and_accumulate() {
        assert_eq!(3f64.animate(&4., Procedure::Add), Ok(7.));
        assert_eq!(3f64.animate(&4., Procedure::Accumulate { count: 2 }), Ok(10.));
    }
}
