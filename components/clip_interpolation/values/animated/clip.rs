/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated representation of the `clip` property.
//!
//! A `clip` value is split into four numbers, one per edge, and a set of
//! flags recording which edges (or the whole value) are `auto`. Arithmetic
//! only ever touches the numbers; the flags decide whether two values can be
//! combined at all.

use bitflags::bitflags;

use super::{Animate, Procedure, ToAnimatedZero};
use crate::values::Side;
use crate::values::computed::{ClipRect, ClipRectOrAuto, Length};
use crate::values::generics::GenericClipRectOrAuto;

bitflags! {
    /// Which parts of a `clip` value are `auto`.
    ///
    /// When `AUTO` is set the whole value is the `auto` keyword, and every
    /// per-edge flag is set as well.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ClipAutos: u8 {
        /// The whole value is `auto`.
        const AUTO = 1 << 0;
        /// The top edge is `auto`.
        const TOP = 1 << 1;
        /// The right edge is `auto`.
        const RIGHT = 1 << 2;
        /// The bottom edge is `auto`.
        const BOTTOM = 1 << 3;
        /// The left edge is `auto`.
        const LEFT = 1 << 4;
    }
}

impl ClipAutos {
    /// The flags of the `auto` keyword.
    #[inline]
    pub fn whole_auto() -> Self {
        ClipAutos::all()
    }

    /// The flag for a single edge.
    #[inline]
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Top => ClipAutos::TOP,
            Side::Right => ClipAutos::RIGHT,
            Side::Bottom => ClipAutos::BOTTOM,
            Side::Left => ClipAutos::LEFT,
        }
    }

    /// Classifies a computed `clip` value.
    pub fn from_clip(clip: &ClipRectOrAuto) -> Self {
        match *clip {
            GenericClipRectOrAuto::Auto => ClipAutos::whole_auto(),
            GenericClipRectOrAuto::Rect(ref rect) => Side::ALL
                .iter()
                .filter(|side| rect.get(**side).is_none())
                .fold(ClipAutos::empty(), |autos, side| {
                    autos | ClipAutos::for_side(*side)
                }),
        }
    }

    /// Whether the whole value is `auto`.
    #[inline]
    pub fn is_auto(self) -> bool {
        self.contains(ClipAutos::AUTO)
    }

    /// Whether the given edge is `auto`.
    #[inline]
    pub fn is_side_auto(self, side: Side) -> bool {
        self.contains(ClipAutos::for_side(side))
    }
}

/// The numeric part of an animated `clip`: one pixel offset per edge, in
/// `Side` order.
///
/// Edges flagged `auto` are kept at zero and never read back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolableClip(pub [f64; 4]);

impl InterpolableClip {
    /// Four zero edges.
    #[inline]
    pub const fn zero() -> Self {
        InterpolableClip([0.; 4])
    }

    /// The value of the given edge.
    #[inline]
    pub fn get(&self, side: Side) -> f64 {
        self.0[side.index()]
    }

    /// Sets the value of the given edge.
    #[inline]
    pub fn set(&mut self, side: Side, value: f64) {
        self.0[side.index()] = value;
    }

    /// `self = self * scale + other`, edge-wise.
    pub fn scale_and_add(&mut self, scale: f64, other: &Self) {
        for (edge, other) in self.0.iter_mut().zip(other.0.iter()) {
            *edge = *edge * scale + *other;
        }
    }

    fn weighted_sum(&self, self_weight: f64, other: &Self, other_weight: f64) -> Self {
        let mut result = InterpolableClip::zero();
        for side in Side::ALL {
            result.set(side, self.get(side) * self_weight + other.get(side) * other_weight);
        }
        result
    }
}

impl Animate for InterpolableClip {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        let (self_weight, other_weight) = procedure.weights();
        Ok(self.weighted_sum(self_weight, other, other_weight))
    }
}

impl ToAnimatedZero for InterpolableClip {
    #[inline]
    fn to_animated_zero(&self) -> Result<Self, ()> {
        Ok(InterpolableClip::zero())
    }
}

/// A converted `clip` value: the numbers the engine interpolates, plus the
/// `auto` classification carried alongside them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationValue {
    /// The numeric edges.
    pub interpolable: InterpolableClip,
    /// The `auto` flags.
    pub autos: ClipAutos,
}

impl InterpolationValue {
    pub fn new(interpolable: InterpolableClip, autos: ClipAutos) -> Self {
        InterpolationValue {
            interpolable,
            autos,
        }
    }

    /// The representation of the `auto` keyword.
    pub fn auto() -> Self {
        InterpolationValue::new(InterpolableClip::zero(), ClipAutos::whole_auto())
    }

    /// Converts a computed `clip`. `auto` edges are stored as zero.
    pub fn from_computed(clip: &ClipRectOrAuto) -> Self {
        match *clip {
            GenericClipRectOrAuto::Auto => InterpolationValue::auto(),
            GenericClipRectOrAuto::Rect(ref rect) => {
                let mut interpolable = InterpolableClip::zero();
                for side in Side::ALL {
                    if let Some(length) = rect.get(side) {
                        interpolable.set(side, length.px() as f64);
                    }
                }
                InterpolationValue::new(interpolable, ClipAutos::from_clip(clip))
            },
        }
    }

    /// Rebuilds a computed `clip`.
    ///
    /// The flags are authoritative: numbers on `auto` edges are ignored, and
    /// so are all of them when the whole value is `auto`.
    pub fn to_computed_value(&self) -> ClipRectOrAuto {
        if self.autos.is_auto() {
            return ClipRectOrAuto::auto();
        }
        GenericClipRectOrAuto::Rect(ClipRect::from_fn(|side| {
            if self.autos.is_side_auto(side) {
                None
            } else {
                Some(Length::new(self.interpolable.get(side) as f32))
            }
        }))
    }

    /// Whether `self` and `other` can be combined numerically.
    #[inline]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.autos == other.autos
    }
}

/// Two endpoint values known to share their `auto` flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairwiseValue {
    /// The numeric edges at the start of the segment.
    pub start: InterpolableClip,
    /// The numeric edges at the end of the segment.
    pub end: InterpolableClip,
    /// The flags shared by both endpoints.
    pub autos: ClipAutos,
}

impl PairwiseValue {
    /// The value at `progress` along the segment. Progress outside [0, 1]
    /// extrapolates.
    pub fn interpolate(&self, progress: f64) -> Result<InterpolationValue, ()> {
        let interpolable = self
            .start
            .animate(&self.end, Procedure::Interpolate { progress })?;
        Ok(InterpolationValue::new(interpolable, self.autos))
    }
}

/// Holds the composited value while the effects of a frame are stacked on top
/// of each other.
#[derive(Clone, Debug, Default)]
pub struct UnderlyingValueOwner {
    value: Option<InterpolationValue>,
}

impl UnderlyingValueOwner {
    pub fn new() -> Self {
        Self::default()
    }

    /// An owner already holding `value`.
    pub fn with_value(value: InterpolationValue) -> Self {
        UnderlyingValueOwner { value: Some(value) }
    }

    pub fn value(&self) -> Option<&InterpolationValue> {
        self.value.as_ref()
    }

    pub fn mutable_value(&mut self) -> Option<&mut InterpolationValue> {
        self.value.as_mut()
    }

    /// Replaces the held value wholesale.
    pub fn set(&mut self, value: InterpolationValue) {
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_sets_every_flag() {
        let autos = ClipAutos::from_clip(&ClipRectOrAuto::auto());
        assert!(autos.is_auto());
        for side in Side::ALL {
            assert!(autos.is_side_auto(side));
        }
    }

    #[test]
    fn per_edge_flags() {
        let rect = ClipRect::new(None, Some(Length::new(1.)), None, Some(Length::new(2.)));
        let autos = ClipAutos::from_clip(&GenericClipRectOrAuto::Rect(rect));
        assert_eq!(autos, ClipAutos::TOP | ClipAutos::BOTTOM);
        assert!(!autos.is_auto());
    }

    #[test]
    fn auto_edges_are_zero_and_ignored() {
        let clip = GenericClipRectOrAuto::Rect(ClipRect::new(
            None,
            Some(Length::new(10.)),
            Some(Length::new(20.)),
            None,
        ));
        let mut value = InterpolationValue::from_computed(&clip);
        assert_eq!(value.interpolable, InterpolableClip([0., 10., 20., 0.]));

        value.interpolable.set(Side::Top, 42.);
        assert_eq!(value.to_computed_value(), clip);
    }

    #[test]
    fn whole_auto_ignores_numbers() {
        let value = InterpolationValue::new(InterpolableClip([1., 2., 3., 4.]), ClipAutos::whole_auto());
        assert_eq!(value.to_computed_value(), ClipRectOrAuto::auto());
    }

    #[test]
    fn scale_and_add() {
        let mut clip = InterpolableClip([2., 4., 6., 8.]);
        clip.scale_and_add(0.5, &InterpolableClip([1., 1., 1., 1.]));
        assert_eq!(clip, InterpolableClip([2., 3., 4., 5.]));
    }

    #[test]
    fn accumulate_procedure() {
        let a = InterpolableClip([1., 2., 3., 4.]);
        let b = InterpolableClip([10., 10., 10., 10.]);
        assert_eq!(
            a.animate(&b, Procedure::Accumulate { count: 2 }),
            Ok(InterpolableClip([12., 14., 16., 18.]))
        );
        assert_eq!(a.to_animated_zero(), Ok(InterpolableClip::zero()));
    }

    #[test]
    fn pair_extrapolates_and_keeps_autos() {
        let pair = PairwiseValue {
            start: InterpolableClip([0., 10., 0., 0.]),
            end: InterpolableClip([0., 20., 0., 10.]),
            autos: ClipAutos::TOP | ClipAutos::BOTTOM,
        };
        let value = pair.interpolate(1.5).unwrap();
        assert_eq!(value.interpolable, InterpolableClip([0., 25., 0., 15.]));
        assert_eq!(value.autos, pair.autos);
    }
}
