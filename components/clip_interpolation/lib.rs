/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animation support for the legacy CSS `clip` property.
//!
//! The animation engine drives an [`InterpolationType`] through a fixed set
//! of steps each frame: convert the keyframe (or underlying) values, merge
//! the endpoints of a segment, composite effects on top of each other, and
//! finally apply the result to the computed style.

#![deny(unsafe_code)]

pub mod checkers;
pub mod context;
pub mod interpolation_type;
pub mod prefs;
pub mod properties;
pub mod registry;
pub mod transition;
pub mod values;

pub use crate::checkers::{ConversionChecker, ConversionCheckers};
pub use crate::context::{ComputedValues, InterpolationEnvironment, StyleResolverState};
pub use crate::interpolation_type::{ClipInterpolationType, InterpolationType};
pub use crate::properties::{CssWideKeyword, DeclaredValue, PropertyId};
pub use crate::registry::InterpolationTypeRegistry;
pub use crate::transition::TransitionInterpolation;
