/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Property identifiers and declared values as the cascade hands them over.

use std::fmt::{self, Write};

use cssparser::ToCss;

use crate::values::specified::ClipRectOrAuto;

/// An identifier for an animatable longhand.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PropertyId {
    /// <https://drafts.fxtf.org/css-masking/#clip-property>
    Clip,
}

impl PropertyId {
    /// The CSS name of this property.
    pub fn name(self) -> &'static str {
        match self {
            PropertyId::Clip => "clip",
        }
    }

    /// Looks a property up by its CSS name, ASCII case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("clip") {
            Some(PropertyId::Clip)
        } else {
            None
        }
    }

    /// Whether the property inherits by default.
    pub fn is_inherited(self) -> bool {
        match self {
            PropertyId::Clip => false,
        }
    }
}

/// A CSS-wide keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CssWideKeyword {
    /// The `initial` keyword.
    Initial,
    /// The `inherit` keyword.
    Inherit,
    /// The `unset` keyword.
    Unset,
}

impl CssWideKeyword {
    /// Returns a CSS-wide keyword as a string.
    pub fn to_str(&self) -> &'static str {
        match *self {
            CssWideKeyword::Initial => "initial",
            CssWideKeyword::Inherit => "inherit",
            CssWideKeyword::Unset => "unset",
        }
    }
}

impl ToCss for CssWideKeyword {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(self.to_str())
    }
}

/// A declared value for `clip`.
#[derive(Clone, Debug, PartialEq)]
pub enum DeclaredValue {
    /// A `rect()` or `auto`.
    Value(ClipRectOrAuto),
    /// A CSS-wide keyword.
    CssWideKeyword(CssWideKeyword),
    /// A value containing `var()` references that hasn't been substituted
    /// yet. Never convertible.
    WithVariables(String),
}

impl ToCss for DeclaredValue {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match *self {
            DeclaredValue::Value(ref value) => value.to_css(dest),
            DeclaredValue::CssWideKeyword(ref keyword) => keyword.to_css(dest),
            DeclaredValue::WithVariables(ref css) => dest.write_str(css),
        }
    }
}
