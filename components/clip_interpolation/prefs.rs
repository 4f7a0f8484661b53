/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Preferences controlling `clip` interpolation.

use std::error::Error;
use std::fmt;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PREFS: RwLock<Preferences> = RwLock::new(Preferences::default());
}

/// The set of preferences read by this crate.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// Whether `clip` animates smoothly. When disabled no interpolation type is
    /// registered for the property and every segment animates discretely.
    pub clip_interpolation_enabled: bool,
    /// Log every value conversion at `debug` level instead of `trace`.
    pub log_conversions: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            clip_interpolation_enabled: true,
            log_conversions: false,
        }
    }
}

#[derive(Debug)]
pub enum PrefError {
    Json(serde_json::Error),
}

impl fmt::Display for PrefError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PrefError::Json(ref e) => write!(f, "Could not parse preferences: {}", e),
        }
    }
}

impl Error for PrefError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PrefError::Json(ref e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PrefError {
    fn from(error: serde_json::Error) -> Self {
        PrefError::Json(error)
    }
}

/// Parses preferences from a JSON object. Missing keys keep their defaults.
pub fn read_prefs(txt: &str) -> Result<Preferences, PrefError> {
    Ok(serde_json::from_str(txt)?)
}

/// A copy of the current process-wide preferences.
pub fn get() -> Preferences {
    PREFS.read().expect("RwLock is poisoned").clone()
}

/// Replaces the process-wide preferences.
pub fn set(prefs: Preferences) {
    *PREFS.write().expect("RwLock is poisoned") = prefs;
}
