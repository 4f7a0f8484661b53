/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lookup of interpolation types by animated property.

use std::collections::HashMap;

use log::debug;

use crate::interpolation_type::{ClipInterpolationType, InterpolationType};
use crate::prefs::{self, Preferences};
use crate::properties::PropertyId;

/// The interpolation types known to the animation engine, keyed by property.
///
/// A property without an entry animates discretely.
pub struct InterpolationTypeRegistry {
    types: HashMap<PropertyId, Box<dyn InterpolationType>>,
}

impl InterpolationTypeRegistry {
    pub fn new(prefs: &Preferences) -> Self {
        let mut registry = InterpolationTypeRegistry {
            types: HashMap::new(),
        };
        if prefs.clip_interpolation_enabled {
            registry.register(Box::new(ClipInterpolationType::new(prefs)));
        } else {
            debug!("clip interpolation disabled by preferences");
        }
        registry
    }

    /// A registry built from the process-wide preferences.
    pub fn from_global_prefs() -> Self {
        Self::new(&prefs::get())
    }

    /// Adds `interpolation_type`, replacing any previous entry for its
    /// property.
    pub fn register(&mut self, interpolation_type: Box<dyn InterpolationType>) {
        self.types
            .insert(interpolation_type.property(), interpolation_type);
    }

    pub fn get(&self, property: PropertyId) -> Option<&dyn InterpolationType> {
        self.types.get(&property).map(|boxed| &**boxed)
    }

    /// Looks an interpolation type up by property name.
    pub fn get_by_name(&self, name: &str) -> Option<&dyn InterpolationType> {
        PropertyId::from_name(name).and_then(|property| self.get(property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_is_registered_by_default() {
        let registry = InterpolationTypeRegistry::new(&Preferences::default());
        let clip = registry.get_by_name("CLIP").unwrap();
        assert_eq!(clip.property(), PropertyId::Clip);
    }

    #[test]
    fn disabled_pref_leaves_clip_discrete() {
        let prefs = Preferences {
            clip_interpolation_enabled: false,
            ..Preferences::default()
        };
        let registry = InterpolationTypeRegistry::new(&prefs);
        assert!(registry.get(PropertyId::Clip).is_none());
        assert!(registry.get_by_name("clip-path").is_none());
    }

    #[test]
    fn global_prefs_are_read_at_construction() {
        prefs::set(Preferences {
            clip_interpolation_enabled: false,
            ..Preferences::default()
        });
        let disabled = InterpolationTypeRegistry::from_global_prefs();

        prefs::set(Preferences::default());
        let enabled = InterpolationTypeRegistry::from_global_prefs();

        assert!(disabled.get(PropertyId::Clip).is_none());
        assert!(enabled.get(PropertyId::Clip).is_some());
    }
}
