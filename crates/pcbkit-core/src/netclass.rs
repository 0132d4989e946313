use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// How copper zones attach to a pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneConnection {
    /// Use the parent's setting.
    #[default]
    Inherited,
    None,
    Thermal,
    Full,
}

impl ZoneConnection {
    /// `self` unless it is `Inherited`, otherwise `fallback`.
    pub fn or(self, fallback: ZoneConnection) -> ZoneConnection {
        match self {
            ZoneConnection::Inherited => fallback,
            explicit => explicit,
        }
    }
}

/// Zero means "not set locally"; anything else overrides the fallback.
pub(crate) fn inherit(local: Coord, fallback: impl FnOnce() -> Coord) -> Coord {
    if local != 0 {
        local
    } else {
        fallback()
    }
}

pub(crate) fn inherit_ratio(local: f64, fallback: impl FnOnce() -> f64) -> f64 {
    if local != 0.0 {
        local
    } else {
        fallback()
    }
}

/// Electrical rules shared by a group of nets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetClass {
    pub name: String,
    pub clearance: Coord,
    pub track_width: Coord,
    pub via_diameter: Coord,
    pub via_drill: Coord,
}

impl NetClass {
    pub const DEFAULT_NAME: &'static str = "Default";

    pub fn new(name: &str, clearance: Coord) -> Self {
        Self {
            name: name.to_string(),
            clearance,
            ..Self::default()
        }
    }
}

impl Default for NetClass {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            clearance: 200_000,
            track_width: 250_000,
            via_diameter: 800_000,
            via_drill: 400_000,
        }
    }
}

/// The board's net classes and which nets belong to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetClasses {
    default: NetClass,
    classes: HashMap<String, NetClass>,
    assignments: HashMap<String, String>,
}

impl NetClasses {
    pub fn new(default: NetClass) -> Self {
        Self {
            default,
            classes: HashMap::new(),
            assignments: HashMap::new(),
        }
    }

    pub fn default_class(&self) -> &NetClass {
        &self.default
    }

    /// Add or replace a class. A class named like the default replaces it.
    pub fn add(&mut self, class: NetClass) {
        if class.name == self.default.name {
            log::debug!("Replacing default net class '{}'", class.name);
            self.default = class;
            return;
        }
        self.classes.insert(class.name.clone(), class);
    }

    pub fn get(&self, name: &str) -> Option<&NetClass> {
        if name == self.default.name {
            return Some(&self.default);
        }
        self.classes.get(name)
    }

    /// Put `net` into class `class_name`. Unknown classes are refused.
    pub fn assign(&mut self, net: &str, class_name: &str) -> bool {
        if self.get(class_name).is_none() {
            log::warn!("Cannot assign net '{}' to unknown net class '{}'", net, class_name);
            return false;
        }
        self.assignments.insert(net.to_string(), class_name.to_string());
        true
    }

    /// The class a net belongs to; unassigned nets use the default class.
    pub fn class_for_net(&self, net: &str) -> &NetClass {
        self.assignments
            .get(net)
            .and_then(|name| self.get(name))
            .unwrap_or(&self.default)
    }

    /// Number of classes, the default one included.
    pub fn class_count(&self) -> usize {
        self.classes.len() + 1
    }
}
