use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::footprint::Footprint;
use crate::interfaces::FootprintLibrary;
use crate::libname::validate_lib_name;

/// Footprint library held in memory, keyed by library reference name.
///
/// Stored footprints are detached copies; `load` hands out a duplicate with a
/// fresh identity so the same part can be placed many times.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    name: String,
    footprints: BTreeMap<String, Footprint>,
}

impl MemoryLibrary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            footprints: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    pub fn contains(&self, lib_ref: &str) -> bool {
        self.footprints.contains_key(lib_ref)
    }
}

impl FootprintLibrary for MemoryLibrary {
    fn load(&self, lib_ref: &str) -> Option<Footprint> {
        let footprint = self.footprints.get(lib_ref)?.duplicate();
        log::debug!("Loaded footprint '{}' from library '{}'", lib_ref, self.name);
        Some(footprint)
    }

    /// Store a copy under the footprint's library name, replacing any entry
    /// with the same name.
    fn save(&mut self, footprint: &Footprint) -> Result<(), CoreError> {
        let lib_ref = footprint.lib_ref();
        validate_lib_name(lib_ref)?;
        if self
            .footprints
            .insert(lib_ref.to_string(), footprint.clone())
            .is_some()
        {
            log::info!("Replaced footprint '{}' in library '{}'", lib_ref, self.name);
        } else {
            log::info!("Saved footprint '{}' to library '{}'", lib_ref, self.name);
        }
        Ok(())
    }

    fn remove(&mut self, lib_ref: &str) -> Result<Footprint, CoreError> {
        self.footprints
            .remove(lib_ref)
            .ok_or_else(|| CoreError::FootprintNotFound(lib_ref.to_string()))
    }

    fn names(&self) -> Vec<String> {
        self.footprints.keys().cloned().collect()
    }
}
