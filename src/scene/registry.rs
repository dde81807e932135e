//! Tag-addressed texture and material tables.
//!
//! Both tables keep registration order and resolve a tag with a linear
//! search, so with duplicate tags the first registration wins and later ones
//! are unreachable. Duplicates are accepted but logged.

use crate::model::{Material, TextureError};

/// Texture units available to the scene shader.
pub const MAX_TEXTURE_UNITS: usize = 16;

#[derive(Debug)]
pub struct TextureEntry<T> {
    pub tag: String,
    pub texture: T,
}

#[derive(Debug)]
pub struct TextureRegistry<T> {
    entries: Vec<TextureEntry<T>>,
}

impl<T> Default for TextureRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TextureRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_TEXTURE_UNITS
    }

    /// Stores `texture` in the next free slot and returns that slot.
    pub fn register(&mut self, tag: &str, texture: T) -> Result<u32, TextureError> {
        if self.is_full() {
            return Err(TextureError::RegistryFull {
                capacity: MAX_TEXTURE_UNITS,
            });
        }
        if let Some(existing) = self.find_unit(tag) {
            log::warn!(
                "Texture tag '{}' already registered at unit {}; the new entry will never be found",
                tag,
                existing
            );
        }
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            texture,
        });
        Ok(self.entries.len() as u32 - 1)
    }

    /// Unit of the first texture registered under `tag`.
    pub fn find_unit(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    pub fn get(&self, unit: u32) -> Option<&T> {
        self.entries.get(unit as usize).map(|entry| &entry.texture)
    }

    /// Pairs every texture with a sequential unit, 0-indexed, in registration order.
    pub fn bind_units(&self) -> Result<Vec<(u32, &T)>, TextureError> {
        if self.entries.len() > MAX_TEXTURE_UNITS {
            return Err(TextureError::RegistryFull {
                capacity: MAX_TEXTURE_UNITS,
            });
        }
        Ok(self
            .entries
            .iter()
            .enumerate()
            .map(|(unit, entry)| (unit as u32, &entry.texture))
            .collect())
    }

    /// Empties the registry, handing every texture back for release.
    pub fn drain(&mut self) -> impl Iterator<Item = TextureEntry<T>> + '_ {
        self.entries.drain(..)
    }
}

#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn define(&mut self, material: Material) {
        if self.find(&material.tag).is_some() {
            log::warn!(
                "Material tag '{}' already defined; the new entry will never be found",
                material.tag
            );
        }
        self.materials.push(material);
    }

    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }
}
