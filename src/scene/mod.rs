pub mod layout;
pub mod lighting;
pub mod registry;
pub mod transform;
pub mod uniforms;

pub use layout::{Placement, Surface};
pub use lighting::{DirectionalLight, LightSet, PointLight};
pub use registry::{MaterialRegistry, TextureRegistry, MAX_TEXTURE_UNITS};
pub use transform::Transform;
pub use uniforms::{CameraUniform, DrawCall, LightingUniform, ObjectUniform};

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3, Vec4};

use crate::model::{DecodedImage, Material, MeshData, Shape, TextureError};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene has already been prepared")]
    AlreadyPrepared,
    #[error("scene must be prepared before rendering")]
    NotPrepared,
    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Where textures and meshes end up. The GPU renderer implements this; tests
/// use an in-memory stand-in.
pub trait SceneBackend {
    type Texture;

    fn upload_texture(&mut self, image: &DecodedImage, tag: &str) -> anyhow::Result<Self::Texture>;

    /// Frees a texture for good. Called once per uploaded texture.
    fn release_texture(&mut self, texture: Self::Texture);

    /// Makes `textures` addressable by unit for subsequent frames.
    fn bind_textures(&mut self, textures: &[(u32, &Self::Texture)]);

    fn load_mesh(&mut self, shape: Shape, mesh: &MeshData);
}

/// Owns the scene's registries and lights and turns the placement table into
/// a per-frame draw list.
pub struct SceneRenderer<B: SceneBackend> {
    backend: B,
    texture_dir: PathBuf,
    textures: TextureRegistry<B::Texture>,
    materials: MaterialRegistry,
    lights: Option<LightSet>,
    placements: Vec<Placement>,
    object: ObjectUniform,
    draws: Vec<DrawCall>,
    prepared: bool,
}

impl<B: SceneBackend> SceneRenderer<B> {
    pub fn new(backend: B, texture_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            texture_dir: texture_dir.into(),
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            lights: None,
            placements: Vec::new(),
            object: ObjectUniform::default(),
            draws: Vec::new(),
            prepared: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Published lights, once the scene is prepared.
    pub fn lights(&self) -> Option<&LightSet> {
        self.lights.as_ref()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Draw list recorded by the last `render_frame`.
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Current per-object state, as the next draw would record it.
    pub fn object_state(&self) -> &ObjectUniform {
        &self.object
    }

    /// Decodes, uploads and registers one texture. On failure nothing is registered.
    pub fn load_texture(&mut self, path: &Path, tag: &str) -> Result<u32, TextureError> {
        if self.textures.is_full() {
            log::warn!("Skipping texture '{}': all {} units in use", tag, MAX_TEXTURE_UNITS);
            return Err(TextureError::RegistryFull {
                capacity: MAX_TEXTURE_UNITS,
            });
        }

        let image = DecodedImage::from_path(path).map_err(|err| {
            log::warn!("Could not load texture '{}': {}", tag, err);
            err
        })?;

        let texture = self
            .backend
            .upload_texture(&image, tag)
            .map_err(|err| {
                log::warn!("Could not upload texture '{}': {:#}", tag, err);
                TextureError::Upload {
                    tag: tag.to_string(),
                    message: format!("{:#}", err),
                }
            })?;

        let unit = self.textures.register(tag, texture)?;
        log::info!(
            "Loaded texture '{}' from {} ({}x{}, {} channels) into unit {}",
            tag,
            path.display(),
            image.width,
            image.height,
            image.channels,
            unit
        );
        Ok(unit)
    }

    /// Binds every registered texture to its unit. Returns how many were bound.
    pub fn bind_textures(&mut self) -> Result<usize, TextureError> {
        let units = self.textures.bind_units()?;
        let count = units.len();
        self.backend.bind_textures(&units);
        log::debug!("Bound {} texture units", count);
        Ok(count)
    }

    pub fn find_texture_unit(&self, tag: &str) -> Option<u32> {
        let unit = self.textures.find_unit(tag);
        if unit.is_none() {
            log::debug!("No texture registered under '{}'", tag);
        }
        unit
    }

    pub fn find_material(&self, tag: &str) -> Option<&Material> {
        let material = self.materials.find(tag);
        if material.is_none() {
            log::debug!("No material defined under '{}'", tag);
        }
        material
    }

    pub fn define_material(&mut self, material: Material) {
        self.materials.define(material);
    }

    /// Publishes the model matrix `T * Rz * Ry * Rx * S` (angles in degrees).
    pub fn set_object_transform(&mut self, scale: Vec3, rx: f32, ry: f32, rz: f32, translation: Vec3) {
        let transform = Transform::from_parts(scale, Vec3::new(rx, ry, rz), translation);
        self.object.set_model(transform.to_matrix());
    }

    pub fn set_object_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.object.set_color(Vec4::new(r, g, b, a));
    }

    /// Turns texturing on. An unknown tag publishes the no-texture unit.
    pub fn set_object_texture(&mut self, tag: &str) {
        let unit = self.find_texture_unit(tag);
        self.object.set_texture_unit(unit);
    }

    /// Publishes the material's lighting terms; unknown tags leave the previous ones.
    pub fn set_object_material(&mut self, tag: &str) {
        if self.materials.is_empty() {
            return;
        }
        if let Some(material) = self.materials.find(tag) {
            self.object.set_material(material);
        } else {
            log::debug!("No material defined under '{}'", tag);
        }
    }

    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        self.object.set_uv_scale(Vec2::new(u, v));
    }

    /// Records a draw of `shape` with the current object state.
    pub fn draw(&mut self, shape: Shape) {
        self.draws.push(DrawCall {
            shape,
            object: self.object,
        });
    }

    /// One-time setup: lights, materials, textures and meshes.
    pub fn prepare_scene(&mut self) -> Result<(), SceneError> {
        if self.prepared {
            return Err(SceneError::AlreadyPrepared);
        }

        self.lights = Some(LightSet::nursery());

        for material in Material::nursery_palette() {
            self.define_material(material);
        }

        for (file, tag) in layout::NURSERY_TEXTURES {
            let path = self.texture_dir.join(file);
            // Failures are logged in load_texture; the scene renders without them.
            let _ = self.load_texture(&path, tag);
        }
        self.bind_textures()?;

        for shape in Shape::ALL {
            self.backend.load_mesh(shape, &shape.generate());
        }

        self.placements = layout::nursery_placements();
        self.prepared = true;
        log::info!(
            "Scene prepared: {} textures, {} materials, {} placements",
            self.textures.len(),
            self.materials.len(),
            self.placements.len()
        );
        Ok(())
    }

    /// Walks the placement table and returns this frame's draw list.
    pub fn render_frame(&mut self) -> Result<&[DrawCall], SceneError> {
        if !self.prepared {
            return Err(SceneError::NotPrepared);
        }

        self.draws.clear();
        let placements = std::mem::take(&mut self.placements);
        for placement in &placements {
            let transform = &placement.transform;
            let rotation = transform.rotation_degrees;
            self.set_object_transform(transform.scale, rotation.x, rotation.y, rotation.z, transform.position);
            match placement.surface {
                Surface::Color(color) => self.set_object_color(color.x, color.y, color.z, color.w),
                Surface::Texture(tag) => self.set_object_texture(tag),
            }
            if let Some(material) = placement.material {
                self.set_object_material(material);
            }
            self.set_uv_scale(placement.uv_scale.x, placement.uv_scale.y);
            self.draw(placement.shape);
        }
        self.placements = placements;

        Ok(&self.draws)
    }

    /// Releases every registered texture. Safe to call more than once.
    pub fn release(&mut self) {
        let entries: Vec<_> = self.textures.drain().collect();
        if entries.is_empty() {
            return;
        }
        let count = entries.len();
        for entry in entries {
            self.backend.release_texture(entry.texture);
        }
        self.backend.bind_textures(&[]);
        log::info!("Released {} textures", count);
    }
}
