//! GPU-facing uniform blocks. Layouts mirror the structs in
//! `shaders/scene.wgsl`; every `vec3` is padded out to 16 bytes.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::lighting::{DirectionalLight, LightSet, PointLight, MAX_POINT_LIGHTS};
use crate::model::{Material, Shape};

/// Texture unit published when a texture tag did not resolve.
pub const NO_TEXTURE_UNIT: i32 = -1;

fn padded(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 4],
}

impl CameraUniform {
    pub fn new(view: Mat4, projection: Mat4, view_position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: [view_position.x, view_position.y, view_position.z, 1.0],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub active: u32,
    _padding: [u32; 3],
}

impl From<&DirectionalLight> for DirectionalLightUniform {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: padded(light.direction),
            ambient: padded(light.ambient),
            diffuse: padded(light.diffuse),
            specular: padded(light.specular),
            active: light.active as u32,
            _padding: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub linear: f32,
    pub quadratic: f32,
    pub active: u32,
    _padding: u32,
}

impl From<&PointLight> for PointLightUniform {
    fn from(light: &PointLight) -> Self {
        Self {
            position: padded(light.position),
            ambient: padded(light.ambient),
            diffuse: padded(light.diffuse),
            specular: padded(light.specular),
            linear: light.linear,
            quadratic: light.quadratic,
            active: light.active as u32,
            _padding: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub directional: DirectionalLightUniform,
    pub points: [PointLightUniform; MAX_POINT_LIGHTS],
    pub use_lighting: u32,
    _padding: [u32; 3],
}

impl From<&LightSet> for LightingUniform {
    fn from(lights: &LightSet) -> Self {
        let mut points = [PointLightUniform::from(&PointLight::OFF); MAX_POINT_LIGHTS];
        for (slot, light) in points.iter_mut().zip(lights.points.iter()) {
            *slot = PointLightUniform::from(light);
        }
        Self {
            directional: DirectionalLightUniform::from(&lights.directional),
            points,
            use_lighting: lights.use_lighting as u32,
            _padding: [0; 3],
        }
    }
}

/// Per-draw state: the transform, surface and material published by the
/// object setters.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
    pub uv_scale: [f32; 2],
    pub shininess: f32,
    pub use_texture: u32,
    pub texture_unit: i32,
    _padding: [u32; 3],
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            normal: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0; 4],
            material_diffuse: [1.0, 1.0, 1.0, 0.0],
            material_specular: [0.0; 4],
            uv_scale: [1.0, 1.0],
            shininess: 1.0,
            use_texture: 0,
            texture_unit: NO_TEXTURE_UNIT,
            _padding: [0; 3],
        }
    }
}

impl ObjectUniform {
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model.to_cols_array_2d();
        self.normal = model.inverse().transpose().to_cols_array_2d();
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color.to_array();
        self.use_texture = 0;
    }

    pub fn set_texture_unit(&mut self, unit: Option<u32>) {
        self.use_texture = 1;
        self.texture_unit = unit.map_or(NO_TEXTURE_UNIT, |unit| unit as i32);
    }

    /// Unit the draw samples from, if texturing is on and resolved.
    pub fn sampled_unit(&self) -> Option<u32> {
        if self.use_texture != 0 && self.texture_unit >= 0 {
            Some(self.texture_unit as u32)
        } else {
            None
        }
    }

    pub fn set_material(&mut self, material: &Material) {
        self.material_diffuse = padded(material.diffuse_color);
        self.material_specular = padded(material.specular_color);
        self.shininess = material.shininess;
    }

    pub fn set_uv_scale(&mut self, scale: Vec2) {
        self.uv_scale = scale.to_array();
    }
}

/// One recorded draw: which mesh, with the object state at record time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub shape: Shape,
    pub object: ObjectUniform,
}
