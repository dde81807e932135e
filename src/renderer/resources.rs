use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use wgpu::{Device, Queue};

use crate::model::{DecodedImage, Mesh, MeshData, Shape, Texture};
use crate::scene::SceneBackend;

pub fn texture_bind_group_layout(device: &Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Texture Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

fn texture_bind_group(
    device: &Device,
    layout: &wgpu::BindGroupLayout,
    texture: &Texture,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&texture.sampler),
            },
        ],
    })
}

/// GPU side of the scene: uploaded meshes and one bind group per texture unit.
pub struct GpuResources {
    device: Arc<Device>,
    queue: Arc<Queue>,
    texture_layout: wgpu::BindGroupLayout,
    meshes: HashMap<Shape, Mesh>,
    units: Vec<wgpu::BindGroup>,
    _white: Texture,
    default_bind_group: wgpu::BindGroup,
}

impl GpuResources {
    pub fn new(device: Arc<Device>, queue: Arc<Queue>) -> Self {
        let texture_layout = texture_bind_group_layout(&device);
        let white = Texture::white_pixel(&device, &queue);
        let default_bind_group = texture_bind_group(&device, &texture_layout, &white, "Default Texture Bind Group");

        Self {
            device,
            queue,
            texture_layout,
            meshes: HashMap::new(),
            units: Vec::new(),
            _white: white,
            default_bind_group,
        }
    }

    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    pub fn mesh(&self, shape: Shape) -> Option<&Mesh> {
        self.meshes.get(&shape)
    }

    /// Bind group for a texture unit, or the white pixel when the draw is untextured.
    pub fn texture_bind_group(&self, unit: Option<u32>) -> &wgpu::BindGroup {
        unit.and_then(|unit| self.units.get(unit as usize))
            .unwrap_or(&self.default_bind_group)
    }
}

impl SceneBackend for GpuResources {
    type Texture = Texture;

    fn upload_texture(&mut self, image: &DecodedImage, tag: &str) -> anyhow::Result<Texture> {
        let limit = self.device.limits().max_texture_dimension_2d;
        if image.width > limit || image.height > limit {
            anyhow::bail!(
                "{}x{} exceeds the device limit of {}",
                image.width,
                image.height,
                limit
            );
        }

        // Validation errors surface asynchronously; catch them here instead.
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let texture = Texture::from_image(&self.device, &self.queue, image, Some(tag));
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            texture.destroy();
            return Err(anyhow::anyhow!("{}", error)).context("texture upload rejected");
        }
        Ok(texture)
    }

    fn release_texture(&mut self, texture: Texture) {
        texture.destroy();
    }

    fn bind_textures(&mut self, textures: &[(u32, &Texture)]) {
        let mut units = Vec::with_capacity(textures.len());
        for (unit, texture) in textures {
            let label = format!("Texture Unit {}", unit);
            units.push(texture_bind_group(&self.device, &self.texture_layout, texture, &label));
        }
        self.units = units;
    }

    fn load_mesh(&mut self, shape: Shape, mesh: &MeshData) {
        self.meshes.insert(shape, Mesh::upload(&self.device, shape, mesh));
    }
}
