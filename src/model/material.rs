use glam::Vec3;

/// Phong surface parameters published alongside each draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn new(tag: impl Into<String>, diffuse_color: Vec3, specular_color: Vec3, shininess: f32) -> Self {
        Self {
            tag: tag.into(),
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Materials the nursery placements refer to.
    pub fn nursery_palette() -> Vec<Material> {
        vec![
            Material::new("plastic", Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.2, 0.2, 0.2), 21.0),
            Material::new("wood", Vec3::new(0.6, 0.5, 0.2), Vec3::new(0.1, 0.2, 0.2), 1.0),
            Material::new("metal", Vec3::new(0.3, 0.3, 0.2), Vec3::new(0.7, 0.7, 0.8), 8.0),
            Material::new("glass", Vec3::new(0.3, 0.3, 0.2), Vec3::new(0.9, 0.9, 0.8), 10.0),
            Material::new("tile", Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.7, 0.7, 0.7), 6.0),
            Material::new("stone", Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.73, 0.3, 0.3), 6.0),
        ]
    }
}
