use glam::Vec3;

pub const MAX_POINT_LIGHTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    /// Zero for both terms means no distance falloff.
    pub linear: f32,
    pub quadratic: f32,
    pub active: bool,
}

impl PointLight {
    pub const OFF: Self = Self {
        position: Vec3::ZERO,
        ambient: Vec3::ZERO,
        diffuse: Vec3::ZERO,
        specular: Vec3::ZERO,
        linear: 0.0,
        quadratic: 0.0,
        active: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightSet {
    pub use_lighting: bool,
    pub directional: DirectionalLight,
    pub points: [PointLight; MAX_POINT_LIGHTS],
}

impl LightSet {
    /// Warm overhead key light plus two ceiling point lights above the bassinet.
    pub fn nursery() -> Self {
        let mut points = [PointLight::OFF; MAX_POINT_LIGHTS];
        points[0] = PointLight {
            position: Vec3::new(0.0, 12.0, 0.0),
            ambient: Vec3::splat(0.35),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.25),
            linear: 0.0,
            quadratic: 0.0,
            active: true,
        };
        points[1] = PointLight {
            position: Vec3::new(0.0, 8.0, 0.0),
            ambient: Vec3::ZERO,
            diffuse: Vec3::new(0.6, 0.6, 0.65),
            specular: Vec3::splat(0.2),
            linear: 0.10,
            quadratic: 0.05,
            active: true,
        };

        Self {
            use_lighting: true,
            directional: DirectionalLight {
                direction: Vec3::new(0.2, 5.2, 0.5),
                ambient: Vec3::splat(0.15),
                diffuse: Vec3::splat(0.8),
                specular: Vec3::new(1.0, 0.9, 0.40),
                active: true,
            },
            points,
        }
    }

    pub fn active_point_lights(&self) -> usize {
        self.points.iter().filter(|light| light.active).count()
    }
}
