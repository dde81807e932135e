//! The fixed nursery: texture files, and the placement table the renderer
//! walks every frame.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3, Vec4};

use super::transform::Transform;
use crate::model::Shape;

/// Image file (relative to the texture directory) and the tag it registers under.
pub const NURSERY_TEXTURES: [(&str, &str); 7] = [
    ("greyplastic.jpg", "plasticd_texture"),
    ("greenplastic.jpg", "plasticc_texture"),
    ("blueplastic.jpg", "plasticb_texture"),
    ("Redplastic.jpg", "plastic_texture"),
    ("sand.png", "sand_texture"),
    ("brick.jpg", "brick_texture"),
    ("whitecloth.jpg", "cloth_texture"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Flat RGBA color, texturing off.
    Color(Vec4),
    /// Texture tag resolved against the registry at draw time.
    Texture(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub shape: Shape,
    pub transform: Transform,
    pub surface: Surface,
    pub material: Option<&'static str>,
    pub uv_scale: Vec2,
}

impl Placement {
    fn new(shape: Shape, scale: Vec3, rotation: Vec3, position: Vec3) -> Self {
        Self {
            shape,
            transform: Transform::from_parts(scale, rotation, position),
            surface: Surface::Color(Vec4::ONE),
            material: None,
            uv_scale: Vec2::ONE,
        }
    }

    fn textured(mut self, tag: &'static str, material: &'static str) -> Self {
        self.surface = Surface::Texture(tag);
        self.material = Some(material);
        self
    }

    fn colored(mut self, color: Vec4, material: &'static str) -> Self {
        self.surface = Surface::Color(color);
        self.material = Some(material);
        self
    }

    fn uv(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vec2::new(u, v);
        self
    }
}

fn unrotated(shape: Shape, scale: Vec3, position: Vec3) -> Placement {
    Placement::new(shape, scale, Vec3::ZERO, position)
}

/// Rounded-rectangle rail: a quarter arc of spheres at each corner of a box,
/// joined by four thin box walls.
#[derive(Debug, Clone, Copy)]
pub struct Rail {
    /// Angular subdivisions per quarter arc; each arc has one more sphere.
    pub arc_steps: u32,
    pub arc_radius: f32,
    pub sphere_scale: f32,
    pub length_x: f32,
    pub length_z: f32,
    pub height: f32,
}

impl Rail {
    pub fn placements(&self) -> Vec<Placement> {
        let (half_x, half_z) = (self.length_x / 2.0, self.length_z / 2.0);
        let step = FRAC_PI_2 / self.arc_steps as f32;
        // Corner centre and the angle its arc starts from, walked in draw order.
        let corners = [
            (Vec2::new(-half_x, -half_z), PI),
            (Vec2::new(half_x, -half_z), PI * 1.5),
            (Vec2::new(half_x, half_z), 0.0),
            (Vec2::new(-half_x, half_z), FRAC_PI_2),
        ];

        let mut placements = Vec::new();
        for (centre, start) in corners {
            for i in 0..=self.arc_steps {
                let theta = start + i as f32 * step;
                let position = Vec3::new(
                    centre.x + self.arc_radius * theta.cos(),
                    self.height,
                    centre.y + self.arc_radius * theta.sin(),
                );
                placements.push(unrotated(Shape::Sphere, Vec3::splat(self.sphere_scale), position));
            }
        }

        let wall_x = Vec3::new(self.length_x, 0.1, 0.1);
        let wall_z = Vec3::new(0.1, 0.1, self.length_z);
        let reach_x = half_x + self.arc_radius;
        let reach_z = half_z + self.arc_radius;
        placements.extend([
            unrotated(Shape::Box, wall_x, Vec3::new(0.0, self.height, -reach_z)),
            unrotated(Shape::Box, wall_x, Vec3::new(0.0, self.height, reach_z)),
            unrotated(Shape::Box, wall_z, Vec3::new(-reach_x, self.height, 0.0)),
            unrotated(Shape::Box, wall_z, Vec3::new(reach_x, self.height, 0.0)),
        ]);

        placements
            .into_iter()
            .map(|p| p.textured("plasticd_texture", "plastic").uv(0.3, 0.2))
            .collect()
    }
}

pub const UPPER_RAIL: Rail = Rail {
    arc_steps: 10,
    arc_radius: 1.0,
    sphere_scale: 0.15,
    length_x: 2.0,
    length_z: 1.0,
    height: 2.95,
};

pub const LOWER_RAIL: Rail = Rail {
    arc_steps: 6,
    arc_radius: 0.5,
    sphere_scale: 0.15,
    length_x: 1.65,
    length_z: 0.9,
    height: 2.15,
};

/// Top of the cloth side panels' slope.
const PANEL_FLOOR_HEIGHT: f32 = 1.95;
const PANEL_THICKNESS: f32 = 0.18;

/// Tilted cloth sides spanning the upper rail down towards the bassinet floor.
fn side_panels() -> Vec<Placement> {
    let rail = UPPER_RAIL;
    let rise = rail.height - PANEL_FLOOR_HEIGHT;
    let span_x = rail.length_x + 2.0 * rail.arc_radius - 1.0;
    let span_z = rail.length_z + 2.0 * rail.arc_radius - 1.0;
    let mid_y = (rail.height + PANEL_FLOOR_HEIGHT) * 0.5;
    let angle_x = (rise / span_x).atan().to_degrees();
    let angle_z = (rise / span_z).atan().to_degrees();
    let offset_z = rail.length_z / 2.0 + rail.arc_radius - PANEL_THICKNESS * 0.5;
    let offset_x = rail.length_x / 2.0 + rail.arc_radius - PANEL_THICKNESS * 0.5;
    let scale_x = Vec3::new(span_x, rise, PANEL_THICKNESS);
    let scale_z = Vec3::new(PANEL_THICKNESS, rise, span_z);

    [
        Placement::new(Shape::Box, scale_x, Vec3::new(-angle_x, 0.0, 0.0), Vec3::new(0.0, mid_y, -offset_z)),
        Placement::new(Shape::Box, scale_x, Vec3::new(angle_x, 0.0, 0.0), Vec3::new(0.0, mid_y, offset_z)),
        Placement::new(Shape::Box, scale_z, Vec3::new(0.0, 0.0, angle_z), Vec3::new(-offset_x, mid_y, 0.0)),
        Placement::new(Shape::Box, scale_z, Vec3::new(0.0, 0.0, -angle_z), Vec3::new(offset_x, mid_y, 0.0)),
    ]
    .into_iter()
    .map(|p| p.textured("cloth_texture", "plastic").uv(0.3, 0.2))
    .collect()
}

fn mobile() -> Vec<Placement> {
    let string = Vec3::new(0.02, 0.65, 0.02);
    let grey = Vec4::new(0.8, 0.8, 0.8, 1.0);
    let star_point = Vec3::new(0.18, 0.25, 0.08);

    let mut placements = vec![
        Placement::new(Shape::Torus, Vec3::new(0.5, 0.5, 0.25), Vec3::new(90.0, 0.0, 0.0), Vec3::new(0.0, 6.0, 0.0)),
        // Arms use negative Y scale so the cylinders hang below their pivot.
        Placement::new(Shape::Cylinder, Vec3::new(0.1, -2.05, 0.1), Vec3::new(0.0, 0.0, 90.0), Vec3::new(0.0, 6.25, 0.0)),
        unrotated(Shape::Cylinder, Vec3::new(0.1, -0.35, 0.1), Vec3::new(0.0, 6.25, 0.0)),
        unrotated(Shape::Cylinder, Vec3::new(0.1, -3.35, 0.1), Vec3::new(2.05, 6.25, 0.0)),
        unrotated(Shape::Sphere, Vec3::splat(0.1), Vec3::new(0.0, 6.25, 0.0)),
        unrotated(Shape::Sphere, Vec3::splat(0.1), Vec3::new(2.05, 6.25, 0.0)),
    ]
    .into_iter()
    .map(|p| p.textured("plasticd_texture", "plastic"))
    .collect::<Vec<_>>();

    for position in [
        Vec3::new(0.525, 5.30, 0.0),
        Vec3::new(-0.525, 5.30, 0.0),
        Vec3::new(0.0, 5.30, 0.5),
        Vec3::new(0.0, 5.30, -0.5),
    ] {
        placements.push(unrotated(Shape::Cylinder, string, position).colored(grey, "plastic"));
    }

    placements.extend([
        unrotated(Shape::Pyramid, Vec3::splat(0.31), Vec3::new(0.525, 5.25, 0.0))
            .textured("plasticb_texture", "plastic")
            .uv(0.1, 0.1),
        unrotated(Shape::Sphere, Vec3::splat(0.23), Vec3::new(0.0, 5.25, -0.5))
            .textured("plasticc_texture", "plastic")
            .uv(0.2, 0.2),
        unrotated(Shape::Box, Vec3::splat(0.28), Vec3::new(0.0, 5.35, 0.5))
            .textured("plastic_texture", "plastic")
            .uv(0.1, 0.1),
    ]);

    // Star: five pyramids fanned around the X axis.
    for (angle, y, z) in [
        (0.0, 5.35, 0.0),
        (65.0, 5.26, 0.10),
        (-65.0, 5.26, -0.10),
        (145.0, 5.15, 0.05),
        (-145.0, 5.15, -0.05),
    ] {
        placements.push(
            Placement::new(Shape::Pyramid, star_point, Vec3::new(angle, 0.0, 0.0), Vec3::new(-0.525, y, z))
                .textured("plasticb_texture", "plastic")
                .uv(0.1, 0.1),
        );
    }

    placements
}

fn bassinet() -> Vec<Placement> {
    let leg = Vec3::new(0.1, 1.72, 0.1);
    let mut placements: Vec<Placement> = [
        Vec3::new(-1.5, 0.55, 1.1),
        Vec3::new(1.5, 0.55, 1.1),
        Vec3::new(-1.5, 0.55, -1.1),
    ]
    .into_iter()
    .map(|position| unrotated(Shape::Cylinder, leg, position).textured("plasticd_texture", "plastic"))
    .collect();

    placements.extend(UPPER_RAIL.placements());
    placements.extend(LOWER_RAIL.placements());
    placements.extend(side_panels());
    placements.push(
        unrotated(Shape::Plane, Vec3::new(1.3, 1.2, 1.0), Vec3::new(0.0, 2.05, 0.0))
            .textured("cloth_texture", "stone"),
    );
    placements.push(
        Placement::new(Shape::Cylinder, Vec3::new(0.1, 1.7, 0.1), Vec3::new(0.0, 90.0, 0.0), Vec3::new(1.40, 0.65, -1.0))
            .textured("plasticd_texture", "plastic"),
    );
    placements
}

fn couch() -> Vec<Placement> {
    let armrest = Vec3::new(3.2, 1.5, 3.2);
    let side = Vec3::new(0.0, 0.0, 90.0);
    vec![
        unrotated(Shape::Box, Vec3::new(16.0, 2.3, 6.2), Vec3::new(5.0, 0.3, -8.0)).textured("plastic_texture", "wood"),
        unrotated(Shape::Box, Vec3::new(13.0, 7.8, 1.6), Vec3::new(5.0, 0.8, -9.4)).textured("plastic_texture", "wood"),
        Placement::new(Shape::Cylinder, armrest, side, Vec3::new(-1.4, 0.65, -8.0)).textured("plastic_texture", "wood"),
        Placement::new(Shape::Cylinder, armrest, side, Vec3::new(12.8, 0.65, -8.0)).textured("plastic_texture", "wood"),
        Placement::new(Shape::Sphere, Vec3::new(2.5, 0.3, 1.2), Vec3::new(72.0, 0.0, 0.0), Vec3::new(1.3, 2.65, -8.0))
            .textured("plasticb_texture", "wood"),
    ]
}

/// Every object in the room, in draw order.
pub fn nursery_placements() -> Vec<Placement> {
    let room = Vec3::new(20.0, 1.0, 10.0);
    let mut placements = vec![
        unrotated(Shape::Plane, room, Vec3::ZERO).textured("sand_texture", "stone"),
        Placement::new(Shape::Plane, room, Vec3::new(90.0, 0.0, 0.0), Vec3::new(0.0, 9.0, -10.0))
            .textured("brick_texture", "stone"),
    ];
    placements.extend(mobile());
    placements.extend(bassinet());
    placements.extend(couch());
    placements
}
